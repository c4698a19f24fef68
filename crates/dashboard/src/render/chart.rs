//! Scoped ownership of chart instances.
//!
//! A [`ChartSlot`] holds at most one live [`Chart`]. Mounting a new chart
//! destroys the previous one first, and tearing down (or dropping the slot)
//! destroys whatever is live, so a renderer can never leak an instance.

use tracing::debug;

#[derive(Debug)]
pub struct Chart<C> {
    kind: &'static str,
    id: u64,
    config: C,
}

impl<C> Chart<C> {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut C {
        &mut self.config
    }
}

impl<C> Drop for Chart<C> {
    fn drop(&mut self) {
        debug!(kind = self.kind, id = self.id, "chart destroyed");
    }
}

#[derive(Debug)]
pub struct ChartSlot<C> {
    kind: &'static str,
    live: Option<Chart<C>>,
    created: u64,
    destroyed: u64,
}

impl<C> ChartSlot<C> {
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            live: None,
            created: 0,
            destroyed: 0,
        }
    }

    /// Destroys the live chart (if any) and creates a new one from `config`.
    pub fn mount(&mut self, config: C) -> &mut Chart<C> {
        self.teardown();
        self.created += 1;
        debug!(kind = self.kind, id = self.created, "chart created");
        self.live.insert(Chart {
            kind: self.kind,
            id: self.created,
            config,
        })
    }

    pub fn teardown(&mut self) {
        if let Some(chart) = self.live.take() {
            self.destroyed += 1;
            drop(chart);
        }
    }

    pub fn get(&self) -> Option<&Chart<C>> {
        self.live.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut Chart<C>> {
        self.live.as_mut()
    }

    pub fn created(&self) -> u64 {
        self.created
    }

    pub fn destroyed(&self) -> u64 {
        self.destroyed
    }

    /// Number of instances created and not yet destroyed; never above 1.
    pub fn live_count(&self) -> u64 {
        self.created - self.destroyed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_destroys_previous_instance() {
        let mut slot = ChartSlot::new("test");
        slot.mount(1);
        slot.mount(2);
        assert_eq!(slot.created(), 2);
        assert_eq!(slot.destroyed(), 1);
        assert_eq!(slot.live_count(), 1);
        assert_eq!(slot.get().map(|c| (c.id(), *c.config())), Some((2, 2)));
    }

    #[test]
    fn teardown_is_idempotent() {
        let mut slot = ChartSlot::new("test");
        slot.teardown();
        slot.mount("a");
        slot.teardown();
        slot.teardown();
        assert_eq!(slot.destroyed(), 1);
        assert_eq!(slot.live_count(), 0);
        assert!(slot.get().is_none());
    }
}
