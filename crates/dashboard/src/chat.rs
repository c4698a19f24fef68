//! The assistant transcript. Only appending is handled here; the dashboard
//! pushes submit warnings into it.

pub const GREETING: &str = "Hello! Ask me about your expenses, set limits, or get analytics.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Bot,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
    /// Index of the message kept in view.
    scroll: usize,
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage {
                text: GREETING.to_string(),
                sender: Sender::Bot,
            }],
            scroll: 0,
        }
    }
}

impl ChatTranscript {
    /// Appends an entry and scrolls to it.
    pub fn append_message(&mut self, text: impl Into<String>, sender: Sender) {
        self.messages.push(ChatMessage {
            text: text.into(),
            sender,
        });
        self.scroll = self.messages.len() - 1;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll + 1 < self.messages.len() {
            self.scroll += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_with_greeting() {
        let transcript = ChatTranscript::default();
        assert_eq!(transcript.messages().len(), 1);
        assert_eq!(transcript.messages()[0].sender, Sender::Bot);
    }

    #[test]
    fn append_scrolls_to_newest() {
        let mut transcript = ChatTranscript::default();
        transcript.scroll_up();
        transcript.append_message("Groceries over budget", Sender::Bot);
        transcript.append_message("thanks", Sender::User);
        assert_eq!(transcript.scroll(), 2);
        transcript.scroll_up();
        assert_eq!(transcript.scroll(), 1);
        transcript.scroll_down();
        transcript.scroll_down();
        assert_eq!(transcript.scroll(), 2);
    }
}
