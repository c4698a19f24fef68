pub mod assistant;
pub mod overview;
pub mod records;
