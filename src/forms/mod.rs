pub mod assistant;

pub use assistant::{Ask, ChatTurn, Filters};
