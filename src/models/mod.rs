mod category;
mod chat;
mod intent;
mod pricing;
mod query;
mod recommendation;
mod tool;

pub use category::*;
pub use chat::*;
pub use intent::*;
pub use pricing::*;
pub use query::*;
pub use recommendation::*;
pub use tool::*;
