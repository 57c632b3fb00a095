mod ask;
mod suggestions;

pub use ask::*;
pub use suggestions::*;
