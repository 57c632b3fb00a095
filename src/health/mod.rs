mod checks;
mod models;

pub use checks::HealthChecker;
pub use models::{ComponentHealth, ComponentStatus, HealthReport};
