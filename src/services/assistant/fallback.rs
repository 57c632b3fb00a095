use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// Outcome of a best-effort step.
#[derive(Debug, Clone, PartialEq)]
pub enum BestEffort<T> {
    Updated(T),
    Kept(T),
}

impl<T> BestEffort<T> {
    pub fn is_updated(&self) -> bool {
        matches!(self, BestEffort::Updated(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            BestEffort::Updated(value) | BestEffort::Kept(value) => value,
        }
    }
}

/// Run `step` within `limit`. On error or timeout `previous` is returned untouched.
pub async fn keep_on_failure<T, E, F>(previous: T, limit: Duration, step: F) -> BestEffort<T>
where
    E: Display,
    F: Future<Output = Result<T, E>>,
{
    match tokio::time::timeout(limit, step).await {
        Ok(Ok(value)) => BestEffort::Updated(value),
        Ok(Err(err)) => {
            tracing::warn!("Best-effort step failed, keeping previous value: {}", err);
            BestEffort::Kept(previous)
        }
        Err(_) => {
            tracing::warn!(
                timeout_ms = limit.as_millis() as u64,
                "Best-effort step timed out, keeping previous value"
            );
            BestEffort::Kept(previous)
        }
    }
}
