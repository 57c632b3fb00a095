/// Errors raised while talking to the tool catalog store
#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    /// Query failed inside the database driver
    #[error("Database error: {0}")]
    Database(String),
    /// Store unreachable or timed out
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
    /// Row could not be mapped onto a model
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<sqlx::Error> for ConnectorError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::ServiceUnavailable(err.to_string())
            }
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                Self::InvalidResponse(err.to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

/// Failures of a language model provider call
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("{provider} is not configured")]
    NotConfigured { provider: String },
    #[error("{provider} request failed: {message}")]
    Request { provider: String, message: String },
    #[error("{provider} returned HTTP {status}")]
    Status { provider: String, status: u16 },
    #[error("{provider} returned an empty completion")]
    EmptyResponse { provider: String },
    #[error("{provider} response could not be parsed: {message}")]
    InvalidResponse { provider: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_timeout_maps_to_unavailable() {
        let err: ConnectorError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, ConnectorError::ServiceUnavailable(_)));

        let err: ConnectorError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, ConnectorError::Database(_)));
    }

    #[test]
    fn provider_error_display_names_provider() {
        let err = ProviderError::Status {
            provider: "openai".to_string(),
            status: 502,
        };
        assert_eq!(err.to_string(), "openai returned HTTP 502");
    }
}
