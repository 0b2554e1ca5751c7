use http_client::TransportError;
use thiserror::Error;

/// High-level API errors for Roku device control
///
/// Every public operation fails with exactly one of two kinds: a command
/// (POST) that could not be delivered, or a query (GET) that could not
/// produce a typed result. Both carry the URL that was requested.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A keypress or launch command could not be delivered
    ///
    /// Covers connection failures, timeouts and non-success status codes.
    /// Commands are never retried.
    #[error("Command failed for {url}: {source}")]
    CommandFailed {
        url: String,
        #[source]
        source: TransportError,
    },

    /// A status query did not yield a usable typed result
    ///
    /// The `cause` tells the transport failure apart from an empty or
    /// malformed response body.
    #[error("Query failed for {url}: {cause}")]
    QueryFailed {
        url: String,
        #[source]
        cause: QueryFailure,
    },
}

/// Why a query failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryFailure {
    /// The GET itself failed before a body was received
    #[error("{0}")]
    Transport(#[from] TransportError),

    /// The device answered with an empty body
    #[error("empty response body")]
    EmptyBody,

    /// The body was not a document of the expected shape
    #[error("XML parse error: {0}")]
    Parse(String),
}

impl ApiError {
    pub(crate) fn command(url: &str, source: TransportError) -> Self {
        Self::CommandFailed {
            url: url.to_string(),
            source,
        }
    }

    pub(crate) fn query(url: &str, cause: impl Into<QueryFailure>) -> Self {
        Self::QueryFailed {
            url: url.to_string(),
            cause: cause.into(),
        }
    }

    /// The URL of the request that failed
    pub fn url(&self) -> &str {
        match self {
            ApiError::CommandFailed { url, .. } | ApiError::QueryFailed { url, .. } => url,
        }
    }

    pub fn is_command_failure(&self) -> bool {
        matches!(self, ApiError::CommandFailed { .. })
    }

    pub fn is_query_failure(&self) -> bool {
        matches!(self, ApiError::QueryFailed { .. })
    }
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;
