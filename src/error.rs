use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Closed set of failure categories a lookup can end in.
///
/// Classification never inspects the error value itself, only its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    NotFound,
    Unauthorized,
    Forbidden,
    Conflict,
    Invalid,
    Timeout,
    Unavailable,
    Serialization,
    Transport,
    Internal,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Resource not found: {kind} {name} in namespace {namespace}")]
    NotFound {
        kind: String,
        name: String,
        namespace: String,
    },

    /// A list endpoint is not served, e.g. the custom resource is not installed.
    #[error("Resource list not found: {kind} in {scope}")]
    ListNotFound { kind: String, scope: String },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound { .. } | Error::ListNotFound { .. } => ErrorKind::NotFound,
            Error::Unauthorized(_) => ErrorKind::Unauthorized,
            Error::Forbidden(_) => ErrorKind::Forbidden,
            Error::Conflict(_) => ErrorKind::Conflict,
            Error::InvalidRequest(_) => ErrorKind::Invalid,
            Error::Timeout(_) => ErrorKind::Timeout,
            Error::Unavailable(_) => ErrorKind::Unavailable,
            Error::SerializationError(_) => ErrorKind::Serialization,
            Error::Transport(_) => ErrorKind::Transport,
            Error::Internal(_) | Error::Config(_) => ErrorKind::Internal,
        }
    }

    /// Convert a kube client error raised while addressing `kind` `namespace/name`.
    ///
    /// API failures are mapped by HTTP status code, the way the API server
    /// reports them in its `Status` body. Anything that never reached the
    /// server is a transport failure.
    pub fn from_kube(err: kube::Error, kind: &str, namespace: &str, name: &str) -> Self {
        Self::from_kube_with(err, || Error::NotFound {
            kind: kind.to_string(),
            name: name.to_string(),
            namespace: namespace.to_string(),
        })
    }

    /// Convert a kube client error raised while listing `kind` in `namespace`,
    /// or across all namespaces when `None`.
    pub fn from_kube_list(err: kube::Error, kind: &str, namespace: Option<&str>) -> Self {
        Self::from_kube_with(err, || Error::ListNotFound {
            kind: kind.to_string(),
            scope: match namespace {
                Some(ns) => format!("namespace {}", ns),
                None => "all namespaces".to_string(),
            },
        })
    }

    fn from_kube_with(err: kube::Error, not_found: impl FnOnce() -> Error) -> Self {
        match err {
            kube::Error::Api(response) => match response.code {
                404 => not_found(),
                401 => Error::Unauthorized(response.message),
                403 => Error::Forbidden(response.message),
                409 => Error::Conflict(response.message),
                400 | 422 => Error::InvalidRequest(response.message),
                408 | 504 => Error::Timeout(response.message),
                503 => Error::Unavailable(response.message),
                code => Error::Internal(format!("{} (code {})", response.message, code)),
            },
            kube::Error::SerdeError(e) => Error::SerializationError(e),
            other => Error::Transport(other.to_string()),
        }
    }
}

/// Wire form of a non-critical error embedded in a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDescription {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&Error> for ErrorDescription {
    fn from(err: &Error) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
