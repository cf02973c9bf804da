//! Observable state of a keyed remote query

use crate::api::ApiError;

/// Coarse state of a query, used for enabling controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    Loading,
    Failed,
    Ready,
}

/// Result of the query for the current key
///
/// Exactly one of loading / value / error holds at any time.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteQuery<T> {
    /// No result yet for the current key
    Loading,
    /// The request for the current key failed
    Failed(ApiError),
    /// The current key resolved to a value
    Ready(T),
}

impl<T> Default for RemoteQuery<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> RemoteQuery<T> {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

    #[must_use]
    pub const fn status(&self) -> QueryStatus {
        match self {
            Self::Loading => QueryStatus::Loading,
            Self::Failed(_) => QueryStatus::Failed,
            Self::Ready(_) => QueryStatus::Ready,
        }
    }
}

impl<T> From<crate::api::error::Result<T>> for RemoteQuery<T> {
    fn from(outcome: crate::api::error::Result<T>) -> Self {
        match outcome {
            Ok(value) => Self::Ready(value),
            Err(error) => Self::Failed(error),
        }
    }
}
