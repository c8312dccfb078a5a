use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Closed taxonomy of the failures a wrapped service call can produce.
///
/// The interceptor classifies on these variants instead of inspecting an
/// open-ended error hierarchy: persistence failures trigger transaction
/// recovery, authorization denials go through the suppression policy, and
/// everything else surfaces as-is.
#[derive(Debug, Error, strum_macros::AsRefStr)]
pub enum ServiceError {
    /// Any handler failure not otherwise classified.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),

    /// The data-access layer itself failed, e.g. a broken connection or a
    /// constraint violation surfaced outside an active transaction.
    #[error("persistence failure: {0}")]
    Persistence(String),

    /// A permission check rejected the caller or the operation.
    #[error("{message}")]
    AuthorizationDenied { message: String },
}

impl ServiceError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(anyhow::anyhow!(message.into()))
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence(message.into())
    }

    pub fn denied(message: impl Into<String>) -> Self {
        Self::AuthorizationDenied {
            message: message.into(),
        }
    }

    /// Stable code naming the failure kind, derived from the variant name.
    pub fn code(&self) -> &str {
        self.as_ref()
    }

    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_variant_names() {
        assert_eq!(ServiceError::internal("x").code(), "Internal");
        assert_eq!(ServiceError::persistence("x").code(), "Persistence");
        assert_eq!(ServiceError::denied("x").code(), "AuthorizationDenied");
    }

    #[test]
    fn display_keeps_denial_message_verbatim() {
        let err = ServiceError::denied("User not authorized to update record Invoice#42");
        assert_eq!(err.to_string(), "User not authorized to update record Invoice#42");
    }

    #[test]
    fn wraps_arbitrary_errors_as_internal() {
        let io = std::io::Error::other("disk gone");
        let err: ServiceError = anyhow::Error::from(io).into();
        assert_eq!(err.code(), "Internal");
        assert!(err.to_string().contains("disk gone"));
    }
}
