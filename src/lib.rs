//! # Crosscut
//!
//! Request interception layer with uniform failure recovery for Rust services.
//!
//! Crosscut sits between a host framework and its service handlers. Every
//! inbound invocation is wrapped so the host always gets a well-formed
//! [`ServiceResponse`] back, even when the handler fails:
//!
//! - **Uniform recovery**: failures are classified into a closed taxonomy
//!   ([`ServiceError`]), the session's transaction is rolled back while
//!   active (or restarted best-effort after a persistence failure), and a
//!   response is synthesized in place of the error.
//! - **Re-entrancy detection**: a handler that invokes another intercepted
//!   handler on the same task passes through untouched, so failures are
//!   handled exactly once, at the outermost frame.
//! - **Auth configuration**: a pure builder mapping flat `auth.saml2.*`
//!   settings onto the configuration object of an external SAML2 client.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use crosscut::prelude::*;
//! use serde_json::json;
//!
//! # struct NoopTransaction;
//! # #[async_trait]
//! # impl Transaction for NoopTransaction {
//! #     fn is_active(&self) -> bool { false }
//! #     async fn begin(&mut self) -> crosscut::Result<()> { Ok(()) }
//! #     async fn commit(&mut self) -> crosscut::Result<()> { Ok(()) }
//! #     async fn rollback(&mut self) -> crosscut::Result<()> { Ok(()) }
//! # }
//! #[tokio::main]
//! async fn main() {
//!     let context = SessionTransactionContext::new(Box::new(NoopTransaction));
//!     let interceptor = ResponseInterceptor::new(Arc::new(context));
//!
//!     let response = interceptor
//!         .intercept("invoice.fetch", || async {
//!             Ok(ServiceResponse::success(json!({ "id": 42 })))
//!         })
//!         .await
//!         .expect("outermost interception never fails");
//!
//!     assert!(response.is_success());
//! }
//! ```

pub mod auth;
pub mod common;
pub mod config;
pub mod error;
pub mod interceptor;
pub mod transactional;

// Re-export core types
pub use auth::{Saml2ConfigBuilder, Saml2Configuration};
pub use common::{ExceptionInfo, ServiceResponse};
pub use config::ConfigService;
pub use error::{Result, ServiceError};
pub use interceptor::ResponseInterceptor;
pub use transactional::{
    ActiveTransaction, SessionTransactionContext, Transaction, TransactionContext,
};

// Re-export commonly used types from dependencies
pub use async_trait::async_trait;
pub use axum;

/// Prelude module for convenient imports
///
/// ```
/// use crosscut::prelude::*;
/// ```
pub mod prelude {
    pub use crate::auth::{Saml2ConfigBuilder, Saml2Configuration};
    pub use crate::common::{ExceptionInfo, ServiceResponse};
    pub use crate::config::ConfigService;
    pub use crate::error::{Result, ServiceError};
    pub use crate::interceptor::ResponseInterceptor;
    pub use crate::transactional::{
        ActiveTransaction, SessionTransactionContext, Transaction, TransactionContext,
    };
    pub use async_trait::async_trait;
    pub use axum::{
        Json,
        http::StatusCode,
        response::{IntoResponse, Response},
    };
    pub use std::sync::Arc;
}
