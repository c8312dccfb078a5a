use std::future::Future;
use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::common::ServiceResponse;
use crate::error::ServiceError;
use crate::transactional::TransactionContext;

tokio::task_local! {
    /// Marker scoped around the outermost intercepted call of a task.
    ///
    /// Present while interception is in progress; nested intercepted calls
    /// observe it and pass through untouched. The scope guarantees release on
    /// every exit path.
    static INTERCEPTING: ();
}

/// Wraps service invocations with uniform failure handling.
///
/// Every inbound call goes through [`intercept`](Self::intercept), which
/// guarantees a well-formed [`ServiceResponse`] comes back from the outermost
/// frame: failures are classified, the session's transaction is rolled back
/// (or restarted after a persistence failure), and a response is synthesized
/// in place of the error. A handler that invokes another intercepted handler
/// on the same task is detected and left alone, so failures are handled
/// exactly once, at the outermost frame.
#[derive(Clone)]
pub struct ResponseInterceptor {
    transactions: Arc<dyn TransactionContext>,
}

impl ResponseInterceptor {
    pub fn new(transactions: Arc<dyn TransactionContext>) -> Self {
        Self { transactions }
    }

    /// Run `call`, guaranteeing a response for the outermost frame.
    ///
    /// The outermost call on a task always resolves to `Ok`. `Err` is only
    /// ever returned from a nested (re-entrant) frame, which hands the
    /// failure to its enclosing frame unchanged.
    pub async fn intercept<F, Fut>(
        &self,
        operation: &str,
        call: F,
    ) -> Result<ServiceResponse, ServiceError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<ServiceResponse, ServiceError>>,
    {
        if INTERCEPTING.try_with(|_| ()).is_ok() {
            return call().await;
        }

        debug!("service call: {operation}");

        match INTERCEPTING.scope((), call()).await {
            Ok(response) => Ok(response),
            Err(failure) => Ok(self.recover(failure).await),
        }
    }

    /// Reconcile the current transaction and synthesize the failure response.
    async fn recover(&self, failure: ServiceError) -> ServiceResponse {
        let handle = self.transactions.current();
        let mut txn = handle.0.lock().await;

        if txn.is_active() {
            if let Err(rollback_failure) = txn.rollback().await {
                warn!("rollback failed: {rollback_failure}");
            }
        } else if failure.is_persistence() {
            // recover the transaction, best effort
            let _ = txn.begin().await;
        }
        drop(txn);

        error!("service call failed: {failure:?}");
        synthesize(&failure)
    }
}

/// Build the response surfaced to the caller for `failure`.
///
/// Read-authorization denials surface like any other failure; the remaining
/// authorization denials collapse into the empty successful response so that
/// internal permission filtering never leaks to the caller.
fn synthesize(failure: &ServiceError) -> ServiceResponse {
    match failure {
        ServiceError::AuthorizationDenied { message } if !is_read_denial(message) => {
            ServiceResponse::default()
        }
        _ => ServiceResponse::failure(failure),
    }
}

/// Whether an authorization denial concerns a read permission.
fn is_read_denial(message: &str) -> bool {
    message.contains("not authorized to read")
}
