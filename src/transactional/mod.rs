use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::ServiceError;

/// A unit of work owned by the persistence layer.
///
/// The interception layer only inspects activity and rolls back or restarts a
/// transaction; opening and committing around successful work is the host's
/// job.
#[async_trait]
pub trait Transaction: Send + Sync + 'static {
    /// Whether the transaction is currently open.
    fn is_active(&self) -> bool;

    /// Open a new transaction on this unit of work.
    async fn begin(&mut self) -> Result<(), ServiceError>;

    /// Commit the transaction.
    async fn commit(&mut self) -> Result<(), ServiceError>;

    /// Roll the transaction back.
    async fn rollback(&mut self) -> Result<(), ServiceError>;
}

/// Shared handle to the transaction of the current session.
#[derive(Clone)]
pub struct ActiveTransaction(pub Arc<Mutex<Box<dyn Transaction>>>);

impl ActiveTransaction {
    pub fn new(transaction: Box<dyn Transaction>) -> Self {
        Self(Arc::new(Mutex::new(transaction)))
    }
}

/// Accessor for the transaction bound to the calling session.
///
/// Injected into [`ResponseInterceptor`](crate::interceptor::ResponseInterceptor)
/// so the interception layer never reaches for a process-wide persistence
/// context and stays testable against a plain mock.
pub trait TransactionContext: Send + Sync + 'static {
    fn current(&self) -> ActiveTransaction;
}

/// Context serving a single session-scoped transaction handle.
pub struct SessionTransactionContext {
    handle: ActiveTransaction,
}

impl SessionTransactionContext {
    pub fn new(transaction: Box<dyn Transaction>) -> Self {
        Self {
            handle: ActiveTransaction::new(transaction),
        }
    }

    /// A second handle to the same transaction, e.g. for committing after a
    /// successful call.
    pub fn handle(&self) -> ActiveTransaction {
        self.handle.clone()
    }
}

impl TransactionContext for SessionTransactionContext {
    fn current(&self) -> ActiveTransaction {
        self.handle.clone()
    }
}
