//! Transaction coordinator.
//!
//! Every multi-row business operation runs through [`run_in_transaction`], which owns the
//! begin/commit/rollback protocol so services only describe the unit of work.
//!
//! Guarantees on every path:
//! - exactly one transaction is begun, and the unit of work runs at most once inside it
//! - exactly one of commit or rollback is issued
//! - a failed begin is returned without running the unit of work
//! - a panic or a dropped future drops the [`DatabaseTransaction`], which rolls back
//!
//! Passing a [`DatabaseTransaction`] as `db` opens a savepoint, so coordinators nest.

use std::{future::Future, pin::Pin};

use sea_orm::{DatabaseTransaction, DbErr, SqlErr, TransactionTrait};
use thiserror::Error;

/// Boxed future returned by a unit of work, borrowing the transaction handle.
pub type UnitOfWork<'t, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 't>>;

/// A unit of work failed and rolling back its transaction failed too.
///
/// Carries both errors so neither masks the other.
#[derive(Error, Debug)]
#[error("{cause} (rollback also failed: {rollback})")]
pub struct RollbackFailure<E> {
    /// Error returned by the unit of work.
    pub cause: E,
    /// Error returned by the rollback.
    #[source]
    pub rollback: DbErr,
}

/// Runs `unit_of_work` inside a transaction begun on `db`.
///
/// # Arguments
/// - `db` - Connection or transaction to begin on; a transaction yields a savepoint
/// - `unit_of_work` - Logic to execute once with the scoped transaction handle
///
/// # Returns
/// - `Ok(T)` - Unit of work succeeded and the transaction committed
/// - `Err(E)` from `DbErr` - Begin or commit failed
/// - `Err(E)` - Unit of work failed and the transaction was rolled back
/// - `Err(E)` from `RollbackFailure<E>` - Unit of work failed and so did the rollback
pub async fn run_in_transaction<C, F, T, E>(db: &C, unit_of_work: F) -> Result<T, E>
where
    C: TransactionTrait<Transaction = DatabaseTransaction>,
    F: for<'t> FnOnce(&'t DatabaseTransaction) -> UnitOfWork<'t, T, E> + Send,
    T: Send,
    E: std::fmt::Display + From<DbErr> + From<RollbackFailure<E>> + Send,
{
    let txn = db.begin().await?;

    match unit_of_work(&txn).await {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(cause) => match txn.rollback().await {
            Ok(()) => Err(cause),
            Err(rollback) => {
                tracing::error!(
                    "Rollback failed after unit of work error: cause={}, rollback={}",
                    cause,
                    rollback
                );
                Err(RollbackFailure { cause, rollback }.into())
            }
        },
    }
}

/// Whether `err` is a unique or primary key violation.
///
/// Used after an insert inside a savepoint to tell a lost race from a real failure.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
