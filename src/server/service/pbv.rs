//! Per-user PBV (purpose built vehicle) option storage.
//!
//! Each user owns at most one option set. The set is serialized to JSON bytes on the way
//! in and decoded on the way out; stored bytes that no longer decode are reported as an
//! internal error rather than passed to the client.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, DatabaseTransaction};

use crate::server::{
    data::{
        pbv_option::PbvOptionRepository,
        transaction::{is_unique_violation, run_in_transaction},
    },
    error::{internal::InternalError, AppError},
    model::pbv::{AddPbvOptionResult, PbvOptionChange, PbvOptionData},
};

pub struct PbvService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PbvService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a user's first option set.
    ///
    /// # Returns
    /// - `Ok(AddPbvOptionResult::Created(id))` - Stored
    /// - `Ok(AddPbvOptionResult::AlreadyExists)` - User already has a set, nothing written,
    ///   including a set stored by a concurrent add after the existence check
    pub async fn add_option(
        &self,
        user_id: i32,
        data: PbvOptionData,
    ) -> Result<AddPbvOptionResult, AppError> {
        let bytes = encode(user_id, &data)?;
        let now = Utc::now();

        run_in_transaction::<_, _, _, AppError>(self.db, move |txn| {
            Box::pin(async move {
                let repo = PbvOptionRepository::new(txn);

                if repo.exists_for_user(user_id).await? {
                    return Ok(AddPbvOptionResult::AlreadyExists);
                }

                insert_option(txn, user_id, bytes, now).await
            })
        })
        .await
    }

    /// Gets a user's option set.
    ///
    /// # Returns
    /// - `Ok(Some(PbvOptionData))` - Decoded option set
    /// - `Ok(None)` - User has no set
    /// - `Err(AppError::InternalErr(CorruptPbvOption))` - Stored bytes do not decode
    pub async fn get_option(&self, user_id: i32) -> Result<Option<PbvOptionData>, AppError> {
        let Some(bytes) = PbvOptionRepository::new(self.db)
            .find_data_by_user(user_id)
            .await?
        else {
            return Ok(None);
        };

        let data = serde_json::from_slice(&bytes)
            .map_err(|source| InternalError::CorruptPbvOption { user_id, source })?;

        Ok(Some(data))
    }

    /// Replaces a user's existing option set.
    pub async fn update_option(
        &self,
        user_id: i32,
        data: PbvOptionData,
    ) -> Result<PbvOptionChange, AppError> {
        let bytes = encode(user_id, &data)?;
        let now = Utc::now();

        run_in_transaction::<_, _, _, AppError>(self.db, move |txn| {
            Box::pin(async move {
                let repo = PbvOptionRepository::new(txn);

                if !repo.exists_for_user(user_id).await? {
                    return Ok(PbvOptionChange::NotFound);
                }
                repo.update(user_id, bytes, now).await?;

                Ok(PbvOptionChange::Applied)
            })
        })
        .await
    }

    /// Removes a user's option set.
    pub async fn delete_option(&self, user_id: i32) -> Result<PbvOptionChange, AppError> {
        let deleted = PbvOptionRepository::new(self.db).delete(user_id).await?;

        if deleted == 0 {
            return Ok(PbvOptionChange::NotFound);
        }

        Ok(PbvOptionChange::Applied)
    }
}

fn encode(user_id: i32, data: &PbvOptionData) -> Result<Vec<u8>, InternalError> {
    serde_json::to_vec(data).map_err(|source| InternalError::EncodePbvOption { user_id, source })
}

/// Inserts a user's option set inside a savepoint.
///
/// A unique violation on the user's row means another add got there first and is
/// reported as `AlreadyExists`; `txn` stays usable either way.
pub(crate) async fn insert_option(
    txn: &DatabaseTransaction,
    user_id: i32,
    bytes: Vec<u8>,
    now: DateTime<Utc>,
) -> Result<AddPbvOptionResult, AppError> {
    let inserted = run_in_transaction::<_, _, _, AppError>(txn, move |savepoint| {
        Box::pin(async move {
            let id = PbvOptionRepository::new(savepoint)
                .create(user_id, bytes, now)
                .await?;
            Ok(id)
        })
    })
    .await;

    match inserted {
        Ok(id) => Ok(AddPbvOptionResult::Created(id)),
        Err(AppError::DbErr(err)) if is_unique_violation(&err) => {
            tracing::debug!("Concurrent PBV option add for user {}", user_id);
            Ok(AddPbvOptionResult::AlreadyExists)
        }
        Err(err) => Err(err),
    }
}
