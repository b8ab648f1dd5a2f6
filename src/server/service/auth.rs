//! Registration and login.
//!
//! `AuthService` guards account identity: nickname and username are unique, passwords are
//! stored only as salted digests, and a successful login yields a freshly issued session
//! token.

use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::{transaction::run_in_transaction, user::UserRepository},
    error::AppError,
    model::{
        auth::{IdentityField, LoginParams, SignUpParams, SignUpResult},
        user::{CreateUserParams, User},
    },
    token::{IdentityClaims, TokenIssuer},
    util::hash::{generate_salt, hash_password, verify_password},
};

/// Service providing account registration and credential checks.
pub struct AuthService<'a, I: TokenIssuer + ?Sized> {
    db: &'a DatabaseConnection,
    issuer: &'a I,
    session_timeout: Duration,
}

impl<'a, I: TokenIssuer + ?Sized> AuthService<'a, I> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `issuer` - Token issuer used on successful login
    /// - `session_timeout` - Lifetime of issued tokens
    pub fn new(db: &'a DatabaseConnection, issuer: &'a I, session_timeout: Duration) -> Self {
        Self {
            db,
            issuer,
            session_timeout,
        }
    }

    /// Registers a new account.
    ///
    /// Checks the nickname first, then the username, and inserts only when both are free.
    /// The insert runs in a savepoint so a unique violation from a concurrent registration
    /// can be reported as the same conflict the checks would have produced.
    ///
    /// # Arguments
    /// - `params` - Account fields with the plaintext password
    ///
    /// # Returns
    /// - `Ok(SignUpResult::Created(id))` - Account created
    /// - `Ok(SignUpResult::Conflict(field))` - Field already taken, nothing written
    /// - `Err(AppError::DbErr)` - Any other storage failure
    pub async fn sign_up(&self, params: SignUpParams) -> Result<SignUpResult, AppError> {
        let salt = generate_salt();
        let create = CreateUserParams {
            password_hash: hash_password(&params.password, &salt),
            salt,
            email: params.email,
            nickname: params.nickname,
            username: params.username,
            now: Utc::now(),
        };

        run_in_transaction::<_, _, _, AppError>(self.db, move |txn| {
            Box::pin(async move {
                let user_repo = UserRepository::new(txn);

                if user_repo.nickname_exists(&create.nickname).await? {
                    tracing::debug!("Sign up rejected: nickname {} taken", create.nickname);
                    return Ok(SignUpResult::Conflict(IdentityField::Nickname));
                }
                if user_repo.username_exists(&create.username).await? {
                    tracing::debug!("Sign up rejected: username {} taken", create.username);
                    return Ok(SignUpResult::Conflict(IdentityField::Username));
                }

                let inserted = run_in_transaction::<_, _, _, AppError>(txn, move |savepoint| {
                    Box::pin(async move {
                        let user = UserRepository::new(savepoint).create(create).await?;
                        Ok(user)
                    })
                })
                .await;

                match inserted {
                    Ok(user) => Ok(SignUpResult::Created(user.id)),
                    Err(AppError::DbErr(err)) => match identity_conflict(&err) {
                        Some(field) => {
                            tracing::debug!("Sign up lost race on {:?}", field);
                            Ok(SignUpResult::Conflict(field))
                        }
                        None => Err(AppError::DbErr(err)),
                    },
                    Err(err) => Err(err),
                }
            })
        })
        .await
    }

    /// Checks credentials and issues a session token.
    ///
    /// Unknown usernames and wrong passwords are indistinguishable to the caller.
    ///
    /// # Arguments
    /// - `params` - Username and plaintext password
    ///
    /// # Returns
    /// - `Ok(Some(token))` - Credentials valid; a new token was issued
    /// - `Ok(None)` - Unknown username or wrong password
    /// - `Err(AppError::Token)` - Credentials valid but the token could not be issued
    /// - `Err(AppError::DbErr)` - Storage failure
    pub async fn login(&self, params: LoginParams) -> Result<Option<String>, AppError> {
        let verified = run_in_transaction::<_, _, _, AppError>(self.db, move |txn| {
            Box::pin(async move {
                let user_repo = UserRepository::new(txn);

                if !user_repo.username_exists(&params.username).await? {
                    return Ok(None);
                }
                let Some(user) = user_repo.find_by_username(&params.username).await? else {
                    return Ok(None);
                };

                if !verify_password(&params.password, &user.salt, &user.password_hash) {
                    return Ok(None);
                }

                Ok(Some(user))
            })
        })
        .await?;

        let Some(user) = verified else {
            tracing::debug!("Login rejected: invalid credentials");
            return Ok(None);
        };

        let token = self.issuer.issue(
            IdentityClaims {
                id: user.id,
                nickname: user.nickname,
                created_at: user.created_at,
            },
            self.session_timeout,
        )?;

        Ok(Some(token))
    }

    /// Gets the account behind a verified session.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Account still exists
    /// - `Ok(None)` - Account was removed after the token was issued
    /// - `Err(AppError::DbErr)` - Storage failure
    pub async fn get_user(&self, id: i32) -> Result<Option<User>, AppError> {
        let user = UserRepository::new(self.db).find_by_id(id).await?;

        Ok(user)
    }
}

/// Maps a unique violation on the user table back to the field that collided.
///
/// Returns `None` for every other error, which the caller propagates unchanged.
pub fn identity_conflict(err: &DbErr) -> Option<IdentityField> {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => {
            if message.contains("nickname") {
                Some(IdentityField::Nickname)
            } else if message.contains("username") {
                Some(IdentityField::Username)
            } else {
                None
            }
        }
        _ => None,
    }
}
