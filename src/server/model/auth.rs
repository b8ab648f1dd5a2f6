//! Registration and login parameters and outcomes.

use crate::model::{
    api::{CodeDto, CODE_FIRST_KIND, CODE_SECOND_KIND},
    auth::{LoginDto, SignUpDto},
};

#[derive(Debug, Clone)]
pub struct SignUpParams {
    pub email: String,
    pub nickname: String,
    pub username: String,
    /// Plaintext; hashed by the service and never stored.
    pub password: String,
}

impl SignUpParams {
    pub fn from_dto(dto: SignUpDto) -> Self {
        Self {
            email: dto.email,
            nickname: dto.nickname,
            username: dto.username,
            password: dto.password,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            username: dto.username,
            password: dto.password,
        }
    }
}

/// Unique account field that collided during registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityField {
    Nickname,
    Username,
}

/// Outcome of a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpResult {
    /// Account created with this id.
    Created(i32),
    /// Nothing written; the field is already taken.
    Conflict(IdentityField),
}

impl SignUpResult {
    pub fn into_dto(self) -> CodeDto {
        match self {
            Self::Created(id) => CodeDto::created(id),
            Self::Conflict(IdentityField::Nickname) => CodeDto::code(CODE_FIRST_KIND),
            Self::Conflict(IdentityField::Username) => CodeDto::code(CODE_SECOND_KIND),
        }
    }
}
