use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Business outcome: the operation succeeded.
pub const CODE_SUCCESS: i32 = 8000;
/// Business outcome: first conflict or not-found kind of the operation.
///
/// Nickname taken on signup, invalid credentials on login, product missing on review,
/// PBV options already present or absent.
pub const CODE_FIRST_KIND: i32 = 8001;
/// Business outcome: second conflict or not-found kind of the operation.
///
/// Username taken on signup, parent review missing on review.
pub const CODE_SECOND_KIND: i32 = 8002;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Business outcome envelope.
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct CodeDto {
    pub code: i32,
    /// Id of the created record, when the operation creates one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl CodeDto {
    pub fn code(code: i32) -> Self {
        Self { code, id: None }
    }

    pub fn created(id: i32) -> Self {
        Self {
            code: CODE_SUCCESS,
            id: Some(id),
        }
    }
}
