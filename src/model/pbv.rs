use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One configured option value.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PbvOptionValueDto {
    Text(String),
    Number(f64),
    Flag(bool),
    List(Vec<String>),
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq, Default)]
pub struct PbvOptionDto {
    pub options: BTreeMap<String, PbvOptionValueDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PbvOptionResponseDto {
    pub code: i32,
    pub data: Option<PbvOptionDto>,
}
