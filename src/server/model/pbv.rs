//! PBV option domain models.
//!
//! A user's saved vehicle configuration is a set of named, typed options. It is stored
//! as the JSON serialization of [`PbvOptionData`]; the bytes never leave the data layer
//! undecoded.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::pbv::{PbvOptionDto, PbvOptionValueDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PbvOptionValue {
    Text(String),
    Number(f64),
    Flag(bool),
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PbvOptionData {
    pub options: BTreeMap<String, PbvOptionValue>,
}

impl PbvOptionData {
    pub fn from_dto(dto: PbvOptionDto) -> Self {
        let options = dto
            .options
            .into_iter()
            .map(|(name, value)| {
                let value = match value {
                    PbvOptionValueDto::Text(v) => PbvOptionValue::Text(v),
                    PbvOptionValueDto::Number(v) => PbvOptionValue::Number(v),
                    PbvOptionValueDto::Flag(v) => PbvOptionValue::Flag(v),
                    PbvOptionValueDto::List(v) => PbvOptionValue::List(v),
                };
                (name, value)
            })
            .collect();

        Self { options }
    }

    pub fn into_dto(self) -> PbvOptionDto {
        let options = self
            .options
            .into_iter()
            .map(|(name, value)| {
                let value = match value {
                    PbvOptionValue::Text(v) => PbvOptionValueDto::Text(v),
                    PbvOptionValue::Number(v) => PbvOptionValueDto::Number(v),
                    PbvOptionValue::Flag(v) => PbvOptionValueDto::Flag(v),
                    PbvOptionValue::List(v) => PbvOptionValueDto::List(v),
                };
                (name, value)
            })
            .collect();

        PbvOptionDto { options }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddPbvOptionResult {
    Created(i32),
    AlreadyExists,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PbvOptionChange {
    Applied,
    NotFound,
}
