use serde::Deserialize;
use thiserror::Error;

use crate::shared::core::primitives::{BannerId, UNASSIGNED_ID};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing `id` parameter")]
    MissingId,

    #[error("invalid id `{0}`")]
    InvalidId(String),
}

/// `?id=<i64>` query string shared by the lookup and removal routes.
#[derive(Debug, Deserialize)]
pub struct IdParams {
    pub id: Option<String>,
}

impl IdParams {
    pub fn id(&self) -> Result<BannerId, ValidationError> {
        match self.id.as_deref() {
            None => Err(ValidationError::MissingId),
            Some(raw) => parse_id(raw),
        }
    }
}

pub fn parse_id(raw: &str) -> Result<BannerId, ValidationError> {
    raw.trim()
        .parse()
        .map_err(|_| ValidationError::InvalidId(raw.to_string()))
}

/// Form id of a save request. Blank means "create".
pub fn parse_form_id(raw: Option<&str>) -> Result<BannerId, ValidationError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(UNASSIGNED_ID),
        Some(value) => parse_id(value),
    }
}
