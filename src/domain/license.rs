//! License value object owned by a user.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A license held by a user. Never mutated in place; an update replaces
/// the whole license list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct License {
    /// License kind
    #[serde(rename = "type")]
    #[schema(example = "Improviser 20 Weeks")]
    pub license_type: String,
    #[schema(example = "Your firstborn")]
    pub price: String,
    #[schema(example = "2023-09-04")]
    pub acquisition_date: NaiveDate,
    #[schema(example = "2024-01-26")]
    pub expiration_date: NaiveDate,
}

impl License {
    pub fn new(
        license_type: impl Into<String>,
        price: impl Into<String>,
        acquisition_date: NaiveDate,
        expiration_date: NaiveDate,
    ) -> Self {
        Self {
            license_type: license_type.into(),
            price: price.into(),
            acquisition_date,
            expiration_date,
        }
    }
}
