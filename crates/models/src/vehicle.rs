use sea_orm::entity::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::ValidationError;

pub const YEAR_MIN: i32 = 1950;
pub const YEAR_MAX: i32 = 2050;

/// Persisted vehicle. Field order is the wire order: id, year, make, model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub year: i32,
    pub make: String,
    pub model: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub type Vehicle = Model;

/// Inbound vehicle payload. `make`/`model` stay optional so a missing or null
/// field can be told apart from an empty string; a missing or null year reads as 0.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleInput {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub year: i32,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or_default())
}

/// The writable fields of a vehicle after validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VehicleFields {
    pub year: i32,
    pub make: String,
    pub model: String,
}

impl VehicleFields {
    /// Overwrite the writable fields of `existing`, keeping its id.
    pub fn apply_to(self, mut existing: Vehicle) -> Vehicle {
        existing.year = self.year;
        existing.make = self.make;
        existing.model = self.model;
        existing
    }
}

/// Checks run in a fixed order: null, then empty, then year range.
pub fn validate(input: &VehicleInput) -> Result<VehicleFields, ValidationError> {
    let (make, model) = match (&input.make, &input.model) {
        (Some(make), Some(model)) => (make, model),
        _ => return Err(ValidationError::NullField),
    };
    if make.is_empty() || model.is_empty() {
        return Err(ValidationError::EmptyField);
    }
    if input.year > YEAR_MAX || input.year < YEAR_MIN {
        return Err(ValidationError::YearOutOfRange);
    }
    Ok(VehicleFields { year: input.year, make: make.clone(), model: model.clone() })
}
