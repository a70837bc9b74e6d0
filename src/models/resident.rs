use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{whole_number, LooseNumber};

/// A person living in the facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
    pub id: i64,
    pub name: String,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub health_info: Option<String>,
    pub room: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Request body for creating or replacing a resident.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentInput {
    #[serde(default)]
    pub name: String,
    pub age: Option<LooseNumber>,
    pub gender: Option<String>,
    pub health_info: Option<String>,
    pub room: Option<String>,
}

/// Validated resident fields ready for the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewResident {
    pub name: String,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub health_info: Option<String>,
    pub room: Option<String>,
}

impl From<&ResidentInput> for NewResident {
    fn from(input: &ResidentInput) -> Self {
        Self {
            name: input.name.trim().to_string(),
            age: whole_number(input.age.as_ref()),
            gender: input.gender.clone(),
            health_info: input.health_info.clone(),
            room: input.room.clone(),
        }
    }
}
