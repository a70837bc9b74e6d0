use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A staff member. Email and password are issued by the service at
/// creation time, never supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: i64,
    pub name: String,
    pub role: Option<String>,
    pub contact: Option<String>,
    pub shift: Option<String>,
    pub email: String,
    pub password: String,
    pub created_at: NaiveDateTime,
}

/// Request body for creating or updating a staff member.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffInput {
    #[serde(default)]
    pub name: String,
    pub role: Option<String>,
    pub contact: Option<String>,
    pub shift: Option<String>,
}

/// Profile fields shared by create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct StaffProfile {
    pub name: String,
    pub role: Option<String>,
    pub contact: Option<String>,
    pub shift: Option<String>,
}

impl From<&StaffInput> for StaffProfile {
    fn from(input: &StaffInput) -> Self {
        Self {
            name: input.name.trim().to_string(),
            role: input.role.clone(),
            contact: input.contact.clone(),
            shift: input.shift.clone(),
        }
    }
}

/// Login credentials issued to a new staff member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewStaff {
    pub profile: StaffProfile,
    pub credentials: StaffCredentials,
}
