//! Staff onboarding: issuing login credentials for new staff members.

use crate::models::{NewStaff, StaffCredentials, StaffInput, StaffProfile};

pub const EMAIL_DOMAIN: &str = "silvercare.com";

/// Issue a random 8-hex-character password and the matching email.
pub fn issue_credentials(name: &str) -> StaffCredentials {
    let bytes: [u8; 4] = rand::random();
    let password: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    StaffCredentials {
        email: email_for(name, &password),
        password,
    }
}

/// `<name lowercased, whitespace → '.'>-<password>@silvercare.com`
pub fn email_for(name: &str, password: &str) -> String {
    let local: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '.' } else { c })
        .collect();
    format!("{local}-{password}@{EMAIL_DOMAIN}")
}

/// Build a storable staff member from a create request.
pub fn onboard(input: &StaffInput) -> NewStaff {
    let profile = StaffProfile::from(input);
    let credentials = issue_credentials(&profile.name);
    NewStaff {
        profile,
        credentials,
    }
}
