//! Models for site-level data: practice locations, contact info,
//! contact-form submissions and global settings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A practice location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_active: bool,
}

impl Location {
    /// Format the address as a single line, skipping empty parts.
    pub fn formatted_address(&self) -> String {
        let parts: Vec<&str> = [
            self.address.as_str(),
            self.city.as_str(),
            self.state.as_str(),
            self.country.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
        parts.join(", ")
    }
}

/// Public contact information for the practice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLink {
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub url: String,
}

/// A message sent through the public contact form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ContactSubmission {
    /// When the message arrived, for display.
    pub fn received_display(&self) -> String {
        match self.created_at {
            Some(at) => at.format("%Y-%m-%d %H:%M UTC").to_string(),
            None => "unknown".to_string(),
        }
    }
}

/// Global site settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[serde(default)]
    pub site_title: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub footer_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_parses_backend_json() {
        let json = r#"{"_id":"650c","name":"Downtown Clinic","address":"12 Main St","city":"Boston","state":"MA","country":"USA","phone":"+1 617 555 0100","email":"front@clinic.example","isActive":true}"#;
        let location: Location = serde_json::from_str(json).unwrap();
        assert!(location.is_active);
        assert_eq!(
            location.formatted_address(),
            "12 Main St, Boston, MA, USA"
        );
    }

    #[test]
    fn test_formatted_address_skips_empty_parts() {
        let location = Location {
            address: "12 Main St".to_string(),
            city: "Boston".to_string(),
            ..Default::default()
        };
        assert_eq!(location.formatted_address(), "12 Main St, Boston");
    }

    #[test]
    fn test_submission_parses_timestamp_and_read_flag() {
        let json = r#"{"_id":"6610","name":"Pat Doe","email":"pat@example.com","message":"Appointment request","read":false,"createdAt":"2025-05-04T09:30:00.000Z"}"#;
        let submission: ContactSubmission = serde_json::from_str(json).unwrap();
        assert!(!submission.read);
        assert_eq!(submission.received_display(), "2025-05-04 09:30 UTC");
    }

    #[test]
    fn test_submission_without_timestamp_still_parses() {
        let submission: ContactSubmission =
            serde_json::from_str(r#"{"_id":"1","name":"X","email":"x@y.z","message":"hi"}"#)
                .unwrap();
        assert_eq!(submission.received_display(), "unknown");
    }

    #[test]
    fn test_settings_round_trip() {
        let json = r#"{"siteTitle":"Dr. Doe Neurology","metaDescription":"Practice site","footerText":"(c) 2025"}"#;
        let settings: SiteSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.site_title, "Dr. Doe Neurology");
        let out = serde_json::to_value(&settings).unwrap();
        assert_eq!(out["siteTitle"], "Dr. Doe Neurology");
    }
}
