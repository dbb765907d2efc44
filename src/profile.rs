//! Profile snapshots.
//!
//! A [`Profile`] is the per-scan snapshot of the user's saved values. The
//! engine only ever reads it; ownership of the persistent copy lives with
//! the storage collaborator (see [`crate::storage`]).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::SemanticField;

/// The keys recognized by the storage collaborator.
///
/// `fullName` is deliberately not stored: it is synthesized from first and
/// last name at fill time (see [`Profile::value_for`]).
pub const STORAGE_KEYS: [&str; 8] =
    ["firstName", "lastName", "email", "location", "phone", "github", "linkedin", "portfolio"];

/// One snapshot of the user's saved personal/professional values.
///
/// Absent fields are legal and simply skip filling. Values are stored as
/// entered; trimming happens on read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Raw full name, honored only when first/last are not both present.
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
}

impl Profile {
    /// Build a snapshot from a raw storage map. Unknown keys are ignored.
    pub fn from_map(map: &HashMap<String, String>) -> Self {
        let take = |key: &str| map.get(key).cloned();
        Profile {
            first_name: take("firstName"),
            last_name: take("lastName"),
            full_name: take("fullName"),
            email: take("email"),
            location: take("location"),
            phone: take("phone"),
            github: take("github"),
            linkedin: take("linkedin"),
            portfolio: take("portfolio"),
        }
    }

    /// Flatten back into a storage map, skipping blank fields.
    pub fn to_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        let mut put = |key: &str, value: &Option<String>| {
            if let Some(v) = non_blank(value) {
                map.insert(key.to_string(), v.to_string());
            }
        };
        put("firstName", &self.first_name);
        put("lastName", &self.last_name);
        put("email", &self.email);
        put("location", &self.location);
        put("phone", &self.phone);
        put("github", &self.github);
        put("linkedin", &self.linkedin);
        put("portfolio", &self.portfolio);
        map
    }

    /// The value to write for `field`, trimmed, or `None` when nothing
    /// usable is saved.
    ///
    /// fullName is special: when both first and last name are present it is
    /// synthesized as `"first last"`, overriding any raw fullName value.
    pub fn value_for(&self, field: SemanticField) -> Option<String> {
        let raw = match field {
            SemanticField::FirstName => self.first_name.as_deref(),
            SemanticField::LastName => self.last_name.as_deref(),
            SemanticField::FullName => {
                if let (Some(first), Some(last)) =
                    (non_blank(&self.first_name), non_blank(&self.last_name))
                {
                    return Some(format!("{first} {last}"));
                }
                self.full_name.as_deref()
            }
            SemanticField::Location => self.location.as_deref(),
            SemanticField::Phone => self.phone.as_deref(),
            SemanticField::Email => self.email.as_deref(),
            SemanticField::Github => self.github.as_deref(),
            SemanticField::Linkedin => self.linkedin.as_deref(),
            SemanticField::Portfolio => self.portfolio.as_deref(),
        };
        raw.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
    }

    /// True when no field holds a usable value.
    pub fn is_empty(&self) -> bool {
        self.to_map().is_empty() && non_blank(&self.full_name).is_none()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> Profile {
        Profile {
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            email: Some("ada@example.com".into()),
            ..Profile::default()
        }
    }

    #[test]
    fn full_name_is_synthesized_from_parts() {
        let mut profile = ada();
        profile.full_name = Some("Augusta Ada King".into());

        // The literal fullName loses to the synthesized pair.
        assert_eq!(profile.value_for(SemanticField::FullName).as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn raw_full_name_used_when_a_part_is_missing() {
        let profile = Profile {
            full_name: Some("Augusta Ada King".into()),
            last_name: Some("Lovelace".into()),
            ..Profile::default()
        };
        assert_eq!(
            profile.value_for(SemanticField::FullName).as_deref(),
            Some("Augusta Ada King")
        );
    }

    #[test]
    fn values_are_trimmed_and_blanks_skipped() {
        let profile = Profile {
            phone: Some("  555 0100  ".into()),
            github: Some("   ".into()),
            ..Profile::default()
        };
        assert_eq!(profile.value_for(SemanticField::Phone).as_deref(), Some("555 0100"));
        assert_eq!(profile.value_for(SemanticField::Github), None);
    }

    #[test]
    fn map_round_trip_skips_blanks() {
        let mut profile = ada();
        profile.portfolio = Some("".into());
        let map = profile.to_map();
        assert_eq!(map.get("firstName").map(String::as_str), Some("Ada"));
        assert!(!map.contains_key("portfolio"));
        assert_eq!(Profile::from_map(&map).value_for(SemanticField::Email).as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn camel_case_wire_format() {
        let profile: Profile =
            serde_json::from_str(r#"{"firstName":"Ada","linkedin":"https://linkedin.com/in/ada"}"#)
                .unwrap();
        assert_eq!(profile.first_name.as_deref(), Some("Ada"));
        assert_eq!(profile.linkedin.as_deref(), Some("https://linkedin.com/in/ada"));
    }
}
