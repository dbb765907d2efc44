//! Field rule sets.
//!
//! Each submodule contributes rule groups for a family of semantic fields:
//!
//! - `personal.rs`: identity and contact fields (first/last/full name,
//!   location, phone, email).
//! - `links.rs`: professional profile links (GitHub, LinkedIn, portfolio).
//! - `vendor.rs`: direct-attribute override tables for known
//!   applicant-tracking-system markup, shared by the field constructors.
//!
//! [`all`] assembles the groups in THE field priority order. That order is
//! the only cross-field tie-break the engine has: when an element's
//! signature satisfies several fields, the first group in this list wins.
//! Keep personal fields before professional links, and narrower fields
//! (firstName/lastName) before broader ones (fullName).

#[path = "rules/links.rs"]
mod links;
#[path = "rules/personal.rs"]
mod personal;
#[path = "rules/vendor.rs"]
mod vendor;

#[cfg(test)]
#[path = "rules/tests.rs"]
mod tests;

use crate::FieldRules;

/// The full rule list, in matching priority order.
pub(crate) fn all() -> Vec<FieldRules> {
    vec![
        personal::first_name(),
        personal::last_name(),
        personal::full_name(),
        personal::location(),
        personal::phone(),
        personal::email(),
        links::github(),
        links::linkedin(),
        links::portfolio(),
    ]
}
