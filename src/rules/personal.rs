//! Identity and contact field rules.
//!
//! Patterns run against the composite element signature (lower-cased
//! concatenation of attributes, label text, and raw markup), so a pattern
//! can key off anything from an id fragment to a question-style label
//! ("Where are you located?"). Anchored patterns (`^fname$`) only fire on
//! degenerate signatures and exist for single-attribute markup.

use super::vendor;
use crate::{FieldRules, SemanticField};

pub(super) fn first_name() -> FieldRules {
    field_rules! {
        field: SemanticField::FirstName,
        attrs: vendor::FIRST_NAME,
        patterns: [
            r"(?i)first[\s-]?name",
            r"(?i)given[\s-]?name",
            r"(?i)^first$",
            r"(?i)^fname$",
            r"(?i)^givenname$",
            r"(?i)\[first_name\]",
            r"(?i)^first_name$",
            r"(?i)^job_application\[first_name\]$",
            r#"(?i)autocomplete="given-name""#,
        ],
    }
}

pub(super) fn last_name() -> FieldRules {
    field_rules! {
        field: SemanticField::LastName,
        attrs: vendor::LAST_NAME,
        patterns: [
            r"(?i)last[\s-]?name",
            r"(?i)family[\s-]?name",
            r"(?i)surname",
            r"(?i)^last$",
            r"(?i)^lname$",
            r"(?i)\[last_name\]",
            r"(?i)^last_name$",
            r"(?i)^job_application\[last_name\]$",
            r#"(?i)autocomplete="family-name""#,
        ],
    }
}

pub(super) fn full_name() -> FieldRules {
    field_rules! {
        field: SemanticField::FullName,
        patterns: [
            r"(?i)^name$",
            r"(?i)full[\s-]?name",
            r"(?i)your[\s-]?name",
            r"(?i)complete[\s-]?name",
            r"(?i)\[name\]",
        ],
    }
}

pub(super) fn location() -> FieldRules {
    field_rules! {
        field: SemanticField::Location,
        patterns: [
            r"(?i)location",
            r"(?i)city",
            r"(?i)state",
            r"(?i)address",
            r"(?i)where.*located",
            r"(?i)where.*based",
            r"(?i)\[location\]",
        ],
    }
}

pub(super) fn phone() -> FieldRules {
    field_rules! {
        field: SemanticField::Phone,
        attrs: vendor::PHONE,
        patterns: [
            r"(?i)phone",
            r"(?i)telephone",
            r"(?i)mobile",
            r"(?i)cell",
            r"(?i)contact.*number",
            r"(?i)\[phone\]",
            r"(?i)^job_application\[phone\]$",
            r#"(?i)autocomplete="tel""#,
        ],
    }
}

pub(super) fn email() -> FieldRules {
    field_rules! {
        field: SemanticField::Email,
        attrs: vendor::EMAIL,
        patterns: [
            r"(?i)email",
            r"(?i)e-mail",
            r"(?i)\[email\]",
            r"(?i)^job_application\[email\]$",
            r#"(?i)autocomplete="email""#,
        ],
    }
}
