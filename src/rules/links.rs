//! Professional link field rules.
//!
//! These fields mostly appear on job boards as URL inputs with explicit
//! wording, so the vocabulary is smaller than the personal set. The `^li$`
//! shorthand shows up in the wild as a bare field name on minimal forms.

use crate::{FieldRules, SemanticField};

pub(super) fn github() -> FieldRules {
    field_rules! {
        field: SemanticField::Github,
        patterns: [
            r"(?i)github",
            r"(?i)git(\s|-)?hub",
            r"(?i)git(\s)?profile",
            r"(?i)github.*profile",
            r"(?i)github.*url",
            r"(?i)\[github\]",
        ],
    }
}

pub(super) fn linkedin() -> FieldRules {
    field_rules! {
        field: SemanticField::Linkedin,
        patterns: [
            r"(?i)linkedin",
            r"(?i)linked(\s|-)?in",
            r"(?i)professional(\s)?profile",
            r"(?i)linkedin.*profile",
            r"(?i)linkedin.*url",
            r"(?i)^li$",
            r"(?i)^li.*profile$",
            r"(?i)\[linkedin\]",
        ],
    }
}

pub(super) fn portfolio() -> FieldRules {
    field_rules! {
        field: SemanticField::Portfolio,
        patterns: [
            r"(?i)portfolio",
            r"(?i)personal(\s)?website",
            r"(?i)web(\s)?site",
            r"(?i)portfolio.*url",
            r"(?i)personal.*url",
            r"(?i)\[portfolio\]",
            r"(?i)\[website\]",
        ],
    }
}
