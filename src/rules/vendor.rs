//! Direct-attribute override tables for known applicant-tracking-system
//! markup.
//!
//! Greenhouse-style job boards render inputs with bracket-qualified names
//! (`job_application[first_name]`), bare snake_case ids, or standardized
//! `autocomplete` tokens. Those are checked by exact equality before any
//! signature pattern runs; either kind of rule matching is sufficient.

use crate::AttrRule;

pub(super) const FIRST_NAME: &[AttrRule] = &[
    by_attr!(Name = "job_application[first_name]"),
    by_attr!(Id = "first_name"),
    by_attr!(Autocomplete = "given-name"),
];

pub(super) const LAST_NAME: &[AttrRule] = &[
    by_attr!(Name = "job_application[last_name]"),
    by_attr!(Id = "last_name"),
    by_attr!(Autocomplete = "family-name"),
];

pub(super) const EMAIL: &[AttrRule] = &[
    by_attr!(Name = "job_application[email]"),
    by_attr!(Id = "email"),
    by_attr!(Type = "email"),
    by_attr!(Autocomplete = "email"),
];

pub(super) const PHONE: &[AttrRule] = &[
    by_attr!(Name = "job_application[phone]"),
    by_attr!(Id = "phone"),
    by_attr!(Type = "tel"),
    by_attr!(Autocomplete = "tel"),
];
