extern crate self as jobfill;

use regex::Regex;

#[macro_use]
mod macros;
mod api;
mod engine;
mod rules;

pub mod dom;
pub mod messaging;
pub mod profile;
pub mod session;
pub mod snapshot;
pub mod storage;

pub use api::{Assignment, FillOutcome, FillReport, fill_fields, fill_fields_verbose};
pub use engine::FillMetrics;
pub use profile::{Profile, STORAGE_KEYS};

// --- Internal types ---------------------------------------------------------

/// Semantic categories of personal/professional data the engine can fill.
///
/// The enum itself carries no priority; matching precedence is the registry
/// order assembled in `rules::all` (personal fields before professional
/// links, narrower fields before broader ones).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticField {
    FirstName,
    LastName,
    FullName,
    Location,
    Phone,
    Email,
    Github,
    Linkedin,
    Portfolio,
}

impl SemanticField {
    /// Stable storage-facing name, e.g. `"firstName"`.
    pub fn name(self) -> &'static str {
        match self {
            SemanticField::FirstName => "firstName",
            SemanticField::LastName => "lastName",
            SemanticField::FullName => "fullName",
            SemanticField::Location => "location",
            SemanticField::Phone => "phone",
            SemanticField::Email => "email",
            SemanticField::Github => "github",
            SemanticField::Linkedin => "linkedin",
            SemanticField::Portfolio => "portfolio",
        }
    }
}

impl std::fmt::Display for SemanticField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Element attribute an [`AttrRule`] is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AttrKey {
    Id,
    Name,
    Autocomplete,
    /// The input `type` attribute. The DOM reports it ASCII-lowercased.
    Type,
}

/// Direct-attribute rule: exact equality on a single attribute value.
///
/// These special-case known applicant-tracking-system markup (bracketed
/// field names, standardized `autocomplete` tokens) and bypass signature
/// matching entirely.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AttrRule {
    pub attr: AttrKey,
    pub value: &'static str,
}

/// Matching rules used by field rule groups: either a regex evaluated
/// against the element's composite signature, or a direct-attribute
/// equality check.
#[derive(Debug, Clone, Copy)]
pub(crate) enum MatchRule {
    /// Match a regular expression against the composite signature. The
    /// `Regex` is stored as a static reference (created via the `regex!`
    /// helper macro in `src/macros.rs`).
    Text(&'static Regex),

    /// Match one element attribute by exact equality.
    Attr(AttrRule),
}

/// A field rule group: one semantic field and the ordered list of rules
/// that can claim an element for it. Order inside the group carries no
/// priority (any rule matching suffices), but direct-attribute rules are
/// placed first as the cheap path.
#[derive(Debug)]
pub(crate) struct FieldRules {
    pub field: SemanticField,
    pub rules: Vec<MatchRule>,
}
