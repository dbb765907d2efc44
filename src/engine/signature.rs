//! Element signatures (input pre-classification).
//!
//! A [`Signature`] is the composite text an element is matched on: every
//! readable attribute, the label text gathered around the element, and the
//! raw serialized markup as a last-resort signal, lower-cased and joined
//! with single spaces.
//!
//! ```text
//! <input id="applicant_email" placeholder="Email address">
//!        │
//!        ▼
//! "applicant_email email address <input id=\"applicant_email\" ...>"
//! ```
//!
//! ## Design notes
//!
//! - Signatures are ephemeral: recomputed per element per scan, never
//!   cached. The DOM mutates between scans and a stale signature would
//!   misclassify.
//! - Render/editability state is deliberately NOT part of the signature;
//!   it gates eligibility upstream.
//! - Lower-casing uses `to_lowercase` since label text is user-facing
//!   prose, not ASCII-only markup.

use regex::Regex;

use crate::dom::{Attr, ElementHandle, LabelText};

/// Attribute read order. Part order is stable so that anchored patterns
/// behave the same from scan to scan.
const SIGNATURE_ATTRS: [Attr; 10] = [
    Attr::Id,
    Attr::Name,
    Attr::Placeholder,
    Attr::AriaLabel,
    Attr::DataTestId,
    Attr::DataField,
    Attr::Label,
    Attr::Autocomplete,
    Attr::Type,
    Attr::Class,
];

/// Composite lower-cased matching text for one element.
#[derive(Debug, Clone)]
pub(crate) struct Signature {
    text: String,
}

impl Signature {
    /// Scan one element into its signature.
    pub fn scan(element: &dyn ElementHandle) -> Self {
        let mut parts: Vec<String> = Vec::new();

        for key in SIGNATURE_ATTRS {
            if let Some(value) = element.attr(key) {
                push_part(&mut parts, value);
            }
        }

        let LabelText { associated, preceding, ancestor } = element.label_text();
        if let Some(text) = preceding {
            push_part(&mut parts, text);
        }
        if let Some(text) = ancestor {
            push_part(&mut parts, text);
        }
        for text in associated {
            push_part(&mut parts, text);
        }

        push_part(&mut parts, element.outer_html());

        Signature { text: parts.join(" ").to_lowercase() }
    }

    /// Build a signature from raw text. Test seam for exercising patterns
    /// without a DOM.
    #[cfg(test)]
    pub fn from_text(text: &str) -> Self {
        Signature { text: text.to_lowercase() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_match(&self, re: &Regex) -> bool {
        re.is_match(&self.text)
    }
}

fn push_part(parts: &mut Vec<String>, value: String) {
    let trimmed = value.trim();
    if !trimmed.is_empty() {
        parts.push(trimmed.to_string());
    }
}
