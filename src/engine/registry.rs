//! Rule compilation and evaluation.
//!
//! This module holds the *static* side of the engine: the process-wide
//! [`Registry`] built once from the rule groups in `src/rules/**`.
//!
//! The registry is immutable after construction. Its field order is the
//! engine's only cross-field tie-break: [`Registry::classify`] walks the
//! groups in order and the first group with any matching rule claims the
//! element. There is no scoring and no second pass.
//!
//! ## Invariants
//!
//! - Field order is fixed for the process lifetime (see `rules::all`).
//! - A direct-attribute rule and a signature pattern are interchangeable
//!   for claiming purposes; attr rules are merely the cheap path and are
//!   evaluated first within a group.

use once_cell::sync::Lazy;
use tracing::trace;

use super::signature::Signature;
use crate::dom::{Attr, ElementHandle};
use crate::{AttrKey, AttrRule, FieldRules, MatchRule, SemanticField};

static GLOBAL: Lazy<Registry> = Lazy::new(|| Registry::new(crate::rules::all()));

/// Compiled, immutable view over the field rule groups.
pub(crate) struct Registry {
    fields: Vec<FieldRules>,
}

impl Registry {
    /// Compile a registry from rule groups, preserving their order.
    pub fn new(fields: Vec<FieldRules>) -> Self {
        Registry { fields }
    }

    /// The process-wide registry, built on first use.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Field groups in matching priority order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldRules> {
        self.fields.iter()
    }

    /// The rule group for one field, if registered.
    #[allow(dead_code)]
    pub fn rules_for(&self, field: SemanticField) -> Option<&FieldRules> {
        self.fields.iter().find(|group| group.field == field)
    }

    /// Assign at most one semantic field to an element: the first field in
    /// registry order with any rule matching the element's attributes or
    /// signature. Returns `None` when nothing matches.
    pub fn classify(
        &self,
        element: &dyn ElementHandle,
        signature: &Signature,
    ) -> Option<SemanticField> {
        for group in &self.fields {
            for rule in &group.rules {
                if rule_matches(rule, element, signature) {
                    trace!(field = group.field.name(), rule = ?rule, "rule matched");
                    return Some(group.field);
                }
            }
        }
        None
    }
}

fn rule_matches(rule: &MatchRule, element: &dyn ElementHandle, signature: &Signature) -> bool {
    match rule {
        MatchRule::Text(re) => signature.is_match(re),
        MatchRule::Attr(attr_rule) => attr_matches(attr_rule, element),
    }
}

fn attr_matches(rule: &AttrRule, element: &dyn ElementHandle) -> bool {
    let key = match rule.attr {
        AttrKey::Id => Attr::Id,
        AttrKey::Name => Attr::Name,
        AttrKey::Autocomplete => Attr::Autocomplete,
        AttrKey::Type => Attr::Type,
    };
    element.attr(key).is_some_and(|value| value == rule.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_preserves_field_order() {
        let order: Vec<SemanticField> =
            Registry::global().fields().map(|group| group.field).collect();
        assert_eq!(
            order,
            vec![
                SemanticField::FirstName,
                SemanticField::LastName,
                SemanticField::FullName,
                SemanticField::Location,
                SemanticField::Phone,
                SemanticField::Email,
                SemanticField::Github,
                SemanticField::Linkedin,
                SemanticField::Portfolio,
            ]
        );
    }

    #[test]
    fn every_field_has_rules() {
        for group in Registry::global().fields() {
            assert!(!group.rules.is_empty(), "no rules for {}", group.field);
        }
    }

    #[test]
    fn rules_for_finds_registered_groups() {
        let registry = Registry::global();
        assert!(registry.rules_for(SemanticField::Github).is_some());
        assert_eq!(
            registry.rules_for(SemanticField::Phone).map(|g| g.field),
            Some(SemanticField::Phone)
        );
    }
}
