use crate::dom::DocumentHandle;
use crate::engine::{Registry, Resolver};
use crate::profile::Profile;

pub use crate::engine::{Assignment, FillOutcome, FillReport};

/// Run one fill pass over `document` with the default registry.
///
/// Returns the number of elements written. Never fails: frame access
/// problems and per-element write failures are contained and logged.
///
/// # Example
/// ```
/// use jobfill::snapshot::{DocumentSpec, ElementSpec};
/// use jobfill::{Profile, fill_fields};
///
/// let doc = DocumentSpec {
///     inputs: vec![ElementSpec {
///         placeholder: Some("Email".into()),
///         ..ElementSpec::default()
///     }],
///     ..DocumentSpec::default()
/// }
/// .build();
/// let profile = Profile { email: Some("ada@example.com".into()), ..Profile::default() };
///
/// assert_eq!(fill_fields(&doc, &profile), 1);
/// ```
pub fn fill_fields(document: &dyn DocumentHandle, profile: &Profile) -> usize {
    Resolver::new(document, Registry::global()).run(profile)
}

/// Run one fill pass and return the full per-claim trace and metrics.
///
/// This is useful for debugging classification on a stubborn form. The
/// plain [`fill_fields`] path does not allocate these traces.
pub fn fill_fields_verbose(document: &dyn DocumentHandle, profile: &Profile) -> FillReport {
    Resolver::new(document, Registry::global()).run_with_report(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{DocumentSpec, ElementSpec};

    fn form() -> DocumentSpec {
        DocumentSpec {
            inputs: vec![
                ElementSpec { aria_label: Some("First name".into()), ..ElementSpec::default() },
                ElementSpec { aria_label: Some("Email".into()), ..ElementSpec::default() },
                ElementSpec { aria_label: Some("Favorite color".into()), ..ElementSpec::default() },
            ],
            ..DocumentSpec::default()
        }
    }

    #[test]
    fn counting_and_verbose_paths_agree() {
        let profile = Profile {
            first_name: Some("Ada".into()),
            email: Some("ada@example.com".into()),
            ..Profile::default()
        };

        let doc = form().build();
        let count = fill_fields(&doc, &profile);

        let doc = form().build();
        let report = fill_fields_verbose(&doc, &profile);

        assert_eq!(count, 2);
        assert_eq!(report.filled, count);
        assert_eq!(report.assignments.len(), 2);
        assert_eq!(report.metrics.candidates, 3);
        assert_eq!(report.metrics.matched, 2);
    }

    #[test]
    fn verbose_report_names_the_claimed_fields() {
        let profile = Profile { email: Some("ada@example.com".into()), ..Profile::default() };
        let report = fill_fields_verbose(&form().build(), &profile);

        let fields: Vec<&str> =
            report.assignments.iter().map(|a| a.field.name()).collect();
        assert_eq!(fields, vec!["firstName", "email"]);
        assert!(matches!(report.assignments[0].outcome, FillOutcome::NoValue));
        assert!(matches!(report.assignments[1].outcome, FillOutcome::Filled(_)));
    }
}
