use crate::engine::{Registry, Signature};
use crate::snapshot::ElementSpec;
use crate::{MatchRule, SemanticField};

/// First field whose text patterns match `text`, walking the registry in
/// priority order. Attr rules are skipped: they need an element, and are
/// exercised through the snapshot cases below.
fn classify_text(text: &str) -> Option<SemanticField> {
    let signature = Signature::from_text(text);
    for group in Registry::global().fields() {
        for rule in &group.rules {
            if let MatchRule::Text(re) = rule {
                if signature.is_match(re) {
                    return Some(group.field);
                }
            }
        }
    }
    None
}

fn classify_element(spec: ElementSpec) -> Option<SemanticField> {
    let element = spec.build();
    let signature = Signature::scan(&element);
    Registry::global().classify(&element, &signature)
}

#[test]
fn signature_examples_matching() {
    use SemanticField::*;

    // Array of (expected_field, signature_text)
    let cases: Vec<(SemanticField, &str)> = vec![
        (FirstName, "first name"),
        (FirstName, "first-name"),
        (FirstName, "given name"),
        (FirstName, "given-name"),
        (FirstName, "first"),
        (FirstName, "fname"),
        (FirstName, "givenname"),
        (FirstName, "first_name"),
        (FirstName, "job_application[first_name]"),
        (FirstName, "Your first name"),
        (FirstName, r#"autocomplete="given-name""#),
        (LastName, "last name"),
        (LastName, "family name"),
        (LastName, "family-name"),
        (LastName, "surname"),
        (LastName, "last"),
        (LastName, "lname"),
        (LastName, "last_name"),
        (LastName, "job_application[last_name]"),
        (FullName, "name"),
        (FullName, "full name"),
        (FullName, "Full-Name"),
        (FullName, "your name"),
        (FullName, "complete name"),
        (FullName, "applicant[name]"),
        (Location, "location"),
        (Location, "city"),
        (Location, "state"),
        (Location, "current address"),
        (Location, "Where are you located?"),
        (Location, "where is your team based"),
        (Location, "candidate[location]"),
        (Phone, "phone"),
        (Phone, "telephone"),
        (Phone, "mobile"),
        (Phone, "cell"),
        (Phone, "contact number"),
        (Phone, "best contact phone number"),
        (Phone, "job_application[phone]"),
        (Email, "email"),
        (Email, "e-mail"),
        (Email, "applicant[email]"),
        (Email, "job_application[email]"),
        (Github, "github"),
        (Github, "git hub"),
        (Github, "git-hub"),
        (Github, "git profile"),
        (Github, "GitHub profile URL"),
        (Github, "candidate[github]"),
        (Linkedin, "linkedin"),
        (Linkedin, "linked in"),
        (Linkedin, "linked-in"),
        (Linkedin, "professional profile"),
        (Linkedin, "li"),
        (Linkedin, "candidate[linkedin]"),
        (Portfolio, "portfolio"),
        (Portfolio, "personal website"),
        (Portfolio, "website"),
        (Portfolio, "portfolio url"),
        (Portfolio, "candidate[website]"),
    ];

    for (expected, text) in cases {
        assert_eq!(
            classify_text(text),
            Some(expected),
            "\"{text}\" should classify as {expected}"
        );
    }
}

#[test]
fn unmatched_signatures_stay_unclassified() {
    let cases = ["favorite color", "salary expectation", "cover letter", "how did you hear about us"];
    for text in cases {
        assert_eq!(classify_text(text), None, "\"{text}\" should not classify");
    }
}

#[test]
fn registry_order_breaks_cross_field_ties() {
    use SemanticField::*;

    // Each signature satisfies several fields; the earlier registry entry
    // must win.
    let cases: Vec<(SemanticField, &str)> = vec![
        // "first" + "name": firstName beats fullName.
        (FirstName, "first name"),
        // "last" + "name": lastName beats fullName.
        (LastName, "last name"),
        // "address" is a location pattern and sits before email.
        (Location, "email address"),
        // "website" is a portfolio pattern, but "github" appears earlier.
        (Github, "github website"),
    ];

    for (expected, text) in cases {
        assert_eq!(classify_text(text), Some(expected), "\"{text}\" tie-break");
    }
}

#[test]
fn vendor_attr_rules_classify_without_signature_help() {
    use SemanticField::*;

    // (expected_field, element): markup is pinned to "<input>" so no text
    // pattern can fire; only the equality rules can claim these.
    let cases: Vec<(SemanticField, ElementSpec)> = vec![
        (
            FirstName,
            ElementSpec { id: Some("first_name".into()), html: Some("<input>".into()), ..ElementSpec::default() },
        ),
        (
            LastName,
            ElementSpec { id: Some("last_name".into()), html: Some("<input>".into()), ..ElementSpec::default() },
        ),
        (
            Email,
            ElementSpec { input_type: Some("email".into()), html: Some("<input>".into()), ..ElementSpec::default() },
        ),
        (
            Phone,
            ElementSpec { input_type: Some("tel".into()), html: Some("<input>".into()), ..ElementSpec::default() },
        ),
        (
            FirstName,
            ElementSpec {
                autocomplete: Some("given-name".into()),
                html: Some("<input>".into()),
                ..ElementSpec::default()
            },
        ),
        (
            LastName,
            ElementSpec {
                autocomplete: Some("family-name".into()),
                html: Some("<input>".into()),
                ..ElementSpec::default()
            },
        ),
    ];

    for (expected, spec) in cases {
        assert_eq!(classify_element(spec.clone()), Some(expected), "attr rules for {expected}");
    }
}

#[test]
fn attr_rules_require_exact_equality() {
    // A near-miss id is not claimed by the equality rules, and
    // "first_names <input>" satisfies no pattern either.
    let spec = ElementSpec {
        id: Some("first_names".into()),
        html: Some("<input>".into()),
        ..ElementSpec::default()
    };
    assert_eq!(classify_element(spec), None);
}

#[test]
fn full_signature_combines_attributes_and_labels() {
    use SemanticField::*;

    // Classification keys off whichever part carries the signal: id,
    // placeholder, an associated label, or the preceding sibling text.
    let cases: Vec<(SemanticField, ElementSpec)> = vec![
        (
            Email,
            ElementSpec { id: Some("applicant_email".into()), ..ElementSpec::default() },
        ),
        (
            Linkedin,
            ElementSpec {
                placeholder: Some("LinkedIn profile".into()),
                ..ElementSpec::default()
            },
        ),
        (
            Phone,
            ElementSpec { labels: vec!["Mobile number".into()], ..ElementSpec::default() },
        ),
        (
            Location,
            ElementSpec {
                preceding: Some("Where are you located?".into()),
                ..ElementSpec::default()
            },
        ),
        (
            Github,
            ElementSpec {
                ancestor_label: Some("GitHub username".into()),
                ..ElementSpec::default()
            },
        ),
    ];

    for (expected, spec) in cases {
        assert_eq!(classify_element(spec.clone()), Some(expected), "signature parts for {expected}");
    }
}
