//! In-memory document snapshots.
//!
//! A snapshot is a serde-loadable fake DOM: a document tree of inputs and
//! frames, with declared attributes, label text, and render state. It
//! implements the [`crate::dom`] capability traits and records every value
//! write and dispatched event, which makes it both the reference
//! implementation of the contract and the harness the test suite and the
//! CLI run against.
//!
//! ```json
//! {
//!   "inputs": [
//!     {"id": "first_name", "placeholder": "First name"},
//!     {"ariaLabel": "Email address", "type": "email"}
//!   ],
//!   "frames": [
//!     {"crossOrigin": true, "src": "https://ats.example.com/embed",
//!      "document": {"inputs": [{"ariaLabel": "Email"}]}}
//!   ]
//! }
//! ```
//!
//! Snapshots are single-threaded by construction (`Rc`/`RefCell`), like
//! the page context they stand in for.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::dom::{
    Attr, DocumentHandle, DomError, ElementHandle, ElementState, FrameHandle, LabelText,
    SyntheticEvent,
};

/// Declared shape of one input element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementSpec {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub input_type: Option<String>,
    pub placeholder: Option<String>,
    pub aria_label: Option<String>,
    pub data_test_id: Option<String>,
    pub data_field: Option<String>,
    pub label: Option<String>,
    pub autocomplete: Option<String>,
    pub class: Option<String>,
    /// Text of associated `<label>` elements (`for`/`labels`).
    pub labels: Vec<String>,
    /// Text content of the immediately preceding sibling.
    pub preceding: Option<String>,
    /// Text of the closest ancestor `<label>`.
    pub ancestor_label: Option<String>,
    /// Raw markup; synthesized from the attributes when absent.
    pub html: Option<String>,
    /// Initial value.
    pub value: Option<String>,
    pub hidden: bool,
    pub disabled: bool,
    pub readonly: bool,
    /// Simulate an element that leaves the tree after discovery: it still
    /// reports as rendered, but writes and dispatches fail.
    pub detached: bool,
}

impl ElementSpec {
    /// Build the runtime element for this spec.
    pub fn build(self) -> SnapshotElement {
        let value = self.value.clone();
        SnapshotElement {
            cell: Rc::new(ElementCell {
                spec: self,
                value: RefCell::new(value),
                events: RefCell::new(Vec::new()),
            }),
        }
    }
}

/// Declared shape of one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentSpec {
    pub inputs: Vec<ElementSpec>,
    pub frames: Vec<FrameSpec>,
}

impl DocumentSpec {
    /// Build the runtime document tree for this spec.
    pub fn build(self) -> SnapshotDocument {
        SnapshotDocument {
            cell: Rc::new(DocCell {
                elements: self.inputs.into_iter().map(ElementSpec::build).collect(),
                frames: self
                    .frames
                    .into_iter()
                    .map(|frame| SnapshotFrame {
                        cross_origin: frame.cross_origin,
                        src: frame.src,
                        document: frame.document.build(),
                    })
                    .collect(),
            }),
        }
    }
}

/// Declared shape of one embedded frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FrameSpec {
    /// Cross-origin frames answer access-denied instead of a document.
    pub cross_origin: bool,
    pub src: Option<String>,
    pub document: DocumentSpec,
}

#[derive(Debug)]
struct ElementCell {
    spec: ElementSpec,
    value: RefCell<Option<String>>,
    events: RefCell<Vec<SyntheticEvent>>,
}

/// Runtime element handle; clones share state.
#[derive(Debug, Clone)]
pub struct SnapshotElement {
    cell: Rc<ElementCell>,
}

impl SnapshotElement {
    /// Current value, as the engine left it.
    pub fn value(&self) -> Option<String> {
        self.cell.value.borrow().clone()
    }

    /// Events dispatched against this element, in firing order.
    pub fn dispatched(&self) -> Vec<SyntheticEvent> {
        self.cell.events.borrow().clone()
    }
}

impl ElementHandle for SnapshotElement {
    fn attr(&self, key: Attr) -> Option<String> {
        let spec = &self.cell.spec;
        let raw = match key {
            Attr::Id => &spec.id,
            Attr::Name => &spec.name,
            Attr::Placeholder => &spec.placeholder,
            Attr::AriaLabel => &spec.aria_label,
            Attr::DataTestId => &spec.data_test_id,
            Attr::DataField => &spec.data_field,
            Attr::Label => &spec.label,
            Attr::Autocomplete => &spec.autocomplete,
            Attr::Type => &spec.input_type,
            Attr::Class => &spec.class,
        };
        raw.as_deref().map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
    }

    fn state(&self) -> ElementState {
        let spec = &self.cell.spec;
        let mut state = ElementState::empty();
        if !spec.hidden {
            state |= ElementState::RENDERED;
        }
        if spec.disabled {
            state |= ElementState::DISABLED;
        }
        if spec.readonly {
            state |= ElementState::READ_ONLY;
        }
        state
    }

    fn label_text(&self) -> LabelText {
        let spec = &self.cell.spec;
        LabelText {
            associated: spec.labels.clone(),
            preceding: spec.preceding.clone(),
            ancestor: spec.ancestor_label.clone(),
        }
    }

    fn outer_html(&self) -> String {
        if let Some(html) = &self.cell.spec.html {
            return html.clone();
        }
        let mut out = String::from("<input");
        for key in [
            Attr::Type,
            Attr::Id,
            Attr::Name,
            Attr::Placeholder,
            Attr::Autocomplete,
            Attr::Class,
        ] {
            if let Some(value) = self.attr(key) {
                out.push_str(&format!(" {}=\"{}\"", key.html_name(), value));
            }
        }
        out.push('>');
        out
    }

    fn value(&self) -> Option<String> {
        SnapshotElement::value(self)
    }

    fn set_value(&self, value: &str) -> Result<(), DomError> {
        if self.cell.spec.detached {
            return Err(DomError::Detached);
        }
        *self.cell.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }

    fn dispatch(&self, event: SyntheticEvent) -> Result<(), DomError> {
        if self.cell.spec.detached {
            return Err(DomError::Detached);
        }
        self.cell.events.borrow_mut().push(event);
        Ok(())
    }
}

#[derive(Debug)]
struct DocCell {
    elements: Vec<SnapshotElement>,
    frames: Vec<SnapshotFrame>,
}

/// Runtime document handle; clones share state.
#[derive(Debug, Clone)]
pub struct SnapshotDocument {
    cell: Rc<DocCell>,
}

impl SnapshotDocument {
    /// Parse and build a snapshot from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let spec: DocumentSpec = serde_json::from_str(json)?;
        Ok(spec.build())
    }

    /// Element at `index` in the main document. Indexing is the harness
    /// contract; out of range panics.
    pub fn element(&self, index: usize) -> SnapshotElement {
        self.cell.elements[index].clone()
    }

    /// Element at `index` inside frame `frame`.
    pub fn frame_element(&self, frame: usize, index: usize) -> SnapshotElement {
        self.cell.frames[frame].document.element(index)
    }
}

impl DocumentHandle for SnapshotDocument {
    fn inputs(&self) -> Vec<Box<dyn ElementHandle>> {
        self.cell
            .elements
            .iter()
            .cloned()
            .map(|element| Box::new(element) as Box<dyn ElementHandle>)
            .collect()
    }

    fn frames(&self) -> Vec<Box<dyn FrameHandle>> {
        self.cell
            .frames
            .iter()
            .cloned()
            .map(|frame| Box::new(frame) as Box<dyn FrameHandle>)
            .collect()
    }
}

/// Runtime frame handle.
#[derive(Debug, Clone)]
pub struct SnapshotFrame {
    cross_origin: bool,
    src: Option<String>,
    document: SnapshotDocument,
}

impl FrameHandle for SnapshotFrame {
    fn describe(&self) -> String {
        self.src.clone().unwrap_or_else(|| "<frame>".to_string())
    }

    fn document(&self) -> Result<Box<dyn DocumentHandle>, DomError> {
        if self.cross_origin {
            return Err(DomError::AccessDenied(self.describe()));
        }
        Ok(Box::new(self.document.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip() {
        let json = r#"{
            "inputs": [{"id": "first_name", "placeholder": "First name"}],
            "frames": [{"crossOrigin": true, "src": "https://x.test/embed",
                        "document": {"inputs": [{"ariaLabel": "Email"}]}}]
        }"#;
        let doc = SnapshotDocument::from_json(json).unwrap();
        assert_eq!(doc.element(0).attr(Attr::Id).as_deref(), Some("first_name"));
        assert!(doc.frames()[0].document().is_err());
    }

    #[test]
    fn synthesized_markup_lists_present_attributes() {
        let element = ElementSpec {
            id: Some("e1".into()),
            input_type: Some("email".into()),
            ..ElementSpec::default()
        }
        .build();
        assert_eq!(element.outer_html(), "<input type=\"email\" id=\"e1\">");
    }

    #[test]
    fn detached_elements_reject_writes_but_report_rendered() {
        let element = ElementSpec { detached: true, ..ElementSpec::default() }.build();
        assert!(element.state().is_eligible());
        assert!(matches!(element.set_value("x"), Err(DomError::Detached)));
        assert_eq!(SnapshotElement::value(&element), None);
    }

    #[test]
    fn writes_and_events_are_recorded() {
        let element = ElementSpec::default().build();
        element.set_value("hello").unwrap();
        element.dispatch(SyntheticEvent::Input).unwrap();
        assert_eq!(SnapshotElement::value(&element).as_deref(), Some("hello"));
        assert_eq!(element.dispatched(), vec![SyntheticEvent::Input]);
    }
}
