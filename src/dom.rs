//! Duck-typed DOM capability surface.
//!
//! The engine never touches a concrete DOM type. Everything it needs from a
//! page is expressed as three small object-safe traits:
//!
//! - [`ElementHandle`]: one candidate form input (read attributes and render
//!   state, read label text, write a value, dispatch synthetic events).
//! - [`DocumentHandle`]: enumerate the inputs and embedded frames of one
//!   document.
//! - [`FrameHandle`]: reach into an embedded sub-document; cross-origin
//!   frames answer [`DomError::AccessDenied`] instead of a document.
//!
//! A browser glue layer implements these over real DOM nodes; test harnesses
//! and the CLI implement them over [`crate::snapshot`] fakes. The contract
//! is read-mostly: the only mutation an implementation must support is
//! `set_value`, and `dispatch` must emit events that bubble so ancestor
//! frameworks relying on event delegation observe the change.

use thiserror::Error;

/// Attributes the engine reads from a candidate element.
///
/// These feed the composite signature (see `engine/signature.rs`) and the
/// direct-attribute vendor rules. None of them are ever written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attr {
    Id,
    Name,
    Placeholder,
    AriaLabel,
    DataTestId,
    DataField,
    /// A literal `label` attribute, as some form builders emit.
    Label,
    Autocomplete,
    /// The input `type` attribute; absent when the markup omits it.
    Type,
    /// The full class list, space separated.
    Class,
}

impl Attr {
    /// HTML attribute name, e.g. `"aria-label"`.
    pub fn html_name(self) -> &'static str {
        match self {
            Attr::Id => "id",
            Attr::Name => "name",
            Attr::Placeholder => "placeholder",
            Attr::AriaLabel => "aria-label",
            Attr::DataTestId => "data-testid",
            Attr::DataField => "data-field",
            Attr::Label => "label",
            Attr::Autocomplete => "autocomplete",
            Attr::Type => "type",
            Attr::Class => "class",
        }
    }
}

bitflags::bitflags! {
    /// Render/editability state of an element.
    ///
    /// State gates eligibility only; it is never part of the signature.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ElementState: u8 {
        /// The element currently has a layout box (an offset parent).
        const RENDERED  = 1 << 0;
        const DISABLED  = 1 << 1;
        const READ_ONLY = 1 << 2;
    }
}

impl ElementState {
    /// Eligible elements are rendered, enabled, and writable. Nothing else
    /// is ever inspected for matching nor mutated.
    pub fn is_eligible(self) -> bool {
        self.contains(ElementState::RENDERED)
            && !self.intersects(ElementState::DISABLED | ElementState::READ_ONLY)
    }
}

/// Label text associated with an element, gathered through the three
/// lookups forms use in the wild.
#[derive(Debug, Clone, Default)]
pub struct LabelText {
    /// Text of `<label>` elements tied to the input via `for`/`labels`.
    pub associated: Vec<String>,
    /// Text content of the immediately preceding sibling.
    pub preceding: Option<String>,
    /// Text of the closest ancestor `<label>`, when the input is nested
    /// inside one.
    pub ancestor: Option<String>,
}

/// Synthetic notifications fired after a value write, in declaration order:
/// input-changed, value-changed, focus-lost.
///
/// Order matters: frameworks listening for the first but validating on the
/// later ones must observe a consistent sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntheticEvent {
    Input,
    Change,
    Blur,
}

impl SyntheticEvent {
    /// DOM event name.
    pub fn name(self) -> &'static str {
        match self {
            SyntheticEvent::Input => "input",
            SyntheticEvent::Change => "change",
            SyntheticEvent::Blur => "blur",
        }
    }
}

/// Failures a DOM implementation can report back to the engine. All of
/// them are contained at scan granularity (per frame or per element) and
/// never abort a whole pass.
#[derive(Debug, Error)]
pub enum DomError {
    /// A frame's document is not reachable from this context.
    #[error("frame access denied: {0}")]
    AccessDenied(String),

    /// The element left the tree between discovery and write.
    #[error("element is detached from its document")]
    Detached,

    /// The implementation refused the value write.
    #[error("value write rejected: {0}")]
    WriteRejected(String),
}

/// One candidate form input.
pub trait ElementHandle {
    /// Read a single attribute; `None` when absent or empty.
    fn attr(&self, key: Attr) -> Option<String>;

    /// Current render/editability state.
    fn state(&self) -> ElementState;

    /// Label text gathered from the element's surroundings.
    fn label_text(&self) -> LabelText;

    /// Raw serialized markup of the element, used as a last-resort
    /// matching signal.
    fn outer_html(&self) -> String;

    /// Current value, if any.
    fn value(&self) -> Option<String>;

    /// Write a value into the element.
    fn set_value(&self, value: &str) -> Result<(), DomError>;

    /// Dispatch one synthetic event. Implementations must configure the
    /// event to propagate up the document tree.
    fn dispatch(&self, event: SyntheticEvent) -> Result<(), DomError>;
}

/// One document: the main page or a reachable sub-document.
pub trait DocumentHandle {
    /// All `<input>` elements in document order. Type filtering is the
    /// engine's job, not the implementation's.
    fn inputs(&self) -> Vec<Box<dyn ElementHandle>>;

    /// All `<iframe>` elements in document order.
    fn frames(&self) -> Vec<Box<dyn FrameHandle>>;
}

/// One embedded frame.
pub trait FrameHandle {
    /// A short identifier for logs (src, id, or name).
    fn describe(&self) -> String;

    /// The frame's document, or [`DomError::AccessDenied`] when the
    /// cross-origin policy blocks it.
    fn document(&self) -> Result<Box<dyn DocumentHandle>, DomError>;
}

/// Compact element descriptor for logs and reports, e.g.
/// `input#email[name=user_email]`.
pub(crate) fn describe(element: &dyn ElementHandle) -> String {
    let mut out = String::from("input");
    if let Some(id) = element.attr(Attr::Id) {
        out.push('#');
        out.push_str(&id);
    }
    if let Some(name) = element.attr(Attr::Name) {
        out.push_str(&format!("[name={name}]"));
    }
    if let Some(ty) = element.attr(Attr::Type) {
        out.push_str(&format!("[type={ty}]"));
    }
    out
}
