//! Synthetic change notification sequence.
//!
//! Writing `value` directly does not wake the JavaScript frameworks most
//! job boards are built on; they learn about edits from events. After each
//! write the engine therefore fires, in order:
//!
//! ```text
//! set_value ──► input ──► change ──► blur
//! ```
//!
//! All three must bubble (the [`ElementHandle`] contract) so delegated
//! listeners on ancestors observe them. A framework that reacts to `input`
//! but validates on `change`/`blur` sees the same sequence a typing user
//! produces.

use crate::dom::{DomError, ElementHandle, SyntheticEvent};

/// The full post-write sequence, in firing order.
pub(crate) const CHANGE_SEQUENCE: [SyntheticEvent; 3] =
    [SyntheticEvent::Input, SyntheticEvent::Change, SyntheticEvent::Blur];

/// Fire the post-write notifications. Stops at the first dispatch failure;
/// the caller contains the error at element granularity.
pub(crate) fn notify_change(element: &dyn ElementHandle) -> Result<(), DomError> {
    for event in CHANGE_SEQUENCE {
        element.dispatch(event)?;
    }
    Ok(())
}
