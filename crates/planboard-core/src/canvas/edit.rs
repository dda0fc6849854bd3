//! Inline text-edit state.
//!
//! Editing a label is an explicit state transition rather than a blocking
//! prompt:
//!
//! ```text
//!   Idle ──begin──► Editing { target, draft } ──commit──► Idle (label = draft)
//!                                            └─cancel──► Idle (label unchanged)
//! ```

use super::ElementId;

/// The text-edit state of a canvas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TextEdit {
    #[default]
    Idle,
    Editing { target: ElementId, draft: String },
}

impl TextEdit {
    /// Returns true while an edit session is open.
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    /// Returns the element being edited, if any.
    pub fn target(&self) -> Option<ElementId> {
        match self {
            Self::Idle => None,
            Self::Editing { target, .. } => Some(*target),
        }
    }

    /// Returns the current draft, if any.
    pub fn draft(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Editing { draft, .. } => Some(draft),
        }
    }

    /// Closes the session, yielding its target and draft.
    pub(super) fn take(&mut self) -> Option<(ElementId, String)> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Editing { target, draft } => Some((target, draft)),
        }
    }
}
