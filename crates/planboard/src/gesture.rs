//! Gesture scripts.
//!
//! A [`Script`] is a recorded sequence of pointer and keyboard gestures that
//! is replayed onto a [`Canvas`]. Scripts are written in TOML:
//!
//! ```toml
//! origin = { x = 16, y = 64 }
//!
//! [[gesture]]
//! action = "tool"
//! tool = "diamond"
//!
//! [[gesture]]
//! action = "click"
//! x = 316
//! y = 264
//!
//! [[gesture]]
//! action = "press"
//! x = 320
//! y = 270
//!
//! [[gesture]]
//! action = "move"
//! x = 420
//! y = 300
//!
//! [[gesture]]
//! action = "release"
//! ```
//!
//! Pointer coordinates are client-space; the canvas converts them with its
//! origin. Gestures that address a missing element, or arrive in a state
//! where they do nothing, are skipped and counted, never reported as
//! errors.

use log::{debug, info, trace};
use serde::Deserialize;

use planboard_core::{
    canvas::{Canvas, ElementId, Tool},
    geometry::Point,
};

use crate::PlanboardError;

/// A client-space pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ScriptPoint {
    x: f32,
    y: f32,
}

impl From<ScriptPoint> for Point {
    fn from(point: ScriptPoint) -> Self {
        Point::new(point.x, point.y)
    }
}

/// One recorded input gesture.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Gesture {
    /// Pick a tool from the palette.
    Tool { tool: Tool },
    /// Click on empty canvas space.
    Click { x: f32, y: f32 },
    /// Press the pointer on an element, starting a drag.
    ///
    /// Without an explicit `element` the topmost element under the pointer
    /// is pressed.
    Press {
        #[serde(default)]
        element: Option<ElementId>,
        x: f32,
        y: f32,
    },
    /// Move the pointer.
    Move { x: f32, y: f32 },
    /// Release the pointer.
    Release,
    /// Double-click an element to start editing its label.
    ///
    /// Defaults to the selected element.
    BeginEdit {
        #[serde(default)]
        element: Option<ElementId>,
    },
    /// Type into the open editor.
    Draft { text: String },
    /// Confirm the open editor.
    Commit,
    /// Dismiss the open editor.
    Cancel,
    /// Answer an edit prompt directly; a missing `text` is a cancelled
    /// prompt. Defaults to the selected element.
    Edit {
        #[serde(default)]
        element: Option<ElementId>,
        #[serde(default)]
        text: Option<String>,
    },
    /// Press the delete button.
    Delete,
}

/// What a replay changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    created: Vec<ElementId>,
    moves: usize,
    edits: usize,
    deletions: usize,
    skipped: usize,
}

impl ReplaySummary {
    /// Returns the ids of created elements, in creation order.
    pub fn created(&self) -> &[ElementId] {
        &self.created
    }

    /// Returns the number of pointer moves that relocated an element.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Returns the number of labels that changed.
    pub fn edits(&self) -> usize {
        self.edits
    }

    pub fn deletions(&self) -> usize {
        self.deletions
    }

    /// Returns the number of gestures that had no effect.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

/// A gesture script: an optional canvas origin and the gestures to replay.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Script {
    #[serde(default)]
    origin: Option<ScriptPoint>,

    #[serde(default, rename = "gesture")]
    gestures: Vec<Gesture>,
}

impl Script {
    pub fn new(gestures: Vec<Gesture>) -> Self {
        Self {
            origin: None,
            gestures,
        }
    }

    /// Sets the client-space position of the canvas's top-left corner.
    pub fn with_origin(mut self, x: f32, y: f32) -> Self {
        self.origin = Some(ScriptPoint { x, y });
        self
    }

    /// Parses a script from TOML source.
    ///
    /// # Errors
    ///
    /// Returns [`PlanboardError::Script`] carrying the source and the span
    /// of the offending value.
    pub fn from_toml(source: &str) -> Result<Self, PlanboardError> {
        toml::from_str(source).map_err(|err| PlanboardError::new_script_error(&err, source))
    }

    pub fn gestures(&self) -> &[Gesture] {
        &self.gestures
    }

    /// Replays every gesture onto `canvas`, in order.
    pub fn replay(&self, canvas: &mut Canvas) -> ReplaySummary {
        info!(gestures = self.gestures.len(); "Replaying gesture script");

        if let Some(origin) = self.origin {
            canvas.set_origin(origin.into());
        }

        let mut summary = ReplaySummary::default();
        for (index, gesture) in self.gestures.iter().enumerate() {
            trace!(index, gesture:?; "Applying gesture");
            if !apply(canvas, gesture, &mut summary) {
                debug!(index, gesture:?; "Gesture had no effect, skipped");
                summary.skipped += 1;
            }
        }

        info!(
            created = summary.created.len(),
            moves = summary.moves,
            edits = summary.edits,
            deletions = summary.deletions,
            skipped = summary.skipped;
            "Gesture script replayed"
        );
        summary
    }
}

/// Applies one gesture, returning whether it had any effect.
fn apply(canvas: &mut Canvas, gesture: &Gesture, summary: &mut ReplaySummary) -> bool {
    match gesture {
        Gesture::Tool { tool } => {
            canvas.select_tool(*tool);
            true
        }
        Gesture::Click { x, y } => match canvas.create_element_at(Point::new(*x, *y)) {
            Some(id) => {
                summary.created.push(id);
                true
            }
            None => false,
        },
        Gesture::Press { element, x, y } => {
            let pointer = Point::new(*x, *y);
            element
                .or_else(|| canvas.element_at(pointer))
                .is_some_and(|id| canvas.begin_drag(id, pointer))
        }
        Gesture::Move { x, y } => {
            let moved = canvas.update_drag(Point::new(*x, *y)).is_some();
            if moved {
                summary.moves += 1;
            }
            moved
        }
        Gesture::Release => {
            let was_dragging = canvas.is_dragging();
            canvas.end_drag();
            was_dragging
        }
        Gesture::BeginEdit { element } => element
            .or(canvas.selected())
            .is_some_and(|id| canvas.begin_text_edit(id)),
        Gesture::Draft { text } => canvas.set_draft(text.as_str()),
        Gesture::Commit => {
            let Some(id) = canvas.text_edit().target() else {
                return false;
            };
            let before = canvas.element(id).map(|e| e.text().to_string());
            canvas.commit_text_edit();
            let changed = canvas.element(id).map(|e| e.text().to_string()) != before;
            if changed {
                summary.edits += 1;
            }
            true
        }
        Gesture::Cancel => canvas.cancel_text_edit().is_some(),
        Gesture::Edit { element, text } => {
            let Some(id) = element.or(canvas.selected()) else {
                return false;
            };
            if canvas.element(id).is_none() {
                return false;
            }
            if canvas.edit_text(id, text.clone()) {
                summary.edits += 1;
            }
            true
        }
        Gesture::Delete => {
            let deleted = canvas.delete_selected().is_some();
            if deleted {
                summary.deletions += 1;
            }
            deleted
        }
    }
}

#[cfg(test)]
mod tests {
    use planboard_core::canvas::ShapeKind;

    use super::*;

    const CREATE_AND_DRAG: &str = r#"
        origin = { x = 10, y = 20 }

        [[gesture]]
        action = "tool"
        tool = "rectangle"

        [[gesture]]
        action = "click"
        x = 110
        y = 95

        [[gesture]]
        action = "press"
        x = 60
        y = 75

        [[gesture]]
        action = "move"
        x = 15
        y = 22

        [[gesture]]
        action = "release"
    "#;

    #[test]
    fn test_parse_and_replay_drag() {
        let script = Script::from_toml(CREATE_AND_DRAG).unwrap();
        assert_eq!(script.gestures().len(), 5);

        let mut canvas = Canvas::new();
        let summary = script.replay(&mut canvas);

        assert_eq!(summary.created().len(), 1);
        assert_eq!(summary.moves(), 1);
        assert_eq!(summary.skipped(), 0);

        let element = canvas.element(summary.created()[0]).unwrap();
        assert_eq!(element.kind(), ShapeKind::Rectangle);
        // Created centred on local (100, 75) at (50, 50), pressed at local
        // (50, 55) with offset (0, 5); the move to local (5, 2) clamps y.
        assert_eq!(element.position(), Point::new(5.0, 0.0));
        assert!(!canvas.is_dragging());
        assert_eq!(canvas.active_tool(), Tool::Select);
    }

    #[test]
    fn test_edit_session_gestures() {
        let mut canvas = Canvas::new();
        let id = canvas.add_element(
            ShapeKind::Oval,
            Point::new(0.0, 0.0),
            planboard_core::geometry::Size::new(100.0, 50.0),
            "Label",
        );

        let script = Script::new(vec![
            Gesture::BeginEdit { element: Some(id) },
            Gesture::Draft {
                text: "Decision".to_string(),
            },
            Gesture::Commit,
            Gesture::BeginEdit { element: Some(id) },
            Gesture::Draft {
                text: "ignored".to_string(),
            },
            Gesture::Cancel,
        ]);
        let summary = script.replay(&mut canvas);

        assert_eq!(summary.edits(), 1);
        assert_eq!(canvas.element(id).unwrap().text(), "Decision");
    }

    #[test]
    fn test_missing_elements_are_skipped() {
        let mut canvas = Canvas::new();
        let script = Script::new(vec![
            Gesture::Press {
                element: Some(ElementId::new(42)),
                x: 0.0,
                y: 0.0,
            },
            Gesture::Move { x: 5.0, y: 5.0 },
            Gesture::Edit {
                element: Some(ElementId::new(42)),
                text: Some("x".to_string()),
            },
            Gesture::Delete,
        ]);

        let summary = script.replay(&mut canvas);
        assert_eq!(summary.skipped(), 4);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_edit_without_text_is_cancellation() {
        let mut canvas = Canvas::new();
        let id = canvas.add_element(
            ShapeKind::Text,
            Point::new(0.0, 0.0),
            planboard_core::geometry::Size::new(100.0, 50.0),
            "Text",
        );
        canvas.select(id);

        let script = Script::from_toml(
            r#"
            [[gesture]]
            action = "edit"
            "#,
        )
        .unwrap();
        let summary = script.replay(&mut canvas);

        assert_eq!(summary.edits(), 0);
        assert_eq!(canvas.element(id).unwrap().text(), "Text");
    }

    #[test]
    fn test_unknown_tool_reports_span() {
        let source = r#"
            [[gesture]]
            action = "tool"
            tool = "hexagon"
        "#;
        let err = Script::from_toml(source).unwrap_err();
        match err {
            PlanboardError::Script { message, src, .. } => {
                assert!(message.contains("hexagon"));
                assert_eq!(src, source);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
