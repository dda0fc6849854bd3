//! The diagram canvas model.
//!
//! [`Canvas`] owns a collection of [`ShapeElement`]s together with the
//! interaction state of the editor: the active [`Tool`], the selected element,
//! the drag gesture and the inline [`TextEdit`] session. Pointer operations
//! take client-space coordinates; the canvas subtracts its origin to obtain
//! canvas-local coordinates.
//!
//! All operations are synchronous. Operations that address a missing element
//! are no-ops and report that through their return value.
//!
//! # Example
//!
//! ```
//! # use planboard_core::canvas::{Canvas, ShapeKind, Tool};
//! # use planboard_core::geometry::Point;
//! let mut canvas = Canvas::new();
//! canvas.select_tool(Tool::Shape(ShapeKind::Actor));
//!
//! let id = canvas.create_element_at(Point::new(400.0, 300.0)).unwrap();
//! let actor = canvas.element(id).unwrap();
//! assert_eq!(actor.size().width(), 80.0);
//! assert_eq!(actor.text(), "Actor");
//!
//! // Placement is single-shot
//! assert_eq!(canvas.active_tool(), Tool::Select);
//! ```

mod edit;
mod element;
mod tool;

pub use edit::TextEdit;
pub use element::{ElementId, ShapeElement, ShapeKind, ShapeTemplate};
pub use tool::{ParseToolError, Tool};

use indexmap::IndexMap;
use log::{debug, trace};

use crate::geometry::{Bounds, Point, Size};

/// The diagram canvas: elements in paint order plus editor interaction state.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    elements: IndexMap<ElementId, ShapeElement>,
    next_id: u64,
    origin: Point,
    tool: Tool,
    selected: Option<ElementId>,
    dragging: bool,
    drag_offset: Point,
    edit: TextEdit,
}

impl Canvas {
    /// Creates an empty canvas with the select tool active.
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Self::default()
        }
    }

    /// Sets the client-space position of the canvas's top-left corner.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Converts a client-space pointer position into canvas-local coordinates.
    pub fn to_local(&self, pointer: Point) -> Point {
        pointer.sub_point(self.origin)
    }

    /// Adds an element with explicit geometry, bypassing the tool table.
    ///
    /// Used to populate a canvas with existing content. The element is
    /// appended on top of the paint order.
    pub fn add_element(
        &mut self,
        kind: ShapeKind,
        position: Point,
        size: Size,
        text: impl Into<String>,
    ) -> ElementId {
        let id = self.allocate_id();
        let element = ShapeElement::new(id, kind, position, size, text);
        self.elements.insert(id, element);
        id
    }

    fn allocate_id(&mut self) -> ElementId {
        // `Default` leaves the counter at zero; ids start at one either way.
        self.next_id = self.next_id.max(1);
        let id = ElementId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Returns the elements in paint order (bottom to top).
    pub fn elements(&self) -> impl Iterator<Item = &ShapeElement> {
        self.elements.values()
    }

    pub fn element(&self, id: ElementId) -> Option<&ShapeElement> {
        self.elements.get(&id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the union of all element bounds, or `None` for an empty canvas.
    pub fn bounds(&self) -> Option<Bounds> {
        self.elements
            .values()
            .map(ShapeElement::bounds)
            .reduce(|acc, bounds| acc.merge(&bounds))
    }

    /// Returns the topmost element under a client-space pointer position.
    pub fn element_at(&self, pointer: Point) -> Option<ElementId> {
        let local = self.to_local(pointer);
        self.elements
            .values()
            .rev()
            .find(|element| element.bounds().contains(local))
            .map(ShapeElement::id)
    }

    pub fn active_tool(&self) -> Tool {
        self.tool
    }

    /// Sets the active creation tool.
    pub fn select_tool(&mut self, tool: Tool) {
        debug!(tool:% = tool; "Tool selected");
        self.tool = tool;
    }

    /// Places a new element centred on the pointer using the active tool.
    ///
    /// Returns `None` when the select tool is active. After a successful
    /// placement the tool reverts to [`Tool::Select`].
    pub fn create_element_at(&mut self, pointer: Point) -> Option<ElementId> {
        let kind = self.tool.shape_kind()?;
        let local = self.to_local(pointer);
        let template = kind.template();
        let position = local.sub_point(template.size().half());

        let id = self.allocate_id();
        self.elements
            .insert(id, ShapeElement::from_template(id, kind, position));
        self.tool = Tool::Select;

        debug!(
            element_id = id.get(),
            kind:% = kind,
            x = position.x(),
            y = position.y();
            "Element created"
        );
        Some(id)
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    /// Selects an existing element. Returns false if it does not exist.
    pub fn select(&mut self, id: ElementId) -> bool {
        if !self.elements.contains_key(&id) {
            return false;
        }
        self.selected = Some(id);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Returns the offset between the pointer and the dragged element's corner.
    pub fn drag_offset(&self) -> Point {
        self.drag_offset
    }

    /// Starts dragging an element grabbed at `pointer`.
    ///
    /// Selects the element and records the pointer-to-corner offset. Returns
    /// false, leaving all state untouched, if the element does not exist.
    pub fn begin_drag(&mut self, id: ElementId, pointer: Point) -> bool {
        let Some(element) = self.elements.get(&id) else {
            debug!(element_id = id.get(); "Drag ignored for missing element");
            return false;
        };

        self.drag_offset = self.to_local(pointer).sub_point(element.position());
        self.selected = Some(id);
        self.dragging = true;

        trace!(
            element_id = id.get(),
            offset_x = self.drag_offset.x(),
            offset_y = self.drag_offset.y();
            "Drag started"
        );
        true
    }

    /// Moves the dragged element so the grab point follows the pointer.
    ///
    /// Each axis is clamped to zero. Returns the new position, or `None` if no
    /// drag is in progress.
    pub fn update_drag(&mut self, pointer: Point) -> Option<Point> {
        if !self.dragging {
            return None;
        }
        let id = self.selected?;
        let position = self
            .to_local(pointer)
            .sub_point(self.drag_offset)
            .clamp_non_negative();

        let element = self.elements.get_mut(&id)?;
        element.set_position(position);

        trace!(element_id = id.get(), x = position.x(), y = position.y(); "Element moved");
        Some(position)
    }

    /// Ends the drag gesture. The selection is kept.
    pub fn end_drag(&mut self) {
        self.dragging = false;
        self.drag_offset = Point::default();
    }

    /// Replaces an element's label.
    ///
    /// `None` is the cancellation sentinel and leaves the label untouched;
    /// `Some("")` clears it. Returns true if the label was replaced.
    pub fn edit_text(&mut self, id: ElementId, text: Option<String>) -> bool {
        let Some(text) = text else {
            return false;
        };
        let Some(element) = self.elements.get_mut(&id) else {
            debug!(element_id = id.get(); "Text edit ignored for missing element");
            return false;
        };

        element.set_text(text);
        debug!(element_id = id.get(); "Element text updated");
        true
    }

    /// Removes the selected element and clears the selection.
    ///
    /// Returns the removed element, or `None` if nothing was selected.
    pub fn delete_selected(&mut self) -> Option<ShapeElement> {
        let id = self.selected.take()?;
        let removed = self.elements.shift_remove(&id)?;

        self.end_drag();
        if self.edit.target() == Some(id) {
            self.edit = TextEdit::Idle;
        }

        debug!(element_id = id.get(), kind:% = removed.kind(); "Element deleted");
        Some(removed)
    }

    /// Returns the text-edit state.
    pub fn text_edit(&self) -> &TextEdit {
        &self.edit
    }

    /// Opens an edit session on an element's label, seeding the draft with
    /// the current text.
    ///
    /// Refused for missing elements and for kinds without a label. An open
    /// session on another element is replaced without committing it.
    pub fn begin_text_edit(&mut self, id: ElementId) -> bool {
        let Some(element) = self.elements.get(&id) else {
            return false;
        };
        if !element.kind().has_label() {
            debug!(element_id = id.get(); "Element kind has no editable label");
            return false;
        }

        self.edit = TextEdit::Editing {
            target: id,
            draft: element.text().to_string(),
        };
        true
    }

    /// Replaces the draft of the open edit session. Returns false when idle.
    pub fn set_draft(&mut self, text: impl Into<String>) -> bool {
        match &mut self.edit {
            TextEdit::Idle => false,
            TextEdit::Editing { draft, .. } => {
                *draft = text.into();
                true
            }
        }
    }

    /// Commits the draft to the target's label and closes the session.
    pub fn commit_text_edit(&mut self) -> Option<ElementId> {
        let (target, draft) = self.edit.take()?;
        self.edit_text(target, Some(draft)).then_some(target)
    }

    /// Closes the session without touching the label.
    pub fn cancel_text_edit(&mut self) -> Option<ElementId> {
        let (target, _) = self.edit.take()?;
        self.edit_text(target, None);
        Some(target)
    }
}
