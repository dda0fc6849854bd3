//! Sample content shown by a fresh dashboard.

use chrono::NaiveDate;

use planboard_core::{
    canvas::{Canvas, ShapeKind},
    color::Color,
    geometry::{Point, Size},
    leave::{Leave, LeaveStatus},
    timeline::{WorkItem, WorkItemId},
};

const COMPLETED: &str = "#10B981";
const IN_PROGRESS: &str = "#3B82F6";
const PLANNED: &str = "#60A5FA";

/// Returns the sample canvas: an actor, a process box and a decision oval.
pub fn canvas() -> Canvas {
    let mut canvas = Canvas::new();
    canvas.add_element(
        ShapeKind::Actor,
        Point::new(350.0, 300.0),
        Size::new(80.0, 100.0),
        "Actor",
    );
    canvas.add_element(
        ShapeKind::Rectangle,
        Point::new(550.0, 350.0),
        Size::new(120.0, 60.0),
        "Process",
    );
    canvas.add_element(
        ShapeKind::Oval,
        Point::new(750.0, 300.0),
        Size::new(150.0, 80.0),
        "Decision",
    );
    canvas
}

/// Returns the sample work items of early 2024.
pub fn work_items() -> Vec<WorkItem> {
    let rows: [(&str, (u32, u32), (u32, u32), u8, &str); 8] = [
        ("Business proposal plan", (1, 15), (2, 28), 100, COMPLETED),
        ("GTM marketing motion strategy", (1, 20), (3, 15), 100, COMPLETED),
        ("Set up key metrics", (2, 1), (3, 10), 100, COMPLETED),
        ("Business strategy and planning", (2, 10), (2, 25), 100, COMPLETED),
        ("Trip management frontend", (2, 20), (4, 15), 75, IN_PROGRESS),
        ("Announcement email", (3, 1), (4, 10), 60, IN_PROGRESS),
        ("Campaign email - tier 2", (3, 15), (5, 1), 40, PLANNED),
        ("License renewal for dashboard", (4, 1), (4, 20), 30, PLANNED),
    ];

    (1..)
        .zip(rows)
        .map(|(id, (title, start, end, progress, color))| {
            WorkItem::new(
                WorkItemId::new(id),
                title,
                date(2024, start.0, start.1),
                date(2024, end.0, end.1),
                Color::new(color).expect("seed colors are valid hex colors"),
            )
            .with_progress(progress)
        })
        .collect()
}

/// Returns the sample leave records of December 2024.
pub fn leaves() -> Vec<Leave> {
    let rows = [
        (
            "John Doe",
            (2024, 12, 20),
            (2024, 12, 22),
            "Christmas vacation",
            LeaveStatus::Approved,
        ),
        (
            "Jane Smith",
            (2024, 12, 25),
            (2024, 12, 25),
            "Christmas Day",
            LeaveStatus::Approved,
        ),
        (
            "Mike Johnson",
            (2024, 12, 31),
            (2025, 1, 2),
            "New Year break",
            LeaveStatus::Pending,
        ),
    ];

    (1..)
        .zip(rows)
        .map(|(id, (user, start, end, reason, status))| {
            Leave::new(
                id,
                user,
                date(start.0, start.1, start.2),
                date(end.0, end.1, end.2),
            )
            .with_reason(reason)
            .with_status(status)
        })
        .collect()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid calendar dates")
}

#[cfg(test)]
mod tests {
    use planboard_core::{leave, timeline::ReferenceMonth};

    use super::*;

    #[test]
    fn test_seed_canvas() {
        let canvas = canvas();
        let labels: Vec<&str> = canvas.elements().map(|e| e.text()).collect();
        assert_eq!(labels, ["Actor", "Process", "Decision"]);
        assert!(canvas.selected().is_none());
    }

    #[test]
    fn test_seed_work_items() {
        let items = work_items();
        assert_eq!(items.len(), 8);
        assert_eq!(items[4].title(), "Trip management frontend");
        assert_eq!(items[4].progress(), 75);
        assert_eq!(items[7].id(), WorkItemId::new(8));
    }

    #[test]
    fn test_seed_items_in_february() {
        let month = ReferenceMonth::new(2024, 2).unwrap();
        let placements = planboard_core::timeline::layout_month(&month, &work_items());
        let visible = placements.iter().filter(|p| p.is_visible()).count();
        // Everything starting before March overlaps February.
        assert_eq!(visible, 5);
    }

    #[test]
    fn test_seed_leaves() {
        let leaves = leaves();
        assert_eq!(leaves.len(), 3);

        let christmas = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        assert_eq!(leave::leaves_on(&leaves, christmas).len(), 1);
    }
}
