//! Plan files.
//!
//! A plan file lists timeline work items and, optionally, leave records:
//!
//! ```toml
//! [[item]]
//! title = "Trip management frontend"
//! start = "2024-02-20"
//! end = "2024-04-15"
//! progress = 75
//! color = "#3B82F6"
//!
//! [[leave]]
//! user = "John Doe"
//! start = "2024-12-20"
//! end = "2024-12-22"
//! reason = "Christmas vacation"
//! status = "approved"
//! ```
//!
//! Dates are `YYYY-MM-DD` strings. Ids are assigned in file order starting
//! at 1.

use chrono::NaiveDate;
use log::debug;
use serde::Deserialize;
use toml::Spanned;

use planboard_core::{
    color::Color,
    leave::{Leave, LeaveStatus},
    timeline::{WorkItem, WorkItemId},
};

use crate::PlanboardError;

/// A work item as written in a plan file.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkItemRecord {
    title: String,
    start: NaiveDate,
    end: NaiveDate,
    #[serde(default)]
    progress: u32,
    color: Spanned<String>,
}

/// A leave record as written in a plan file.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveRecord {
    user: String,
    start: NaiveDate,
    end: NaiveDate,
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    status: LeaveStatus,
}

/// Parsed contents of a plan file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanFile {
    #[serde(default, rename = "item")]
    items: Vec<WorkItemRecord>,

    #[serde(default, rename = "leave")]
    leaves: Vec<LeaveRecord>,

    #[serde(skip)]
    source: String,
}

impl PlanFile {
    /// Parses a plan file from TOML source.
    ///
    /// # Errors
    ///
    /// Returns [`PlanboardError::Plan`] carrying the source and the span of
    /// the offending value.
    pub fn from_toml(source: &str) -> Result<Self, PlanboardError> {
        let mut plan: Self =
            toml::from_str(source).map_err(|err| PlanboardError::new_plan_error(&err, source))?;
        plan.source = source.to_string();
        Ok(plan)
    }

    pub fn item_records(&self) -> &[WorkItemRecord] {
        &self.items
    }

    pub fn leave_records(&self) -> &[LeaveRecord] {
        &self.leaves
    }

    /// Converts the item records into work items.
    ///
    /// Progress above 100 is clamped.
    ///
    /// # Errors
    ///
    /// Returns [`PlanboardError::Plan`] naming the item whose color cannot
    /// be parsed, spanning the color value in the plan source.
    pub fn work_items(&self) -> Result<Vec<WorkItem>, PlanboardError> {
        let items = (1..)
            .zip(&self.items)
            .map(|(id, record)| {
                let color = Color::new(record.color.get_ref()).map_err(|err| {
                    PlanboardError::Plan {
                        message: format!("item `{}`: {err}", record.title),
                        span: Some(record.color.span()),
                        src: self.source.clone(),
                    }
                })?;
                let progress = u8::try_from(record.progress.min(100)).unwrap_or(100);
                Ok(WorkItem::new(
                    WorkItemId::new(id),
                    record.title.as_str(),
                    record.start,
                    record.end,
                    color,
                )
                .with_progress(progress))
            })
            .collect::<Result<Vec<_>, PlanboardError>>()?;

        debug!(items = items.len(); "Plan work items loaded");
        Ok(items)
    }

    /// Converts the leave records into leaves.
    pub fn leaves(&self) -> Vec<Leave> {
        (1..)
            .zip(&self.leaves)
            .map(|(id, record)| {
                let leave = Leave::new(id, record.user.as_str(), record.start, record.end)
                    .with_status(record.status);
                match &record.reason {
                    Some(reason) => leave.with_reason(reason.as_str()),
                    None => leave,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN: &str = r##"
        [[item]]
        title = "Announcement email"
        start = "2024-03-01"
        end = "2024-04-10"
        progress = 60
        color = "#3B82F6"

        [[item]]
        title = "Overachiever"
        start = "2024-03-01"
        end = "2024-03-02"
        progress = 180
        color = "green"

        [[leave]]
        user = "Mike Johnson"
        start = "2024-12-31"
        end = "2025-01-02"
        reason = "New Year break"
    "##;

    #[test]
    fn test_work_items_get_sequential_ids() {
        let plan = PlanFile::from_toml(PLAN).unwrap();
        let items = plan.work_items().unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id(), WorkItemId::new(1));
        assert_eq!(items[1].id(), WorkItemId::new(2));
        assert_eq!(items[0].progress(), 60);
        assert_eq!(items[1].progress(), 100);
    }

    #[test]
    fn test_leave_defaults_to_pending() {
        let plan = PlanFile::from_toml(PLAN).unwrap();
        let leaves = plan.leaves();

        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].status(), LeaveStatus::Pending);
        assert_eq!(leaves[0].reason(), Some("New Year break"));
    }

    #[test]
    fn test_invalid_color_names_item() {
        let plan = PlanFile::from_toml(
            r#"
            [[item]]
            title = "Broken"
            start = "2024-03-01"
            end = "2024-03-02"
            color = "blurple"
            "#,
        )
        .unwrap();

        let err = plan.work_items().unwrap_err();
        assert!(err.to_string().contains("Broken"));

        let (src, span) = err.source_span().unwrap();
        assert!(src[span.unwrap()].contains("blurple"));
    }

    #[test]
    fn test_progress_beyond_byte_range_is_clamped() {
        let plan = PlanFile::from_toml(
            r##"
            [[item]]
            title = "Stretch goal"
            start = "2024-03-01"
            end = "2024-03-02"
            progress = 300
            color = "#10B981"
            "##,
        )
        .unwrap();

        let items = plan.work_items().unwrap();
        assert_eq!(items[0].progress(), 100);
    }

    #[test]
    fn test_bad_date_is_spanned() {
        let source = r#"
            [[item]]
            title = "Broken"
            start = "next tuesday"
            end = "2024-03-02"
            color = "red"
        "#;

        match PlanFile::from_toml(source).unwrap_err() {
            PlanboardError::Plan { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
