//! Timeline layout engine.
//!
//! Maps date-ranged [`WorkItem`]s onto a normalised horizontal axis spanning a
//! single [`ReferenceMonth`]. Each item yields a [`BarPlacement`] whose `left`
//! and `width` are fractions of the month's day count, ready to be used as
//! percentage-based layout.
//!
//! # Algorithm
//!
//! For a month with `total_days` days starting at `month_start`:
//!
//! ```text
//! start_offset = max(0, floor(item.start - month_start))        in days
//! end_offset   = min(total_days, ceil(item.end - month_start))  in days
//! left         = start_offset / total_days
//! width        = (end_offset - start_offset) / total_days
//! ```
//!
//! Dates are timezone-free calendar dates, so both differences are whole
//! numbers of days and the floor/ceil are exact.
//!
//! Items are never filtered: an item entirely outside the month yields a zero
//! or negative width, and so does an item whose end precedes its start.
//! Callers decide how to present such placements (see
//! [`BarPlacement::is_visible`]).
//!
//! # Example
//!
//! ```
//! # use chrono::NaiveDate;
//! # use planboard_core::{color::Color, timeline::{self, ReferenceMonth, WorkItem, WorkItemId}};
//! let month = ReferenceMonth::new(2023, 2).unwrap();
//! let item = WorkItem::new(
//!     WorkItemId::new(1),
//!     "Set up key metrics",
//!     NaiveDate::from_ymd_opt(2023, 2, 8).unwrap(),
//!     NaiveDate::from_ymd_opt(2023, 2, 15).unwrap(),
//!     Color::default(),
//! );
//!
//! let placements = timeline::layout_month(&month, &[item]);
//! assert_eq!(placements[0].left(), 0.25);
//! assert_eq!(placements[0].width(), 0.25);
//! ```

use std::{fmt, str::FromStr};

use chrono::{Datelike, Months, NaiveDate};
use log::trace;
use thiserror::Error;

use crate::color::Color;

/// Errors raised while constructing timeline inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimelineError {
    #[error("invalid reference month {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("cannot parse `{0}` as a month, expected YYYY-MM")]
    Parse(String),
}

/// The calendar month used as the timeline's layout basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReferenceMonth {
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl ReferenceMonth {
    /// Creates the reference month for `year` and `month` (1-based).
    ///
    /// # Errors
    ///
    /// Returns [`TimelineError::InvalidMonth`] if the month is outside `1..=12`
    /// or the month cannot be represented as calendar dates.
    pub fn new(year: i32, month: u32) -> Result<Self, TimelineError> {
        let invalid = || TimelineError::InvalidMonth { year, month };

        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let last_day = first_day
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(invalid)?;

        Ok(Self {
            first_day,
            last_day,
        })
    }

    /// Returns the month that contains `date`.
    pub fn containing(date: NaiveDate) -> Result<Self, TimelineError> {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// Returns the month number (1-based).
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// Returns the number of days in the month.
    pub fn day_count(&self) -> u32 {
        self.last_day.day()
    }

    /// Returns true if `date` falls within the month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day && date <= self.last_day
    }

    /// Returns the signed number of days from the first of the month to `date`.
    pub fn day_offset(&self, date: NaiveDate) -> i64 {
        date.signed_duration_since(self.first_day).num_days()
    }

    /// Returns every day of the month in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let last_day = self.last_day;
        self.first_day.iter_days().take_while(move |day| *day <= last_day)
    }
}

impl FromStr for ReferenceMonth {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || TimelineError::Parse(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(parse_err)?;
        let year = year.parse::<i32>().map_err(|_| parse_err())?;
        let month = month.parse::<u32>().map_err(|_| parse_err())?;
        Self::new(year, month)
    }
}

impl fmt::Display for ReferenceMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first_day.format("%B %Y"))
    }
}

/// Identifier of a work item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkItemId(u32);

impl WorkItemId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for WorkItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A date-ranged task rendered as a horizontal bar.
///
/// `start <= end` is expected but not enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkItem {
    id: WorkItemId,
    title: String,
    start: NaiveDate,
    end: NaiveDate,
    progress: u8,
    color: Color,
}

impl WorkItem {
    /// Creates a work item with zero progress.
    pub fn new(
        id: WorkItemId,
        title: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
        color: Color,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            start,
            end,
            progress: 0,
            color,
        }
    }

    /// Sets the completion percentage, clamped to 100.
    pub fn with_progress(mut self, progress: u8) -> Self {
        self.progress = progress.min(100);
        self
    }

    pub fn id(&self) -> WorkItemId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns the completion percentage (0 to 100).
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// Horizontal placement of one work item within a reference month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarPlacement {
    item: WorkItemId,
    start_day: i64,
    end_day: i64,
    left: f32,
    width: f32,
}

impl BarPlacement {
    /// Returns the work item this placement belongs to.
    pub fn item(&self) -> WorkItemId {
        self.item
    }

    /// Returns the clamped start offset in days.
    pub fn start_day(&self) -> i64 {
        self.start_day
    }

    /// Returns the clamped end offset in days.
    pub fn end_day(&self) -> i64 {
        self.end_day
    }

    /// Returns the left edge as a fraction of the month.
    pub fn left(&self) -> f32 {
        self.left
    }

    /// Returns the width as a fraction of the month. May be zero or negative.
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn left_percent(&self) -> f32 {
        self.left * 100.0
    }

    pub fn width_percent(&self) -> f32 {
        self.width * 100.0
    }

    /// Returns true if the bar has a positive width.
    pub fn is_visible(&self) -> bool {
        self.width > 0.0
    }
}

/// Computes the placement of a single item within `month`.
pub fn place(month: &ReferenceMonth, item: &WorkItem) -> BarPlacement {
    let total_days = i64::from(month.day_count());
    let start_day = month.day_offset(item.start()).max(0);
    let end_day = month.day_offset(item.end()).min(total_days);
    let duration = end_day - start_day;

    let total = total_days as f32;
    BarPlacement {
        item: item.id(),
        start_day,
        end_day,
        left: start_day as f32 / total,
        width: duration as f32 / total,
    }
}

/// Computes placements for every item, in input order.
pub fn layout_month(month: &ReferenceMonth, items: &[WorkItem]) -> Vec<BarPlacement> {
    items
        .iter()
        .map(|item| {
            let placement = place(month, item);
            trace!(
                item_id = item.id().get(),
                left = placement.left(),
                width = placement.width();
                "Work item placed"
            );
            placement
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn item(id: u32, start: NaiveDate, end: NaiveDate) -> WorkItem {
        WorkItem::new(WorkItemId::new(id), "item", start, end, Color::default())
    }

    #[test]
    fn test_reference_month_bounds() {
        let month = ReferenceMonth::new(2024, 2).unwrap();
        assert_eq!(month.first_day(), date(2024, 2, 1));
        assert_eq!(month.last_day(), date(2024, 2, 29));
        assert_eq!(month.day_count(), 29);

        let december = ReferenceMonth::new(2024, 12).unwrap();
        assert_eq!(december.last_day(), date(2024, 12, 31));
        assert_eq!(december.days().count(), 31);
    }

    #[test]
    fn test_reference_month_invalid() {
        assert_eq!(
            ReferenceMonth::new(2024, 13),
            Err(TimelineError::InvalidMonth {
                year: 2024,
                month: 13
            })
        );
        assert!(ReferenceMonth::new(2024, 0).is_err());
    }

    #[test]
    fn test_reference_month_parse_and_display() {
        let month: ReferenceMonth = "2024-02".parse().unwrap();
        assert_eq!(month.year(), 2024);
        assert_eq!(month.month(), 2);
        assert_eq!(month.to_string(), "February 2024");

        assert!(matches!(
            "February".parse::<ReferenceMonth>(),
            Err(TimelineError::Parse(_))
        ));
        assert!(matches!(
            "2024-14".parse::<ReferenceMonth>(),
            Err(TimelineError::InvalidMonth { .. })
        ));
    }

    #[test]
    fn test_containing() {
        let month = ReferenceMonth::containing(date(2024, 3, 15)).unwrap();
        assert!(month.contains(date(2024, 3, 1)));
        assert!(month.contains(date(2024, 3, 31)));
        assert!(!month.contains(date(2024, 4, 1)));
    }

    #[test]
    fn test_full_month_item() {
        let month = ReferenceMonth::new(2023, 2).unwrap();
        let placement = place(&month, &item(1, date(2023, 2, 1), date(2023, 3, 1)));

        assert_approx_eq!(f32, placement.left(), 0.0);
        assert_approx_eq!(f32, placement.width(), 1.0);
        assert_approx_eq!(f32, placement.width_percent(), 100.0);
    }

    #[test]
    fn test_week_in_four_week_month() {
        let month = ReferenceMonth::new(2023, 2).unwrap();
        let placement = place(&month, &item(1, date(2023, 2, 8), date(2023, 2, 15)));

        assert_eq!(placement.start_day(), 7);
        assert_eq!(placement.end_day(), 14);
        assert_approx_eq!(f32, placement.left(), 0.25);
        assert_approx_eq!(f32, placement.width(), 0.25);
    }

    #[test]
    fn test_start_before_month_clamps_left() {
        let month = ReferenceMonth::new(2024, 2).unwrap();
        let placement = place(&month, &item(1, date(2024, 1, 15), date(2024, 2, 28)));

        assert_eq!(placement.start_day(), 0);
        assert_approx_eq!(f32, placement.left(), 0.0);
        assert_approx_eq!(f32, placement.width(), 27.0 / 29.0);
    }

    #[test]
    fn test_end_after_month_clamps_to_day_count() {
        let month = ReferenceMonth::new(2024, 2).unwrap();
        let placement = place(&month, &item(1, date(2024, 2, 20), date(2024, 4, 15)));

        assert_eq!(placement.end_day(), 29);
        assert_approx_eq!(f32, placement.left() + placement.width(), 1.0);
    }

    #[test]
    fn test_item_after_month_has_negative_width() {
        let month = ReferenceMonth::new(2024, 2).unwrap();
        let placement = place(&month, &item(1, date(2024, 4, 1), date(2024, 4, 20)));

        assert!(placement.left() > 1.0);
        assert!(placement.width() < 0.0);
        assert!(!placement.is_visible());
    }

    #[test]
    fn test_item_before_month_has_non_positive_width() {
        let month = ReferenceMonth::new(2024, 3).unwrap();
        let placement = place(&month, &item(1, date(2024, 1, 15), date(2024, 2, 28)));

        assert_approx_eq!(f32, placement.left(), 0.0);
        assert!(placement.width() < 0.0);
    }

    #[test]
    fn test_reversed_range_is_kept() {
        let month = ReferenceMonth::new(2024, 2).unwrap();
        let placement = place(&month, &item(1, date(2024, 2, 20), date(2024, 2, 10)));
        assert!(placement.width() < 0.0);
    }

    #[test]
    fn test_layout_keeps_every_item_in_order() {
        let month = ReferenceMonth::new(2024, 2).unwrap();
        let items = vec![
            item(3, date(2024, 2, 10), date(2024, 2, 25)),
            item(1, date(2025, 1, 1), date(2025, 1, 2)),
            item(2, date(2024, 1, 1), date(2024, 12, 31)),
        ];

        let placements = layout_month(&month, &items);
        let ids: Vec<u32> = placements.iter().map(|p| p.item().get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_progress_is_clamped() {
        let item = item(1, date(2024, 2, 1), date(2024, 2, 2)).with_progress(250);
        assert_eq!(item.progress(), 100);
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn date_strategy() -> impl Strategy<Value = NaiveDate> {
        (-400i64..400).prop_map(|offset| {
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap() + chrono::Duration::days(offset)
        })
    }

    fn month_strategy() -> impl Strategy<Value = ReferenceMonth> {
        (2023i32..2026, 1u32..=12).prop_map(|(year, month)| {
            ReferenceMonth::new(year, month).expect("valid month")
        })
    }

    /// The bar never starts before the month and never ends after it.
    fn check_placement_within_month(
        month: ReferenceMonth,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<(), TestCaseError> {
        let item = WorkItem::new(WorkItemId::new(1), "p", start, end, Color::default());
        let placement = place(&month, &item);

        prop_assert!(placement.left() >= 0.0);
        prop_assert!(placement.left() + placement.width() <= 1.0 + 1e-5);
        Ok(())
    }

    /// An item covering the whole month always spans the full axis.
    fn check_covering_item_spans_axis(
        month: ReferenceMonth,
        before: i64,
        after: i64,
    ) -> Result<(), TestCaseError> {
        let start = month.first_day() - chrono::Duration::days(before);
        let end = month.last_day() + chrono::Duration::days(after + 1);
        let item = WorkItem::new(WorkItemId::new(1), "p", start, end, Color::default());
        let placement = place(&month, &item);

        prop_assert_eq!(placement.left(), 0.0);
        prop_assert_eq!(placement.width(), 1.0);
        Ok(())
    }

    proptest! {
        #[test]
        fn placement_within_month(
            month in month_strategy(),
            start in date_strategy(),
            end in date_strategy(),
        ) {
            check_placement_within_month(month, start, end)?;
        }

        #[test]
        fn covering_item_spans_axis(
            month in month_strategy(),
            before in 0i64..60,
            after in 0i64..60,
        ) {
            check_covering_item_spans_axis(month, before, after)?;
        }
    }
}
