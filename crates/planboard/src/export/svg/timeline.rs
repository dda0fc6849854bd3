//! SVG rendering for the month timeline.
//!
//! The document is a title column followed by a track spanning the whole
//! reference month. A header row carries the month name and day numbers;
//! each work item gets one row below it, in input order.

use chrono::{Datelike, NaiveDate};
use log::{debug, info};
use svg::node::element as svg_element;

use planboard_core::{
    apply_stroke,
    draw::{LayeredOutput, RenderLayer},
    geometry::Size,
    timeline::{self, BarPlacement, ReferenceMonth, WorkItem},
};

use super::Svg;

const BACKGROUND: &str = "white";
const HEADER_FILL: &str = "#F9FAFB";
const RULE_COLOR: &str = "#E5E7EB";
const TITLE_COLOR: &str = "#111827";
const MUTED_COLOR: &str = "#6B7280";
pub(super) const TODAY_COLOR: &str = "#EF4444";

const COLUMN_PADDING: f32 = 24.0;
const BAR_HEIGHT: f32 = 24.0;

impl Svg {
    /// Renders the timeline of `items` for `month`.
    ///
    /// Bars are drawn at `left × track_width` with width
    /// `width × track_width`; non-positive widths are drawn zero-wide.
    pub fn render_timeline(
        &self,
        month: &ReferenceMonth,
        items: &[WorkItem],
        today: Option<NaiveDate>,
    ) -> svg::Document {
        let placements = timeline::layout_month(month, items);
        let size = self.timeline_size(items.len());
        info!(
            month:% = month,
            items = items.len(),
            visible = placements.iter().filter(|p| p.is_visible()).count();
            "Rendering timeline"
        );

        let mut output = LayeredOutput::new();
        output.add_to_layer(
            RenderLayer::Background,
            Box::new(Self::full_rect(size).set("fill", BACKGROUND)),
        );
        output.add_to_layer(
            RenderLayer::Background,
            Box::new(
                svg_element::Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", size.width())
                    .set("height", self.header_height())
                    .set("fill", HEADER_FILL),
            ),
        );

        output.merge(self.render_header(month, size));
        for (row, (item, placement)) in items.iter().zip(&placements).enumerate() {
            output.merge(self.render_row(row, item, placement, size));
        }

        if let Some(today) = today {
            if month.contains(today) {
                output.merge(self.render_today_marker(month, today, size));
            } else {
                debug!(today:% = today, month:% = month; "Today is outside the month, no marker");
            }
        }

        output
            .render()
            .into_iter()
            .fold(Self::document(size), |doc, group| doc.add(group))
    }

    fn header_height(&self) -> f32 {
        self.timeline.row_height() + 20.0
    }

    fn timeline_size(&self, rows: usize) -> Size {
        Size::new(
            self.timeline.label_width() + self.timeline.track_width(),
            self.header_height() + rows as f32 * self.timeline.row_height(),
        )
    }

    /// Maps a fraction of the month to an x coordinate on the track.
    fn track_x(&self, fraction: f32) -> f32 {
        self.timeline.label_width() + fraction * self.timeline.track_width()
    }

    fn render_header(&self, month: &ReferenceMonth, size: Size) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let header = self.header_height();
        let total = month.day_count() as f32;
        let day_width = self.timeline.track_width() / total;

        output.add_to_layer(
            RenderLayer::Text,
            Box::new(
                text("Task", COLUMN_PADDING, header / 2.0, 14.0, TITLE_COLOR)
                    .set("font-weight", 500),
            ),
        );
        output.add_to_layer(
            RenderLayer::Text,
            Box::new(
                text(
                    &month.to_string(),
                    self.track_x(0.5),
                    16.0,
                    14.0,
                    TITLE_COLOR,
                )
                .set("text-anchor", "middle")
                .set("font-weight", 500),
            ),
        );

        for (index, day) in month.days().enumerate() {
            let x = self.track_x(index as f32 / total);
            output.add_to_layer(RenderLayer::Grid, Box::new(rule(x, 24.0, x, size.height())));
            output.add_to_layer(
                RenderLayer::Text,
                Box::new(
                    text(
                        &day.day().to_string(),
                        x + day_width / 2.0,
                        header - 10.0,
                        10.0,
                        MUTED_COLOR,
                    )
                    .set("text-anchor", "middle"),
                ),
            );
        }

        let label_edge = self.timeline.label_width();
        output.add_to_layer(
            RenderLayer::Grid,
            Box::new(rule(label_edge, 0.0, label_edge, size.height())),
        );
        output.add_to_layer(
            RenderLayer::Grid,
            Box::new(rule(0.0, header, size.width(), header)),
        );

        output
    }

    fn render_row(
        &self,
        row: usize,
        item: &WorkItem,
        placement: &BarPlacement,
        size: Size,
    ) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let row_height = self.timeline.row_height();
        let top = self.header_height() + row as f32 * row_height;
        let middle = top + row_height / 2.0;
        let color = item.color().to_string();

        output.add_to_layer(
            RenderLayer::Grid,
            Box::new(rule(0.0, top + row_height, size.width(), top + row_height)),
        );

        let dot = svg_element::Circle::new()
            .set("cx", COLUMN_PADDING + 4.0)
            .set("cy", middle)
            .set("r", 4)
            .set("fill", color.as_str());
        output.add_to_layer(RenderLayer::Content, Box::new(dot));
        output.add_to_layer(
            RenderLayer::Text,
            Box::new(text(
                item.title(),
                COLUMN_PADDING + 16.0,
                middle - 6.0,
                13.0,
                TITLE_COLOR,
            )),
        );
        output.add_to_layer(
            RenderLayer::Text,
            Box::new(text(
                &format!("GTM-{:02}", item.id().get()),
                COLUMN_PADDING + 16.0,
                middle + 9.0,
                10.0,
                MUTED_COLOR,
            )),
        );

        let bar_height = BAR_HEIGHT.min(row_height - 4.0).max(0.0);
        let x = self.track_x(placement.left());
        let width = placement.width().max(0.0) * self.timeline.track_width();
        let bar = svg_element::Rectangle::new()
            .set("class", "bar")
            .set("data-item", item.id().get())
            .set("x", x)
            .set("y", middle - bar_height / 2.0)
            .set("width", width)
            .set("height", bar_height)
            .set("rx", bar_height / 2.0)
            .set("fill", color.as_str());
        output.add_to_layer(RenderLayer::Content, Box::new(bar));
        output.add_to_layer(
            RenderLayer::Text,
            Box::new(
                text(&format!("{}%", item.progress()), x + 8.0, middle, 12.0, "white")
                    .set("font-weight", 500),
            ),
        );

        debug!(item_id = item.id().get(), x = x, width = width; "Timeline bar drawn");

        output
    }

    fn render_today_marker(
        &self,
        month: &ReferenceMonth,
        today: NaiveDate,
        size: Size,
    ) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let fraction = month.day_offset(today) as f32 / month.day_count() as f32;
        let x = self.track_x(fraction);

        let line = svg_element::Line::new()
            .set("class", "today")
            .set("x1", x)
            .set("y1", 0)
            .set("x2", x)
            .set("y2", size.height());
        output.add_to_layer(
            RenderLayer::Selection,
            Box::new(apply_stroke!(line, &self.today)),
        );
        output.add_to_layer(
            RenderLayer::Text,
            Box::new(
                text("Today", x, 10.0, 10.0, TODAY_COLOR)
                    .set("text-anchor", "middle")
                    .set("font-weight", 500),
            ),
        );

        output
    }
}

fn text(content: &str, x: f32, y: f32, font_size: f32, fill: &str) -> svg_element::Text {
    svg_element::Text::new(content)
        .set("x", x)
        .set("y", y)
        .set("dominant-baseline", "middle")
        .set("font-family", "sans-serif")
        .set("font-size", font_size)
        .set("fill", fill)
}

fn rule(x1: f32, y1: f32, x2: f32, y2: f32) -> svg_element::Line {
    svg_element::Line::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2)
        .set("stroke", RULE_COLOR)
        .set("stroke-width", 1)
}
