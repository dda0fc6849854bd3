//! Editor tools.

use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

use super::ShapeKind;

/// The active creation mode of the diagram editor.
///
/// [`Tool::Select`] picks and drags existing elements; every other tool
/// places a single element of its kind on the next canvas click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Tool {
    #[default]
    Select,
    Shape(ShapeKind),
}

impl Tool {
    /// All tools, in palette order.
    pub const ALL: [Tool; 7] = [
        Tool::Select,
        Tool::Shape(ShapeKind::Rectangle),
        Tool::Shape(ShapeKind::Oval),
        Tool::Shape(ShapeKind::Diamond),
        Tool::Shape(ShapeKind::Arrow),
        Tool::Shape(ShapeKind::Text),
        Tool::Shape(ShapeKind::Actor),
    ];

    /// Returns the tool identifier (`select`, `rectangle`, ...).
    pub fn id(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Shape(kind) => kind.name(),
        }
    }

    /// Returns the kind of shape this tool creates, if any.
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Self::Select => None,
            Self::Shape(kind) => Some(kind),
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when a tool identifier is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tool `{0}`, valid tools: select, rectangle, oval, diamond, arrow, text, actor")]
pub struct ParseToolError(String);

impl FromStr for Tool {
    type Err = ParseToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.id() == s)
            .ok_or_else(|| ParseToolError(s.to_string()))
    }
}

impl TryFrom<String> for Tool {
    type Error = ParseToolError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
