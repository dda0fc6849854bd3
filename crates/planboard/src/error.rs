//! Error types for Planboard operations.
//!
//! This module provides the main error type [`PlanboardError`] which wraps
//! the error conditions of the canvas, timeline, session and export layers.

use std::{io, ops::Range};

use thiserror::Error;

use planboard_core::timeline::TimelineError;

use crate::session::SessionError;

/// The main error type for Planboard operations.
///
/// # Diagnostic Variants
///
/// The `Script` and `Plan` variants carry the TOML source they were parsed
/// from together with the byte span of the offending value, when the
/// parser reported one. This is enough for rich, snippet-based reporting.
#[derive(Debug, Error)]
pub enum PlanboardError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid gesture script: {message}")]
    Script {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    #[error("Invalid plan file: {message}")]
    Plan {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    #[error("Timeline error: {0}")]
    Timeline(#[from] TimelineError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for PlanboardError {
    fn from(error: crate::export::Error) -> Self {
        match error {
            crate::export::Error::Style(message) => Self::Config(message),
            other => Self::Export(Box::new(other)),
        }
    }
}

impl PlanboardError {
    /// Create a `Script` error from a TOML deserialization failure.
    pub fn new_script_error(err: &toml::de::Error, src: impl Into<String>) -> Self {
        Self::Script {
            message: err.message().to_string(),
            span: err.span(),
            src: src.into(),
        }
    }

    /// Create a `Plan` error from a TOML deserialization failure.
    pub fn new_plan_error(err: &toml::de::Error, src: impl Into<String>) -> Self {
        Self::Plan {
            message: err.message().to_string(),
            span: err.span(),
            src: src.into(),
        }
    }

    /// Returns the source text and span for errors that point into a file.
    pub fn source_span(&self) -> Option<(&str, Option<Range<usize>>)> {
        match self {
            Self::Script { span, src, .. } | Self::Plan { span, src, .. } => {
                Some((src.as_str(), span.clone()))
            }
            _ => None,
        }
    }
}
