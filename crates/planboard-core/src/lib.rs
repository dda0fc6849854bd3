//! Planboard Core Types and Definitions
//!
//! This crate provides the model layer of the Planboard dashboard. It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Canvas**: The diagram canvas model and its pointer interactions ([`canvas`] module)
//! - **Timeline**: Month-based layout of date-ranged work items ([`timeline`] module)
//! - **Leave**: Leave records and calendar-day queries ([`leave`] module)
//! - **Draw**: Visual definitions for canvas elements ([`draw`] module)

pub mod canvas;
pub mod color;
pub mod draw;
pub mod geometry;
pub mod leave;
pub mod timeline;
