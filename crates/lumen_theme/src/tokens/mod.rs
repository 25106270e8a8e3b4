//! Token tables that make up a [`Theme`](crate::Theme)
//!
//! Every table is complete: fields are plain values, never `Option`, so a
//! theme cannot be missing a token. Component presets are not authored
//! directly; they are derived from spacing, radius and typography.

mod color;
mod components;
mod opacity;
mod radius;
mod spacing;
mod typography;

pub use color::*;
pub use components::*;
pub use opacity::*;
pub use radius::*;
pub use spacing::*;
pub use typography::*;
