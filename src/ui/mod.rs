//! Terminal output for the `sprout` binary

pub mod context;
pub mod error;
pub mod json;
pub mod live_region;
pub mod primitives;
pub mod status;
pub mod terminal;
pub mod theme;
pub mod views;
