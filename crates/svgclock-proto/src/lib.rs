//! Plain data types shared by the svgclock crates: time of day, theme
//! palette, and the on-disk configuration schema.

pub mod config;
