//! Entry points for the host application bridge
//!
//! - `commands`: conversion, unit listing, quantity parsing and list sorting

pub mod commands;
