//! Shopping list core
//!
//! The platform-independent part of the shopping list client: converting
//! amounts between measurement units and computing the visible, sorted
//! item list of a shopping list. Networking, storage and rendering live in
//! the host application.

pub mod api;
pub mod config;
pub mod core;
pub mod shared;

pub use crate::core::features::items;
pub use crate::core::features::list_view::{self, apply};
pub use crate::core::features::unit_converter::{
    self, abbreviate, convert, translate, units_in_group, Unit, UnitGroup,
};
pub use crate::shared::error::{AppError, AppResult};
