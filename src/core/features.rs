//! Pure feature logic
//!
//! Each feature is stateless: functions take everything they need as
//! arguments and never perform I/O.

pub mod unit_converter;
pub mod list_view;
pub mod items;
