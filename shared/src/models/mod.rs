//! Domain models for the Water Quality Advisor Platform

mod advisory;
mod forecast;
mod panel;

pub use advisory::*;
pub use forecast::*;
pub use panel::*;
