//! HTTP handlers for the Water Quality Advisor API

mod advisory;
mod ai_advice;
mod health;
mod weather;

pub use advisory::*;
pub use ai_advice::*;
pub use health::*;
pub use weather::*;
