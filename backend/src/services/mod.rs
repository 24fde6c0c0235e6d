//! Orchestration services for the Water Quality Advisor Platform

pub mod weather;

pub use weather::WeatherService;
