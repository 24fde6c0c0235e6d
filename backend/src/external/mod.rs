//! External API integrations

pub mod contamination;
pub mod disease;
pub mod forecast;
pub mod text_generation;

pub use contamination::ContaminationClient;
pub use disease::DiseaseClient;
pub use forecast::ForecastClient;
pub use text_generation::TextGenerationClient;
