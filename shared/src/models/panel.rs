//! Extended contaminant panel assessed against fixed WHO guideline values

use serde::{Deserialize, Serialize};

/// The nine panel parameters, in display order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PanelParameter {
    Ph,
    Tds,
    Turbidity,
    Temperature,
    Lead,
    Arsenic,
    Nitrates,
    Fluoride,
    Bacteria,
}

impl std::fmt::Display for PanelParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PanelParameter::Ph => write!(f, "pH"),
            PanelParameter::Tds => write!(f, "TDS"),
            PanelParameter::Turbidity => write!(f, "Turbidity"),
            PanelParameter::Temperature => write!(f, "Temperature"),
            PanelParameter::Lead => write!(f, "Lead"),
            PanelParameter::Arsenic => write!(f, "Arsenic"),
            PanelParameter::Nitrates => write!(f, "Nitrates"),
            PanelParameter::Fluoride => write!(f, "Fluoride"),
            PanelParameter::Bacteria => write!(f, "Bacteria"),
        }
    }
}

/// Fixed WHO reference bounds for one parameter. Comparison constants only,
/// never fetched at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhoGuideline {
    pub min: Option<f64>,
    pub max: f64,
    pub unit: &'static str,
}

impl PanelParameter {
    pub const ALL: [PanelParameter; 9] = [
        PanelParameter::Ph,
        PanelParameter::Tds,
        PanelParameter::Turbidity,
        PanelParameter::Temperature,
        PanelParameter::Lead,
        PanelParameter::Arsenic,
        PanelParameter::Nitrates,
        PanelParameter::Fluoride,
        PanelParameter::Bacteria,
    ];

    pub fn guideline(self) -> WhoGuideline {
        match self {
            PanelParameter::Ph => WhoGuideline {
                min: Some(6.5),
                max: 8.5,
                unit: "",
            },
            PanelParameter::Tds => WhoGuideline {
                min: None,
                max: 500.0,
                unit: "ppm",
            },
            PanelParameter::Turbidity => WhoGuideline {
                min: None,
                max: 5.0,
                unit: "NTU",
            },
            PanelParameter::Temperature => WhoGuideline {
                min: Some(10.0),
                max: 30.0,
                unit: "°C",
            },
            PanelParameter::Lead => WhoGuideline {
                min: None,
                max: 0.01,
                unit: "mg/L",
            },
            PanelParameter::Arsenic => WhoGuideline {
                min: None,
                max: 0.01,
                unit: "mg/L",
            },
            PanelParameter::Nitrates => WhoGuideline {
                min: None,
                max: 50.0,
                unit: "mg/L",
            },
            PanelParameter::Fluoride => WhoGuideline {
                min: None,
                max: 1.5,
                unit: "mg/L",
            },
            PanelParameter::Bacteria => WhoGuideline {
                min: None,
                max: 0.0,
                unit: "CFU/100mL",
            },
        }
    }

    /// Contaminants whose violation alone makes the water critically unsafe
    pub fn is_critical_contaminant(self) -> bool {
        matches!(
            self,
            PanelParameter::Bacteria | PanelParameter::Lead | PanelParameter::Arsenic
        )
    }

    /// Fixed health-impact description shown alongside the assessment
    pub fn health_impact(self) -> Option<&'static str> {
        match self {
            PanelParameter::Lead => Some(
                "Lead exposure can cause neurological damage, developmental delays in children, and cardiovascular issues in adults.",
            ),
            PanelParameter::Arsenic => Some(
                "Long-term exposure to arsenic can lead to skin lesions, cancer, cardiovascular disease, and diabetes.",
            ),
            PanelParameter::Nitrates => Some(
                "High nitrate levels are particularly dangerous for infants, causing 'blue baby syndrome' (methemoglobinemia) which reduces oxygen in the blood.",
            ),
            PanelParameter::Fluoride => Some(
                "Excessive fluoride can cause dental fluorosis (tooth discoloration) and skeletal fluorosis (bone stiffness and pain).",
            ),
            PanelParameter::Tds => Some(
                "High TDS can indicate presence of harmful minerals that may cause kidney stones, gastrointestinal issues, and other health problems.",
            ),
            PanelParameter::Bacteria => Some(
                "Bacterial contamination can cause gastrointestinal illnesses, diarrhea, cramps, and in severe cases, kidney failure or death.",
            ),
            PanelParameter::Ph => Some(
                "Extreme pH levels can indicate corrosive water which may leach heavy metals from pipes and cause gastrointestinal irritation.",
            ),
            PanelParameter::Turbidity | PanelParameter::Temperature => None,
        }
    }
}

/// Full nine-parameter measurement set
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ContaminantPanel {
    pub ph: f64,
    pub tds_ppm: f64,
    pub turbidity_ntu: f64,
    pub temperature_celsius: f64,
    pub lead_mg_l: f64,
    pub arsenic_mg_l: f64,
    pub nitrates_mg_l: f64,
    pub fluoride_mg_l: f64,
    pub bacteria_cfu: f64,
}

impl ContaminantPanel {
    pub fn value(&self, parameter: PanelParameter) -> f64 {
        match parameter {
            PanelParameter::Ph => self.ph,
            PanelParameter::Tds => self.tds_ppm,
            PanelParameter::Turbidity => self.turbidity_ntu,
            PanelParameter::Temperature => self.temperature_celsius,
            PanelParameter::Lead => self.lead_mg_l,
            PanelParameter::Arsenic => self.arsenic_mg_l,
            PanelParameter::Nitrates => self.nitrates_mg_l,
            PanelParameter::Fluoride => self.fluoride_mg_l,
            PanelParameter::Bacteria => self.bacteria_cfu,
        }
    }
}

/// Safety status of a single parameter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ParameterStatus {
    Safe,
    Unsafe,
    Danger,
}

/// Assessment of one panel parameter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParameterAssessment {
    pub parameter: PanelParameter,
    pub status: ParameterStatus,
    pub message: String,
}

/// Overall panel verdict
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    Excellent,
    Fair,
    Poor,
    Critical,
}

impl std::fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverallStatus::Excellent => write!(f, "Excellent"),
            OverallStatus::Fair => write!(f, "Fair"),
            OverallStatus::Poor => write!(f, "Poor"),
            OverallStatus::Critical => write!(f, "Critical"),
        }
    }
}

/// Full panel assessment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PanelReport {
    pub overall: OverallStatus,
    pub assessments: Vec<ParameterAssessment>,
}

/// Assess one parameter against its guideline.
///
/// pH is checked against both bounds; bacteria escalates straight to
/// `Danger`; every other parameter is unsafe only above its maximum (the
/// temperature minimum is advisory, not a safety bound).
pub fn assess_parameter(parameter: PanelParameter, value: f64) -> ParameterAssessment {
    let guideline = parameter.guideline();
    let (status, message) = match parameter {
        PanelParameter::Ph => {
            if guideline.min.is_some_and(|min| value < min) {
                (
                    ParameterStatus::Unsafe,
                    "Acidic water can corrode pipes and leach metals".to_string(),
                )
            } else if value > guideline.max {
                (
                    ParameterStatus::Unsafe,
                    "Alkaline water can cause scaling and bitter taste".to_string(),
                )
            } else {
                (
                    ParameterStatus::Safe,
                    "pH level is within optimal range".to_string(),
                )
            }
        }
        PanelParameter::Bacteria => {
            if value > guideline.max {
                (
                    ParameterStatus::Danger,
                    "Bacterial contamination detected! Boil water before use".to_string(),
                )
            } else {
                (
                    ParameterStatus::Safe,
                    "No bacterial contamination detected".to_string(),
                )
            }
        }
        _ => {
            if value > guideline.max {
                (
                    ParameterStatus::Unsafe,
                    format!(
                        "Exceeds WHO safety limit of {}{}",
                        guideline.max, guideline.unit
                    ),
                )
            } else {
                (
                    ParameterStatus::Safe,
                    "Within WHO safety guidelines".to_string(),
                )
            }
        }
    };

    ParameterAssessment {
        parameter,
        status,
        message,
    }
}

/// True when the value violates the guideline for overall-status purposes
fn exceeds_guideline(parameter: PanelParameter, value: f64) -> bool {
    let guideline = parameter.guideline();
    match parameter {
        PanelParameter::Ph => {
            guideline.min.is_some_and(|min| value < min) || value > guideline.max
        }
        _ => value > guideline.max,
    }
}

/// Assess the full panel and derive the overall verdict.
///
/// No violations is `Excellent`; any critical contaminant violation is
/// `Critical`; three or more violations is `Poor`; anything else is `Fair`.
pub fn assess_panel(panel: &ContaminantPanel) -> PanelReport {
    let assessments = PanelParameter::ALL
        .iter()
        .map(|&p| assess_parameter(p, panel.value(p)))
        .collect();

    let violations: Vec<PanelParameter> = PanelParameter::ALL
        .iter()
        .copied()
        .filter(|&p| exceeds_guideline(p, panel.value(p)))
        .collect();

    let overall = if violations.is_empty() {
        OverallStatus::Excellent
    } else if violations.iter().any(|p| p.is_critical_contaminant()) {
        OverallStatus::Critical
    } else if violations.len() >= 3 {
        OverallStatus::Poor
    } else {
        OverallStatus::Fair
    };

    PanelReport {
        overall,
        assessments,
    }
}
