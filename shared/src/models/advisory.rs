//! Water reading models and the rule-based purification advisory

use serde::{Deserialize, Serialize};

/// A single set of water measurements, taken as-is from sensors or sliders
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WaterReading {
    pub ph: f64,
    pub tds_ppm: f64,
    pub turbidity_ntu: f64,
    pub temperature_celsius: f64,
}

/// The four scored water parameters, in evaluation order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Ph,
    Tds,
    Turbidity,
    Temperature,
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Parameter::Ph => write!(f, "pH"),
            Parameter::Tds => write!(f, "TDS"),
            Parameter::Turbidity => write!(f, "Turbidity"),
            Parameter::Temperature => write!(f, "Temperature"),
        }
    }
}

/// Whether a parameter sits in its optimal band or warrants action
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AdviceStatus {
    Optimal,
    NeedsAttention,
}

/// One advisory line for one parameter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParameterAdvice {
    pub parameter: Parameter,
    pub status: AdviceStatus,
    pub message: String,
}

impl ParameterAdvice {
    fn optimal(parameter: Parameter, message: &str) -> Self {
        Self {
            parameter,
            status: AdviceStatus::Optimal,
            message: message.to_string(),
        }
    }

    fn attention(parameter: Parameter, message: &str) -> Self {
        Self {
            parameter,
            status: AdviceStatus::NeedsAttention,
            message: message.to_string(),
        }
    }
}

/// Overall quality label derived from the accumulated score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QualityLabel {
    /// Score below 3
    Good,
    /// Score 3-5
    Fair,
    /// Score 6 and above
    Poor,
}

impl QualityLabel {
    /// Map an accumulated score to its label
    pub fn from_score(score: i32) -> Self {
        if score >= 6 {
            QualityLabel::Poor
        } else if score >= 3 {
            QualityLabel::Fair
        } else {
            QualityLabel::Good
        }
    }
}

impl std::fmt::Display for QualityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Presentation styling keys off these exact strings
        match self {
            QualityLabel::Good => write!(f, "Good"),
            QualityLabel::Fair => write!(f, "Fair"),
            QualityLabel::Poor => write!(f, "Poor"),
        }
    }
}

/// Full advisory output: label, score, and one line per parameter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdviceReport {
    pub label: QualityLabel,
    pub score: i32,
    pub advice: Vec<ParameterAdvice>,
}

impl AdviceReport {
    pub fn optimal_count(&self) -> usize {
        self.advice
            .iter()
            .filter(|a| a.status == AdviceStatus::Optimal)
            .count()
    }

    pub fn needs_attention_count(&self) -> usize {
        self.advice.len() - self.optimal_count()
    }
}

/// Evaluate a reading against the fixed purification thresholds.
///
/// Pure and total: no I/O, no clock, no state. Always emits exactly four
/// advice entries in the order pH, TDS, turbidity, temperature. The cut
/// points and score deltas are design constants; presentation behavior is
/// tuned against them, so they must not drift:
///
/// - pH outside 6.5-8.5 scores +2 either side
/// - TDS below 50 scores +1; above 500 scores +3; above 300 scores +2
/// - turbidity above 5 NTU scores +3; above 1 NTU scores +1
/// - temperature above 30 scores +1; below 10 is flagged but scores nothing
///
/// Inputs are deliberately not range-checked. Every rule is a plain `f64`
/// comparison, so a NaN or out-of-domain value falls through to some branch
/// and the function still returns a well-formed report.
pub fn evaluate_reading(reading: &WaterReading) -> AdviceReport {
    let mut advice = Vec::with_capacity(4);
    let mut score = 0;

    if reading.ph < 6.5 {
        advice.push(ParameterAdvice::attention(
            Parameter::Ph,
            "pH is too low (acidic). Add alkaline substances or use a neutralizer.",
        ));
        score += 2;
    } else if reading.ph > 8.5 {
        advice.push(ParameterAdvice::attention(
            Parameter::Ph,
            "pH is too high (alkaline). Add acidic substances or use a neutralizer.",
        ));
        score += 2;
    } else {
        advice.push(ParameterAdvice::optimal(Parameter::Ph, "pH level is optimal."));
    }

    if reading.tds_ppm < 50.0 {
        advice.push(ParameterAdvice::attention(
            Parameter::Tds,
            "TDS is very low. Water may lack beneficial minerals.",
        ));
        score += 1;
    } else if reading.tds_ppm > 500.0 {
        advice.push(ParameterAdvice::attention(
            Parameter::Tds,
            "TDS is too high. Use RO filter to reduce dissolved salts.",
        ));
        score += 3;
    } else if reading.tds_ppm > 300.0 {
        advice.push(ParameterAdvice::attention(
            Parameter::Tds,
            "TDS is moderately high. Consider using a water filter.",
        ));
        score += 2;
    } else {
        advice.push(ParameterAdvice::optimal(Parameter::Tds, "TDS level is optimal."));
    }

    if reading.turbidity_ntu > 5.0 {
        advice.push(ParameterAdvice::attention(
            Parameter::Turbidity,
            "High turbidity detected. Filter with ceramic/cloth filter before boiling.",
        ));
        score += 3;
    } else if reading.turbidity_ntu > 1.0 {
        advice.push(ParameterAdvice::attention(
            Parameter::Turbidity,
            "Moderate turbidity. Let water settle before filtration.",
        ));
        score += 1;
    } else {
        advice.push(ParameterAdvice::optimal(
            Parameter::Turbidity,
            "Turbidity level is optimal.",
        ));
    }

    if reading.temperature_celsius > 30.0 {
        advice.push(ParameterAdvice::attention(
            Parameter::Temperature,
            "Water temperature is high. This may promote bacterial growth.",
        ));
        score += 1;
    } else if reading.temperature_celsius < 10.0 {
        // Flagged for taste, but carries no score weight
        advice.push(ParameterAdvice::attention(
            Parameter::Temperature,
            "Water temperature is very cold. This may affect taste.",
        ));
    } else {
        advice.push(ParameterAdvice::optimal(
            Parameter::Temperature,
            "Temperature is within acceptable range.",
        ));
    }

    AdviceReport {
        label: QualityLabel::from_score(score),
        score,
        advice,
    }
}
