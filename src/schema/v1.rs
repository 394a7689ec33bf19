use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::assessment::{CauseOfDeath, OrganType};

/// Three-way triage outcome. Deserialization is closed: any string outside
/// this set is rejected rather than silently accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Accept,
    Marginal,
    Decline,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accept => "Accept",
            Self::Marginal => "Marginal",
            Self::Decline => "Decline",
        }
    }
}

/// Wire request for the remote scoring service. All assessment fields are
/// flattened with defaults already applied, except `kdpi_percentile` which
/// stays absent (not zero) when it was never entered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub organ_type: OrganType,
    pub tissue_stiffness_kpa: f64,
    pub resistive_index: f64,
    pub shear_wave_velocity_ms: f64,
    pub perfusion_uniformity_pct: u8,
    pub echogenicity_grade: u8,
    pub edema_index: u8,
    pub cold_ischemia_hours: f64,
    pub donor_age: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kdpi_percentile: Option<f64>,
    pub cause_of_death: CauseOfDeath,
    pub warm_ischemia_minutes: f64,
}

/// Wire response from the remote scoring service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub viability_score: u8,
    pub classification: Classification,
    pub confidence: f64,
    pub risk_factors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_contributions: Option<BTreeMap<String, f64>>,
}

/// Canonical scoring outcome handed to the caller. Constructed once per
/// submission; the caller holds it for display and discards it on reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub viability_score: u8,
    pub classification: Classification,
    pub confidence: f64,
    pub risk_factors: Vec<String>,
}

impl From<PredictionResponse> for AnalysisResult {
    /// Maps the wire response 1:1. `feature_contributions` is dropped.
    fn from(response: PredictionResponse) -> Self {
        Self {
            viability_score: response.viability_score,
            classification: response.classification,
            confidence: response.confidence,
            risk_factors: response.risk_factors,
        }
    }
}
