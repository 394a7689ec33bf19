use crate::schema::v1::{AnalysisResult, Classification, PredictionRequest};

/// Fixed confidence reported by the local heuristic. Deliberately below a
/// real model's confidence; the heuristic does not compute an interval.
pub const FALLBACK_CONFIDENCE: f64 = 0.87;

const STIFFNESS_THRESHOLD_KPA: f64 = 6.0;
const RESISTIVE_INDEX_THRESHOLD: f64 = 0.7;
const COLD_ISCHEMIA_THRESHOLD_HOURS: f64 = 12.0;
const DONOR_AGE_THRESHOLD_YEARS: f64 = 50.0;

const ACCEPT_CUTOFF: u8 = 70;
const MARGINAL_CUTOFF: u8 = 40;

/// Local deterministic substitute for the remote model. Total function of
/// five request fields; thresholds are strict `>`, so a value sitting
/// exactly on its threshold contributes zero penalty. The score is clamped
/// to [0, 100] before rounding (half-away-from-zero via `f64::round`).
pub fn compute_fallback(request: &PredictionRequest) -> AnalysisResult {
    let mut score = 100.0_f64;

    if request.tissue_stiffness_kpa > STIFFNESS_THRESHOLD_KPA {
        score -= (request.tissue_stiffness_kpa - 5.0) * 3.0;
    }
    if request.resistive_index > RESISTIVE_INDEX_THRESHOLD {
        score -= (request.resistive_index - RESISTIVE_INDEX_THRESHOLD) * 40.0;
    }
    if request.cold_ischemia_hours > COLD_ISCHEMIA_THRESHOLD_HOURS {
        score -= (request.cold_ischemia_hours - COLD_ISCHEMIA_THRESHOLD_HOURS) * 1.5;
    }
    if request.donor_age > DONOR_AGE_THRESHOLD_YEARS {
        score -= (request.donor_age - DONOR_AGE_THRESHOLD_YEARS) * 0.3;
    }
    score -= (100.0 - f64::from(request.perfusion_uniformity_pct)) * 0.2;

    let viability_score = score.clamp(0.0, 100.0).round() as u8;
    let classification = classify(viability_score);

    AnalysisResult {
        viability_score,
        classification,
        confidence: FALLBACK_CONFIDENCE,
        risk_factors: vec![fallback_message(classification).to_string()],
    }
}

pub fn classify(score: u8) -> Classification {
    if score >= ACCEPT_CUTOFF {
        Classification::Accept
    } else if score >= MARGINAL_CUTOFF {
        Classification::Marginal
    } else {
        Classification::Decline
    }
}

fn fallback_message(classification: Classification) -> &'static str {
    match classification {
        Classification::Accept => "Organ shows excellent viability parameters. (SIMULATED)",
        Classification::Marginal => "Organ shows signs of stress. (SIMULATED)",
        Classification::Decline => "High risk features detected. (SIMULATED)",
    }
}
