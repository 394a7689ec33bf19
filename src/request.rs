use crate::assessment::{Assessment, CauseOfDeath, OrganType};
use crate::schema::v1::PredictionRequest;

/// Flattens an assessment into the canonical wire request. Pure; never
/// rejects input. Missing enums default to Kidney/Other, missing numeric
/// optionals to 0, except KDPI which is omitted entirely when absent.
pub fn build_request(assessment: &Assessment) -> PredictionRequest {
    let ultrasound = &assessment.ultrasound;
    let clinical = &assessment.clinical;
    PredictionRequest {
        organ_type: clinical.organ_type.unwrap_or(OrganType::Kidney),
        tissue_stiffness_kpa: ultrasound.tissue_stiffness.unwrap_or(0.0),
        resistive_index: ultrasound.resistive_index.unwrap_or(0.0),
        shear_wave_velocity_ms: ultrasound.shear_wave_velocity.unwrap_or(0.0),
        perfusion_uniformity_pct: ultrasound.perfusion_uniformity,
        echogenicity_grade: ultrasound.echogenicity_grade,
        edema_index: ultrasound.edema_index,
        cold_ischemia_hours: clinical.cold_ischemia_time.unwrap_or(0.0),
        donor_age: clinical.donor_age.map(f64::from).unwrap_or(0.0),
        kdpi_percentile: clinical.kdpi_dri_score,
        cause_of_death: clinical.cause_of_death.unwrap_or(CauseOfDeath::Other),
        warm_ischemia_minutes: clinical.warm_ischemia_time.unwrap_or(0.0),
    }
}
