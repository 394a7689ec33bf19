use ultraviab_score::assessment::{Assessment, CauseOfDeath, OrganType};
use ultraviab_score::request::build_request;

#[test]
fn empty_assessment_gets_defaults() {
    let request = build_request(&Assessment::default());
    assert_eq!(request.organ_type, OrganType::Kidney);
    assert_eq!(request.cause_of_death, CauseOfDeath::Other);
    assert_eq!(request.tissue_stiffness_kpa, 0.0);
    assert_eq!(request.resistive_index, 0.0);
    assert_eq!(request.shear_wave_velocity_ms, 0.0);
    assert_eq!(request.cold_ischemia_hours, 0.0);
    assert_eq!(request.donor_age, 0.0);
    assert_eq!(request.warm_ischemia_minutes, 0.0);
    assert!(request.kdpi_percentile.is_none());
    assert_eq!(request.perfusion_uniformity_pct, 50);
    assert_eq!(request.echogenicity_grade, 3);
    assert_eq!(request.edema_index, 5);
}

#[test]
fn absent_kdpi_is_omitted_from_wire_body() {
    let request = build_request(&Assessment::default());
    let value = serde_json::to_value(&request).unwrap();
    let body = value.as_object().unwrap();
    assert!(!body.contains_key("kdpi_percentile"));
    assert_eq!(body["organ_type"], "Kidney");
    assert_eq!(body["cause_of_death"], "Other");
    assert_eq!(body["tissue_stiffness_kpa"], 0.0);
}

#[test]
fn present_kdpi_is_sent_verbatim() {
    let mut assessment = Assessment::default();
    assessment.clinical.kdpi_dri_score = Some(40.0);
    let request = build_request(&assessment);
    assert_eq!(request.kdpi_percentile, Some(40.0));
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["kdpi_percentile"], 40.0);
}

#[test]
fn populated_fields_pass_through_unmodified() {
    let mut assessment = Assessment::default();
    assessment.ultrasound.tissue_stiffness = Some(5.2);
    assessment.ultrasound.resistive_index = Some(0.65);
    assessment.ultrasound.shear_wave_velocity = Some(2.1);
    assessment.ultrasound.perfusion_uniformity = 85;
    assessment.ultrasound.echogenicity_grade = 2;
    assessment.ultrasound.edema_index = 2;
    assessment.clinical.organ_type = Some(OrganType::Liver);
    assessment.clinical.cold_ischemia_time = Some(12.0);
    assessment.clinical.warm_ischemia_time = Some(15.0);
    assessment.clinical.donor_age = Some(45);
    assessment.clinical.cause_of_death = Some(CauseOfDeath::Trauma);

    let request = build_request(&assessment);
    assert_eq!(request.organ_type, OrganType::Liver);
    assert_eq!(request.tissue_stiffness_kpa, 5.2);
    assert_eq!(request.resistive_index, 0.65);
    assert_eq!(request.shear_wave_velocity_ms, 2.1);
    assert_eq!(request.perfusion_uniformity_pct, 85);
    assert_eq!(request.echogenicity_grade, 2);
    assert_eq!(request.edema_index, 2);
    assert_eq!(request.cold_ischemia_hours, 12.0);
    assert_eq!(request.warm_ischemia_minutes, 15.0);
    assert_eq!(request.donor_age, 45.0);
    assert_eq!(request.cause_of_death, CauseOfDeath::Trauma);
}

#[test]
fn cva_serializes_upper_case() {
    let mut assessment = Assessment::default();
    assessment.clinical.cause_of_death = Some(CauseOfDeath::Cva);
    let value = serde_json::to_value(&build_request(&assessment)).unwrap();
    assert_eq!(value["cause_of_death"], "CVA");
}
