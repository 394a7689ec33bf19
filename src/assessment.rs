use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrganType {
    Kidney,
    Liver,
    Heart,
    Lung,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CauseOfDeath {
    Trauma,
    #[serde(rename = "CVA")]
    Cva,
    Anoxia,
    Other,
}

/// Ultrasound measurements for one assessment. `None` means the value has
/// not been entered yet; defaulting happens at request-build time, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UltrasoundMetrics {
    /// Tissue stiffness in kPa.
    pub tissue_stiffness: Option<f64>,
    /// Resistive index, by convention in [0, 1] (not enforced).
    pub resistive_index: Option<f64>,
    /// Shear wave velocity in m/s.
    pub shear_wave_velocity: Option<f64>,
    /// Perfusion uniformity percent, 0-100.
    pub perfusion_uniformity: u8,
    /// Echogenicity grade, 1-5.
    pub echogenicity_grade: u8,
    /// Edema index, 0-10.
    pub edema_index: u8,
}

impl Default for UltrasoundMetrics {
    fn default() -> Self {
        Self {
            tissue_stiffness: None,
            resistive_index: None,
            shear_wave_velocity: None,
            perfusion_uniformity: 50,
            echogenicity_grade: 3,
            edema_index: 5,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicalMetadata {
    pub organ_type: Option<OrganType>,
    /// Cold ischemia time in hours.
    pub cold_ischemia_time: Option<f64>,
    /// Warm ischemia time in minutes.
    pub warm_ischemia_time: Option<f64>,
    /// Donor age in years.
    pub donor_age: Option<u32>,
    /// KDPI/DRI percentile, 0-100.
    pub kdpi_dri_score: Option<f64>,
    pub cause_of_death: Option<CauseOfDeath>,
}

/// The donor-organ measurement and clinical record submitted for scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Assessment {
    pub ultrasound: UltrasoundMetrics,
    pub clinical: ClinicalMetadata,
}
