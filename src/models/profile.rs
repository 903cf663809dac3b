//! Models for the practitioner profile sections: hero, about/bio,
//! education history and work experience.
//!
//! These mirror the backend's camelCase JSON. The server owns all
//! validation; unknown or missing fields fall back to defaults so a
//! partially filled document still loads.

use serde::{Deserialize, Serialize};

/// Landing-page hero section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub bio: String,
    /// Data URL or hosted image reference, passed through untouched
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub badge: String,
    #[serde(default)]
    pub stats: Vec<HeroStat>,
    #[serde(default)]
    pub specialties: Vec<Specialty>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroStat {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Specialty {
    #[serde(default)]
    pub name: String,
}

/// About page: long-form bio and experience highlights.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    #[serde(default)]
    pub full_bio: String,
    #[serde(default)]
    pub professional_background: String,
    #[serde(default)]
    pub clinical_experience: Vec<String>,
}

/// Education history, a single aggregate document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default)]
    pub undergraduate: Undergraduate,
    #[serde(default)]
    pub medical_degrees: Vec<MedicalDegree>,
    #[serde(default)]
    pub residencies: Vec<TrainingProgram>,
    #[serde(default)]
    pub fellowships: Vec<TrainingProgram>,
    #[serde(default)]
    pub board_certifications: Vec<BoardCertification>,
    #[serde(default)]
    pub professional_fellowships: Vec<ProfessionalFellowship>,
    #[serde(default)]
    pub licenses: Vec<License>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Undergraduate {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub honors: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalDegree {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub year: String,
}

/// A residency or fellowship stint; both share the same shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingProgram {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub year_from: String,
    #[serde(default)]
    pub year_to: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardCertification {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub board: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalFellowship {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub organization: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    #[serde(default)]
    pub state: String,
    #[serde(rename = "type", default)]
    pub license_type: String,
    #[serde(default)]
    pub year_from: String,
    #[serde(default)]
    pub year_to: String,
}

/// One work experience entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub year_from: String,
    #[serde(default)]
    pub year_to: String,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub description: String,
}

impl WorkExperience {
    /// Format the covered period as a single range.
    pub fn period(&self) -> String {
        if self.is_current {
            format!("{} - present", self.year_from)
        } else if self.year_to.is_empty() {
            self.year_from.clone()
        } else {
            format!("{} - {}", self.year_from, self.year_to)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_experience_parses_backend_json() {
        let json = r#"{"_id":"66f1","title":"Attending Physician","organization":"General Hospital","location":"Boston, MA","yearFrom":"2018","yearTo":"","isCurrent":true,"description":"Inpatient neurology service."}"#;
        let experience: WorkExperience = serde_json::from_str(json).unwrap();
        assert_eq!(experience.id.as_deref(), Some("66f1"));
        assert_eq!(experience.organization, "General Hospital");
        assert!(experience.is_current);
        assert_eq!(experience.period(), "2018 - present");
    }

    #[test]
    fn test_work_experience_period_closed_range() {
        let experience = WorkExperience {
            year_from: "2012".to_string(),
            year_to: "2016".to_string(),
            ..Default::default()
        };
        assert_eq!(experience.period(), "2012 - 2016");
    }

    #[test]
    fn test_new_work_experience_serializes_without_id() {
        let experience = WorkExperience::default();
        let json = serde_json::to_string(&experience).unwrap();
        assert!(!json.contains("_id"));
        assert!(json.contains("isCurrent"));
    }

    #[test]
    fn test_education_tolerates_sparse_document() {
        let education: Education = serde_json::from_str(r#"{"undergraduate":{"institution":"State University"}}"#).unwrap();
        assert_eq!(education.undergraduate.institution, "State University");
        assert!(education.residencies.is_empty());
        assert!(education.licenses.is_empty());
    }

    #[test]
    fn test_license_type_field_name() {
        let license: License = serde_json::from_str(
            r#"{"state":"MA","type":"Full Medical License","yearFrom":"2015","yearTo":"2027"}"#,
        )
        .unwrap();
        assert_eq!(license.license_type, "Full Medical License");
        let out = serde_json::to_value(&license).unwrap();
        assert_eq!(out["type"], "Full Medical License");
    }

    #[test]
    fn test_hero_round_trips_camel_case() {
        let json = r#"{"title":"Dr. Jane Doe","subtitle":"Neurologist","bio":"...","image":"","badge":"Board Certified","stats":[{"label":"Years","value":"15","icon":"Calendar"}],"specialties":[{"name":"Epilepsy"}]}"#;
        let hero: Hero = serde_json::from_str(json).unwrap();
        assert_eq!(hero.stats.len(), 1);
        assert_eq!(hero.specialties[0].name, "Epilepsy");
        let out = serde_json::to_value(&hero).unwrap();
        assert_eq!(out["stats"][0]["label"], "Years");
    }
}
