//! Static disease catalog
//!
//! The read-only table of crop diseases and their treatment options, covering
//! cashew, cassava, and maize diseases common in Ghana. Loaded once at
//! compile time and never mutated.

use super::{Crop, Disease, Severity, TreatmentCategory, TreatmentOption};

/// Static array of all catalog diseases
///
/// Insertion order of each disease's treatments is meaningful: it is the
/// final tie-break for recommendation ranking.
// TODO: add tomato disease entries (leaf_blight, leaf_curl, septoria_leaf_spot,
// verticillium_wilt) once severity ranges are confirmed.
pub static DISEASES: [Disease; 12] = [
    Disease {
        id: "anthracnose",
        crop: Crop::Cashew,
        name: "Anthracnose",
        symptoms: &[
            "Dark brown to black spots on leaves",
            "Circular lesions with concentric rings",
            "Premature leaf drop",
            "Fruit rot with sunken lesions",
        ],
        prevention: &[
            "Proper spacing for air circulation",
            "Avoid overhead watering",
            "Remove infected plant debris",
            "Apply preventive fungicide sprays",
        ],
        treatments: &[
            TreatmentOption {
                id: "copper-fungicide",
                name: "Copper-based fungicide",
                category: TreatmentCategory::Chemical,
                min_severity: Severity::Mild,
                max_severity: Severity::Severe,
                cost_ghs: 45.0,
                effectiveness: 0.85,
                instructions: "Foliar spray, 2-3g per liter of water every 14 days during rainy season",
            },
            TreatmentOption {
                id: "mancozeb",
                name: "Mancozeb fungicide",
                category: TreatmentCategory::Chemical,
                min_severity: Severity::Moderate,
                max_severity: Severity::Severe,
                cost_ghs: 35.0,
                effectiveness: 0.90,
                instructions: "Foliar spray, 2.5g per liter of water every 10-14 days",
            },
            TreatmentOption {
                id: "neem-oil",
                name: "Neem oil treatment",
                category: TreatmentCategory::Organic,
                min_severity: Severity::Mild,
                max_severity: Severity::Moderate,
                cost_ghs: 25.0,
                effectiveness: 0.70,
                instructions: "Foliar spray, 5ml per liter of water weekly, apply in the evening",
            },
        ],
    },
    Disease {
        id: "gumosis",
        crop: Crop::Cashew,
        name: "Gumosis",
        symptoms: &[
            "Gum exudation from bark",
            "Dark staining on trunk",
            "Bark cracking and peeling",
            "Wilting of branches",
        ],
        prevention: &[
            "Improve drainage around trees",
            "Avoid mechanical damage to bark",
            "Proper pruning for air circulation",
        ],
        treatments: &[
            TreatmentOption {
                id: "metalaxyl-mancozeb",
                name: "Metalaxyl + Mancozeb",
                category: TreatmentCategory::Chemical,
                min_severity: Severity::Moderate,
                max_severity: Severity::Severe,
                cost_ghs: 60.0,
                effectiveness: 0.85,
                instructions: "Soil drench, 2g per liter, monthly during wet season",
            },
            TreatmentOption {
                id: "bordeaux-mixture",
                name: "Bordeaux mixture",
                category: TreatmentCategory::Chemical,
                min_severity: Severity::Mild,
                max_severity: Severity::Severe,
                cost_ghs: 20.0,
                effectiveness: 0.75,
                instructions: "Paint on affected trunk areas after removing diseased bark",
            },
        ],
    },
    Disease {
        id: "leaf_miner",
        crop: Crop::Cashew,
        name: "Leaf Miner",
        symptoms: &[
            "Serpentine mines in leaves",
            "Blister-like patches on young leaves",
            "Leaf curling and distortion",
        ],
        prevention: &[
            "Monitor young flushes regularly",
            "Remove and destroy mined leaves",
            "Encourage natural parasitoids",
        ],
        treatments: &[
            TreatmentOption {
                id: "imidacloprid",
                name: "Imidacloprid",
                category: TreatmentCategory::Chemical,
                min_severity: Severity::Moderate,
                max_severity: Severity::Severe,
                cost_ghs: 40.0,
                effectiveness: 0.90,
                instructions: "Foliar spray, 0.5ml per liter at first sign of mining",
            },
            TreatmentOption {
                id: "neem-insecticide",
                name: "Neem-based insecticide",
                category: TreatmentCategory::Organic,
                min_severity: Severity::Mild,
                max_severity: Severity::Moderate,
                cost_ghs: 30.0,
                effectiveness: 0.75,
                instructions: "Foliar spray on young flushes every 7-10 days",
            },
        ],
    },
    Disease {
        id: "red_rust",
        crop: Crop::Cashew,
        name: "Red Rust",
        symptoms: &[
            "Orange-red velvety patches on leaves",
            "Circular algal spots",
            "Reduced photosynthesis and vigor",
        ],
        prevention: &[
            "Prune for better light penetration",
            "Avoid water stress",
            "Maintain balanced nutrition",
        ],
        treatments: &[
            TreatmentOption {
                id: "copper-rust",
                name: "Copper fungicide",
                category: TreatmentCategory::Chemical,
                min_severity: Severity::Mild,
                max_severity: Severity::Severe,
                cost_ghs: 35.0,
                effectiveness: 0.80,
                instructions: "Foliar spray, 2g per liter at first appearance of spots",
            },
            TreatmentOption {
                id: "potassium-bicarbonate",
                name: "Potassium bicarbonate",
                category: TreatmentCategory::Organic,
                min_severity: Severity::Mild,
                max_severity: Severity::Moderate,
                cost_ghs: 15.0,
                effectiveness: 0.65,
                instructions: "Foliar spray, 5g per liter weekly until spots clear",
            },
        ],
    },
    Disease {
        id: "bacterial_blight",
        crop: Crop::Cassava,
        name: "Bacterial Blight",
        symptoms: &[
            "Angular water-soaked leaf spots",
            "Leaf wilting and blight",
            "Gum exudation on stems",
            "Tip dieback",
        ],
        prevention: &[
            "Use disease-free planting material",
            "Practice crop rotation",
            "Sterilize cutting tools",
        ],
        treatments: &[
            TreatmentOption {
                id: "copper-bactericide",
                name: "Copper bactericide",
                category: TreatmentCategory::Chemical,
                min_severity: Severity::Mild,
                max_severity: Severity::Severe,
                cost_ghs: 40.0,
                effectiveness: 0.75,
                instructions: "Foliar spray, 3g per liter every 10 days during wet weather",
            },
            TreatmentOption {
                id: "streptomycin",
                name: "Streptomycin sulfate",
                category: TreatmentCategory::Chemical,
                min_severity: Severity::Moderate,
                max_severity: Severity::Severe,
                cost_ghs: 55.0,
                effectiveness: 0.85,
                instructions: "Foliar spray, 1g per liter, maximum two applications per season",
            },
        ],
    },
    Disease {
        id: "brown_spot",
        crop: Crop::Cassava,
        name: "Brown Spot",
        symptoms: &[
            "Brown angular spots on older leaves",
            "Yellow halos around lesions",
            "Premature defoliation",
        ],
        prevention: &[
            "Wider plant spacing",
            "Remove crop residues after harvest",
            "Use tolerant varieties",
        ],
        treatments: &[
            TreatmentOption {
                id: "mancozeb-brownspot",
                name: "Mancozeb fungicide",
                category: TreatmentCategory::Chemical,
                min_severity: Severity::Mild,
                max_severity: Severity::Severe,
                cost_ghs: 35.0,
                effectiveness: 0.85,
                instructions: "Foliar spray, 2.5g per liter every 14 days",
            },
            TreatmentOption {
                id: "baking-soda",
                name: "Baking soda spray",
                category: TreatmentCategory::Organic,
                min_severity: Severity::Mild,
                max_severity: Severity::Mild,
                cost_ghs: 10.0,
                effectiveness: 0.60,
                instructions: "Foliar spray, 5g per liter with a drop of soap, weekly",
            },
        ],
    },
    Disease {
        id: "green_mite",
        crop: Crop::Cassava,
        name: "Green Mite",
        symptoms: &[
            "Chlorotic speckling on young leaves",
            "Shortened internodes",
            "Candle-stick appearance of shoot tips",
        ],
        prevention: &[
            "Plant early in the rainy season",
            "Conserve predatory mites",
            "Avoid moving infested cuttings",
        ],
        treatments: &[
            TreatmentOption {
                id: "abamectin",
                name: "Abamectin",
                category: TreatmentCategory::Chemical,
                min_severity: Severity::Moderate,
                max_severity: Severity::Severe,
                cost_ghs: 50.0,
                effectiveness: 0.90,
                instructions: "Foliar spray, 0.5ml per liter targeting shoot tips",
            },
            TreatmentOption {
                id: "neem-soap",
                name: "Neem oil + soap",
                category: TreatmentCategory::Organic,
                min_severity: Severity::Mild,
                max_severity: Severity::Moderate,
                cost_ghs: 25.0,
                effectiveness: 0.75,
                instructions: "Foliar spray, 5ml neem oil and 2ml soap per liter weekly",
            },
        ],
    },
    Disease {
        id: "mosaic",
        crop: Crop::Cassava,
        name: "Mosaic Virus",
        symptoms: &[
            "Mosaic pattern of light and dark green on leaves",
            "Leaf distortion and reduced size",
            "Stunted growth",
        ],
        prevention: &[
            "Use virus-free planting material",
            "Remove infected plants promptly",
            "Control whitefly vectors",
        ],
        treatments: &[
            TreatmentOption {
                id: "whitefly-control",
                name: "Whitefly control",
                category: TreatmentCategory::Chemical,
                min_severity: Severity::Mild,
                max_severity: Severity::Severe,
                cost_ghs: 45.0,
                effectiveness: 0.70,
                instructions: "Systemic insecticide spray against the whitefly vector every 14 days",
            },
            TreatmentOption {
                id: "reflective-mulch",
                name: "Reflective mulch",
                category: TreatmentCategory::Organic,
                min_severity: Severity::Mild,
                max_severity: Severity::Moderate,
                cost_ghs: 30.0,
                effectiveness: 0.60,
                instructions: "Lay reflective mulch between rows to repel whiteflies",
            },
        ],
    },
    Disease {
        id: "fall_armyworm",
        crop: Crop::Maize,
        name: "Fall Armyworm",
        symptoms: &[
            "Ragged feeding holes in leaves",
            "Window-pane damage on young leaves",
            "Frass in the whorl",
            "Damaged tassels and ears",
        ],
        prevention: &[
            "Early planting",
            "Regular field scouting",
            "Intercropping with legumes",
        ],
        treatments: &[
            TreatmentOption {
                id: "chlorantraniliprole",
                name: "Chlorantraniliprole",
                category: TreatmentCategory::Chemical,
                min_severity: Severity::Moderate,
                max_severity: Severity::Severe,
                cost_ghs: 65.0,
                effectiveness: 0.95,
                instructions: "Spray directed into the whorl, 0.4ml per liter",
            },
            TreatmentOption {
                id: "bt-biopesticide",
                name: "Bt-based biopesticide",
                category: TreatmentCategory::Organic,
                min_severity: Severity::Mild,
                max_severity: Severity::Severe,
                cost_ghs: 40.0,
                effectiveness: 0.80,
                instructions: "Spray on young larvae in the late afternoon, repeat after 7 days",
            },
            TreatmentOption {
                id: "neem-soap-maize",
                name: "Neem + soap solution",
                category: TreatmentCategory::Organic,
                min_severity: Severity::Mild,
                max_severity: Severity::Moderate,
                cost_ghs: 25.0,
                effectiveness: 0.65,
                instructions: "Whorl application, 5ml neem oil per liter with soap",
            },
        ],
    },
    Disease {
        id: "grasshopper",
        crop: Crop::Maize,
        name: "Grasshopper",
        symptoms: &[
            "Irregular holes chewed from leaf margins",
            "Defoliation starting at field edges",
            "Damage to silks and husks",
        ],
        prevention: &[
            "Control weeds around fields",
            "Till field margins to destroy egg beds",
        ],
        treatments: &[
            TreatmentOption {
                id: "malathion",
                name: "Malathion",
                category: TreatmentCategory::Chemical,
                min_severity: Severity::Mild,
                max_severity: Severity::Severe,
                cost_ghs: 35.0,
                effectiveness: 0.90,
                instructions: "Foliar spray, 2ml per liter, treat field borders first",
            },
            TreatmentOption {
                id: "diatomaceous-earth",
                name: "Diatomaceous earth",
                category: TreatmentCategory::Organic,
                min_severity: Severity::Mild,
                max_severity: Severity::Moderate,
                cost_ghs: 20.0,
                effectiveness: 0.70,
                instructions: "Dust on plants and soil surface in dry weather",
            },
        ],
    },
    Disease {
        id: "leaf_beetle",
        crop: Crop::Maize,
        name: "Leaf Beetle",
        symptoms: &[
            "Skeletonized leaves",
            "Scraped leaf surface tissue",
            "Silk clipping on ears",
        ],
        prevention: &[
            "Rotate maize with non-host crops",
            "Avoid late planting",
        ],
        treatments: &[
            TreatmentOption {
                id: "thiamethoxam",
                name: "Thiamethoxam",
                category: TreatmentCategory::Chemical,
                min_severity: Severity::Moderate,
                max_severity: Severity::Severe,
                cost_ghs: 50.0,
                effectiveness: 0.85,
                instructions: "Seed treatment or foliar spray at 0.3ml per liter",
            },
            TreatmentOption {
                id: "kaolin-clay",
                name: "Kaolin clay",
                category: TreatmentCategory::Organic,
                min_severity: Severity::Mild,
                max_severity: Severity::Moderate,
                cost_ghs: 15.0,
                effectiveness: 0.60,
                instructions: "Spray a 5% suspension to coat leaves, reapply after rain",
            },
        ],
    },
    Disease {
        id: "healthy",
        crop: Crop::Cashew,
        name: "Healthy Plant",
        symptoms: &[
            "No visible disease symptoms",
            "Healthy green foliage",
            "Normal growth",
        ],
        prevention: &[
            "Continue good agricultural practices",
            "Regular monitoring",
            "Proper nutrition",
        ],
        // No treatments: callers surface this as "no treatment needed"
        treatments: &[],
    },
];

/// Get a disease by its ID
///
/// # Arguments
///
/// * `id` - The unique identifier for the disease (e.g., "anthracnose")
///
/// # Returns
///
/// Returns `Some(&Disease)` if found, `None` otherwise. Lookup is
/// case-insensitive and ignores surrounding whitespace.
pub fn get_disease(id: &str) -> Option<&'static Disease> {
    let key = id.trim().to_ascii_lowercase();
    DISEASES.iter().find(|disease| disease.id == key)
}

/// Get all catalog diseases
pub fn all_diseases() -> &'static [Disease] {
    &DISEASES
}

/// Get all diseases affecting a given crop
pub fn diseases_for_crop(crop: Crop) -> Vec<&'static Disease> {
    DISEASES.iter().filter(|d| d.crop == crop).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_diseases_have_unique_ids() {
        let mut ids: Vec<&str> = all_diseases().iter().map(|d| d.id).collect();
        ids.sort();
        let original_len = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), original_len, "Disease IDs are not unique");
    }

    #[test]
    fn test_get_disease_returns_correct_entry() {
        let disease = get_disease("anthracnose").expect("anthracnose should exist");
        assert_eq!(disease.id, "anthracnose");
        assert_eq!(disease.crop, Crop::Cashew);
        assert_eq!(disease.treatments.len(), 3);
    }

    #[test]
    fn test_get_disease_is_case_insensitive_and_trims() {
        assert!(get_disease("Anthracnose").is_some());
        assert!(get_disease("  mosaic  ").is_some());
        assert!(get_disease("ANTHRACNOSE").is_some());
    }

    #[test]
    fn test_get_disease_returns_none_for_unknown_id() {
        assert!(get_disease("black_sigatoka").is_none());
        assert!(get_disease("").is_none());
    }

    #[test]
    fn test_healthy_has_no_treatments() {
        let healthy = get_disease("healthy").expect("healthy should exist");
        assert!(healthy.treatments.is_empty());
    }

    #[test]
    fn test_catalog_treatment_fields_are_well_formed() {
        for disease in all_diseases() {
            for treatment in disease.treatments {
                assert!(
                    (0.0..=1.0).contains(&treatment.effectiveness),
                    "Treatment {} has effectiveness outside 0-1: {}",
                    treatment.id,
                    treatment.effectiveness
                );
                assert!(
                    treatment.cost_ghs > 0.0,
                    "Treatment {} has non-positive cost",
                    treatment.id
                );
                assert!(
                    treatment.min_severity <= treatment.max_severity,
                    "Treatment {} has inverted severity range",
                    treatment.id
                );
            }
        }
    }

    #[test]
    fn test_treatment_ids_unique_within_catalog() {
        let mut ids: Vec<&str> = all_diseases()
            .iter()
            .flat_map(|d| d.treatments.iter().map(|t| t.id))
            .collect();
        ids.sort();
        let original_len = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), original_len, "Treatment IDs are not unique");
    }

    #[test]
    fn test_diseases_for_crop_partitions_catalog() {
        let cashew = diseases_for_crop(Crop::Cashew);
        assert!(cashew.iter().any(|d| d.id == "anthracnose"));
        assert!(cashew.iter().all(|d| d.crop == Crop::Cashew));

        let maize = diseases_for_crop(Crop::Maize);
        assert_eq!(maize.len(), 3);

        // Tomato entries are not in the catalog yet
        assert!(diseases_for_crop(Crop::Tomato).is_empty());
    }
}
