use crate::label::{LABELS, UNKNOWN_LABEL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceRecord {
    pub name: &'static str,
    pub description: &'static str,
    pub treatment: &'static str,
    pub prevention: &'static str,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AdviceError {
    #[error("no advice entry for label {label:?}")]
    MissingEntry { label: &'static str },
}

pub static UNKNOWN_ADVICE: AdviceRecord = AdviceRecord {
    name: "Unknown Issue",
    description: "The model could not identify the disease with high confidence.",
    treatment: "Consult a local agricultural extension office.",
    prevention: "Ensure general plant hygiene.",
};

static ADVICE_TABLE: &[(&str, AdviceRecord)] = &[
    // Apple
    (
        "Apple___Apple_scab",
        AdviceRecord {
            name: "Apple Scab",
            description: "A fungal disease causing dark, scabby spots on leaves and fruit.",
            treatment: "Apply fungicides containing myclobutanil or sulfur. Rake up and destroy fallen leaves to prevent overwintering spores.",
            prevention: "Plant resistant varieties and prune trees to improve air circulation.",
        },
    ),
    (
        "Apple___Black_rot",
        AdviceRecord {
            name: "Black Rot",
            description: "Fungal infection causing circular brown spots on leaves and rotting fruit.",
            treatment: "Remove infected mummies (dried fruit) and dead wood. Apply captan or sulfur-based fungicides.",
            prevention: "Keep trees healthy and avoid wounding the bark.",
        },
    ),
    (
        "Apple___Cedar_apple_rust",
        AdviceRecord {
            name: "Cedar Apple Rust",
            description: "Bright orange-yellow spots on leaves.",
            treatment: "Apply fungicides during the pink stage of blossom development.",
            prevention: "Remove nearby Eastern Red Cedar trees if possible (the alternate host).",
        },
    ),
    (
        "Apple___healthy",
        AdviceRecord {
            name: "Healthy Apple",
            description: "Your apple plant looks vibrant and disease-free!",
            treatment: "No action needed. Keep up the good work.",
            prevention: "Maintain regular watering and fertilization schedules.",
        },
    ),
    // Blueberry
    (
        "Blueberry___healthy",
        AdviceRecord {
            name: "Healthy Blueberry",
            description: "Leaves are evenly green with no spotting or reddening.",
            treatment: "No action needed. Keep the soil acidic and evenly moist.",
            prevention: "Mulch with pine bark or needles and prune old canes in late winter.",
        },
    ),
    // Cherry
    (
        "Cherry_(including_sour)___Powdery_mildew",
        AdviceRecord {
            name: "Powdery Mildew",
            description: "White powdery growth on leaves and shoots.",
            treatment: "Spray with horticultural oils or sulfur fungicides.",
            prevention: "Prune for airflow and avoid overhead watering.",
        },
    ),
    (
        "Cherry_(including_sour)___healthy",
        AdviceRecord {
            name: "Healthy Cherry",
            description: "Your cherry plant looks healthy.",
            treatment: "Monitor for pests occasionally.",
            prevention: "Mulch around the base to retain moisture.",
        },
    ),
    // Corn
    (
        "Corn_(maize)___Cercospora_leaf_spot Gray_leaf_spot",
        AdviceRecord {
            name: "Gray Leaf Spot",
            description: "Rectangular gray to brown lesions on leaves.",
            treatment: "Fungicides may be needed in severe cases. Rotate crops.",
            prevention: "Plant resistant hybrids and manage crop residue.",
        },
    ),
    (
        "Corn_(maize)___Common_rust_",
        AdviceRecord {
            name: "Common Rust",
            description: "Small, cinnamon-brown pustules on leaves.",
            treatment: "Usually not required unless infection is severe early in the season.",
            prevention: "Plant resistant varieties.",
        },
    ),
    (
        "Corn_(maize)___Northern_Leaf_Blight",
        AdviceRecord {
            name: "Northern Leaf Blight",
            description: "Cigar-shaped gray-green lesions on leaves.",
            treatment: "Fungicides can be effective if applied early.",
            prevention: "Crop rotation and tillage to bury infected residue.",
        },
    ),
    (
        "Corn_(maize)___healthy",
        AdviceRecord {
            name: "Healthy Corn",
            description: "This corn plant is in great shape.",
            treatment: "Ensure adequate nitrogen and water during tasseling.",
            prevention: "Keep weeds under control.",
        },
    ),
    // Grape
    (
        "Grape___Black_rot",
        AdviceRecord {
            name: "Grape Black Rot",
            description: "Brown circular spots on leaves and shriveled black berries.",
            treatment: "Apply fungicides from bud break through fruit set.",
            prevention: "Remove infected fruit and canes during dormant pruning.",
        },
    ),
    (
        "Grape___Esca_(Black_Measles)",
        AdviceRecord {
            name: "Black Measles (Esca)",
            description: "Tiger-stripe patterns on leaves and spotting on fruit.",
            treatment: "There is no chemical cure. Protect pruning wounds.",
            prevention: "Remove and burn infected vines.",
        },
    ),
    (
        "Grape___Leaf_blight_(Isariopsis_Leaf_Spot)",
        AdviceRecord {
            name: "Leaf Blight (Isariopsis Leaf Spot)",
            description: "Irregular dark brown spots on leaves that can merge and cause early leaf drop.",
            treatment: "Remove affected leaves and apply a copper or mancozeb fungicide.",
            prevention: "Open the canopy with summer pruning and clear fallen leaves in autumn.",
        },
    ),
    (
        "Grape___healthy",
        AdviceRecord {
            name: "Healthy Grape",
            description: "Vines look vigorous and healthy.",
            treatment: "Prune annually to maintain structure.",
            prevention: "Monitor for pests like Japanese beetles.",
        },
    ),
    // Orange
    (
        "Orange___Haunglongbing_(Citrus_greening)",
        AdviceRecord {
            name: "Citrus Greening (Huanglongbing)",
            description: "Blotchy yellow mottling on leaves, lopsided bitter fruit and twig dieback.",
            treatment: "No cure. Remove infected trees to protect the rest of the grove.",
            prevention: "Control Asian citrus psyllids and plant certified disease-free nursery stock.",
        },
    ),
    // Peach
    (
        "Peach___Bacterial_spot",
        AdviceRecord {
            name: "Bacterial Spot",
            description: "Small water-soaked spots on leaves that turn into holes (shot-hole effect).",
            treatment: "Copper sprays applied at dormancy and varying antibiotics during bloom.",
            prevention: "Plant resistant varieties and avoid high-nitrogen fertilizers.",
        },
    ),
    (
        "Peach___healthy",
        AdviceRecord {
            name: "Healthy Peach",
            description: "Leaves are green and free of spots.",
            treatment: "Thin fruit to ensure good size and quality.",
            prevention: "Regular pruning is essential.",
        },
    ),
    // Pepper
    (
        "Pepper,_bell___Bacterial_spot",
        AdviceRecord {
            name: "Bacterial Spot",
            description: "Small dark spots on leaves and fruit.",
            treatment: "Copper-based bactericides can help reduce spread.",
            prevention: "Use disease-free seeds and rotate crops.",
        },
    ),
    (
        "Pepper,_bell___healthy",
        AdviceRecord {
            name: "Healthy Pepper",
            description: "Glossy green leaves and sturdy stems.",
            treatment: "Stake plants if they get heavy with fruit.",
            prevention: "Mulch to keep soil moisture consistent.",
        },
    ),
    // Potato
    (
        "Potato___Early_blight",
        AdviceRecord {
            name: "Early Blight",
            description: "Dark brown spots with concentric rings (target shape) on older leaves.",
            treatment: "Apply chlorothalonil or copper fungicides.",
            prevention: "Ensure good nitrogen levels and avoid overhead irrigation.",
        },
    ),
    (
        "Potato___Late_blight",
        AdviceRecord {
            name: "Late Blight",
            description: "Large, dark, water-soaked spots on leaves. White mold may appear.",
            treatment: "Requires immediate action with specific fungicides like metalaxyl.",
            prevention: "Destroy infected tubers and use certified disease-free seed potatoes.",
        },
    ),
    (
        "Potato___healthy",
        AdviceRecord {
            name: "Healthy Potato",
            description: "Robust foliage with no signs of distress.",
            treatment: "Hill soil around the base to protect tubers from light.",
            prevention: "Monitor for Colorado Potato Beetles.",
        },
    ),
    // Raspberry
    (
        "Raspberry___healthy",
        AdviceRecord {
            name: "Healthy Raspberry",
            description: "Canes and leaves look strong and free of spots.",
            treatment: "Cut out canes that have finished fruiting.",
            prevention: "Keep rows narrow for airflow and avoid wetting the foliage.",
        },
    ),
    // Soybean
    (
        "Soybean___healthy",
        AdviceRecord {
            name: "Healthy Soybean",
            description: "Leaves are uniformly green with no lesions.",
            treatment: "No action needed.",
            prevention: "Rotate with non-legume crops and scout regularly for aphids.",
        },
    ),
    // Squash
    (
        "Squash___Powdery_mildew",
        AdviceRecord {
            name: "Powdery Mildew",
            description: "White, talc-like patches on the upper surface of leaves.",
            treatment: "Remove the worst leaves and spray with potassium bicarbonate, sulfur or neem oil.",
            prevention: "Give plants full sun and space them widely for good airflow.",
        },
    ),
    // Strawberry
    (
        "Strawberry___Leaf_scorch",
        AdviceRecord {
            name: "Leaf Scorch",
            description: "Many small purple spots that merge until the leaf looks burned.",
            treatment: "Remove infected leaves after harvest and apply a labeled fungicide if severe.",
            prevention: "Renovate beds every few years and water at soil level.",
        },
    ),
    (
        "Strawberry___healthy",
        AdviceRecord {
            name: "Healthy Strawberry",
            description: "Leaves are bright green with no spotting.",
            treatment: "Remove runners you do not need to keep plants productive.",
            prevention: "Mulch with straw to keep fruit off the soil.",
        },
    ),
    // Tomato
    (
        "Tomato___Bacterial_spot",
        AdviceRecord {
            name: "Bacterial Spot",
            description: "Small, dark, greasy-looking spots on leaves and fruit.",
            treatment: "Copper sprays may slow the spread but cannot cure it.",
            prevention: "Avoid working in the garden when plants are wet.",
        },
    ),
    (
        "Tomato___Early_blight",
        AdviceRecord {
            name: "Early Blight",
            description: "Bullseye-patterned brown spots on lower leaves.",
            treatment: "Remove infected lower leaves. Apply copper or bio-fungicides.",
            prevention: "Mulch to prevent soil splash onto leaves.",
        },
    ),
    (
        "Tomato___Late_blight",
        AdviceRecord {
            name: "Late Blight",
            description: "Dark, greasy patches on leaves and stems. Can kill plants quickly.",
            treatment: "Remove and destroy infected plants immediately. Do not compost.",
            prevention: "Keep foliage dry and provide good airflow.",
        },
    ),
    (
        "Tomato___Leaf_Mold",
        AdviceRecord {
            name: "Leaf Mold",
            description: "Pale yellow spots on upper leaves, olive-green mold underneath.",
            treatment: "Improve ventilation and reduce humidity. Fungicides if severe.",
            prevention: "Water at the base, not the leaves.",
        },
    ),
    (
        "Tomato___Septoria_leaf_spot",
        AdviceRecord {
            name: "Septoria Leaf Spot",
            description: "Small circular spots with gray centers and dark borders.",
            treatment: "Remove infected leaves. Apply chlorothalonil or copper soap.",
            prevention: "Crop rotation and weed control.",
        },
    ),
    (
        "Tomato___Spider_mites Two-spotted_spider_mite",
        AdviceRecord {
            name: "Spider Mites",
            description: "Leaves look stippled or yellow; fine webbing may be visible.",
            treatment: "Spray with water to knock them off, or use insecticidal soap/neem oil.",
            prevention: "Keep plants well-watered (mites love dry, dusty conditions).",
        },
    ),
    (
        "Tomato___Target_Spot",
        AdviceRecord {
            name: "Target Spot",
            description: "Brown lesions with faint concentric rings.",
            treatment: "Apply fungicides approved for target spot.",
            prevention: "Remove plant debris and improve airflow.",
        },
    ),
    (
        "Tomato___Tomato_Yellow_Leaf_Curl_Virus",
        AdviceRecord {
            name: "Yellow Leaf Curl Virus",
            description: "Leaves curl upward and turn yellow; plant is stunted.",
            treatment: "No cure. Remove and destroy infected plants.",
            prevention: "Control whiteflies which spread the virus using reflective mulches.",
        },
    ),
    (
        "Tomato___Tomato_mosaic_virus",
        AdviceRecord {
            name: "Mosaic Virus",
            description: "Mottled light and dark green pattern on leaves.",
            treatment: "No cure. Remove infected plants. Wash hands after handling tobacco, which can carry it.",
            prevention: "Plant resistant varieties.",
        },
    ),
    (
        "Tomato___healthy",
        AdviceRecord {
            name: "Healthy Tomato",
            description: "Vibrant green leaves and strong stems.",
            treatment: "Support with cages or stakes.",
            prevention: "Water consistently to prevent blossom end rot.",
        },
    ),
];

/// Exact key match only; anything else gets [`UNKNOWN_ADVICE`].
pub fn lookup(label: &str) -> &'static AdviceRecord {
    if label == UNKNOWN_LABEL {
        return &UNKNOWN_ADVICE;
    }

    ADVICE_TABLE
        .iter()
        .find(|(key, _)| *key == label)
        .map(|(_, record)| record)
        .unwrap_or(&UNKNOWN_ADVICE)
}

pub fn verify_complete() -> Result<(), AdviceError> {
    match LABELS
        .iter()
        .find(|label| !ADVICE_TABLE.iter().any(|(key, _)| key == *label))
    {
        Some(label) => Err(AdviceError::MissingEntry { label: *label }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::LABEL_COUNT;

    #[test]
    fn test_table_is_complete() {
        assert_eq!(verify_complete(), Ok(()));
        assert_eq!(ADVICE_TABLE.len(), LABEL_COUNT);
    }

    #[test]
    fn test_every_label_has_populated_advice() {
        for label in LABELS {
            let record = lookup(label);

            assert_ne!(record, &UNKNOWN_ADVICE, "{label} fell back to unknown");
            assert!(!record.name.is_empty());
            assert!(!record.description.is_empty());
            assert!(!record.treatment.is_empty());
            assert!(!record.prevention.is_empty());
        }
    }

    #[test]
    fn test_unknown_strings_fall_back() {
        assert_eq!(lookup("Unknown"), &UNKNOWN_ADVICE);
        assert_eq!(lookup(""), &UNKNOWN_ADVICE);
        assert_eq!(lookup("Banana___healthy"), &UNKNOWN_ADVICE);
    }

    #[test]
    fn test_no_partial_or_case_insensitive_match() {
        assert_eq!(lookup("tomato___healthy"), &UNKNOWN_ADVICE);
        assert_eq!(lookup("Tomato___health"), &UNKNOWN_ADVICE);
        assert_eq!(lookup("Tomato healthy"), &UNKNOWN_ADVICE);
    }

    #[test]
    fn test_lookup_returns_matching_record() {
        assert_eq!(lookup("Potato___Late_blight").name, "Late Blight");
        assert_eq!(lookup("Tomato___healthy").name, "Healthy Tomato");
    }
}
