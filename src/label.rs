/// Class names in the order the classifier was trained on (alphabetical
/// PlantVillage folder names). Output index `i` of the model is `LABELS[i]`.
pub const LABELS: [&str; LABEL_COUNT] = [
    "Apple___Apple_scab",
    "Apple___Black_rot",
    "Apple___Cedar_apple_rust",
    "Apple___healthy",
    "Blueberry___healthy",
    "Cherry_(including_sour)___Powdery_mildew",
    "Cherry_(including_sour)___healthy",
    "Corn_(maize)___Cercospora_leaf_spot Gray_leaf_spot",
    "Corn_(maize)___Common_rust_",
    "Corn_(maize)___Northern_Leaf_Blight",
    "Corn_(maize)___healthy",
    "Grape___Black_rot",
    "Grape___Esca_(Black_Measles)",
    "Grape___Leaf_blight_(Isariopsis_Leaf_Spot)",
    "Grape___healthy",
    "Orange___Haunglongbing_(Citrus_greening)",
    "Peach___Bacterial_spot",
    "Peach___healthy",
    "Pepper,_bell___Bacterial_spot",
    "Pepper,_bell___healthy",
    "Potato___Early_blight",
    "Potato___Late_blight",
    "Potato___healthy",
    "Raspberry___healthy",
    "Soybean___healthy",
    "Squash___Powdery_mildew",
    "Strawberry___Leaf_scorch",
    "Strawberry___healthy",
    "Tomato___Bacterial_spot",
    "Tomato___Early_blight",
    "Tomato___Late_blight",
    "Tomato___Leaf_Mold",
    "Tomato___Septoria_leaf_spot",
    "Tomato___Spider_mites Two-spotted_spider_mite",
    "Tomato___Target_Spot",
    "Tomato___Tomato_Yellow_Leaf_Curl_Virus",
    "Tomato___Tomato_mosaic_virus",
    "Tomato___healthy",
];

pub const LABEL_COUNT: usize = 38;

pub const UNKNOWN_LABEL: &str = "Unknown";

pub fn label_at(index: usize) -> Option<&'static str> {
    LABELS.get(index).copied()
}

/// "Corn_(maize)___Common_rust_" -> "Corn (maize) Common rust"
pub fn display_name(label: &str) -> String {
    label
        .split('_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_sorted_like_training_folders() {
        let mut sorted = LABELS;
        sorted.sort_unstable();

        assert_eq!(sorted, LABELS);
    }

    #[test]
    fn test_labels_are_unique() {
        for (i, a) in LABELS.iter().enumerate() {
            for b in LABELS.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_pinned_indices() {
        assert_eq!(label_at(0), Some("Apple___Apple_scab"));
        assert_eq!(label_at(4), Some("Blueberry___healthy"));
        assert_eq!(label_at(15), Some("Orange___Haunglongbing_(Citrus_greening)"));
        assert_eq!(label_at(28), Some("Tomato___Bacterial_spot"));
        assert_eq!(label_at(37), Some("Tomato___healthy"));
        assert_eq!(label_at(38), None);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("Tomato___healthy"), "Tomato healthy");
        assert_eq!(display_name("Corn_(maize)___Common_rust_"), "Corn (maize) Common rust");
        assert_eq!(
            display_name("Pepper,_bell___Bacterial_spot"),
            "Pepper, bell Bacterial spot"
        );
        assert_eq!(display_name(UNKNOWN_LABEL), "Unknown");
    }
}
