use crate::advice::{lookup, AdviceRecord};
use crate::label::{label_at, UNKNOWN_LABEL};

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: &'static str,
    /// Highest class score, 0..=1.
    pub confidence: f32,
}

impl Prediction {
    /// `0.873` -> `"87.3"`
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}", self.confidence * 100.0)
    }

    pub fn advice(&self) -> &'static AdviceRecord {
        lookup(self.label)
    }
}

/// Argmax. The first index reaching the maximum wins. NaN scores never
/// win; an all-NaN or empty vector yields `Unknown` with confidence 0.
pub fn select_label(scores: &[f32]) -> Prediction {
    let mut best: Option<(usize, f32)> = None;

    for (index, &score) in scores.iter().enumerate() {
        if score.is_nan() {
            continue;
        }
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    match best {
        Some((index, confidence)) => Prediction {
            label: label_at(index).unwrap_or(UNKNOWN_LABEL),
            confidence,
        },
        None => Prediction {
            label: UNKNOWN_LABEL,
            confidence: 0.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::{LABELS, LABEL_COUNT};

    fn one_hot(index: usize, value: f32) -> Vec<f32> {
        let mut scores = vec![0.001; LABEL_COUNT];
        scores[index] = value;
        scores
    }

    #[test]
    fn test_argmax_for_every_index() {
        for (index, label) in LABELS.iter().enumerate() {
            let prediction = select_label(&one_hot(index, 0.9));

            assert_eq!(prediction.label, *label);
            assert_eq!(prediction.confidence, 0.9);
        }
    }

    #[test]
    fn test_tie_goes_to_lower_index() {
        let mut scores = vec![0.0; LABEL_COUNT];
        scores[7] = 0.4;
        scores[3] = 0.4;
        scores[30] = 0.4;

        assert_eq!(select_label(&scores).label, LABELS[3]);
    }

    #[test]
    fn test_confidence_is_a_one_decimal_percentage() {
        let prediction = select_label(&one_hot(12, 0.873));

        assert_eq!(prediction.confidence_percent(), "87.3");
    }

    #[test]
    fn test_confidence_rounding() {
        let prediction = Prediction {
            label: LABELS[0],
            confidence: 1.0,
        };
        assert_eq!(prediction.confidence_percent(), "100.0");

        let prediction = Prediction {
            label: LABELS[0],
            confidence: 0.0456,
        };
        assert_eq!(prediction.confidence_percent(), "4.6");
    }

    #[test]
    fn test_index_past_labels_is_unknown() {
        let mut scores = vec![0.0; LABEL_COUNT + 2];
        scores[LABEL_COUNT + 1] = 0.99;

        let prediction = select_label(&scores);

        assert_eq!(prediction.label, UNKNOWN_LABEL);
        assert_eq!(prediction.advice().name, "Unknown Issue");
    }

    #[test]
    fn test_empty_scores_are_unknown() {
        let prediction = select_label(&[]);

        assert_eq!(prediction.label, UNKNOWN_LABEL);
        assert_eq!(prediction.confidence, 0.0);
    }

    #[test]
    fn test_nan_scores_are_skipped() {
        let mut scores = one_hot(5, 0.5);
        scores[0] = f32::NAN;

        assert_eq!(select_label(&scores).label, LABELS[5]);
    }

    #[test]
    fn test_all_nan_scores_are_unknown() {
        let prediction = select_label(&vec![f32::NAN; LABEL_COUNT]);

        assert_eq!(prediction.label, UNKNOWN_LABEL);
        assert_eq!(prediction.confidence_percent(), "0.0");
    }
}
