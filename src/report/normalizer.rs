use std::collections::HashMap;

use crate::models::{AnalysisResponse, RadarDetail, RadarScore};

/// The six evaluation axes every analysis is reshaped into, in display
/// order.
pub const CANONICAL_AXES: [&str; 6] = [
    "Code Quality",
    "Project Complexity",
    "Technical Breadth",
    "Eng. Practices",
    "Consistency",
    "Collaboration",
];

/// Rebuild both radar arrays in canonical axis order. The model may return
/// the axes in any order, as a subset, or with duplicate labels; the output
/// always has exactly 6 entries per array, with absent axes synthesized at
/// score 0. First occurrence wins on duplicates.
pub fn normalize_radar(mut response: AnalysisResponse) -> AnalysisResponse {
    let mut scores: HashMap<String, u32> = HashMap::new();
    for entry in &response.radar {
        scores.entry(entry.axis.to_lowercase()).or_insert(entry.score);
    }

    let mut details: HashMap<String, (u32, String)> = HashMap::new();
    for entry in &response.radar_breakdown {
        details
            .entry(entry.axis.to_lowercase())
            .or_insert_with(|| (entry.score, entry.note.clone()));
    }

    response.radar = CANONICAL_AXES
        .iter()
        .map(|axis| RadarScore {
            axis: axis.to_string(),
            score: scores.get(&axis.to_lowercase()).copied().unwrap_or(0),
        })
        .collect();

    response.radar_breakdown = CANONICAL_AXES
        .iter()
        .map(|axis| {
            let (score, note) = details
                .get(&axis.to_lowercase())
                .cloned()
                .unwrap_or((0, String::new()));
            RadarDetail {
                axis: axis.to_string(),
                score,
                note,
            }
        })
        .collect();

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with_radar(radar: Vec<RadarScore>, breakdown: Vec<RadarDetail>) -> AnalysisResponse {
        AnalysisResponse {
            summary: String::new(),
            developer_type: String::new(),
            strengths: Vec::new(),
            growth_areas: Vec::new(),
            radar,
            radar_breakdown: breakdown,
            top_repositories: Vec::new(),
        }
    }

    fn score(axis: &str, score: u32) -> RadarScore {
        RadarScore {
            axis: axis.to_string(),
            score,
        }
    }

    fn detail(axis: &str, score: u32, note: &str) -> RadarDetail {
        RadarDetail {
            axis: axis.to_string(),
            score,
            note: note.to_string(),
        }
    }

    #[test]
    fn test_reorders_shuffled_axes() {
        let response = response_with_radar(
            vec![
                score("Collaboration", 40),
                score("Code Quality", 90),
                score("Consistency", 55),
                score("Eng. Practices", 70),
                score("Technical Breadth", 60),
                score("Project Complexity", 80),
            ],
            Vec::new(),
        );

        let normalized = normalize_radar(response);
        let axes: Vec<&str> = normalized.radar.iter().map(|r| r.axis.as_str()).collect();
        assert_eq!(axes, CANONICAL_AXES);
        assert_eq!(normalized.radar[0].score, 90);
        assert_eq!(normalized.radar[5].score, 40);
    }

    #[test]
    fn test_fills_missing_axes_with_defaults() {
        let response = response_with_radar(
            vec![score("Code Quality", 75)],
            vec![detail("code quality", 75, "solid")],
        );

        let normalized = normalize_radar(response);
        assert_eq!(normalized.radar.len(), 6);
        assert_eq!(normalized.radar_breakdown.len(), 6);
        assert_eq!(normalized.radar[0].score, 75);
        assert_eq!(normalized.radar[1].score, 0);
        assert_eq!(normalized.radar_breakdown[0].note, "solid");
        assert_eq!(normalized.radar_breakdown[1].note, "");
    }

    #[test]
    fn test_duplicate_labels_first_wins() {
        let response = response_with_radar(
            vec![score("Consistency", 30), score("Consistency", 99)],
            Vec::new(),
        );

        let normalized = normalize_radar(response);
        assert_eq!(normalized.radar.len(), 6);
        assert_eq!(normalized.radar[4].axis, "Consistency");
        assert_eq!(normalized.radar[4].score, 30);
    }

    #[test]
    fn test_empty_input_yields_all_zero_vector() {
        let normalized = normalize_radar(response_with_radar(Vec::new(), Vec::new()));
        assert_eq!(normalized.radar.len(), 6);
        assert!(normalized.radar.iter().all(|r| r.score == 0));
        assert!(normalized.radar_breakdown.iter().all(|d| d.note.is_empty()));
    }
}
