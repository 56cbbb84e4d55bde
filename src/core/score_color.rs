use regex::Regex;
use std::sync::LazyLock;

/// A score band: every score `>= min_score` that did not match a higher band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBand {
    pub min_score: f64,
    pub gradient: &'static str,
}

/// Highest band first; lookup stops at the first band the score reaches.
pub const SCORE_BANDS: [ScoreBand; 6] = [
    ScoreBand {
        min_score: 90.0,
        gradient: "linear-gradient(135deg, #1e7e34, #28a745)",
    },
    ScoreBand {
        min_score: 80.0,
        gradient: "linear-gradient(135deg, #28a745, #34ce57)",
    },
    ScoreBand {
        min_score: 70.0,
        gradient: "linear-gradient(135deg, #34ce57, #40d869)",
    },
    ScoreBand {
        min_score: 60.0,
        gradient: "linear-gradient(135deg, #40d869, #51e57b)",
    },
    ScoreBand {
        min_score: 50.0,
        gradient: "linear-gradient(135deg, #51e57b, #6bf28d)",
    },
    ScoreBand {
        min_score: 40.0,
        gradient: "linear-gradient(135deg, #6bf28d, #85ff9f)",
    },
];

pub const FALLBACK_GRADIENT: &str = "linear-gradient(135deg, #85ff9f, #a5ffb1)";

/// Maps a spec score to its CSS background gradient.
///
/// Scores are not clamped. Anything above 100 lands in the top band; negative
/// scores and NaN fall through to [`FALLBACK_GRADIENT`].
pub fn spec_score_color(score: f64) -> &'static str {
    SCORE_BANDS
        .iter()
        .find(|band| score >= band.min_score)
        .map_or(FALLBACK_GRADIENT, |band| band.gradient)
}

static SCORE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+(?:\.\d+)?").expect("score pattern is valid"));

/// 從爬下來的文字取出分數，例如 "85"、"85%"、"Spec Score 85.5"
pub fn parse_spec_score(text: &str) -> Option<f64> {
    SCORE_NUMBER
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}
