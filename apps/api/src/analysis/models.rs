//! Data model for post analysis: the caller's input and the validated result.

use serde::{Deserialize, Serialize};

use crate::analysis::error::AnalysisError;

// ────────────────────────────────────────────────────────────────────────────
// Input
// ────────────────────────────────────────────────────────────────────────────

/// A post submitted for analysis. Construction enforces the non-empty content rule,
/// so every `PostInput` in circulation is safe to hand to the request builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostInput {
    content: String,
    url: Option<String>,
}

impl PostInput {
    /// Content is kept verbatim. A blank `url` is treated as no link at all.
    pub fn new(content: impl Into<String>, url: Option<String>) -> Result<Self, AnalysisError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let url = url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());

        Ok(Self { content, url })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Auxiliary context only. Never fetched.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Result
// ────────────────────────────────────────────────────────────────────────────

/// Categorical reach diagnosis. Wire values are case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReachStatus {
    Low,
    Moderate,
    High,
}

impl ReachStatus {
    pub const ALL: [&'static str; 3] = ["Low", "Moderate", "High"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Low" => Some(ReachStatus::Low),
            "Moderate" => Some(ReachStatus::Moderate),
            "High" => Some(ReachStatus::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerceivedReach {
    pub status: ReachStatus,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmicAnalysis {
    pub throttling_factors: Vec<String>,
    pub dwell_time_critique: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mistakes {
    pub made_in_this_post: Vec<String>,
    pub to_avoid_next_time: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementStrategy {
    pub to_get_more_likes: String,
    pub to_get_more_reactions: String,
    pub to_get_more_comments: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextPostBlueprint {
    pub recommended_topic: String,
    pub suggested_format: String,
    pub why_this_topic: String,
}

/// Sub-scores, each 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricBreakdown {
    pub hook: u8,
    pub value: u8,
    pub formatting: u8,
}

/// Full performance assessment of one post.
///
/// Only `analysis::validation` builds these from model output, so a value of this
/// type is always complete and within bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Overall growth/virality estimate, 0–100.
    pub score: u8,
    pub perceived_reach: PerceivedReach,
    pub algorithmic_analysis: AlgorithmicAnalysis,
    pub mistakes: Mistakes,
    pub engagement_strategy: EngagementStrategy,
    pub next_post_blueprint: NextPostBlueprint,
    pub metric_breakdown: MetricBreakdown,
}

/// Coarse rating of the overall score, matching the colour bands of the web UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Strong,
    Average,
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        if score > 70 {
            ScoreBand::Strong
        } else if score > 40 {
            ScoreBand::Average
        } else {
            ScoreBand::Weak
        }
    }
}

impl AnalysisResult {
    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_input_rejects_empty_content() {
        assert_eq!(PostInput::new("", None), Err(AnalysisError::EmptyInput));
    }

    #[test]
    fn test_post_input_rejects_whitespace_content() {
        assert_eq!(
            PostInput::new("  \n\t ", Some("https://example.com".into())),
            Err(AnalysisError::EmptyInput)
        );
    }

    #[test]
    fn test_post_input_keeps_content_verbatim() {
        let input = PostInput::new("  Hello world  \n", None).unwrap();
        assert_eq!(input.content(), "  Hello world  \n");
    }

    #[test]
    fn test_post_input_blank_url_is_none() {
        let input = PostInput::new("Post", Some("   ".into())).unwrap();
        assert_eq!(input.url(), None);
        let input = PostInput::new("Post", Some(String::new())).unwrap();
        assert_eq!(input.url(), None);
    }

    #[test]
    fn test_post_input_keeps_url() {
        let input = PostInput::new("Post", Some(" https://lnkd.in/abc ".into())).unwrap();
        assert_eq!(input.url(), Some("https://lnkd.in/abc"));
    }

    #[test]
    fn test_reach_status_parse_is_case_sensitive() {
        assert_eq!(ReachStatus::parse("High"), Some(ReachStatus::High));
        assert_eq!(ReachStatus::parse("high"), None);
        assert_eq!(ReachStatus::parse("medium"), None);
    }

    #[test]
    fn test_reach_status_serde() {
        let status: ReachStatus = serde_json::from_str(r#""Moderate""#).unwrap();
        assert_eq!(status, ReachStatus::Moderate);
        assert_eq!(serde_json::to_string(&ReachStatus::Low).unwrap(), r#""Low""#);
    }

    #[test]
    fn test_score_band_thresholds() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_score(71), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_score(70), ScoreBand::Average);
        assert_eq!(ScoreBand::from_score(41), ScoreBand::Average);
        assert_eq!(ScoreBand::from_score(40), ScoreBand::Weak);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::Weak);
    }

    #[test]
    fn test_metric_breakdown_wire_names() {
        let m = MetricBreakdown {
            hook: 1,
            value: 2,
            formatting: 3,
        };
        let json = serde_json::to_value(m).unwrap();
        assert_eq!(json["hook"], 1);
        assert_eq!(json["value"], 2);
        assert_eq!(json["formatting"], 3);
    }
}
