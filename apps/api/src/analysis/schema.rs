//! Declared output schema for post analysis.
//!
//! Two views of the same shape live here: the JSON-Schema descriptor sent to the model,
//! and the flat field table the validator walks. Keep them in sync.

use serde_json::{json, Value};

use crate::analysis::models::ReachStatus;

pub const SCORE_MIN: i64 = 0;
pub const SCORE_MAX: i64 = 100;

/// Name of the forced tool the model must call with its analysis.
pub const ANALYSIS_TOOL_NAME: &str = "record_post_analysis";

/// Expected type of a leaf field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Integer clamped into `SCORE_MIN..=SCORE_MAX`.
    Score,
    /// Text that must be non-empty after trimming.
    Text,
    /// Sequence of text with at least `min_items` non-empty entries.
    TextList { min_items: usize },
    /// One of `ReachStatus::ALL`.
    Reach,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Dotted path from the result root, e.g. `metricBreakdown.hook`.
    pub path: &'static str,
    pub kind: FieldKind,
}

const fn field(path: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { path, kind }
}

/// Every leaf of AnalysisResult, in declaration order.
pub const FIELDS: &[FieldSpec] = &[
    field("score", FieldKind::Score),
    field("perceivedReach.status", FieldKind::Reach),
    field("perceivedReach.explanation", FieldKind::Text),
    field(
        "algorithmicAnalysis.throttlingFactors",
        FieldKind::TextList { min_items: 1 },
    ),
    field("algorithmicAnalysis.dwellTimeCritique", FieldKind::Text),
    field("mistakes.madeInThisPost", FieldKind::TextList { min_items: 0 }),
    field("mistakes.toAvoidNextTime", FieldKind::TextList { min_items: 0 }),
    field("engagementStrategy.toGetMoreLikes", FieldKind::Text),
    field("engagementStrategy.toGetMoreReactions", FieldKind::Text),
    field("engagementStrategy.toGetMoreComments", FieldKind::Text),
    field("nextPostBlueprint.recommendedTopic", FieldKind::Text),
    field("nextPostBlueprint.suggestedFormat", FieldKind::Text),
    field("nextPostBlueprint.whyThisTopic", FieldKind::Text),
    field("metricBreakdown.hook", FieldKind::Score),
    field("metricBreakdown.value", FieldKind::Score),
    field("metricBreakdown.formatting", FieldKind::Score),
];

fn score(description: &str) -> Value {
    json!({
        "type": "integer",
        "minimum": SCORE_MIN,
        "maximum": SCORE_MAX,
        "description": description
    })
}

fn text(description: &str) -> Value {
    json!({ "type": "string", "minLength": 1, "description": description })
}

fn text_list(description: &str, min_items: usize) -> Value {
    json!({
        "type": "array",
        "items": { "type": "string" },
        "minItems": min_items,
        "description": description
    })
}

/// JSON-Schema descriptor of AnalysisResult, used as the tool `input_schema`.
pub fn analysis_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "score": score("Overall growth and virality estimate for this post, 0-100."),
            "perceivedReach": {
                "type": "object",
                "properties": {
                    "status": {
                        "type": "string",
                        "enum": ReachStatus::ALL,
                        "description": "Expected reach. Exactly one of Low, Moderate, High."
                    },
                    "explanation": text("Why the post will reach that many people.")
                },
                "required": ["status", "explanation"]
            },
            "algorithmicAnalysis": {
                "type": "object",
                "properties": {
                    "throttlingFactors": text_list(
                        "Specific reasons the feed algorithm may suppress this post, most severe first.",
                        1
                    ),
                    "dwellTimeCritique": text("How well the post holds attention after the first lines.")
                },
                "required": ["throttlingFactors", "dwellTimeCritique"]
            },
            "mistakes": {
                "type": "object",
                "properties": {
                    "madeInThisPost": text_list("Concrete mistakes in this post. May be empty.", 0),
                    "toAvoidNextTime": text_list("Habits to avoid in future posts. May be empty.", 0)
                },
                "required": ["madeInThisPost", "toAvoidNextTime"]
            },
            "engagementStrategy": {
                "type": "object",
                "properties": {
                    "toGetMoreLikes": text("Tactic to earn more likes."),
                    "toGetMoreReactions": text("Tactic to earn more non-like reactions."),
                    "toGetMoreComments": text("Tactic to start more comment threads.")
                },
                "required": ["toGetMoreLikes", "toGetMoreReactions", "toGetMoreComments"]
            },
            "nextPostBlueprint": {
                "type": "object",
                "properties": {
                    "recommendedTopic": text("Topic for the author's next post."),
                    "suggestedFormat": text("Format for it, e.g. carousel, text-only, poll."),
                    "whyThisTopic": text("Why this topic builds on the current post.")
                },
                "required": ["recommendedTopic", "suggestedFormat", "whyThisTopic"]
            },
            "metricBreakdown": {
                "type": "object",
                "properties": {
                    "hook": score("Likelihood readers click 'see more', 0-100."),
                    "value": score("Substance and dwell potential of the body, 0-100."),
                    "formatting": score("Readability: spacing, line breaks, scannability, 0-100.")
                },
                "required": ["hook", "value", "formatting"]
            }
        },
        "required": [
            "score",
            "perceivedReach",
            "algorithmicAnalysis",
            "mistakes",
            "engagementStrategy",
            "nextPostBlueprint",
            "metricBreakdown"
        ]
    })
}
