// All LLM prompt constants for the analysis module.
// Reuses the JSON-only fragment from llm_client::prompts.

/// Role of the model for every analysis call.
pub const ANALYSIS_SYSTEM: &str = "You are a LinkedIn growth strategist and feed-algorithm analyst. \
    You critique individual posts for reach, dwell time and engagement with blunt, specific feedback. \
    Never pad your answer with generic social-media advice.";

/// Fixed instruction placed before the post. Describes every output field.
pub const ANALYSIS_INSTRUCTIONS: &str = r#"Analyze the LinkedIn post below and predict how it will perform in the feed.

Report your analysis by calling the `record_post_analysis` tool. Its input must match the
tool schema EXACTLY: every field is required, no extra fields.

FIELD RULES:
- score: integer 0-100. Overall growth and virality estimate. 0 = will be buried, 100 = breakout post.
- perceivedReach.status: exactly one of "Low", "Moderate", "High" (case-sensitive).
- perceivedReach.explanation: one or two sentences explaining the reach estimate.
- algorithmicAnalysis.throttlingFactors: array of at least one concrete reason the algorithm may
  limit distribution (external links, engagement bait, weak hook, wall of text...). Most severe first.
- algorithmicAnalysis.dwellTimeCritique: how well the body keeps readers on the post.
- mistakes.madeInThisPost: array of specific mistakes in THIS post. Use [] if there are none.
- mistakes.toAvoidNextTime: array of habits to avoid in future posts. Use [] if there are none.
- engagementStrategy.toGetMoreLikes / toGetMoreReactions / toGetMoreComments: one actionable
  tactic each, tailored to this post.
- nextPostBlueprint.recommendedTopic / suggestedFormat / whyThisTopic: the single best follow-up post.
- metricBreakdown.hook / value / formatting: integers 0-100 rating the opening lines, the
  substance of the body, and the visual formatting.

Every text field must be non-empty."#;

/// Introduces the optional link. The link is context only; it has not been fetched.
pub const LINK_PREFIX: &str = "POST LINK (context only, not fetched): ";

pub const CONTENT_HEADER: &str = "POST CONTENT:";
