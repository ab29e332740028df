// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces structured-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST answer with structured data only. \
    Do NOT include any text outside the JSON object or tool call. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
