//! Prompt Routes - Style-detection prompt
//!
//! Serves the fixed prompt used to distill a reusable style profile
//! from raw writing samples. Clients paste the prompt into an LLM along
//! with their transcripts and save the resulting profile as a style.

use axum::{routing::get, Json, Router};

use crate::models::PromptResponse;
use crate::AppState;

/// Prompt handed to an LLM to produce a style profile from writing samples
const STYLE_DETECTION_PROMPT: &str = r#"You are a forensic literary analyst and style coach.

## TASK
1. Read the delimited writing samples.
2. Infer the author's distinctive **voice, tone, cadence, rhetorical habits, recurring themes, and structural patterns**.
3. Output a **Style Profile** containing:
   A. **One‑paragraph summary** of the overall voice (50–80 words).
   B. **Guiding principles** (5–7 bullet points) in "Do / Avoid" form, each focused on a specific stylistic trait.
   C. **Signature devices** – 3–5 short example phrases *you create* that exemplify the style (do **NOT** copy from the samples; invent fresh lines).
   D. **Mini demo** – rewrite the neutral sentence
      "The committee postponed the decision."
      in ≤ 40 words using the identified style.

## RULES
- Do *not* expose or quote the original samples.
- Keep the profile self‑contained so it can be reused as a prompt prefix.
- If uncertainty arises, prefer probabilistic language ("often uses…", "tends to…") rather than hedging.
- Limit total length to ≈ 250 tokens.

## INPUT SAMPLES
<<BEGIN SAMPLES>>
{{PASTE_OR_STREAM_TRANSCRIPTS_HERE}}
<<END SAMPLES>>

## OUTPUT FORMAT

Style Profile – {{OPTIONAL_LABEL}}

Summary


Guiding Principles
	•	Do: …
	•	Avoid: …
(repeat 5–7 items)

Signature Devices (created examples)
	1.	…
	2.	…
	3.	…

Mini Demo"#;

/// Get the style-detection prompt
#[utoipa::path(
    get,
    path = "/api/prompt",
    responses(
        (status = 200, description = "Style-detection prompt", body = PromptResponse)
    ),
    tag = "Prompt"
)]
pub async fn detection_prompt() -> Json<PromptResponse> {
    Json(PromptResponse {
        prompt: STYLE_DETECTION_PROMPT.to_string(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/prompt", get(detection_prompt))
}
