//! Prompt construction.

/// Phrase that pins the reply to the record's JSON shape.
pub const STRICT_JSON_INSTRUCTION: &str =
    "Respond ONLY with strict JSON (no markdown, no commentary) using exactly this structure:";

const OUTPUT_SHAPE: &str = r#"{
  "rubric": [
    {"criteria": "string", "score": number, "maxScore": 10}
  ],
  "overallGrade": "string",
  "feedback": "string"
}"#;

/// Build the evaluation prompt for one video.
///
/// Deterministic: the same inputs always produce the same text.
pub fn build_prompt(subject: &str, video_reference: &str) -> String {
    format!(
        "You are an expert educational content analyzer. Please analyze this video and provide a detailed evaluation.\n\n\
         Video URL: {}\n\
         Subject/Topic: {}\n\n\
         You cannot access the actual video content. Generate a plausible, realistic evaluation \
         that would be typical for a video on this topic.\n\n\
         Please provide:\n\
         1. A rubric with 4-5 evaluation criteria relevant to the subject\n\
         2. A score for each criterion (out of 10)\n\
         3. An overall grade\n\
         4. Brief feedback (2-3 sentences)\n\n\
         {}\n\
         {}",
        video_reference, subject, STRICT_JSON_INSTRUCTION, OUTPUT_SHAPE
    )
}
