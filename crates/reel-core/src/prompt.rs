//! Prompt assembly — turns a [`ScriptBrief`] into the single instruction
//! string sent to the completion service.

use crate::brief::ScriptBrief;

/// The directive the completion is asked to place in the visual column
/// wherever the script cuts back to the presenter.
pub const TALKING_HEAD_MARKER: &str = "+ Cut to talking head";

/// Build the generation prompt from a brief snapshot.
///
/// Pure and deterministic: no I/O, no state, the same inputs always yield
/// the same string. Every field is interpolated verbatim — empty fields
/// render as empty slots rather than being omitted, so the template's
/// structure never depends on which fields were filled in. `word_target`
/// is the configured approximate word count for the audio column.
pub fn build_prompt(brief: &ScriptBrief, word_target: usize) -> String {
    format!(
        "\
You are a Catholic content creator writing scripts that are faithful to Church teaching and approved by the Magisterium.

Based on the following form data, write an approximately {words}-word script in a table format with two columns:
- Left column: Audio/Spoken content
- Right column: Visual descriptions

Form Data:
Topic: {topic}
Goal: {goal}
Target Audience: {target_audience}
Tone: {tone}
Duration: {duration}
Key Points: {key_points}
Call to Action: {call_to_action}
Visual Style: {visual_style}
Additional Notes: {additional_notes}

Requirements:
1. All content must be faithful to Catholic Church teaching and Magisterium
2. Use the script format from the provided example document with AUDIO and VISUAL columns
3. Include talking head segments mixed with visuals (use \"{marker}\" in visual column)
4. Make it engaging while maintaining reverence for the subject matter
5. Approximately {words} words in the audio column
6. Include specific visual direction in the right column
7. Format as a proper table with clear column headers

Write the script now in markdown table format:
",
        topic = brief.topic,
        goal = brief.goal,
        target_audience = brief.target_audience,
        tone = brief.tone,
        duration = brief.duration,
        key_points = brief.key_points,
        call_to_action = brief.call_to_action,
        visual_style = brief.visual_style,
        additional_notes = brief.additional_notes,
        marker = TALKING_HEAD_MARKER,
        words = word_target,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brief::{FieldId, ScriptBrief};

    #[test]
    fn prompt_is_deterministic() {
        let mut brief = ScriptBrief::default();
        brief.set_field(FieldId::Topic, "Our Lady of Fatima".to_string());
        brief.set_field(FieldId::Goal, "Inspire devotion".to_string());

        assert_eq!(build_prompt(&brief, 500), build_prompt(&brief, 500));
    }

    #[test]
    fn empty_brief_still_produces_full_template() {
        let prompt = build_prompt(&ScriptBrief::default(), 500);

        // Instructional clauses are unconditional on field presence.
        assert!(prompt.contains("faithful to Church teaching and approved by the Magisterium"));
        assert!(prompt.contains("table format with two columns"));
        assert!(prompt.contains("Approximately 500 words in the audio column"));
        assert!(prompt.contains(TALKING_HEAD_MARKER));
        assert!(prompt.contains("clear column headers"));

        // Field slots render as empty, not omitted.
        for field in FieldId::all() {
            assert!(
                prompt.contains(&format!("{}: \n", field.label())),
                "missing empty slot for {}",
                field.label()
            );
        }
    }

    #[test]
    fn word_target_reaches_both_word_count_clauses() {
        let prompt = build_prompt(&ScriptBrief::default(), 300);
        assert!(prompt.contains("write an approximately 300-word script"));
        assert!(prompt.contains("Approximately 300 words in the audio column"));
        assert!(!prompt.contains("500"));
    }

    #[test]
    fn field_values_are_interpolated_verbatim() {
        let mut brief = ScriptBrief::default();
        brief.set_field(
            FieldId::KeyPoints,
            "Historical context | pipes & *markdown* untouched".to_string(),
        );
        brief.set_field(FieldId::Tone, "Reverent but engaging".to_string());

        let prompt = build_prompt(&brief, 500);
        assert!(prompt.contains("Key Points: Historical context | pipes & *markdown* untouched"));
        assert!(prompt.contains("Tone: Reverent but engaging"));
    }

    #[test]
    fn output_depends_only_on_input() {
        let mut a = ScriptBrief::default();
        a.set_field(FieldId::Topic, "Saint Francis".to_string());
        let first = build_prompt(&a, 500);

        // An unrelated brief in between must not affect the result.
        let mut other = ScriptBrief::default();
        other.set_field(FieldId::Topic, "Something else".to_string());
        let _ = build_prompt(&other, 500);

        assert_eq!(build_prompt(&a, 500), first);
    }
}
