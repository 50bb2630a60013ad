//! The script brief — the structured form data a user fills in before
//! asking for a script.

use serde::{Deserialize, Serialize};

/// Identifies one of the nine brief fields.
///
/// The field set is closed and known at compile time; there is no
/// string-keyed map anywhere, so a typo in a field name is a type error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Topic,
    Goal,
    TargetAudience,
    Tone,
    Duration,
    KeyPoints,
    CallToAction,
    VisualStyle,
    AdditionalNotes,
}

impl FieldId {
    /// All fields in form order.
    pub fn all() -> &'static [FieldId] {
        &[
            FieldId::Topic,
            FieldId::Goal,
            FieldId::TargetAudience,
            FieldId::Tone,
            FieldId::Duration,
            FieldId::KeyPoints,
            FieldId::CallToAction,
            FieldId::VisualStyle,
            FieldId::AdditionalNotes,
        ]
    }

    /// Human-readable label, as it appears in the form and in the prompt's
    /// form-data block.
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Topic => "Topic",
            FieldId::Goal => "Goal",
            FieldId::TargetAudience => "Target Audience",
            FieldId::Tone => "Tone",
            FieldId::Duration => "Duration",
            FieldId::KeyPoints => "Key Points",
            FieldId::CallToAction => "Call to Action",
            FieldId::VisualStyle => "Visual Style",
            FieldId::AdditionalNotes => "Additional Notes",
        }
    }

    /// Whether the field must be non-empty before a brief can be submitted.
    pub fn is_required(&self) -> bool {
        matches!(self, FieldId::Topic | FieldId::Goal)
    }
}

/// All the free-text inputs describing the desired script.
///
/// Every field defaults to empty. Fields are independent scalars; editing
/// one never touches another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptBrief {
    pub topic: String,
    pub goal: String,
    pub target_audience: String,
    pub tone: String,
    pub duration: String,
    pub key_points: String,
    pub call_to_action: String,
    pub visual_style: String,
    pub additional_notes: String,
}

impl ScriptBrief {
    /// Current value of one field.
    pub fn field(&self, id: FieldId) -> &str {
        match id {
            FieldId::Topic => &self.topic,
            FieldId::Goal => &self.goal,
            FieldId::TargetAudience => &self.target_audience,
            FieldId::Tone => &self.tone,
            FieldId::Duration => &self.duration,
            FieldId::KeyPoints => &self.key_points,
            FieldId::CallToAction => &self.call_to_action,
            FieldId::VisualStyle => &self.visual_style,
            FieldId::AdditionalNotes => &self.additional_notes,
        }
    }

    /// Replace exactly one field's value, leaving the other eight untouched.
    pub fn set_field(&mut self, id: FieldId, value: String) {
        *self.field_mut(id) = value;
    }

    /// Mutable access for in-place editing (cursor insert/delete).
    pub fn field_mut(&mut self, id: FieldId) -> &mut String {
        match id {
            FieldId::Topic => &mut self.topic,
            FieldId::Goal => &mut self.goal,
            FieldId::TargetAudience => &mut self.target_audience,
            FieldId::Tone => &mut self.tone,
            FieldId::Duration => &mut self.duration,
            FieldId::KeyPoints => &mut self.key_points,
            FieldId::CallToAction => &mut self.call_to_action,
            FieldId::VisualStyle => &mut self.visual_style,
            FieldId::AdditionalNotes => &mut self.additional_notes,
        }
    }

    /// Whether every required field is non-empty.
    pub fn required_fields_filled(&self) -> bool {
        FieldId::all()
            .iter()
            .filter(|f| f.is_required())
            .all(|f| !self.field(*f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_brief_is_all_empty() {
        let brief = ScriptBrief::default();
        for field in FieldId::all() {
            assert_eq!(brief.field(*field), "");
        }
    }

    #[test]
    fn set_field_touches_exactly_one_field() {
        for target in FieldId::all() {
            let mut brief = ScriptBrief::default();
            // Give every field a distinct prior value first.
            for (i, field) in FieldId::all().iter().enumerate() {
                brief.set_field(*field, format!("value-{i}"));
            }
            let before = brief.clone();

            brief.set_field(*target, "edited".to_string());

            for field in FieldId::all() {
                if field == target {
                    assert_eq!(brief.field(*field), "edited");
                } else {
                    assert_eq!(brief.field(*field), before.field(*field));
                }
            }
        }
    }

    #[test]
    fn required_fields_are_topic_and_goal() {
        let required: Vec<_> = FieldId::all()
            .iter()
            .filter(|f| f.is_required())
            .collect();
        assert_eq!(required, vec![&FieldId::Topic, &FieldId::Goal]);
    }

    #[test]
    fn required_filled_needs_both_topic_and_goal() {
        let mut brief = ScriptBrief::default();
        assert!(!brief.required_fields_filled());

        brief.set_field(FieldId::Topic, "The Eucharist".to_string());
        assert!(!brief.required_fields_filled());

        brief.set_field(FieldId::Goal, "Educate viewers".to_string());
        assert!(brief.required_fields_filled());

        brief.set_field(FieldId::Topic, String::new());
        assert!(!brief.required_fields_filled());
    }
}
