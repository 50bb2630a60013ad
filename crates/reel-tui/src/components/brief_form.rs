//! The brief form — nine editable fields describing the desired script.
//!
//! Features:
//! - Single-line fields (topic, audience, tone, duration, call to action)
//! - Multi-line fields (goal, key points, visual style, notes) where Enter
//!   inserts a newline
//! - Tab / Shift+Tab / Up / Down to move focus between fields
//! - Ctrl+S submits the brief for generation
//!
//! Submission is refused while a generation is in flight or while either
//! required field (topic, goal) is empty. No other validation happens here;
//! empty optional fields flow into the prompt as empty slots.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::action::Action;
use crate::components::Component;
use crate::theme::Theme;

use reel_core::brief::{FieldId, ScriptBrief};

/// Whether a field accepts newlines (rendered taller, Enter inserts '\n').
fn is_multiline(field: FieldId) -> bool {
    matches!(
        field,
        FieldId::Goal | FieldId::KeyPoints | FieldId::VisualStyle | FieldId::AdditionalNotes
    )
}

/// Example text shown in empty, unfocused fields.
fn placeholder(field: FieldId) -> &'static str {
    match field {
        FieldId::Topic => "e.g., The Miracle of Fatima, Saint Francis of Assisi, The Eucharist",
        FieldId::Goal => "e.g., Educate viewers about the apparitions, Inspire devotion to prayer",
        FieldId::TargetAudience => "e.g., Young Catholics, Curious non-Catholics, Families",
        FieldId::Tone => "e.g., Reverent but engaging, Educational and inspiring, Conversational",
        FieldId::Duration => "e.g., 3-4 minutes, 5 minutes, 2 minutes",
        FieldId::KeyPoints => {
            "e.g., Historical context, specific miracles, Church approval, key teachings"
        }
        FieldId::CallToAction => "e.g., Encourage daily rosary, Visit a shrine, Deepen prayer life",
        FieldId::VisualStyle => {
            "e.g., Historical reenactment with talking head, Graphics and animations"
        }
        FieldId::AdditionalNotes => {
            "Any specific requirements, sources to reference, or special considerations"
        }
    }
}

/// Rendered height of a field including its border.
fn field_height(field: FieldId) -> u16 {
    if is_multiline(field) {
        4
    } else {
        3
    }
}

pub struct BriefFormComponent {
    /// The brief being edited. Retained across generations; returning from
    /// the result view does not clear it.
    pub brief: ScriptBrief,
    /// Which field is focused.
    focused: FieldId,
    /// Cursor position (byte offset) within the focused field.
    cursor: usize,
    /// Whether a generation is in flight. Set by the App; disables submit
    /// and dims the form.
    pub generating: bool,
}

impl BriefFormComponent {
    pub fn new() -> Self {
        Self {
            brief: ScriptBrief::default(),
            focused: FieldId::Topic,
            cursor: 0,
            generating: false,
        }
    }

    /// Whether the form currently accepts raw key input.
    pub fn wants_input(&self) -> bool {
        !self.generating
    }

    /// Whether submission is currently allowed.
    pub fn can_submit(&self) -> bool {
        !self.generating && self.brief.required_fields_filled()
    }

    fn focused_text(&self) -> &str {
        self.brief.field(self.focused)
    }

    fn clamp_cursor(&mut self) {
        let len = self.focused_text().len();
        if self.cursor > len {
            self.cursor = len;
        }
    }

    fn insert_char(&mut self, c: char) {
        self.clamp_cursor();
        let cursor = self.cursor;
        let input = self.brief.field_mut(self.focused);
        input.insert(cursor, c);
        self.cursor += c.len_utf8();
    }

    fn delete_char(&mut self) {
        self.clamp_cursor();
        if self.cursor > 0 {
            let cursor = self.cursor;
            let input = self.brief.field_mut(self.focused);
            let prev = input[..cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev);
            self.cursor = prev;
        }
    }

    /// Delete the word before the cursor (Ctrl+W).
    fn delete_word(&mut self) {
        self.clamp_cursor();
        if self.cursor > 0 {
            let cursor = self.cursor;
            let input = self.brief.field_mut(self.focused);
            let mut end = cursor;
            while end > 0 && input.as_bytes().get(end - 1) == Some(&b' ') {
                end -= 1;
            }
            let mut start = end;
            while start > 0 && input.as_bytes().get(start - 1) != Some(&b' ') {
                start -= 1;
            }
            input.drain(start..cursor);
            self.cursor = start;
        }
    }

    /// Insert pasted text. Single-line fields only take the first line.
    fn insert_str(&mut self, s: &str) {
        let to_paste = if is_multiline(self.focused) {
            s.to_string()
        } else {
            s.lines().next().unwrap_or("").to_string()
        };
        if to_paste.is_empty() {
            return;
        }
        self.clamp_cursor();
        let cursor = self.cursor;
        let input = self.brief.field_mut(self.focused);
        input.insert_str(cursor, &to_paste);
        self.cursor += to_paste.len();
    }

    fn focus(&mut self, field: FieldId) {
        self.focused = field;
        self.cursor = self.focused_text().len();
    }

    fn next_field(&mut self) {
        let all = FieldId::all();
        let idx = all.iter().position(|f| *f == self.focused).unwrap_or(0);
        self.focus(all[(idx + 1) % all.len()]);
    }

    fn prev_field(&mut self) {
        let all = FieldId::all();
        let idx = all.iter().position(|f| *f == self.focused).unwrap_or(0);
        self.focus(all[(idx + all.len() - 1) % all.len()]);
    }

    /// Try to submit the brief. Returns the action to dispatch.
    fn try_submit(&self) -> Option<Action> {
        if self.generating {
            Some(Action::SetStatus(
                "Generation already in progress".to_string(),
            ))
        } else if !self.brief.required_fields_filled() {
            Some(Action::SetStatus(
                "Topic and Goal are required before generating".to_string(),
            ))
        } else {
            Some(Action::SubmitBrief(Box::new(self.brief.clone())))
        }
    }

    /// (line, column) of the cursor within the focused field's text.
    fn cursor_line_col(text: &str, cursor: usize) -> (usize, usize) {
        let before = &text[..cursor.min(text.len())];
        let line = before.matches('\n').count();
        let col = before.rfind('\n').map(|p| cursor - p - 1).unwrap_or(cursor);
        (line, col)
    }

    /// Render one field box, with cursor when focused.
    fn render_field(&self, field: FieldId, frame: &mut Frame, area: Rect) {
        let is_focused = field == self.focused && self.wants_input();
        let border_style = if is_focused {
            Style::default().fg(Theme::accent())
        } else {
            Theme::border()
        };

        let mut title = vec![Span::styled(
            format!(" {} ", field.label()),
            if is_focused {
                Theme::key_hint()
            } else {
                Theme::muted()
            },
        )];
        if field.is_required() {
            title.push(Span::styled("* ", Theme::required()));
        }

        let block = Block::default()
            .title(Line::from(title))
            .borders(Borders::ALL)
            .border_style(border_style);

        let text = self.brief.field(field);

        if text.is_empty() && !is_focused {
            let display = Paragraph::new(Span::styled(placeholder(field), Theme::dim()))
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(display, area);
            return;
        }

        if !is_focused {
            let display = Paragraph::new(text)
                .style(Theme::normal())
                .wrap(Wrap { trim: false })
                .block(block);
            frame.render_widget(display, area);
            return;
        }

        // Focused: render line by line with an inline cursor cell.
        let (cursor_line, cursor_col) = Self::cursor_line_col(text, self.cursor);
        let lines: Vec<Line> = text
            .split('\n')
            .enumerate()
            .map(|(i, line_text)| {
                if i != cursor_line {
                    return Line::from(Span::styled(line_text, Theme::normal()));
                }
                let col = cursor_col.min(line_text.len());
                let (before, after) = line_text.split_at(col);
                let cursor_char = after.chars().next().map(|c| c.to_string());
                let rest = match &cursor_char {
                    Some(c) => &after[c.len()..],
                    None => "",
                };
                Line::from(vec![
                    Span::styled(before, Theme::normal()),
                    Span::styled(
                        cursor_char.unwrap_or_else(|| " ".to_string()),
                        Style::default().fg(Theme::bg()).bg(Theme::accent()),
                    ),
                    Span::styled(rest, Theme::normal()),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    /// Render the key-hint / status footer under the fields.
    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let footer = if self.generating {
            Paragraph::new(Span::styled(
                "  Generating script...",
                Style::default().fg(Theme::warning()),
            ))
        } else {
            let submit_style = if self.can_submit() {
                Theme::key_hint()
            } else {
                Theme::dim()
            };
            let mut spans = vec![
                Span::styled("  ctrl+s", submit_style),
                Span::styled(" generate  ", Theme::dim()),
                Span::styled("tab/↑↓", Theme::key_hint()),
                Span::styled(" move  ", Theme::dim()),
                Span::styled("ctrl+w", Theme::key_hint()),
                Span::styled(" delete word", Theme::dim()),
            ];
            if !self.brief.required_fields_filled() {
                spans.push(Span::styled("   topic and goal required", Theme::muted()));
            }
            Paragraph::new(Line::from(spans))
        };
        frame.render_widget(footer, area);
    }
}

impl Component for BriefFormComponent {
    fn handle_action(&mut self, action: &Action) -> Option<Action> {
        match action {
            Action::CharInput(c) => {
                self.insert_char(*c);
                None
            }
            Action::BackspaceInput => {
                self.delete_char();
                None
            }
            Action::DeleteWord => {
                self.delete_word();
                None
            }
            Action::PasteBulk(text) => {
                self.insert_str(text);
                None
            }
            Action::NewlineInput => {
                // Enter inserts a newline in multi-line fields and advances
                // focus in single-line ones.
                if is_multiline(self.focused) {
                    self.insert_char('\n');
                } else {
                    self.next_field();
                }
                None
            }
            Action::NextField => {
                self.next_field();
                None
            }
            Action::PrevField => {
                self.prev_field();
                None
            }
            Action::SubmitForm | Action::Confirm => self.try_submit(),
            _ => None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Min(6),    // Field column
            Constraint::Length(2), // Footer
        ])
        .split(area);

        let column = chunks[0];
        let viewport = column.height;

        // Scroll the field column just enough to keep the focused field
        // fully visible. Computed fresh each render from the focus alone.
        let mut focused_end = 0u16;
        for field in FieldId::all() {
            focused_end += field_height(*field);
            if *field == self.focused {
                break;
            }
        }
        let scroll = focused_end.saturating_sub(viewport);

        // Lay the fields out top to bottom, skipping any that don't fully
        // fit in the viewport after scrolling.
        let mut y = 0u16;
        for field in FieldId::all() {
            let h = field_height(*field);
            if y >= scroll && y + h <= scroll + viewport {
                let rect = Rect {
                    x: column.x,
                    y: column.y + (y - scroll),
                    width: column.width,
                    height: h,
                };
                self.render_field(*field, frame, rect);
            }
            y += h;
        }

        self.render_footer(frame, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(topic: &str, goal: &str, generating: bool) -> BriefFormComponent {
        let mut form = BriefFormComponent::new();
        form.brief.set_field(FieldId::Topic, topic.to_string());
        form.brief.set_field(FieldId::Goal, goal.to_string());
        form.generating = generating;
        form
    }

    #[test]
    fn submit_enabled_only_with_topic_goal_and_idle() {
        // All combinations of {topic empty, goal empty} x {generating}.
        for (topic, goal, generating, expected) in [
            ("", "", false, false),
            ("t", "", false, false),
            ("", "g", false, false),
            ("t", "g", false, true),
            ("", "", true, false),
            ("t", "", true, false),
            ("", "g", true, false),
            ("t", "g", true, false),
        ] {
            let form = form_with(topic, goal, generating);
            assert_eq!(
                form.can_submit(),
                expected,
                "topic={topic:?} goal={goal:?} generating={generating}"
            );
        }
    }

    #[test]
    fn submit_produces_brief_snapshot() {
        let mut form = form_with("The Rosary", "Teach its history", false);
        match form.handle_action(&Action::SubmitForm) {
            Some(Action::SubmitBrief(brief)) => {
                assert_eq!(brief.topic, "The Rosary");
                assert_eq!(brief.goal, "Teach its history");
            }
            other => panic!("expected SubmitBrief, got {other:?}"),
        }
    }

    #[test]
    fn submit_while_generating_is_refused() {
        let mut form = form_with("t", "g", true);
        match form.handle_action(&Action::SubmitForm) {
            Some(Action::SetStatus(msg)) => assert!(msg.contains("in progress")),
            other => panic!("expected SetStatus, got {other:?}"),
        }
    }

    #[test]
    fn submit_with_missing_required_is_refused() {
        let mut form = form_with("only topic", "", false);
        match form.handle_action(&Action::SubmitForm) {
            Some(Action::SetStatus(msg)) => assert!(msg.contains("required")),
            other => panic!("expected SetStatus, got {other:?}"),
        }
    }

    #[test]
    fn typing_edits_only_the_focused_field() {
        let mut form = BriefFormComponent::new();
        for c in "Lourdes".chars() {
            form.handle_action(&Action::CharInput(c));
        }
        assert_eq!(form.brief.topic, "Lourdes");
        for field in FieldId::all().iter().skip(1) {
            assert_eq!(form.brief.field(*field), "");
        }
    }

    #[test]
    fn enter_advances_in_single_line_and_inserts_in_multiline() {
        let mut form = BriefFormComponent::new();
        assert_eq!(form.focused, FieldId::Topic);

        form.handle_action(&Action::NewlineInput);
        assert_eq!(form.focused, FieldId::Goal);
        assert_eq!(form.brief.topic, "");

        form.handle_action(&Action::CharInput('a'));
        form.handle_action(&Action::NewlineInput);
        form.handle_action(&Action::CharInput('b'));
        assert_eq!(form.focused, FieldId::Goal);
        assert_eq!(form.brief.goal, "a\nb");
    }

    #[test]
    fn field_focus_wraps_both_directions() {
        let mut form = BriefFormComponent::new();
        form.handle_action(&Action::PrevField);
        assert_eq!(form.focused, FieldId::AdditionalNotes);
        form.handle_action(&Action::NextField);
        assert_eq!(form.focused, FieldId::Topic);
    }

    #[test]
    fn paste_into_single_line_keeps_first_line_only() {
        let mut form = BriefFormComponent::new();
        form.handle_action(&Action::PasteBulk("The Eucharist\nextra line".to_string()));
        assert_eq!(form.brief.topic, "The Eucharist");
    }

    #[test]
    fn delete_word_removes_trailing_word() {
        let mut form = BriefFormComponent::new();
        for c in "daily rosary".chars() {
            form.handle_action(&Action::CharInput(c));
        }
        form.handle_action(&Action::DeleteWord);
        assert_eq!(form.brief.topic, "daily ");
    }
}
