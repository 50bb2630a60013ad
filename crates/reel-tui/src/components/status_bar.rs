//! Status bar at the bottom of the TUI.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::action::{Action, UiMode};
use crate::components::Component;
use crate::theme::Theme;

pub struct StatusBarComponent {
    /// Current status message.
    pub message: String,
    /// Which view is showing.
    pub mode: UiMode,
}

impl StatusBarComponent {
    pub fn new() -> Self {
        Self {
            message: "Fill in the brief, then ctrl+s to generate.".to_string(),
            mode: UiMode::Form,
        }
    }
}

impl Component for StatusBarComponent {
    fn handle_action(&mut self, action: &Action) -> Option<Action> {
        match action {
            Action::SetStatus(msg) => {
                self.message = msg.clone();
                None
            }
            Action::ClearStatus => {
                self.message.clear();
                None
            }
            _ => None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let width = area.width as usize;

        // Right side: compact key hints.
        let hints = "q·?";
        let hints_len = hints.len() + 1;

        // Mode badge.
        let badge = self.mode.label();
        let badge_len = badge.len() + 2;

        // Truncate message to remaining space.
        let msg_budget = width
            .saturating_sub(badge_len)
            .saturating_sub(hints_len)
            .saturating_sub(4);

        let msg = fit_message(&self.message, msg_budget);

        // Pad to push hints to the right edge.
        let used = badge_len + 2 + msg.len();
        let pad = width.saturating_sub(used + hints_len);

        let line = Line::from(vec![
            Span::styled(format!(" {} ", badge), Theme::muted()),
            Span::styled("  ", Theme::dim()),
            Span::styled(msg, Theme::dim()),
            Span::raw(" ".repeat(pad)),
            Span::styled(hints, Theme::key_hint()),
            Span::raw(" "),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Truncate a message to `budget` bytes, appending "..." where it was
/// cut. Cuts only on char boundaries so multibyte text never panics.
fn fit_message(message: &str, budget: usize) -> String {
    if message.len() <= budget {
        return message.to_string();
    }
    if budget <= 3 {
        return String::new();
    }
    let cut = message
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= budget - 3)
        .last()
        .unwrap_or(0);
    format!("{}...", &message[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_message_passes_through() {
        assert_eq!(fit_message("ready", 40), "ready");
        assert_eq!(fit_message("", 0), "");
    }

    #[test]
    fn truncation_never_splits_multibyte_chars() {
        let msg = "Échec de génération — réessayez dans un instant";
        for budget in 0..msg.len() + 4 {
            let out = fit_message(msg, budget);
            assert!(
                out.len() <= budget,
                "budget {} produced {} bytes",
                budget,
                out.len()
            );
            // String indexing panics on a bad boundary, so reaching
            // here at all proves the cut was valid; also check the
            // prefix survived intact.
            if let Some(prefix) = out.strip_suffix("...") {
                assert!(msg.starts_with(prefix));
            }
        }
    }

    #[test]
    fn tiny_budget_yields_empty_message() {
        assert_eq!(fit_message("long enough to truncate", 3), "");
        assert_eq!(fit_message("long enough to truncate", 0), "");
    }
}
