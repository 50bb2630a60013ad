//! The result view — shows the generated script read-only.
//!
//! The completion returns a markdown-style table; it is displayed verbatim
//! as preformatted text, never parsed or re-rendered.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::action::Action;
use crate::components::Component;
use crate::theme::Theme;

pub struct ScriptViewComponent {
    /// The generated script (or the fixed error message).
    pub script: String,
    /// Topic and goal of the brief the script was generated from,
    /// shown in the header.
    pub topic: String,
    pub goal: String,
    /// Vertical scroll offset into the script text.
    scroll: u16,
}

impl ScriptViewComponent {
    pub fn new() -> Self {
        Self {
            script: String::new(),
            topic: String::new(),
            goal: String::new(),
            scroll: 0,
        }
    }

    /// Store a fresh result and reset the viewport to the top.
    pub fn show(&mut self, script: String, topic: String, goal: String) {
        self.script = script;
        self.topic = topic;
        self.goal = goal;
        self.scroll = 0;
    }

    fn line_count(&self) -> u16 {
        self.script.lines().count() as u16
    }
}

impl Component for ScriptViewComponent {
    fn handle_action(&mut self, action: &Action) -> Option<Action> {
        match action {
            Action::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            Action::ScrollDown => {
                if self.scroll + 1 < self.line_count() {
                    self.scroll += 1;
                }
                None
            }
            // Enter in the result view starts a new script.
            Action::Confirm => Some(Action::NewScript),
            _ => None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(4), // Brief summary header
            Constraint::Min(5),    // Script body
            Constraint::Length(1), // Key hints
        ])
        .split(area);

        // ── Header: which brief produced this script ────────────
        let header = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Topic: ", Theme::header()),
                Span::styled(&self.topic, Theme::normal()),
            ]),
            Line::from(vec![
                Span::styled("Goal: ", Theme::header()),
                Span::styled(&self.goal, Theme::normal()),
            ]),
        ])
        .block(
            Block::default()
                .title(" Generated Script ")
                .title_style(Theme::title())
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        );
        frame.render_widget(header, chunks[0]);

        // ── Script body, verbatim and unwrapped ─────────────────
        let body_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border());
        let body = Paragraph::new(self.script.as_str())
            .style(Theme::normal())
            .scroll((self.scroll, 0))
            .block(body_block);
        frame.render_widget(body, chunks[1]);

        // ── Key hints ───────────────────────────────────────────
        let hints = Paragraph::new(Line::from(vec![
            Span::styled("  n", Theme::key_hint()),
            Span::styled(" new script  ", Theme::dim()),
            Span::styled("j/k", Theme::key_hint()),
            Span::styled(" scroll  ", Theme::dim()),
            Span::styled("q", Theme::key_hint()),
            Span::styled(" quit", Theme::dim()),
        ]));
        frame.render_widget(hints, chunks[2]);
    }
}
