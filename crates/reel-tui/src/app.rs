//! Main application state and render loop.
//!
//! The App owns the brief/result/mode triple and is the only place the
//! completion service is called. One submission at a time: the `generating`
//! flag is checked here before spawning, not just reflected in the UI.

use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout};
use ratatui::Terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

use reel_client::CompletionService;
use reel_core::brief::{FieldId, ScriptBrief};
use reel_core::prompt::build_prompt;

use crate::action::{Action, InputMode, UiMode};
use crate::components::brief_form::BriefFormComponent;
use crate::components::help::HelpComponent;
use crate::components::script_view::ScriptViewComponent;
use crate::components::status_bar::StatusBarComponent;
use crate::components::Component;
use crate::event::{self, EventHandler, InputModeFlag};

/// What the user sees when the completion call fails, whatever the reason.
pub const GENERATION_ERROR_MESSAGE: &str = "Error generating script. Please try again.";

/// Main application state.
pub struct App {
    /// Which view is showing.
    mode: UiMode,
    /// Whether the app should exit.
    should_quit: bool,
    /// Shared flag to tell the EventHandler which key-mapping to use.
    input_mode_flag: InputModeFlag,

    /// The completion capability, injected so tests can substitute a stub.
    service: Arc<dyn CompletionService>,
    /// Configured approximate word count for the script's audio column.
    word_target: usize,

    /// Whether a generation is in flight. At most one at a time.
    generating: bool,
    /// The most recent generation outcome: completion text or the fixed
    /// error message. Overwritten on each submission.
    result: String,

    // Components
    brief_form: BriefFormComponent,
    script_view: ScriptViewComponent,
    status_bar: StatusBarComponent,
    help: HelpComponent,
}

impl App {
    pub fn new(service: Arc<dyn CompletionService>, word_target: usize) -> Self {
        Self {
            mode: UiMode::Form,
            should_quit: false,
            input_mode_flag: event::new_input_mode_flag(),
            service,
            word_target,
            generating: false,
            result: String::new(),
            brief_form: BriefFormComponent::new(),
            script_view: ScriptViewComponent::new(),
            status_bar: StatusBarComponent::new(),
            help: HelpComponent::new(),
        }
    }

    /// Pre-fill the topic from CLI args.
    pub fn set_initial_topic(&mut self, topic: String) {
        self.brief_form.brief.set_field(FieldId::Topic, topic);
    }

    pub fn mode(&self) -> UiMode {
        self.mode
    }

    pub fn generating(&self) -> bool {
        self.generating
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn brief(&self) -> &ScriptBrief {
        &self.brief_form.brief
    }

    /// Run the TUI application.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        // Set up terminal.
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        )?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Create the action channel.
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();

        // Start the event handler with the shared input mode flag.
        let event_tx = tx.clone();
        let mode_flag = self.input_mode_flag.clone();
        let event_handler = EventHandler::new(event_tx, Duration::from_millis(100), mode_flag);
        tokio::spawn(async move {
            event_handler.run().await;
        });

        // The form starts in editing mode.
        self.sync_input_mode();

        // Main loop.
        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if let Some(action) = rx.recv().await {
                self.handle_action(&action, &tx);

                if self.should_quit {
                    break;
                }
            }
        }

        // Restore terminal.
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste
        )?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Determine and set the correct input mode based on the current view
    /// and generation state. Called after every action.
    fn sync_input_mode(&self) {
        let mode = self.current_input_mode();
        event::set_input_mode(&self.input_mode_flag, mode);
    }

    /// What input mode should be active right now?
    fn current_input_mode(&self) -> InputMode {
        // While help is visible, stay in normal mode so any key closes it.
        if self.help.visible {
            return InputMode::Normal;
        }

        match self.mode {
            UiMode::Form => {
                if self.brief_form.wants_input() {
                    InputMode::Editing
                } else {
                    InputMode::Normal
                }
            }
            UiMode::Result => InputMode::Normal,
        }
    }

    /// Dispatch an action to all relevant components.
    pub fn handle_action(&mut self, action: &Action, tx: &mpsc::UnboundedSender<Action>) {
        // Global actions first.
        match action {
            Action::Quit => {
                self.should_quit = true;
                return;
            }
            Action::SubmitBrief(brief) => {
                self.start_generation((**brief).clone(), tx);
            }
            Action::ScriptGenerated(text) => {
                info!("Script generated: {} chars", text.len());
                self.generating = false;
                self.brief_form.generating = false;
                self.result = text.clone();
                self.script_view.show(
                    text.clone(),
                    self.brief_form.brief.topic.clone(),
                    self.brief_form.brief.goal.clone(),
                );
                self.mode = UiMode::Result;
                self.status_bar.mode = self.mode;
                self.status_bar.message = "Script generated. Press n for a new one.".to_string();
            }
            Action::GenerationFailed(err) => {
                // Any failure collapses to one fixed user-visible message,
                // shown through the normal result view.
                error!("Generation failed: {}", err);
                self.generating = false;
                self.brief_form.generating = false;
                self.result = GENERATION_ERROR_MESSAGE.to_string();
                self.script_view.show(
                    self.result.clone(),
                    self.brief_form.brief.topic.clone(),
                    self.brief_form.brief.goal.clone(),
                );
                self.mode = UiMode::Result;
                self.status_bar.mode = self.mode;
                self.status_bar.message = "Generation failed".to_string();
            }
            Action::NewScript => {
                // Back to the form. The brief is intentionally retained so
                // the next script can start from the previous answers.
                if self.mode == UiMode::Result {
                    self.mode = UiMode::Form;
                    self.status_bar.mode = self.mode;
                }
            }
            _ => {}
        }

        // Forward to the active view's component.
        let result = match self.mode {
            UiMode::Form => self.brief_form.handle_action(action),
            UiMode::Result => self.script_view.handle_action(action),
        };

        // Always forward to overlays and status bar.
        self.help.handle_action(action);
        self.status_bar.handle_action(action);

        // Sync input mode after every action (the view or the generation
        // state may have changed).
        self.sync_input_mode();

        // Handle chained actions from components.
        if let Some(chained) = result {
            self.handle_action(&chained, tx);
        }
    }

    /// Start one generation: build the prompt, call the service on a
    /// background task, and report back through the action channel.
    fn start_generation(&mut self, brief: ScriptBrief, tx: &mpsc::UnboundedSender<Action>) {
        // Re-entrant guard: the form disables submit while generating, but
        // the flag is also checked here so overlapping submissions are
        // impossible even if a submit action slips through.
        if self.generating {
            let _ = tx.send(Action::SetStatus(
                "Generation already in progress".to_string(),
            ));
            return;
        }

        self.generating = true;
        self.brief_form.generating = true;
        let _ = tx.send(Action::SetStatus("Generating script...".to_string()));

        let prompt = build_prompt(&brief, self.word_target);
        info!(topic = %brief.topic, "Submitting brief ({} char prompt)", prompt.len());

        let service = self.service.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            match service.generate(&prompt).await {
                Ok(text) => {
                    let _ = tx.send(Action::ScriptGenerated(text));
                }
                Err(e) => {
                    let _ = tx.send(Action::GenerationFailed(format!("{e}")));
                }
            }
        });
    }

    /// Render the full UI.
    fn render(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Min(10),   // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        match self.mode {
            UiMode::Form => self.brief_form.render(frame, chunks[0]),
            UiMode::Result => self.script_view.render(frame, chunks[0]),
        }

        self.status_bar.render(frame, chunks[1]);

        // Overlay (rendered on top).
        self.help.render(frame, area);
    }
}
