//! Action enum — the central message bus for the TUI.
//! All user interactions and async results flow through here.

use reel_core::brief::ScriptBrief;

/// Every possible action that can occur in the application.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Global ──────────────────────────────────────────────
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Display a status message in the status bar.
    SetStatus(String),
    /// Clear the status message.
    ClearStatus,
    /// A tick event for animations and polling.
    Tick,

    // ── Text input (form view, editing mode) ────────────────
    /// A character was typed.
    CharInput(char),
    /// Backspace pressed.
    BackspaceInput,
    /// Delete word (Ctrl+W).
    DeleteWord,
    /// Insert a newline in the focused field (Enter in multi-line fields).
    NewlineInput,
    /// Bulk paste from bracketed paste mode.
    PasteBulk(String),
    /// Move focus to the next field (Tab / Down).
    NextField,
    /// Move focus to the previous field (Shift+Tab / Up).
    PrevField,
    /// Submit the form (Ctrl+S / Ctrl+Enter).
    SubmitForm,

    // ── Submission lifecycle ────────────────────────────────
    /// The form validated and produced a brief snapshot to generate from.
    SubmitBrief(Box<ScriptBrief>),
    /// The completion service returned a script.
    ScriptGenerated(String),
    /// The completion call failed; carries the underlying error for logging.
    GenerationFailed(String),

    // ── Result view ─────────────────────────────────────────
    /// Return to the form for another script.
    NewScript,
    ScrollUp,
    ScrollDown,
    Confirm,
}

/// Whether the app is in a text-input mode where raw keys should
/// be forwarded to the focused field instead of interpreted as
/// global shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Normal mode — keys are global shortcuts.
    Normal,
    /// Text input mode — keys go to the focused form field.
    Editing,
}

/// Which of the two views is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// The editable brief form.
    Form,
    /// The read-only generated script.
    Result,
}

impl UiMode {
    pub fn label(&self) -> &'static str {
        match self {
            UiMode::Form => "Brief",
            UiMode::Result => "Script",
        }
    }
}
