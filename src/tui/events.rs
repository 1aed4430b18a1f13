use crate::core::backend::{BackendError, QueryResponse};
use crate::core::document::UploadedDocumentRef;

/// Events flowing through the Elm-architecture event loop.
///
/// Not `Clone`: the query result variant carries [`BackendError`],
/// which wraps a non-cloneable `reqwest::Error`.
#[derive(Debug)]
pub enum AppEvent {
    /// Periodic tick for animations, notification TTLs, etc.
    Tick,
    /// Raw terminal input (keyboard/mouse).
    Input(crossterm::event::Event),
    /// Outcome of an in-flight `/query` round-trip.
    QueryDone(Result<QueryResponse, BackendError>),
    /// A resolved action to execute.
    Action(Action),
    /// Notification to display to the user.
    Notification(Notification),
    /// Request to quit the application.
    Quit,
}

/// High-level actions dispatched by the input mapper or navbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    FocusUpload,
    FocusChat,
    FocusDocs,
    FocusAbout,
    TabNext,
    TabPrev,
    /// Toggle input focus between the navbar and the main view.
    FocusNavbar,

    // Modals
    ToggleHelp,

    // Application
    /// Hand a staged document to the chat view and switch to it.
    OpenChat(UploadedDocumentRef),
    Quit,
}

/// Which top-level view has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    Upload,
    Chat,
    Docs,
    About,
}

impl Focus {
    pub const ALL: [Focus; 4] = [Focus::Upload, Focus::Chat, Focus::Docs, Focus::About];

    pub fn label(self) -> &'static str {
        match self {
            Focus::Upload => "Upload",
            Focus::Chat => "Chat",
            Focus::Docs => "Docs",
            Focus::About => "About",
        }
    }

    /// Next view in declaration order, wrapping.
    pub fn next(self) -> Focus {
        let idx = Focus::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Focus::ALL[(idx + 1) % Focus::ALL.len()]
    }

    /// Previous view, wrapping.
    pub fn prev(self) -> Focus {
        let idx = Focus::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Focus::ALL[(idx + Focus::ALL.len() - 1) % Focus::ALL.len()]
    }

    /// The action that focuses this view.
    pub fn to_action(self) -> Action {
        match self {
            Focus::Upload => Action::FocusUpload,
            Focus::Chat => Action::FocusChat,
            Focus::Docs => Action::FocusDocs,
            Focus::About => Action::FocusAbout,
        }
    }
}

/// Which screen area receives input first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AreaFocus {
    /// The navigation bar across the top.
    Navbar,
    /// The focused content view.
    #[default]
    Main,
}

/// Severity of a toast chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// One toast chip, alive until its clock runs out.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
    /// Frames left on screen; the tick handler counts this down.
    pub ttl_ticks: u32,
}
