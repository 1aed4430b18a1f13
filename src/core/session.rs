//! Chat session state machine.
//!
//! One session owns the transcript for one document and enforces the single
//! in-flight request rule: `Idle → Sending → (Success | Failure) → Idle`,
//! where only `Idle` permits a new request. The user turn is appended
//! optimistically when the request starts; the assistant turn is appended
//! when the outcome arrives, and the session returns to `Idle` no matter
//! what that outcome was.
//!
//! Transport failures surface as a rotation of three generic messages with
//! the counter scoped to this session, so independent sessions rotate
//! independently. The real cause is logged, never shown.

use crate::core::backend::{BackendError, QueryResponse};
use crate::core::document;
use crate::core::persona::{self, Persona};

/// Shown when a well-formed reply carries neither a result nor an error.
pub const FALLBACK_ANSWER: &str = "Sorry, I couldn't find an answer.";

/// Generic transport-failure replies, in rotation order.
const ERROR_ROTATION: [&str; 3] = [
    "Hmm, I lost my train of thought. Ask me again?",
    "The connection slipped away from me. One more try?",
    "I can't reach my sources right now. Give it another go?",
];

// ============================================================================
// Transcript types
// ============================================================================

/// Who authored a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One transcript turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

/// Request guard state. Only `Idle` permits a new request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnState {
    #[default]
    Idle,
    Sending,
}

/// Query ready to hand to the backend client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundQuery {
    pub query: String,
    pub file_name: String,
}

// ============================================================================
// Error rotation
// ============================================================================

/// Round-robin index over [`ERROR_ROTATION`], owned by one session.
#[derive(Debug, Default)]
struct ErrorRotation {
    next_index: usize,
}

impl ErrorRotation {
    fn next_message(&mut self) -> &'static str {
        let message = ERROR_ROTATION[self.next_index % ERROR_ROTATION.len()];
        self.next_index += 1;
        message
    }
}

// ============================================================================
// Session
// ============================================================================

/// Transcript plus request state for one document conversation.
pub struct ChatSession {
    /// Name the backend knows the document by, extension included.
    file_name: String,
    /// Extension-stripped name the document speaks as.
    display_name: String,
    persona: Persona,
    transcript: Vec<ChatMessage>,
    state: TurnState,
    rotation: ErrorRotation,
}

impl ChatSession {
    /// Start a session for the named document. The transcript opens with
    /// the assistant's greeting.
    pub fn new(file_name: impl Into<String>) -> Self {
        let file_name = file_name.into();
        let display_name = document::display_stem(&file_name);
        let greeting = format!("Hey! I'm {}. What do you want to know?", display_name);
        Self {
            file_name,
            display_name,
            persona: Persona::default(),
            transcript: vec![ChatMessage {
                role: Role::Assistant,
                text: greeting,
            }],
            state: TurnState::Idle,
            rotation: ErrorRotation::default(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn persona(&self) -> Persona {
        self.persona
    }

    pub fn set_persona(&mut self, persona: Persona) {
        self.persona = persona;
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn is_sending(&self) -> bool {
        self.state == TurnState::Sending
    }

    /// Indicator text shown while a request is outstanding.
    pub fn typing_text(&self) -> String {
        format!("{} is typing...", self.display_name)
    }

    /// Try to start a turn.
    ///
    /// Returns the query to send, or `None` when the input is blank or a
    /// request is already outstanding. On success the user turn is already
    /// in the transcript and the session is `Sending`.
    pub fn begin_turn(&mut self, input: &str) -> Option<OutboundQuery> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        if self.state != TurnState::Idle {
            log::debug!("Ignoring send while a request is outstanding");
            return None;
        }

        self.transcript.push(ChatMessage {
            role: Role::User,
            text: trimmed.to_string(),
        });
        self.state = TurnState::Sending;

        Some(OutboundQuery {
            query: trimmed.to_string(),
            file_name: self.file_name.clone(),
        })
    }

    /// Finish the outstanding turn with the backend outcome.
    ///
    /// Appends the assistant turn (decorated answer, literal backend error,
    /// or the next rotation message) and returns the session to `Idle`
    /// unconditionally.
    pub fn complete_turn(&mut self, outcome: Result<QueryResponse, BackendError>) {
        if self.state != TurnState::Sending {
            log::warn!("Turn completion arrived while idle; appending anyway");
        }

        let text = match outcome {
            Ok(response) => {
                if let Some(error) = response.error {
                    if let Some(details) = response.details {
                        log::warn!("Backend error: {} ({})", error, details);
                    } else {
                        log::warn!("Backend error: {}", error);
                    }
                    persona::backend_error(&error)
                } else {
                    let answer = response.result.as_deref().unwrap_or(FALLBACK_ANSWER);
                    self.persona.decorate(answer)
                }
            }
            Err(e) => {
                log::error!("Query transport failure: {}", e);
                self.rotation.next_message().to_string()
            }
        };

        self.transcript.push(ChatMessage {
            role: Role::Assistant,
            text,
        });
        self.state = TurnState::Idle;
    }
}

// ============================================================================
// Tests
// ============================================================================
