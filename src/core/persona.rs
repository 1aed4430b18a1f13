//! Persona text decoration.
//!
//! A persona is a cosmetic style applied to assistant replies before they
//! enter the transcript. Decoration is purely presentational: it never
//! changes the request sent to the backend, and backend-reported errors
//! bypass it entirely.

/// Reply decoration style, cycled from the chat view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Persona {
    #[default]
    Friendly,
    Formal,
    Sarcastic,
    Motivational,
}

impl Persona {
    /// All personas in cycling order.
    pub const ALL: [Persona; 4] = [
        Persona::Friendly,
        Persona::Formal,
        Persona::Sarcastic,
        Persona::Motivational,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Persona::Friendly => "Friendly",
            Persona::Formal => "Formal",
            Persona::Sarcastic => "Sarcastic",
            Persona::Motivational => "Motivational",
        }
    }

    /// Prefix prepended to answers. Formal adds nothing.
    fn prefix(&self) -> &'static str {
        match self {
            Persona::Friendly => "Happy to help!",
            Persona::Formal => "",
            Persona::Sarcastic => "Oh, what a question.",
            Persona::Motivational => "Great question, keep 'em coming!",
        }
    }

    /// Decorate an answer: prefix, one space, then the answer unchanged.
    pub fn decorate(&self, answer: &str) -> String {
        format!("{} {}", self.prefix(), answer)
    }

    /// Next persona in cycling order, wrapping around.
    pub fn next(&self) -> Persona {
        let pos = Self::ALL.iter().position(|p| p == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    /// Previous persona in cycling order, wrapping around.
    pub fn prev(&self) -> Persona {
        let pos = Self::ALL.iter().position(|p| p == self).unwrap_or(0);
        Self::ALL[(pos + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Render a backend-reported application error. Identical for every persona.
pub fn backend_error(message: &str) -> String {
    format!("Backend Error: {}", message)
}
