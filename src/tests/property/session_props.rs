//! Property-based tests for the chat session state machine
//!
//! Tests invariants:
//! - Transport failures rotate three distinct replies in a fixed order
//! - Successful answers are decorated but never altered
//! - Backend-reported errors render literally for every persona
//! - Blank input and pending requests never start a turn
//! - Every completed turn returns the session to idle

use proptest::prelude::*;

use crate::core::backend::{BackendError, QueryResponse};
use crate::core::persona::{self, Persona};
use crate::core::session::{ChatSession, Role, TurnState};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

fn arb_persona() -> impl Strategy<Value = Persona> {
    prop_oneof![
        Just(Persona::Friendly),
        Just(Persona::Formal),
        Just(Persona::Sarcastic),
        Just(Persona::Motivational),
    ]
}

/// Printable ASCII with at least one non-space character.
fn arb_query() -> impl Strategy<Value = String> {
    "[ -~]{1,64}".prop_filter("must not be blank", |s| !s.trim().is_empty())
}

/// Whitespace-only input of varying shapes.
fn arb_blank() -> impl Strategy<Value = String> {
    "[ \t\r\n]{0,12}"
}

/// One of the three outcome shapes a turn can complete with.
fn arb_outcome() -> impl Strategy<Value = Result<QueryResponse, BackendError>> {
    prop_oneof![
        "[ -~]{0,64}".prop_map(|answer| {
            Ok(QueryResponse {
                result: Some(answer),
                ..Default::default()
            })
        }),
        "[ -~]{1,64}".prop_map(|error| {
            Ok(QueryResponse {
                error: Some(error),
                ..Default::default()
            })
        }),
        "[ -~]{1,64}".prop_map(|detail| Err(BackendError::Body(detail))),
    ]
}

fn transport_failure() -> BackendError {
    BackendError::Body("simulated transport failure".into())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Transport failures cycle three distinct replies in order
    #[test]
    fn prop_transport_failures_cycle_three_replies(failures in 1usize..24) {
        let mut session = ChatSession::new("Report.pdf");
        let mut replies = Vec::new();

        for i in 0..failures {
            session.begin_turn(&format!("attempt {i}")).unwrap();
            session.complete_turn(Err(transport_failure()));
            replies.push(session.transcript().last().unwrap().text.clone());
        }

        // The first three are pairwise distinct
        if failures >= 2 {
            prop_assert_ne!(&replies[0], &replies[1]);
        }
        if failures >= 3 {
            prop_assert_ne!(&replies[0], &replies[2]);
            prop_assert_ne!(&replies[1], &replies[2]);
        }

        // Every later reply repeats the cycle exactly
        for (i, reply) in replies.iter().enumerate() {
            prop_assert_eq!(
                reply,
                &replies[i % 3],
                "failure {} should reuse rotation slot {}",
                i,
                i % 3
            );
        }
    }

    /// Property: Successful answers are decorated but never altered
    #[test]
    fn prop_answer_survives_decoration(
        answer in "[ -~]{0,64}",
        persona in arb_persona()
    ) {
        let mut session = ChatSession::new("notes.txt");
        session.set_persona(persona);

        session.begin_turn("q").unwrap();
        session.complete_turn(Ok(QueryResponse {
            result: Some(answer.clone()),
            ..Default::default()
        }));

        let last = session.transcript().last().unwrap();
        prop_assert_eq!(last.role, Role::Assistant);
        prop_assert_eq!(&last.text, &persona.decorate(&answer));
        prop_assert!(
            last.text.ends_with(&answer),
            "reply {:?} should end with the raw answer {:?}",
            last.text,
            answer
        );
    }

    /// Property: Backend-reported errors render literally for every persona
    #[test]
    fn prop_backend_errors_bypass_personas(
        error in "[ -~]{1,64}",
        persona in arb_persona()
    ) {
        let mut session = ChatSession::new("notes.txt");
        session.set_persona(persona);

        session.begin_turn("q").unwrap();
        session.complete_turn(Ok(QueryResponse {
            error: Some(error.clone()),
            ..Default::default()
        }));

        let last = session.transcript().last().unwrap();
        prop_assert_eq!(&last.text, &persona::backend_error(&error));
        prop_assert_eq!(&last.text, &format!("Backend Error: {error}"));
    }

    /// Property: Blank input never starts a turn
    #[test]
    fn prop_blank_input_is_rejected(blank in arb_blank()) {
        let mut session = ChatSession::new("notes.txt");
        let before = session.transcript().len();

        prop_assert!(session.begin_turn(&blank).is_none());
        prop_assert_eq!(session.transcript().len(), before);
        prop_assert_eq!(session.state(), TurnState::Idle);
    }

    /// Property: The outbound query is the trimmed input
    #[test]
    fn prop_begin_turn_trims_input(query in arb_query()) {
        let mut session = ChatSession::new("notes.txt");
        let padded = format!("  {query}\t");

        let outbound = session.begin_turn(&padded).unwrap();

        prop_assert_eq!(&outbound.query, query.trim());
        prop_assert_eq!(outbound.file_name, "notes.txt");
        prop_assert_eq!(
            &session.transcript().last().unwrap().text,
            query.trim()
        );
    }

    /// Property: Only one request can be in flight
    #[test]
    fn prop_single_request_in_flight(
        first in arb_query(),
        second in arb_query()
    ) {
        let mut session = ChatSession::new("notes.txt");

        prop_assert!(session.begin_turn(&first).is_some());
        let len_after_first = session.transcript().len();

        prop_assert!(session.begin_turn(&second).is_none());
        prop_assert_eq!(session.transcript().len(), len_after_first);
        prop_assert_eq!(session.state(), TurnState::Sending);
    }

    /// Property: Every completed turn returns the session to idle
    #[test]
    fn prop_completion_always_returns_to_idle(
        query in arb_query(),
        outcome in arb_outcome()
    ) {
        let mut session = ChatSession::new("notes.txt");

        session.begin_turn(&query).unwrap();
        let len_sending = session.transcript().len();
        session.complete_turn(outcome);

        prop_assert_eq!(session.state(), TurnState::Idle);
        prop_assert_eq!(session.transcript().len(), len_sending + 1);
        prop_assert_eq!(
            session.transcript().last().unwrap().role,
            Role::Assistant
        );
    }

    /// Property: The greeting speaks as the extension-stripped name
    #[test]
    fn prop_greeting_uses_display_stem(
        stem in "[A-Za-z0-9_-]{1,16}",
        ext in "[a-z0-9]{1,6}"
    ) {
        let session = ChatSession::new(format!("{stem}.{ext}"));

        prop_assert_eq!(session.display_name(), stem.as_str());
        prop_assert_eq!(
            &session.transcript()[0].text,
            &format!("Hey! I'm {stem}. What do you want to know?")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Basic sanity test that the rotation produces the documented first reply
    #[test]
    fn test_first_transport_reply_is_stable() {
        let mut session = ChatSession::new("a.txt");
        session.begin_turn("q").unwrap();
        session.complete_turn(Err(transport_failure()));
        assert_eq!(
            session.transcript().last().unwrap().text,
            "Hmm, I lost my train of thought. Ask me again?"
        );
    }
}
