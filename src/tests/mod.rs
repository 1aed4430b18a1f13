//! Internal test suites.
//!
//! Unit tests live beside the code they cover in `#[cfg(test)]` modules;
//! this tree holds the cross-module suites: property-based invariants over
//! the session, persona, and document layers.

mod property;
