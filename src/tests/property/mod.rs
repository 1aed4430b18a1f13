//! Property-based tests for RoleDoc
//!
//! This module contains property-based tests using the proptest framework.
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Running Property Tests
//!
//! Run all property tests:
//! ```sh
//! cargo test property --release
//! ```
//!
//! Run a specific property test module:
//! ```sh
//! cargo test property::session_props --release
//! ```
//!
//! ## Test Modules
//!
//! - `session_props`: Tests for the chat session state machine
//!   - Transport failures rotate three distinct replies in a fixed order
//!   - Successful answers are decorated but never altered
//!   - Backend-reported errors render literally for every persona
//!   - Blank input and pending requests never start a turn
//!   - Every completed turn returns the session to idle
//!
//! - `document_props`: Tests for document naming and staging
//!   - Stripping the display stem removes exactly one final extension
//!   - The stem is always a prefix of the original name
//!   - `.txt` staging accepts arbitrary content
//!   - Unknown extensions are rejected with the allow-list message
//!   - `.pdf` staging demands the `%PDF-` header
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable:
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property --release
//! ```

mod document_props;
mod session_props;
