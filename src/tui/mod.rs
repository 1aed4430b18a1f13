//! Terminal user interface for RoleDoc.
//!
//! Elm-architecture event loop: a single [`app::AppState`] owns all UI
//! state, terminal input and background task results arrive as
//! [`events::AppEvent`]s on one channel, and every loop iteration
//! re-renders the full frame.

pub mod app;
pub mod events;
pub mod layout;
pub mod navbar;
pub mod services;
pub mod splash;
pub mod theme;
pub mod views;
pub mod widgets;
