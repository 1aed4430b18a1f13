//! Content views, one per top-level focus.

pub mod about;
pub mod chat;
pub mod docs;
pub mod upload;
