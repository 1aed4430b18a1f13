//! Reusable widgets shared across views.

pub mod input_buffer;
