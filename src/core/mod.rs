
pub mod backend;
pub mod document;
pub mod logging;
pub mod persona;
pub mod progress;
pub mod session;
