//! Satirical news server
//!
//! Turns a user-supplied headline into a satirical HTML article or a short
//! preview by forwarding it to Gemini's `generateContent` API.

pub mod ai;
pub mod app;
pub mod config;
pub mod error;
pub mod prompts;
pub mod routes;

pub use error::{Error, Result};
