//! # parkit-adapter-console
//!
//! Terminal adapter for the attendant's console.
//!
//! ## Responsibilities
//! - Implement `InputReader` over any line-oriented reader (stdin in production)
//! - Implement `Notifier` by rendering notices as text lines on any writer
//!
//! ## Dependency rule
//! Depends on `parkit-app` (for port traits) and `parkit-domain` (for domain types).

pub mod input;
pub mod notifier;

pub use input::LineInputReader;
pub use notifier::{ConsoleNotifier, render};
