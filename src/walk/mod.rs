//! Directory tree walking logic
//!
//! This module provides the depth-first traversal shared by the scanner and
//! the organizer. The walker itself carries no policy: each caller supplies a
//! [`Visit`] implementation that decides what happens per file and per
//! finished directory.

mod visitor;
mod walker;

// Re-export public types
pub use visitor::Visit;
pub use walker::walk;
