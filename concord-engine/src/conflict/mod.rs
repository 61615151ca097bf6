//! Conflict detection and resolution.

pub mod detector;
pub mod resolver;

pub use detector::detect;
pub use resolver::resolve;
