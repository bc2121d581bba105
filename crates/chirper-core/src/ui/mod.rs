//! Page model the sign-in and sign-up handlers read from and update.

pub mod document;
pub mod elements;

pub use document::{Display, Document, MemoryDocument};
