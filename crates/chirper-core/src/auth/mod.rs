//! Session handling for the api key issued at sign-in and sign-up.
//!
//! This module provides:
//! - `SessionStorage`: a key/value store scoped to one session, with an
//!   in-memory (`MemoryStorage`) and a file-backed (`FileStorage`) version
//! - `Session`: access to the api key stored under `"api-key"`

pub mod session;
pub mod storage;

pub use session::{Session, API_KEY_STORAGE_KEY};
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
