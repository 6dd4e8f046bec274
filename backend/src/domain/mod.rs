//! Transport-agnostic domain types and ports.

pub mod error;
pub mod ports;
pub mod user;

pub use error::{Error, ErrorCode};
pub use user::{User, UserDraft};
