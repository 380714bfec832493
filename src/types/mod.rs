//! Core type system and domain definitions
//!
//! This module provides the central type definitions for the issue search
//! client. All records are strongly-typed and populated directly from the
//! decoded API payload; nothing here is mutated after decode.

pub mod issue;
pub mod search;
pub mod user;

pub use issue::*;
pub use search::*;
pub use user::*;
