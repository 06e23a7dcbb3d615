//! Core value types for the Tessera grid container.
//!
//! This is the leaf crate with zero dependencies. It defines the
//! coordinate types ([`Position`], [`Size`]) and the unique grid
//! identity type ([`GridId`]) used throughout the Tessera workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod id;
pub mod position;

pub use id::GridId;
pub use position::{Position, Size};
