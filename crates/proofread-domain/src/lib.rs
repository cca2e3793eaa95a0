//! Proofread Domain Layer
//!
//! This crate contains the core value types and trait interfaces shared by
//! every other Proofread crate. It has no external dependencies.
//!
//! ## Key Concepts
//!
//! - **Issue**: one flagged span of text with a suggested correction and rationale
//! - **Advisory position**: an offset supplied by the remote analysis service
//!   that is not independently verified against the source text
//! - **Transport**: the "send JSON, receive status and body" primitive used to
//!   reach the remote analysis service
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure value types only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod issue;
pub mod traits;

// Re-exports for convenience
pub use issue::Issue;
pub use traits::{AnalysisTransport, TransportResponse};
