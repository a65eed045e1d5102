//! # Codebase Name
//!
//! Normalizes git remote-clone URLs into canonical codebase names.
//!
//! A repository can be cloned through several incompatible URL grammars:
//! scp-like shorthand (`git@github.com:owner/repo.git`), explicit-scheme
//! URLs (`ssh://`, `git://`, `http(s)://`), and short host aliases
//! (`github:owner/repo`). This crate reduces all of them to one stable
//! `host[:port]/path/to/repo` identifier, suitable as a cache key or
//! repository name regardless of clone protocol or embedded credentials.
//!
//! ## Quick Start
//!
//! ```
//! use codebase_name::{codebase_name, codebase_name_or_error};
//!
//! assert_eq!(
//!     codebase_name("git@github.com:sourcegraph/sourcegraph.git").as_deref(),
//!     Some("github.com/sourcegraph/sourcegraph")
//! );
//!
//! // The fallible variant keeps the offending input in its message.
//! assert!(codebase_name_or_error("not a clone url").is_err());
//! ```
//!
//! ## Guarantees
//!
//! - Pure and deterministic: no I/O, no state, identical input yields
//!   identical output; safe to call concurrently without coordination.
//! - The output never contains a scheme, credentials, a leading slash, or
//!   a trailing `.git`.
//! - No validation that the named repository exists; the crate only
//!   normalizes strings.

pub mod error;
pub mod normalizer;

pub use error::InvalidUrlError;
pub use normalizer::{codebase_name, codebase_name_or_error};
