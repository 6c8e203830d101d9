//! Core library for meownorris
//!
//! This crate implements the **Functional Core** of the meownorris application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The meownorris project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`meownorris_core`** (this crate): Pure transformation functions with zero I/O
//! - **`meownorris`**: Provider calls, the HTTP server and the CLI (the Imperative Shell)
//!
//! All functions in this crate are pure: the same input always produces the same
//! output, nothing here touches the network, and every function can be tested with
//! plain fixture data.
//!
//! # Module Organization
//!
//! - [`error`]: Provider-facing and service-facing error taxonomy
//! - [`joke`]: Raw provider records, final jokes and input normalization
//! - [`mascot`]: The read-only mascot registry
//! - [`transform`]: Mascot substitution over raw joke text
//!
//! # Example Usage
//!
//! ```rust
//! use meownorris_core::joke::{build_joke, RawJoke};
//!
//! let raw = RawJoke {
//!     id: "abc".to_string(),
//!     text: "Chuck Norris doesn't wear a watch.".to_string(),
//!     categories: vec![],
//!     created_at: None,
//!     updated_at: None,
//! };
//!
//! let joke = build_joke(raw, "Woof Norris", None);
//! assert_eq!(joke.text, "Woof Norris doesn't wear a watch.");
//! ```

pub mod error;
pub mod joke;
pub mod mascot;
pub mod transform;
