//! Core library for visionrelay
//!
//! This crate implements the **Functional Core** of the visionrelay service,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`visionrelay_core`** (this crate): Pure transformation functions with zero I/O
//! - **`visionrelay`**: HTTP server, model client and CLI (the Imperative Shell)
//!
//! Everything here is deterministic and can be tested with fixture strings; nothing
//! in this crate talks to the network.
//!
//! # Module Organization
//!
//! - [`answer`]: Picks the final answer line out of a free-text model reply
//! - [`analyze`]: Turns an `/analyze` request into a Messages API payload and back
//!
//! # Example Usage
//!
//! ```rust
//! use visionrelay_core::answer::extract_answer;
//!
//! let reply = "[1,1] cercle noir\n[1,2] carré blanc\nQuestion 5 réponse C\n";
//! assert_eq!(extract_answer(reply).as_deref(), Some("Question 5 réponse C"));
//! ```

pub mod analyze;
pub mod answer;
