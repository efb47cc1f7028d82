//! Text Analysis Backend Library
//!
//! This library crate defines the core modules behind the analysis HTTP API.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of three loosely coupled subsystems plus a shared
//! error layer:
//!
//! - **`tfidf`**: The vectorization engine. Tokenizes a submitted document set
//!   and produces the vocabulary together with an L2-normalized TF-IDF weight
//!   matrix.
//! - **`scoring`**: The answer-similarity engine. Compares a user response
//!   against a stored reference answer and produces a cosine-similarity score
//!   in [0, 1].
//! - **`packets`**: The static question/answer catalog. Loaded once at process
//!   start (bundled default or external JSON file) and shared read-only across
//!   requests.
//! - **`error`**: The API error taxonomy (InvalidInput / NotFound / Internal)
//!   and its mapping to HTTP response shapes.
//!
//! Both engines are pure, synchronous, and stateless: every request is
//! independent, nothing is retained between calls, and there is no shared
//! mutable state anywhere in the core.

pub mod error;
pub mod packets;
pub mod scoring;
pub mod tfidf;
