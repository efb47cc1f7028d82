//! Answer Scoring Module
//!
//! Compares a free-text user response against the stored reference answer of
//! a guided question and produces a similarity score in [0, 1].
//!
//! ## Overview
//! Scoring is a two-document similarity problem: the stored answer and the
//! user response are vectorized as a tiny corpus by the TF-IDF engine, and
//! the score is the cosine similarity of the two resulting unit vectors.
//! Because the weights are non-negative the dot product already lands in
//! [0, 1] with no clamping.
//!
//! ## Submodules
//! - **`engine`**: The similarity computation.
//! - **`handlers`**: HTTP request handler for `/problem-canvas`.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod engine;
pub mod handlers;
pub mod types;
