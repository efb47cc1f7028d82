//! TF-IDF Vectorization Module
//!
//! The core component responsible for turning a submitted document set into a
//! term-weight matrix.
//!
//! ## Overview
//! This module implements the vectorization pipeline for the analysis API.
//! A request carries an ordered list of documents (inline texts and/or
//! uploaded files); the engine tokenizes each document, builds the request's
//! vocabulary, and computes smoothed TF-IDF weights with per-document L2
//! normalization.
//!
//! ## Responsibilities
//! - **Tokenization**: Normalizing raw text into index terms (lowercase,
//!   Unicode alphanumeric runs).
//! - **Weighting**: Term frequency scaled by smoothed inverse document
//!   frequency, normalized per document.
//! - **API**: Exposing the `/tfidf` endpoint via the Axum web server.
//!
//! ## Submodules
//! - **`engine`**: Vocabulary construction and weight computation.
//! - **`handlers`**: HTTP request handlers (multipart form intake).
//! - **`tokenizer`**: Text normalization utilities.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod engine;
pub mod handlers;
pub mod tokenizer;
pub mod types;
