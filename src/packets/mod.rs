//! Question Packet Catalog Module
//!
//! Owns the static reference data for guided questions: named packets, each
//! holding an ordered list of (question, stored answer) pairs.
//!
//! ## Overview
//! The catalog is loaded exactly once at process start, either from the JSON
//! document bundled into the binary or from a file passed on the command
//! line, and is shared read-only across all requests. Nothing at runtime can
//! mutate it; the scoring engine only ever receives the two strings a
//! resolution produced.
//!
//! ## Submodules
//! - **`catalog`**: Catalog construction, loading, and lookup.
//! - **`handlers`**: HTTP handler listing packets and their questions.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod catalog;
pub mod handlers;
pub mod types;
