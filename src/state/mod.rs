/// State management module
///
/// This module handles all application state, including:
/// - The book data model and validation (data.rs)
/// - The in-memory library store (library.rs)
/// - JSON persistence to the backing file (persist.rs)
/// - Pure filter/sort queries (query.rs)
/// - Statistics aggregation (stats.rs)

pub mod data;
pub mod library;
pub mod persist;
pub mod query;
pub mod stats;
