//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! rireki crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use rireki::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Restore the previous session and keep editing
//! let payload = SavedDocument::from_file("path/to/flow.rireki")?;
//! let mut store = EditorStore::new();
//! store.load_document(payload);
//!
//! store.remove_node("obsolete-step");
//!
//! // Persist the result and mark the save boundary
//! store.export_snapshot("flow").save("path/to/flow.rireki")?;
//! store.mark_clean();
//! # Ok(())
//! # }
//! ```

// Store and configuration
pub use crate::store::{DEFAULT_UNDO_CAPACITY, EditorStore, EditorStoreBuilder};

// Document model
pub use crate::document::{Connection, Document, Node, Position, SavedDocument, Value};

// Conversion boundary
pub use crate::document::IntoDocument;
pub use crate::ui::{UiConnection, UiDocument, UiNode, UiPosition};

// Error types
pub use crate::error::{DocumentConversionError, PersistError};

// Hash map used for node data bags throughout this crate
pub use ahash::AHashMap;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
