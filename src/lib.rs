//! # Rireki - Bounded Snapshot History Engine
//!
//! **Rireki** is a snapshot-based undo/redo engine for node-based document
//! editors. It owns an editable document of nodes and connections, captures
//! an immutable pre-image before every accepted change, and navigates those
//! pre-images through a bounded undo stack and a redo stack with well-defined
//! invalidation semantics.
//!
//! ## Core Workflow
//!
//! The engine is designed to be format-agnostic. It operates on a canonical
//! internal model of a "document." The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your editor's wire format (e.g. from JSON) into your own Rust structs, or use the built-in [`ui::UiDocument`] types for the common camelCase canvas format.
//! 2.  **Convert to Rireki's Model**: Implement the `IntoDocument` trait for your structs to provide a translation layer into Rireki's `Document`.
//! 3.  **Edit Through the Store**: Construct an `EditorStore` and route every mutation through it. Each accepted change checkpoints automatically; no-op reports from the presentation layer are suppressed by structural equality.
//! 4.  **Navigate and Persist**: Call `undo`/`redo` on user command, and hand `export_snapshot` payloads to your persistence collaborator. `load_document` restores a session and resets history.
//!
//! ## Quick Start
//!
//! The following example demonstrates an end-to-end editing session.
//!
//! ```rust
//! use rireki::prelude::*;
//!
//! let mut store = EditorStore::new();
//!
//! // Place two nodes and wire them together.
//! let mut data = AHashMap::new();
//! data.insert("label".to_string(), Value::from("When clicked"));
//! store.add_node(Node {
//!     id: "trigger".to_string(),
//!     kind: "manualTrigger".to_string(),
//!     position: Position { x: 0.0, y: 0.0 },
//!     data,
//! });
//! store.add_node(Node {
//!     id: "send".to_string(),
//!     kind: "httpRequest".to_string(),
//!     position: Position { x: 240.0, y: 0.0 },
//!     data: AHashMap::new(),
//! });
//! store.add_connection(Connection {
//!     id: "c1".to_string(),
//!     source_node_id: "trigger".to_string(),
//!     target_node_id: "send".to_string(),
//!     source_handle: None,
//! });
//!
//! assert_eq!(store.nodes().len(), 2);
//! assert_eq!(store.undo_depth(), 3);
//!
//! // Step back: the connection disappears, and the step forward returns it.
//! store.undo();
//! assert!(store.connections().is_empty());
//! store.redo();
//! assert_eq!(store.connections().len(), 1);
//!
//! // Removing a node strips its connections in the same pre-image.
//! store.remove_node("trigger");
//! assert!(store.connections().is_empty());
//! store.undo();
//! assert_eq!(store.nodes().len(), 2);
//! assert_eq!(store.connections().len(), 1);
//!
//! // Hand the result to a persistence collaborator.
//! let payload = store.export_snapshot("my-flow");
//! assert_eq!(payload.name, "my-flow");
//! store.mark_clean();
//! assert!(!store.is_dirty());
//! ```

pub mod document;
pub mod error;
pub mod prelude;
pub mod store;
pub mod ui;

#[cfg(feature = "python-bindings")]
mod python;
