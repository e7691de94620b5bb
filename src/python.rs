use crate::document::{IntoDocument, SavedDocument};
use crate::store::EditorStore;
use crate::ui::{UiConnection, UiDocument, UiNode};
use pyo3::prelude::*;

/// A bounded snapshot history engine for node-based documents.
///
/// This class owns one editable document plus its undo/redo history. Nodes
/// and connections are passed as JSON strings in the camelCase editor wire
/// format; exported payloads come back as JSON strings.
#[pyclass(name = "Rireki")]
struct RirekiPy {
    store: EditorStore,
}

#[pymethods]
impl RirekiPy {
    /// Creates a history store, optionally pre-loaded with a document.
    ///
    /// Args:
    ///     document_json (str | None): A JSON string in the editor wire
    ///         format (`nodes`, `connections`/`edges`). When omitted, the
    ///         session starts from an empty document.
    ///
    /// Raises:
    ///     ValueError: If the JSON is malformed or contains duplicate ids.
    #[new]
    #[pyo3(signature = (document_json = None))]
    fn new(document_json: Option<&str>) -> PyResult<Self> {
        let store = match document_json {
            Some(json) => {
                let document = UiDocument::from_json_str(json)
                    .and_then(IntoDocument::into_document)
                    .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
                EditorStore::builder().with_document(document).build()
            }
            None => EditorStore::new(),
        };
        Ok(RirekiPy { store })
    }

    /// Appends a node given as a wire-format JSON object.
    ///
    /// Raises:
    ///     ValueError: If the JSON does not describe a node.
    fn add_node(&mut self, node_json: &str) -> PyResult<()> {
        let node: UiNode = serde_json::from_str(node_json)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
        self.store.add_node(node.into_node());
        Ok(())
    }

    /// Removes a node and every connection touching it. Unknown ids are
    /// ignored.
    fn remove_node(&mut self, node_id: &str) {
        self.store.remove_node(node_id);
    }

    /// Appends a connection given as a wire-format JSON object.
    ///
    /// Raises:
    ///     ValueError: If the JSON does not describe a connection.
    fn add_connection(&mut self, connection_json: &str) -> PyResult<()> {
        let connection: UiConnection = serde_json::from_str(connection_json)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
        self.store.add_connection(connection.into_connection());
        Ok(())
    }

    /// Removes a connection by id. Unknown ids are ignored.
    fn remove_connection(&mut self, connection_id: &str) {
        self.store.remove_connection(connection_id);
    }

    /// Steps back one edit. Returns True if a restore happened.
    fn undo(&mut self) -> bool {
        self.store.undo()
    }

    /// Steps forward one undone edit. Returns True if a restore happened.
    fn redo(&mut self) -> bool {
        self.store.redo()
    }

    fn can_undo(&self) -> bool {
        self.store.can_undo()
    }

    fn can_redo(&self) -> bool {
        self.store.can_redo()
    }

    fn is_dirty(&self) -> bool {
        self.store.is_dirty()
    }

    fn mark_clean(&mut self) {
        self.store.mark_clean()
    }

    fn node_count(&self) -> usize {
        self.store.nodes().len()
    }

    fn connection_count(&self) -> usize {
        self.store.connections().len()
    }

    /// Replaces the document from an exported payload JSON string, clearing
    /// history and the dirty flag.
    ///
    /// Raises:
    ///     ValueError: If the JSON does not describe an exported payload.
    fn load(&mut self, payload_json: &str) -> PyResult<()> {
        let payload: SavedDocument = serde_json::from_str(payload_json)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
        self.store.load_document(payload);
        Ok(())
    }

    /// Exports the current document as a payload JSON string.
    ///
    /// Args:
    ///     name (str): The document name to stamp into the payload.
    ///
    /// Raises:
    ///     RuntimeError: If serialization fails.
    fn export(&self, name: &str) -> PyResult<String> {
        self.store
            .export_snapshot(name)
            .to_json_string()
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))
    }
}

/// A bounded snapshot history engine for node-based documents.
///
/// This module provides Python bindings to the Rireki Rust library, exposing
/// checkpoint-based undo/redo over an editable graph of nodes and
/// connections.
#[pymodule]
fn rireki(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<RirekiPy>()?;
    Ok(())
}
