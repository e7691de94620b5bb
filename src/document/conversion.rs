use super::model::Document;
use crate::error::DocumentConversionError;

/// A trait for external editor formats that can be converted into a `Document`.
///
/// This is the primary extension point for making the history engine
/// format-agnostic. By implementing this trait on the structs you parse your
/// editor's payload into, you provide a translation layer that lets an
/// `EditorStore` track any node-based format.
///
/// The built-in [`crate::ui::UiDocument`] implements it for the common
/// camelCase wire format; custom formats follow the same shape:
///
/// ```rust,no_run
/// use rireki::document::{Document, IntoDocument, Node, Position};
/// use rireki::error::DocumentConversionError;
///
/// // 1. Define the structs your format parses into.
/// struct MyStep { id: String, action: String }
/// struct MyPipeline { steps: Vec<MyStep> }
///
/// // 2. Implement `IntoDocument` for your top-level struct.
/// impl IntoDocument for MyPipeline {
///     fn into_document(self) -> Result<Document, DocumentConversionError> {
///         let nodes = self
///             .steps
///             .into_iter()
///             .map(|step| Node {
///                 id: step.id,
///                 kind: step.action, // Map your action name onto the node kind
///                 position: Position::default(),
///                 data: Default::default(),
///             })
///             .collect();
///
///         Ok(Document {
///             nodes,
///             connections: vec![], // Convert your links here as well
///         })
///     }
/// }
/// ```
pub trait IntoDocument {
    /// Consumes the object and converts it into a canonical `Document`.
    fn into_document(self) -> Result<Document, DocumentConversionError>;
}
