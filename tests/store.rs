//! Tests for the store's mutation entry points.
mod common;
use common::*;
use rireki::prelude::*;

#[test]
fn test_add_node_appends() {
    let mut store = EditorStore::new();
    store.add_node(node("a", "manualTrigger", 0.0, 0.0));
    store.add_node(node("b", "print", 240.0, 0.0));

    assert_eq!(store.nodes().len(), 2);
    assert_eq!(store.nodes()[0].id, "a");
    assert_eq!(store.nodes()[1].id, "b");
    assert!(store.is_dirty());
}

#[test]
fn test_add_node_accepts_duplicate_ids() {
    // Dedup is a presentation concern; the store itself appends blindly.
    let mut store = EditorStore::new();
    store.add_node(node("a", "print", 0.0, 0.0));
    store.add_node(node("a", "print", 100.0, 0.0));

    assert_eq!(store.nodes().len(), 2);
}

#[test]
fn test_remove_node_strips_attached_connections() {
    let mut store = store_with_branching_document();

    store.remove_node("branch");

    assert_eq!(store.nodes().len(), 3);
    assert!(store.document().node("branch").is_none());
    // c1 targets the branch, c2 and c3 leave it; all three must go.
    assert!(store.connections().is_empty());
}

#[test]
fn test_remove_node_keeps_unrelated_connections() {
    let mut document = create_branching_document();
    document.nodes.push(node("tail", "print", 720.0, 0.0));
    document
        .connections
        .push(connection("c4", "send", "tail"));
    let mut store = EditorStore::builder().with_document(document).build();

    store.remove_node("log");

    assert_eq!(store.connections().len(), 3);
    assert!(store.document().connection("c3").is_none());
    assert!(store.document().connection("c4").is_some());
}

#[test]
fn test_remove_node_is_single_checkpoint() {
    let mut store = store_with_branching_document();
    let before = store.undo_depth();

    store.remove_node("branch");

    assert_eq!(store.undo_depth(), before + 1);

    // One undo brings back the node and every stripped connection.
    assert!(store.undo());
    assert_eq!(store.document(), &create_branching_document());
}

#[test]
fn test_remove_absent_node_is_noop() {
    let mut store = store_with_simple_document();

    store.remove_node("ghost");

    assert_eq!(store.undo_depth(), 0);
    assert!(!store.is_dirty());
    assert_eq!(store.document(), &create_simple_document());
}

#[test]
fn test_update_node_data_shallow_merges() {
    let mut store = store_with_simple_document();

    let mut patch = AHashMap::new();
    patch.insert("label".to_string(), Value::from("Renamed"));
    patch.insert("icon".to_string(), Value::from("bolt"));
    store.update_node_data("trigger", patch);

    let node = store.document().node("trigger").unwrap();
    assert_eq!(node.data.get("label"), Some(&Value::from("Renamed")));
    assert_eq!(node.data.get("icon"), Some(&Value::from("bolt")));
    assert_eq!(store.undo_depth(), 1);
}

#[test]
fn test_update_node_data_keeps_unmentioned_keys() {
    let mut store = store_with_simple_document();

    let mut patch = AHashMap::new();
    patch.insert("icon".to_string(), Value::from("bolt"));
    store.update_node_data("trigger", patch);

    let node = store.document().node("trigger").unwrap();
    assert_eq!(node.data.get("label"), Some(&Value::from("When clicked")));
}

#[test]
fn test_update_absent_node_is_noop() {
    let mut store = store_with_simple_document();

    let mut patch = AHashMap::new();
    patch.insert("label".to_string(), Value::from("Renamed"));
    store.update_node_data("ghost", patch);

    assert_eq!(store.undo_depth(), 0);
    assert!(!store.is_dirty());
}

#[test]
fn test_replace_nodes_with_equal_value_is_suppressed() {
    let mut store = store_with_simple_document();
    store.add_node(node("extra", "print", 0.0, 200.0));
    store.undo();
    assert!(store.can_redo());
    let dirty_before = store.is_dirty();

    // A render-tick report of the unchanged collection must leave
    // everything alone, including the redo stack.
    store.replace_nodes(store.nodes().to_vec());

    assert_eq!(store.undo_depth(), 0);
    assert_eq!(store.redo_depth(), 1);
    assert!(store.can_redo());
    assert_eq!(store.is_dirty(), dirty_before);
}

#[test]
fn test_replace_nodes_with_changed_value_checkpoints() {
    let mut store = store_with_simple_document();

    let mut nodes = store.nodes().to_vec();
    nodes[1].position = Position { x: 300.0, y: 40.0 };
    store.replace_nodes(nodes);

    assert_eq!(store.undo_depth(), 1);
    assert!(store.is_dirty());
    assert_eq!(store.document().node("send").unwrap().position.x, 300.0);
}

#[test]
fn test_replace_connections_with_equal_value_is_suppressed() {
    let mut store = store_with_simple_document();

    store.replace_connections(store.connections().to_vec());

    assert_eq!(store.undo_depth(), 0);
    assert!(!store.is_dirty());
}

#[test]
fn test_replace_connections_with_changed_value_checkpoints() {
    let mut store = store_with_simple_document();

    store.replace_connections(vec![]);

    assert_eq!(store.undo_depth(), 1);
    assert!(store.connections().is_empty());

    store.undo();
    assert_eq!(store.connections().len(), 1);
}

#[test]
fn test_replace_preserves_both_collections_in_pre_image() {
    let mut store = store_with_simple_document();

    // Replacing one collection snapshots the whole document.
    store.replace_nodes(vec![]);
    store.undo();

    assert_eq!(store.document(), &create_simple_document());
}

#[test]
fn test_add_connection_allows_dangling_endpoints() {
    let mut store = EditorStore::new();
    store.add_connection(connection("c1", "nowhere", "nothing"));

    assert_eq!(store.connections().len(), 1);
    assert_eq!(store.document().dangling_connections().len(), 1);
}

#[test]
fn test_remove_connection() {
    let mut store = store_with_simple_document();

    store.remove_connection("c1");

    assert!(store.connections().is_empty());
    assert_eq!(store.undo_depth(), 1);
}

#[test]
fn test_remove_absent_connection_is_noop() {
    let mut store = store_with_simple_document();

    store.remove_connection("ghost");

    assert_eq!(store.undo_depth(), 0);
    assert!(!store.is_dirty());
}
