// Unit tests for the core data structures.
//
// Tests the staging queue's FIFO contract and underflow guard, and the
// entity index's ordered-set semantics: insert-or-update, lookup, removal
// (including the two-child successor case), and in-order traversal under
// adversarial insertion orders.

use engauge::structures::queue::{RawRecord, RecordQueue};
use engauge::structures::tree::EntityIndex;

fn record(marker: &str) -> RawRecord {
    let mut r = RawRecord::new();
    r.insert("marker".to_string(), marker.to_string());
    r
}

fn keys<V>(index: &EntityIndex<V>) -> Vec<u64> {
    index.in_order().into_iter().map(|(k, _)| k).collect()
}

// ============================================================
// RecordQueue — FIFO contract
// ============================================================

#[test]
fn queue_preserves_arrival_order() {
    let mut queue = RecordQueue::new();
    for marker in ["first", "second", "third"] {
        queue.enqueue(record(marker));
    }

    assert_eq!(queue.dequeue().unwrap()["marker"], "first");
    assert_eq!(queue.dequeue().unwrap()["marker"], "second");
    assert_eq!(queue.dequeue().unwrap()["marker"], "third");
}

#[test]
fn queue_len_tracks_enqueue_and_dequeue() {
    let mut queue = RecordQueue::new();
    assert_eq!(queue.len(), 0);
    assert!(queue.is_empty());

    queue.enqueue(record("a"));
    queue.enqueue(record("b"));
    assert_eq!(queue.len(), 2);
    assert!(!queue.is_empty());

    queue.dequeue().unwrap();
    assert_eq!(queue.len(), 1);
}

#[test]
fn queue_underflow_is_an_error_not_a_panic() {
    let mut queue = RecordQueue::new();
    let result = queue.dequeue();
    assert!(result.is_err());
}

#[test]
fn queue_underflow_after_drain() {
    let mut queue = RecordQueue::new();
    queue.enqueue(record("only"));
    queue.dequeue().unwrap();
    assert!(queue.dequeue().is_err());
}

#[test]
fn queue_usable_after_clear() {
    let mut queue = RecordQueue::new();
    queue.enqueue(record("stale"));
    queue.clear();
    assert!(queue.is_empty());

    queue.enqueue(record("fresh"));
    assert_eq!(queue.dequeue().unwrap()["marker"], "fresh");
}

// ============================================================
// EntityIndex — insert / search
// ============================================================

#[test]
fn empty_index_finds_nothing() {
    let index: EntityIndex<&str> = EntityIndex::new();
    assert_eq!(index.get(1), None);
    assert_eq!(index.len(), 0);
    assert!(index.is_empty());
    assert!(index.in_order().is_empty());
}

#[test]
fn insert_then_search_round_trip() {
    let mut index = EntityIndex::new();
    for key in [10, 5, 15, 3, 7, 12, 20] {
        index.insert(key, format!("value_{key}"));
    }

    for key in [10, 5, 15, 3, 7, 12, 20] {
        assert_eq!(index.get(key), Some(&format!("value_{key}")));
    }
    assert_eq!(index.get(4), None);
}

#[test]
fn reinsert_updates_in_place() {
    let mut index = EntityIndex::new();
    index.insert(5, "original");
    index.insert(5, "replacement");

    assert_eq!(index.len(), 1);
    assert_eq!(index.get(5), Some(&"replacement"));
    assert_eq!(index.in_order().len(), 1);
}

#[test]
fn get_mut_allows_value_mutation() {
    let mut index = EntityIndex::new();
    index.insert(1, vec![1]);
    index.get_mut(1).unwrap().push(2);
    assert_eq!(index.get(1), Some(&vec![1, 2]));
}

// ============================================================
// EntityIndex — in-order traversal
// ============================================================

#[test]
fn in_order_ascends_regardless_of_insertion_order() {
    let mut index = EntityIndex::new();
    for key in [8, 3, 10, 1, 6, 14, 4, 7, 13] {
        index.insert(key, ());
    }
    assert_eq!(keys(&index), vec![1, 3, 4, 6, 7, 8, 10, 13, 14]);
}

#[test]
fn increasing_keys_degenerate_but_stay_correct() {
    // Worst-case insertion order: the tree is a right chain. Operations
    // degrade to linear time but stay correct.
    let mut index = EntityIndex::new();
    for key in 1..=100 {
        index.insert(key, key * 2);
    }

    assert_eq!(index.len(), 100);
    assert_eq!(keys(&index), (1..=100).collect::<Vec<_>>());
    assert_eq!(index.get(100), Some(&200));
}

#[test]
fn decreasing_keys_degenerate_but_stay_correct() {
    let mut index = EntityIndex::new();
    for key in (1..=100).rev() {
        index.insert(key, ());
    }
    assert_eq!(keys(&index), (1..=100).collect::<Vec<_>>());
}

#[test]
fn in_order_is_a_fresh_snapshot_each_call() {
    let mut index = EntityIndex::new();
    index.insert(1, ());
    assert_eq!(index.in_order().len(), 1);

    index.insert(2, ());
    assert_eq!(index.in_order().len(), 2);
}

// ============================================================
// EntityIndex — removal
// ============================================================

#[test]
fn remove_leaf() {
    let mut index = EntityIndex::new();
    for key in [10, 5, 15] {
        index.insert(key, key);
    }

    assert_eq!(index.remove(5), Some(5));
    assert_eq!(index.get(5), None);
    assert_eq!(keys(&index), vec![10, 15]);
}

#[test]
fn remove_node_with_one_child() {
    let mut index = EntityIndex::new();
    for key in [10, 5, 3] {
        index.insert(key, key);
    }

    assert_eq!(index.remove(5), Some(5));
    assert_eq!(keys(&index), vec![3, 10]);
    assert_eq!(index.get(3), Some(&3));
}

#[test]
fn remove_node_with_two_children_uses_successor() {
    let mut index = EntityIndex::new();
    for key in [50, 30, 70, 20, 40, 60, 80, 65] {
        index.insert(key, key);
    }

    // 70 has two children; its in-order successor is 65, the minimum of
    // its right subtree.
    assert_eq!(index.remove(70), Some(70));
    assert_eq!(index.get(70), None);
    assert_eq!(keys(&index), vec![20, 30, 40, 50, 60, 65, 80]);
}

#[test]
fn remove_root_repeatedly_until_empty() {
    let mut index = EntityIndex::new();
    for key in [4, 2, 6, 1, 3, 5, 7] {
        index.insert(key, key);
    }

    let mut expected: Vec<u64> = vec![1, 2, 3, 4, 5, 6, 7];
    while let Some(&smallest) = keys(&index).first() {
        assert_eq!(index.remove(smallest), Some(smallest));
        expected.retain(|&k| k != smallest);
        assert_eq!(keys(&index), expected);
    }
    assert!(index.is_empty());
}

#[test]
fn remove_missing_key_changes_nothing() {
    let mut index = EntityIndex::new();
    index.insert(1, "one");
    assert_eq!(index.remove(99), None);
    assert_eq!(index.len(), 1);
    assert_eq!(index.get(1), Some(&"one"));
}

#[test]
fn remove_then_search_returns_absent() {
    let mut index = EntityIndex::new();
    for key in [10, 5, 15, 3, 7] {
        index.insert(key, key);
    }
    index.remove(5);
    assert!(!index.contains(5));
    assert!(index.contains(3));
    assert!(index.contains(7));
}
