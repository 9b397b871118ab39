//! End-to-end move scenarios over the canonical 12-item board.

use dualpane::{sample_items, ItemListStore, MovePolicy, StoreError, ViewId};

fn board() -> ItemListStore {
    ItemListStore::new(sample_items(), 6).unwrap()
}

fn board_with_locked(positions: &[usize]) -> ItemListStore {
    let mut items = sample_items();
    for &position in positions {
        items[position] = items[position].clone().locked();
    }
    ItemListStore::new(items, 6).unwrap()
}

fn ids(store: &ItemListStore) -> Vec<u32> {
    store.items().iter().map(|item| item.id).collect()
}

#[test]
fn grid_item_dropped_into_the_linear_pane() {
    // Item 1 leaves the left pane and lands at right slot 1; the removal
    // shifts the target left by one, so it ends up first on the right.
    let mut store = board();
    store.move_item(ViewId::Left, 0, ViewId::Right, 1).unwrap();

    assert_eq!(ids(&store), [2, 3, 4, 5, 6, 7, 1, 8, 9, 10, 11, 12]);
    let snapshot = store.snapshot();
    assert_eq!(snapshot.left[0].id, 2);
    assert_eq!(snapshot.right[0].id, 1);
}

#[test]
fn linear_item_dropped_at_the_front_of_the_grid() {
    let mut store = board();
    store.move_item(ViewId::Right, 5, ViewId::Left, 0).unwrap();

    assert_eq!(ids(&store), [12, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
    let snapshot = store.snapshot();
    assert_eq!(snapshot.left.last().unwrap().id, 5);
    assert_eq!(snapshot.right[0].id, 6);
}

#[test]
fn locked_item_cannot_be_dragged() {
    let mut store = board_with_locked(&[2]);
    let before = store.snapshot();

    let err = store
        .move_item(ViewId::Left, 2, ViewId::Right, 0)
        .unwrap_err();
    assert!(matches!(err, StoreError::ItemLocked { id: 3, .. }));
    assert_eq!(store.snapshot(), before);
}

#[test]
fn out_of_range_drag_is_rejected() {
    let mut store = board();
    let before = store.snapshot();

    let err = store
        .move_item(ViewId::Left, 99, ViewId::Right, 0)
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::OutOfRange {
            view: ViewId::Left,
            index: 99,
            len: 6,
        }
    ));
    assert_eq!(store.snapshot(), before);
}

#[test]
fn reset_with_duplicate_ids_keeps_the_current_board() {
    let mut store = board();
    store.move_item(ViewId::Left, 0, ViewId::Right, 1).unwrap();
    let after_move = store.snapshot();

    let mut dupes = sample_items();
    dupes[5].id = 2;
    assert!(matches!(
        store.reset(dupes),
        Err(StoreError::InvalidInitialState { .. })
    ));
    assert_eq!(store.snapshot(), after_move);
}

#[test]
fn moves_within_one_pane_reorder_it() {
    let mut store = board();
    store.move_item(ViewId::Left, 5, ViewId::Left, 0).unwrap();
    assert_eq!(ids(&store), [6, 1, 2, 3, 4, 5, 7, 8, 9, 10, 11, 12]);

    // Under insert-shift the removal shifts later slots left, so putting the
    // item back at the end of the pane takes the append index.
    store.move_item(ViewId::Left, 0, ViewId::Left, 6).unwrap();
    assert_eq!(ids(&store), [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
}

#[test]
fn every_successful_move_preserves_the_item_set() {
    let mut store = board();
    let moves = [
        (ViewId::Left, 0, ViewId::Right, 6),
        (ViewId::Right, 0, ViewId::Left, 5),
        (ViewId::Left, 3, ViewId::Left, 0),
        (ViewId::Right, 4, ViewId::Right, 1),
    ];

    for (sv, si, dv, di) in moves {
        store.move_item(sv, si, dv, di).unwrap();
        assert_eq!(store.len(), 12);
        let mut sorted = ids(&store);
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=12).collect::<Vec<_>>());
    }
}

#[test]
fn swap_policy_never_relocates_a_locked_item() {
    let mut store = board_with_locked(&[8]).with_policy(MovePolicy::Swap);
    let locked_position = 8;

    let attempts = [
        (ViewId::Left, 0, ViewId::Right, 2),  // locked slot as target
        (ViewId::Right, 2, ViewId::Left, 0),  // locked item as source
        (ViewId::Left, 1, ViewId::Right, 5),  // unrelated swap
        (ViewId::Right, 0, ViewId::Right, 4), // same-pane swap around it
    ];
    for (sv, si, dv, di) in attempts {
        let _ = store.move_item(sv, si, dv, di);
        assert_eq!(store.items()[locked_position].id, 9);
    }
}

#[test]
fn display_order_reorders_a_pane_without_touching_the_store() {
    use dualpane::display::DisplayOrder;

    let mut store = board();
    store.move_item(ViewId::Left, 0, ViewId::Right, 1).unwrap();

    let reversed = DisplayOrder::new(vec![5, 4, 3, 2, 1, 0]).unwrap();
    let shown = reversed.apply(store.view(ViewId::Right)).unwrap();
    assert_eq!(shown[5].id, 1);
    assert_eq!(shown[0].id, 12);

    // The permutation lives at the presentation boundary; storage order and
    // the store's own views are unaffected.
    assert_eq!(store.view(ViewId::Right)[0].id, 1);
    assert_eq!(ids(&store), [2, 3, 4, 5, 6, 7, 1, 8, 9, 10, 11, 12]);
}

#[test]
fn both_panes_concatenate_to_the_backing_sequence() {
    let mut store = board();
    store.move_item(ViewId::Left, 2, ViewId::Right, 3).unwrap();
    store.move_item(ViewId::Right, 5, ViewId::Left, 1).unwrap();

    let snapshot = store.snapshot();
    let joined: Vec<u32> = snapshot
        .left
        .iter()
        .chain(&snapshot.right)
        .map(|item| item.id)
        .collect();
    assert_eq!(joined, ids(&store));
    assert_eq!(snapshot.left.len(), store.split_index());
}
