//! Edge case and boundary condition tests
//!
//! These tests drive repeatable sections the way a form page does: build a
//! manager over the current list, apply one edit, write the replacement back,
//! and rebuild.

use willwizard_core::{
    Child, ChildPatch, ChildRelationship, FieldList, FieldListError, Fiduciary, Gift, GiftKind,
};

/// Apply one edit to `list` in place through a fresh manager, the way a page
/// rebuilds the manager on every render
fn edit<T, F, R>(list: &mut Vec<T>, factory: F, op: impl FnOnce(&mut FieldList<'_, T, F, &mut dyn FnMut(Vec<T>)>) -> R) -> R
where
    T: Clone,
    F: Fn() -> T,
{
    let snapshot = list.clone();
    let mut apply = |next: Vec<T>| *list = next;
    let mut manager = FieldList::new(&snapshot, &mut apply as &mut dyn FnMut(Vec<T>), factory);
    op(&mut manager)
}

// ============================================================================
// Empty List Tests
// ============================================================================

#[test]
fn test_empty_list_queries() {
    let children: Vec<Child> = Vec::new();
    let list = FieldList::new(&children, |_: Vec<Child>| {}, Child::default);
    assert_eq!(list.count(), 0);
    assert!(list.is_empty());
}

#[test]
fn test_remove_from_empty_list() {
    let mut children: Vec<Child> = Vec::new();
    let result = edit(&mut children, Child::default, |l| l.remove(0));
    assert_eq!(result, Err(FieldListError::IndexOutOfRange { index: 0, len: 0 }));
    assert!(children.is_empty());
}

#[test]
fn test_move_in_empty_list() {
    let mut children: Vec<Child> = Vec::new();
    let result = edit(&mut children, Child::default, |l| l.move_item(0, 0));
    assert!(result.is_err());
}

#[test]
fn test_clear_empty_list_still_notifies() {
    let children: Vec<Child> = Vec::new();
    let mut calls = 0;
    let mut list = FieldList::new(&children, |_: Vec<Child>| calls += 1, Child::default);
    list.clear();
    drop(list);
    assert_eq!(calls, 1);
}

// ============================================================================
// Concrete Scenarios
// ============================================================================

#[test]
fn test_add_to_single_item_list() {
    let mut gifts = vec![Gift {
        recipient: "Item 1".to_string(),
        ..Default::default()
    }];
    let factory = || Gift {
        recipient: "New Item".to_string(),
        kind: GiftKind::SpecificItem,
        ..Default::default()
    };
    edit(&mut gifts, factory, |l| l.add());

    assert_eq!(gifts.len(), 2);
    assert_eq!(gifts[0].recipient, "Item 1");
    assert_eq!(gifts[1].recipient, "New Item");
    assert_eq!(gifts[1].kind, GiftKind::SpecificItem);
}

#[test]
fn test_remove_middle() {
    let mut reps = vec![
        Fiduciary::named("1"),
        Fiduciary::named("2"),
        Fiduciary::named("3"),
    ];
    edit(&mut reps, Fiduciary::default, |l| l.remove(1)).unwrap();
    let names: Vec<&str> = reps.iter().map(|r| r.full_name.as_str()).collect();
    assert_eq!(names, ["1", "3"]);
}

#[test]
fn test_move_last_to_first() {
    let mut reps = vec![
        Fiduciary::named("A"),
        Fiduciary::named("B"),
        Fiduciary::named("C"),
    ];
    edit(&mut reps, Fiduciary::default, |l| l.move_item(2, 0)).unwrap();
    let names: Vec<&str> = reps.iter().map(|r| r.full_name.as_str()).collect();
    assert_eq!(names, ["C", "A", "B"]);
}

#[test]
fn test_move_onto_itself_still_notifies() {
    let reps = vec![Fiduciary::named("A"), Fiduciary::named("B")];
    let mut calls = 0;
    let mut list = FieldList::new(&reps, |_: Vec<Fiduciary>| calls += 1, Fiduciary::default);
    list.move_item(1, 1).unwrap();
    drop(list);
    assert_eq!(calls, 1);
}

// ============================================================================
// Stale Snapshot Tests
// ============================================================================

/// Two edits on one manager both derive from the same snapshot
#[test]
fn test_edits_share_the_snapshot() {
    let children = vec![Child::named("A")];
    let mut received = Vec::new();
    let mut list = FieldList::new(&children, |next: Vec<Child>| received.push(next), Child::default);
    list.add();
    list.add();
    drop(list);

    assert_eq!(received.len(), 2);
    assert_eq!(received[0].len(), 2);
    assert_eq!(received[1].len(), 2);
}

/// Rebuilding between edits accumulates them
#[test]
fn test_rebuilt_manager_accumulates() {
    let mut children = vec![Child::named("A")];
    edit(&mut children, Child::default, |l| l.add());
    edit(&mut children, Child::default, |l| l.add());
    edit(&mut children, Child::default, |l| {
        l.update_item(
            2,
            ChildPatch {
                full_name: Some("C".to_string()),
                relationship: Some(ChildRelationship::Adopted),
                ..Default::default()
            },
        )
    })
    .unwrap();

    assert_eq!(children.len(), 3);
    assert_eq!(children[2].full_name, "C");
    assert_eq!(children[2].relationship, ChildRelationship::Adopted);
    assert!(children[1].full_name.is_empty());
}

#[test]
fn test_update_with_index_from_old_render() {
    let mut children = vec![Child::named("A"), Child::named("B")];
    edit(&mut children, Child::default, |l| l.remove(1)).unwrap();

    // Index 1 was valid for the previous render but not for this one
    let result = edit(&mut children, Child::default, |l| {
        l.update(1, Child::FULL_NAME, "stale".to_string())
    });
    assert_eq!(result, Err(FieldListError::IndexOutOfRange { index: 1, len: 1 }));
    assert_eq!(children, vec![Child::named("A")]);
}
