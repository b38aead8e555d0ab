//! Property-based tests for FieldList edit intents
//!
//! Uses proptest to verify the replacement-list contract over arbitrary
//! beneficiary lists.

use proptest::prelude::*;
use willwizard_core::{Beneficiary, BeneficiaryPatch, FieldList, Relationship};

// ============================================================================
// Strategy Generators
// ============================================================================

fn relationship_strategy() -> impl Strategy<Value = Relationship> {
    prop::sample::select(Relationship::all().to_vec())
}

fn beneficiary_strategy() -> impl Strategy<Value = Beneficiary> {
    (
        prop::string::string_regex("[a-zA-Z ]{0,24}").expect("valid regex"),
        relationship_strategy(),
        0..=100u8,
    )
        .prop_map(|(full_name, relationship, share_percent)| Beneficiary {
            full_name,
            relationship,
            share_percent,
        })
}

fn list_strategy(max: usize) -> impl Strategy<Value = Vec<Beneficiary>> {
    prop::collection::vec(beneficiary_strategy(), 0..max)
}

/// Non-empty list plus an index inside it
fn list_and_index() -> impl Strategy<Value = (Vec<Beneficiary>, usize)> {
    prop::collection::vec(beneficiary_strategy(), 1..12).prop_flat_map(|list| {
        let len = list.len();
        (Just(list), 0..len)
    })
}

fn placeholder() -> Beneficiary {
    Beneficiary::named("New Beneficiary", 0)
}

/// Apply `edit` to a manager over `items` and collect every replacement list
fn replacements<R>(
    items: &[Beneficiary],
    edit: impl FnOnce(&mut FieldList<'_, Beneficiary, fn() -> Beneficiary, &mut dyn FnMut(Vec<Beneficiary>)>) -> R,
) -> Vec<Vec<Beneficiary>> {
    let mut received = Vec::new();
    let mut push = |next: Vec<Beneficiary>| received.push(next);
    let mut list = FieldList::new(
        items,
        &mut push as &mut dyn FnMut(Vec<Beneficiary>),
        placeholder as fn() -> Beneficiary,
    );
    let _ = edit(&mut list);
    drop(list);
    received
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// add appends exactly one factory record after the original list
    #[test]
    fn add_appends_factory_record(items in list_strategy(16)) {
        let received = replacements(&items, |l| l.add());
        prop_assert_eq!(received.len(), 1);
        let next = &received[0];
        prop_assert_eq!(next.len(), items.len() + 1);
        prop_assert_eq!(&next[..items.len()], &items[..]);
        prop_assert_eq!(next.last(), Some(&placeholder()));
    }

    /// update changes only the named attribute at the target index
    #[test]
    fn update_touches_one_attribute((items, index) in list_and_index(), name in "[a-z]{1,10}") {
        let received = replacements(&items, |l| l.update(index, Beneficiary::FULL_NAME, name.clone()));
        prop_assert_eq!(received.len(), 1);
        let next = &received[0];
        prop_assert_eq!(next.len(), items.len());
        for (i, (before, after)) in items.iter().zip(next).enumerate() {
            if i == index {
                prop_assert_eq!(&after.full_name, &name);
                prop_assert_eq!(after.relationship, before.relationship);
                prop_assert_eq!(after.share_percent, before.share_percent);
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }

    /// update_item with two attributes equals two single-attribute updates
    #[test]
    fn update_item_equals_sequential_updates(
        (items, index) in list_and_index(),
        name in "[a-z]{1,10}",
        share in 0..=100u8,
    ) {
        let merged = replacements(&items, |l| {
            l.update_item(index, BeneficiaryPatch {
                full_name: Some(name.clone()),
                share_percent: Some(share),
                ..Default::default()
            })
        });

        let first = replacements(&items, |l| l.update(index, Beneficiary::FULL_NAME, name.clone()));
        let second = replacements(&first[0], |l| l.update(index, Beneficiary::SHARE_PERCENT, share));

        prop_assert_eq!(&merged[0], &second[0]);
    }

    /// remove deletes one element and shifts the rest left
    #[test]
    fn remove_deletes_one((items, index) in list_and_index()) {
        let received = replacements(&items, |l| l.remove(index));
        prop_assert_eq!(received.len(), 1);

        let mut expected = items.clone();
        expected.remove(index);
        prop_assert_eq!(&received[0], &expected);
    }

    /// move never notifies when the destination is out of range
    #[test]
    fn move_out_of_range_never_notifies((items, from) in list_and_index(), overshoot in 0..8usize) {
        let to = items.len() + overshoot;
        let received = replacements(&items, |l| l.move_item(from, to));
        prop_assert!(received.is_empty());
    }

    /// move keeps every record exactly once
    #[test]
    fn move_is_a_permutation((items, from) in list_and_index(), to_seed in any::<usize>()) {
        let to = to_seed % items.len();
        let received = replacements(&items, |l| l.move_item(from, to));
        prop_assert_eq!(received.len(), 1);
        let next = &received[0];
        prop_assert_eq!(next.len(), items.len());
        prop_assert_eq!(&next[to], &items[from]);
    }

    /// clear always yields the empty list, notifying once
    #[test]
    fn clear_empties(items in list_strategy(16)) {
        let received = replacements(&items, |l| l.clear());
        prop_assert_eq!(received, vec![Vec::<Beneficiary>::new()]);
    }

    /// is_empty agrees with count
    #[test]
    fn is_empty_iff_count_zero(items in list_strategy(8)) {
        let list = FieldList::new(&items, |_next: Vec<Beneficiary>| {}, placeholder);
        prop_assert_eq!(list.is_empty(), list.count() == 0);
        prop_assert_eq!(list.count(), items.len());
    }

    /// Out-of-range index edits never notify
    #[test]
    fn out_of_range_edits_never_notify(items in list_strategy(8), overshoot in 0..4usize) {
        let index = items.len() + overshoot;
        let received = replacements(&items, |l| {
            let _ = l.remove(index);
            let _ = l.update(index, Beneficiary::SHARE_PERCENT, 1);
            l.update_item(index, BeneficiaryPatch::default())
        });
        prop_assert!(received.is_empty());
    }
}
