use std::collections::{BTreeSet, LinkedList, VecDeque};

use crate::strategy::{fold64, hash_one};
use crate::{
    ContentHashExt, FACTOR, IntrinsicStrategy, Nullable, SEED, StructuralStrategy, combine,
    content_hash, content_hash_with, try_content_hash,
};

/// h(None) = 0.
#[test]
fn absent_is_zero() {
    assert_eq!(content_hash(None::<&Vec<i32>>), 0);
    assert_eq!(content_hash_with(None::<&[u8]>, &IntrinsicStrategy), 0);
}

/// h([]) = SEED.
#[test]
fn empty_is_seed() {
    let empty: Vec<String> = Vec::new();
    assert_eq!(content_hash(Some(&empty)), SEED);
    assert_eq!(SEED, 757_602_046);
}

#[test]
fn absent_and_empty_differ() {
    let empty: Vec<i32> = Vec::new();
    assert_ne!(content_hash(Some(&empty)), content_hash(None::<&Vec<i32>>));
}

/// h([7]) = SEED · 31 + 7, wrapping.
#[test]
fn single_element_wraps() {
    let one = vec![7_i32];
    let h = content_hash_with(Some(&one), &IntrinsicStrategy);
    assert_eq!(h, SEED.wrapping_mul(31).wrapping_add(7));
    assert_eq!(h, 2_010_826_953);
}

#[test]
fn two_elements_by_hand() {
    let ab = [1_i32, 2];
    let ba = [2_i32, 1];
    assert_eq!(content_hash_with(Some(&ab), &IntrinsicStrategy), -2_088_874_081);
    assert_eq!(content_hash_with(Some(&ba), &IntrinsicStrategy), -2_088_874_051);
}

#[test]
fn combine_is_one_fold_step() {
    assert_eq!(FACTOR, 31);
    assert_eq!(combine(0, 5), 5);
    assert_eq!(combine(1, 0), 31);
    assert_eq!(combine(i32::MAX, 0), i32::MAX.wrapping_mul(31));
}

/// Structural default agrees with folding `hash_one` by hand.
#[test]
fn structural_default_matches_manual_fold() {
    let words = ["alpha", "beta", "gamma"];
    let expected = words
        .iter()
        .fold(SEED, |acc, w| combine(acc, fold64(hash_one(w))));
    assert_eq!(content_hash(Some(&words)), expected);
}

/// Absent elements contribute 0, not the hash of `None`.
#[test]
fn absent_elements_contribute_zero() {
    let items = [Some(1_i32), None, Some(3)];
    let h = content_hash_with(Some(&items), &Nullable(IntrinsicStrategy));
    assert_eq!(h, -330_587_130);

    let all_none: [Option<i32>; 1] = [None];
    assert_eq!(
        content_hash_with(Some(&all_none), &Nullable(IntrinsicStrategy)),
        2_010_826_946
    );
}

/// Default strategy: a `None` element contributes 0.
#[test]
fn default_absent_element_is_zero() {
    let one_none = vec![None::<i32>];
    assert_eq!(content_hash(Some(&one_none)), combine(SEED, 0));
    assert_eq!(content_hash(Some(&one_none)), 2_010_826_946);
}

/// Default strategy: `Some(v)` hashes as `v`, `None` as 0.
#[test]
fn default_mixed_elements() {
    let items = vec![Some("a".to_string()), None, Some("b".to_string())];
    let expected = combine(
        combine(combine(SEED, fold64(hash_one("a"))), 0),
        fold64(hash_one("b")),
    );
    assert_eq!(content_hash(Some(&items)), expected);
}

#[test]
fn ext_default_absent_element_is_zero() {
    let items: VecDeque<Option<u8>> = VecDeque::from([None, None]);
    assert_eq!(items.content_hash(), combine(combine(SEED, 0), 0));
    let slice: &[Option<u8>] = &[None];
    assert_eq!(slice.content_hash(), combine(SEED, 0));
}

/// Default and `Nullable` agree on optional elements.
#[test]
fn default_matches_nullable_structural() {
    let items = [Some(10_i64), None, Some(-4)];
    assert_eq!(
        content_hash(Some(&items)),
        content_hash_with(Some(&items), &Nullable(StructuralStrategy))
    );
}

#[test]
fn all_zero_hashes_differ_from_empty() {
    let zeros = [0_i32, 0, 0];
    let empty: [i32; 0] = [];
    assert_ne!(
        content_hash_with(Some(&zeros), &IntrinsicStrategy),
        content_hash_with(Some(&empty), &IntrinsicStrategy)
    );
}

#[test]
fn long_sequence_overflows_silently() {
    let big: Vec<i32> = (0..10_000).map(|i| i32::MAX - i).collect();
    let h1 = content_hash_with(Some(&big), &IntrinsicStrategy);
    let h2 = content_hash_with(Some(&big), &IntrinsicStrategy);
    assert_eq!(h1, h2);
}

/// Every supported container hashes its own iteration order.
#[test]
fn containers_agree_on_same_order() {
    let v = vec![3_i32, 1, 2];
    let d: VecDeque<i32> = v.iter().copied().collect();
    let l: LinkedList<i32> = v.iter().copied().collect();
    let h = v.content_hash_with(&IntrinsicStrategy);
    assert_eq!(d.content_hash_with(&IntrinsicStrategy), h);
    assert_eq!(l.content_hash_with(&IntrinsicStrategy), h);
    assert_eq!(v[..].content_hash_with(&IntrinsicStrategy), h);
}

/// A sorted set yields its sorted order, whatever the insertion order.
#[test]
fn btreeset_uses_sorted_order() {
    let set: BTreeSet<i32> = [3_i32, 1, 2].into_iter().collect();
    let sorted = [1_i32, 2, 3];
    assert_eq!(
        set.content_hash_with(&IntrinsicStrategy),
        content_hash_with(Some(&sorted), &IntrinsicStrategy)
    );
}

#[test]
fn ext_default_is_structural() {
    let v = vec!["x".to_string(), "y".to_string()];
    assert_eq!(v.content_hash(), content_hash_with(Some(&v), &StructuralStrategy));
}

#[test]
fn strategy_through_dyn_reference() {
    let v = vec![4_u8, 5];
    let dynamic: &dyn crate::EqualityStrategy<u8> = &IntrinsicStrategy;
    assert_eq!(
        content_hash_with(Some(&v), dynamic),
        content_hash_with(Some(&v), &IntrinsicStrategy)
    );
}

#[test]
fn try_hash_ok_matches_infallible() {
    let v = vec![1, 2, 3];
    let h: Result<i32, ()> = try_content_hash(Some(&v), |x: &i32| Ok(*x));
    assert_eq!(h, Ok(content_hash_with(Some(&v), &IntrinsicStrategy)));
}

#[test]
fn try_hash_absent_is_zero() {
    let h: Result<i32, String> = try_content_hash(None::<&Vec<i32>>, |_: &i32| Err("never".into()));
    assert_eq!(h, Ok(0));
}

/// First failure propagates unchanged and stops iteration.
#[test]
fn try_hash_propagates_first_error() {
    let v = vec![1, -2, -3, 4];
    let mut seen = Vec::new();
    let h = try_content_hash(Some(&v), |x: &i32| {
        seen.push(*x);
        if *x < 0 {
            Err(format!("negative: {x}"))
        } else {
            Ok(*x)
        }
    });
    assert_eq!(h, Err("negative: -2".to_string()));
    assert_eq!(seen, [1, -2]);
}

#[test]
#[should_panic(expected = "strategy failed")]
fn panicking_strategy_unwinds() {
    let v = vec![1_i32];
    let _ = content_hash_with(
        Some(&v),
        &crate::FnStrategy(|_: &i32| -> i32 { panic!("strategy failed") }),
    );
}
