//  Properties of `TypedBitSet`, over arbitrary capacities and keys.

use std::{
    collections::{BTreeSet, hash_map::DefaultHasher},
    hash::{Hash, Hasher},
};

use proptest::prelude::*;

use typed_bitset::{BitKey, TypedBitSet};

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
struct NodeId(u32);

impl BitKey for NodeId {
    fn from_index(index: u64) -> Self {
        NodeId(u32::from_index(index))
    }

    fn into_index(self) -> u64 {
        self.0.into()
    }
}

type NodeSet = TypedBitSet<NodeId>;

const MAX_LEN: u32 = 300;

//  A capacity, and keys within that capacity.
fn capacity_and_keys() -> impl Strategy<Value = (u32, Vec<u32>)> {
    (1..MAX_LEN).prop_flat_map(|len| (Just(len), prop::collection::vec(0..len, 0..64)))
}

fn build(len: u32, keys: &[u32]) -> NodeSet {
    let mut set = NodeSet::with_capacity(len.into());

    set.extend(keys.iter().copied().map(NodeId));

    set
}

fn hash(set: &NodeSet) -> u64 {
    let mut hasher = DefaultHasher::new();
    set.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn with_capacity_is_empty(len in 0..MAX_LEN) {
        let set = NodeSet::with_capacity(len.into());

        prop_assert_eq!(u64::from(len), set.len());
        prop_assert!(set.is_empty());
    }

    #[test]
    fn insert_then_contains((len, keys) in capacity_and_keys()) {
        let mut set = build(len, &keys);

        for &key in &keys {
            prop_assert!(set.contains(NodeId(key)));
        }

        set.clear();

        for &key in &keys {
            prop_assert!(!set.contains(NodeId(key)));
        }
    }

    #[test]
    fn iter_matches_model((len, keys) in capacity_and_keys()) {
        let set = build(len, &keys);

        let model: Vec<_> = keys.iter().copied().collect::<BTreeSet<_>>().into_iter().map(NodeId).collect();

        prop_assert_eq!(&model, &set.iter().collect::<Vec<_>>());
        prop_assert_eq!(&model, &set.iter().collect::<Vec<_>>());
        prop_assert_eq!(model.len(), set.count());
    }

    #[test]
    fn le_bytes_round_trip((len, keys) in capacity_and_keys()) {
        let set = build(len, &keys);

        prop_assert_eq!(Ok(set.clone()), NodeSet::from_le_bytes(&set.to_le_bytes()));
    }

    #[test]
    fn insert_idempotent((len, keys) in capacity_and_keys()) {
        let once = build(len, &keys);

        let mut twice = once.clone();

        for &key in &keys {
            prop_assert!(twice.put(NodeId(key)));
        }

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn grow_monotonic((len, keys) in capacity_and_keys(), extra in 0..MAX_LEN) {
        let before = build(len, &keys);

        let mut after = before.clone();
        after.grow(u64::from(len + extra));

        prop_assert_eq!(u64::from(len + extra), after.len());

        for index in 0..len {
            prop_assert_eq!(before.contains(NodeId(index)), after.contains(NodeId(index)));
        }

        for index in len..len + extra {
            prop_assert!(!after.contains(NodeId(index)));
        }
    }

    #[test]
    fn equal_and_hash_consistent((len, keys) in capacity_and_keys()) {
        let left = build(len, &keys);

        let mut reversed = keys.clone();
        reversed.reverse();

        let right = build(len, &reversed);

        prop_assert_eq!(&left, &right);
        prop_assert_eq!(hash(&left), hash(&right));
        prop_assert_eq!(std::cmp::Ordering::Equal, left.cmp(&right));
    }

    #[test]
    fn toggle_twice_is_identity((len, keys) in capacity_and_keys()) {
        let original = build(len, &keys);

        let mut toggled = original.clone();
        toggled.toggle_all();

        prop_assert_eq!(len as usize - original.count(), toggled.count());

        toggled.toggle_all();

        prop_assert_eq!(original, toggled);
    }
}

#[cfg(feature = "serde")]
mod serde_properties {
    use super::*;

    proptest! {
        #[test]
        fn serde_round_trip((len, keys) in capacity_and_keys()) {
            let set = build(len, &keys);

            let json = serde_json::to_string(&set).expect("serializable");
            let decoded: NodeSet = serde_json::from_str(&json).expect("deserializable");

            prop_assert_eq!(set, decoded);
        }
    }
} // mod serde_properties

#[test]
fn iteration_order() {
    let set = build(10, &[9, 2, 5]);

    assert_eq!(vec![NodeId(2), NodeId(5), NodeId(9)], set.iter().collect::<Vec<_>>());
    assert_eq!(vec![NodeId(2), NodeId(5), NodeId(9)], set.iter().collect::<Vec<_>>());
}

#[test]
fn different_capacity_not_equal() {
    assert_ne!(build(10, &[3]), build(11, &[3]));
}

#[test]
#[should_panic(expected = "index 8 is out of bounds for a bit set of length 8")]
fn set_at_capacity_panics() {
    let mut set = NodeSet::with_capacity(8);

    set.set(NodeId(8), true);
}
