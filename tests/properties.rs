use std::collections::BTreeSet;

use pretty_assertions::assert_eq;
use quickcheck_macros::quickcheck;
use rand::{Rng, SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;
use rougenoir_arena::{Color, DuplicateKey, NotFound, Tree};

fn in_order(tree: &Tree<i64>) -> Vec<i64> {
    tree.display_entries().iter().rev().map(|e| *e.key).collect()
}

fn height_bound(len: usize) -> f64 {
    2.0 * ((len + 1) as f64).log2()
}

#[quickcheck]
fn inserts_keep_invariants(keys: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    let mut expected = BTreeSet::new();
    for key in keys {
        let key = i64::from(key);
        let fresh = expected.insert(key);
        if tree.insert(key).is_ok() != fresh || tree.validate().is_err() {
            return false;
        }
    }
    in_order(&tree) == expected.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn duplicate_insert_is_a_no_op(keys: Vec<i16>, pick: usize) -> bool {
    if keys.is_empty() {
        return true;
    }
    let mut tree = Tree::new();
    for &key in &keys {
        let _ = tree.insert(i64::from(key));
    }
    let before = tree.to_string();
    let len = tree.len();
    let key = i64::from(keys[pick % keys.len()]);
    tree.insert(key) == Err(DuplicateKey(key)) && before == tree.to_string() && len == tree.len()
}

#[quickcheck]
fn removes_keep_invariants(keys: Vec<i16>, removals: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    let mut expected = BTreeSet::new();
    for key in keys {
        let key = i64::from(key);
        expected.insert(key);
        let _ = tree.insert(key);
    }
    for key in removals {
        let key = i64::from(key);
        let outcome = tree.remove(key);
        let ok = if expected.remove(&key) {
            outcome == Ok(key)
        } else {
            outcome == Err(NotFound(key))
        };
        if !ok || tree.validate().is_err() {
            return false;
        }
    }
    in_order(&tree) == expected.into_iter().collect::<Vec<_>>()
}

#[test]
fn large_random_sequences_stay_balanced() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
    for round in 0..8 {
        let mut tree = Tree::new();
        let mut expected = BTreeSet::new();
        for _ in 0..2_000 {
            let key = rng.random_range(-10_000..10_000);
            assert_eq!(expected.insert(key), tree.insert(key).is_ok());
        }
        assert_eq!(expected.len(), tree.len());
        assert!(tree.validate().is_ok(), "round {round}");
        let height = (tree.height() + 1) as f64;
        assert!(
            height <= height_bound(tree.len()),
            "round {round}: height {height} for {} nodes",
            tree.len()
        );
    }
}

#[test]
fn sorted_inserts_stay_balanced() {
    let mut tree = Tree::new();
    for key in 0..4_096 {
        tree.insert(key).unwrap();
    }
    assert!(tree.validate().is_ok());
    assert!(((tree.height() + 1) as f64) <= height_bound(tree.len()));

    let mut tree = Tree::new();
    for key in (0..4_096).rev() {
        tree.insert(key).unwrap();
    }
    assert!(tree.validate().is_ok());
    assert!(((tree.height() + 1) as f64) <= height_bound(tree.len()));
}

#[test]
fn shuffled_drain_leaves_an_empty_valid_tree() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut keys: Vec<i64> = (0..1_000).collect();
    keys.shuffle(&mut rng);

    let mut tree = Tree::new();
    for &key in &keys {
        tree.insert(key).unwrap();
    }
    keys.shuffle(&mut rng);
    for (removed, &key) in keys.iter().enumerate() {
        assert_eq!(Ok(key), tree.remove(key));
        assert_eq!(keys.len() - removed - 1, tree.len());
        assert!(tree.validate().is_ok(), "after removing {key}");
    }
    assert_eq!(None, tree.root());
}

#[test]
fn scenarios() {
    // Empty tree, one insert.
    let mut tree = Tree::new();
    tree.insert(10).unwrap();
    let root = tree.node(tree.root().unwrap()).unwrap();
    assert_eq!((&10, Color::Black), (root.key(), root.color()));

    // Outer and inner grandchildren end up in the same shape.
    for order in [[10, 20, 30], [10, 30, 20]] {
        let mut tree = Tree::new();
        for key in order {
            tree.insert(key).unwrap();
        }
        let root = tree.node(tree.root().unwrap()).unwrap();
        assert_eq!((&20, Color::Black), (root.key(), root.color()));
        let left = tree.node(root.left().unwrap()).unwrap();
        let right = tree.node(root.right().unwrap()).unwrap();
        assert_eq!((&10, Color::Red), (left.key(), left.color()));
        assert_eq!((&30, Color::Red), (right.key(), right.color()));
    }

    // A duplicate is turned away.
    let mut tree = Tree::new();
    tree.insert(10).unwrap();
    assert_eq!(Err(DuplicateKey(10)), tree.insert(10));
    assert_eq!(1, tree.len());

    // An ascending run.
    let mut tree = Tree::new();
    for key in 1..=7 {
        tree.insert(key).unwrap();
    }
    assert!(tree.height() <= 3);
    assert!(tree.validate().is_ok());
}
