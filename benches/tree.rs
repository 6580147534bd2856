use criterion::{Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;
use rougenoir_arena::Tree;

fn shuffled(n: i64) -> Vec<i64> {
    let mut keys: Vec<i64> = (0..n).collect();
    keys.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
    keys
}

fn insert(c: &mut Criterion) {
    let keys = shuffled(1_000);
    c.bench_function("rougenoir_arena_insert", |b| {
        b.iter(|| {
            let mut tree = Tree::with_capacity(keys.len());
            for &k in &keys {
                let _ = tree.insert(k);
            }
            tree
        })
    });
    c.bench_function("rbtree_insert", |b| {
        b.iter(|| {
            let mut tree = rbtree::RBTree::<i64, ()>::new();
            for &k in &keys {
                tree.insert(k, ());
            }
            tree
        })
    });
}

fn insert_remove(c: &mut Criterion) {
    let keys = shuffled(1_000);
    c.bench_function("rougenoir_arena_insert_remove", |b| {
        b.iter(|| {
            let mut tree = Tree::with_capacity(keys.len());
            for &k in &keys {
                let _ = tree.insert(k);
            }
            for &k in keys.iter().rev() {
                let _ = tree.remove(k);
            }
            tree
        })
    });
    c.bench_function("rbtree_insert_remove", |b| {
        b.iter(|| {
            let mut tree = rbtree::RBTree::<i64, ()>::new();
            for &k in &keys {
                tree.insert(k, ());
            }
            for k in keys.iter().rev() {
                tree.remove(k);
            }
            tree
        })
    });
}

criterion_group!(benches, insert, insert_remove);
criterion_main!(benches);
