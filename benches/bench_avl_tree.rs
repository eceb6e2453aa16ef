use avl::{AvlTree, Order};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng, XorShiftRng};
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 1000;

fn random_keys() -> Vec<i32> {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    (0..NUM_OF_OPERATIONS).map(|_| rng.gen::<i32>()).collect()
}

fn bench_btreeset_insert(c: &mut Criterion) {
    let keys = random_keys();
    c.bench_function("bench btreeset insert", move |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for key in &keys {
                set.insert(*key);
            }
            black_box(set)
        })
    });
}

fn bench_avl_tree_insert(c: &mut Criterion) {
    let keys = random_keys();
    c.bench_function("bench avl_tree insert", move |b| {
        b.iter(|| {
            let mut tree = AvlTree::new();
            for key in &keys {
                tree.insert(*key);
            }
            black_box(tree)
        })
    });
}

fn bench_avl_tree_insert_sorted(c: &mut Criterion) {
    c.bench_function("bench avl_tree insert sorted", |b| {
        b.iter(|| {
            let mut tree = AvlTree::new();
            for key in 0..NUM_OF_OPERATIONS as i32 {
                tree.insert(key);
            }
            black_box(tree)
        })
    });
}

fn bench_avl_tree_delete(c: &mut Criterion) {
    let keys = random_keys();
    c.bench_function("bench avl_tree delete", move |b| {
        b.iter(|| {
            let mut tree = AvlTree::new();
            for key in &keys {
                tree.insert(*key);
            }
            for key in &keys {
                let _ = tree.delete(*key);
            }
            black_box(tree)
        })
    });
}

fn bench_avl_tree_traverse(c: &mut Criterion) {
    let mut tree = AvlTree::new();
    for key in random_keys() {
        tree.insert(key);
    }

    c.bench_function("bench avl_tree traverse", move |b| {
        b.iter(|| {
            for order in Order::ALL.iter() {
                black_box(tree.traverse(*order));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_btreeset_insert,
    bench_avl_tree_insert,
    bench_avl_tree_insert_sorted,
    bench_avl_tree_delete,
    bench_avl_tree_traverse
);
criterion_main!(benches);
