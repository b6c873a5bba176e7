//! Performance benchmarks for fanout

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fanout::test_utils::TestTree;
use fanout::{Format, LargeDirScanner, Organizer, bucket_key, walk};

/// Build a tree with `dirs` subdirectories of `files_per_dir` files each.
fn create_test_tree(dirs: usize, files_per_dir: usize) -> TestTree {
    let tree = TestTree::new();
    for d in 0..dirs {
        for f in 0..files_per_dir {
            tree.add_file(&format!("dir_{}/File_{:04}.dat", d, f), "");
        }
    }
    tree
}

fn bench_bucket_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("bucket_key");

    group.bench_function("ascii", |b| b.iter(|| bucket_key(black_box("Apple.jpg"))));

    group.bench_function("unicode", |b| {
        b.iter(|| bucket_key(black_box("Älgjakt_2024.jpg")))
    });

    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    let small = create_test_tree(4, 25);
    group.bench_function("small_tree_100_files", |b| {
        b.iter(|| {
            let mut scanner = LargeDirScanner::new(50, Format::Table, std::io::sink());
            walk(black_box(small.path()), &mut scanner).unwrap()
        })
    });

    let large = create_test_tree(10, 500);
    group.bench_function("large_tree_5000_files", |b| {
        b.iter(|| {
            let mut scanner = LargeDirScanner::new(1_000, Format::Table, std::io::sink());
            walk(black_box(large.path()), &mut scanner).unwrap()
        })
    });

    group.finish();
}

fn bench_organize_dry_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("organize_dry_run");

    let small = create_test_tree(4, 25);
    group.bench_function("small_tree_100_files", |b| {
        b.iter(|| {
            let mut organizer = Organizer::new(true);
            walk(black_box(small.path()), &mut organizer).unwrap();
            organizer.into_records()
        })
    });

    let large = create_test_tree(10, 500);
    group.bench_function("large_tree_5000_files", |b| {
        b.iter(|| {
            let mut organizer = Organizer::new(true);
            walk(black_box(large.path()), &mut organizer).unwrap();
            organizer.into_records()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_bucket_key, bench_scan, bench_organize_dry_run);
criterion_main!(benches);
