use alignment_groups::{AlignmentIndex, Side};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Generate a near-diagonal alignment, as produced for closely related languages
fn generate_diagonal(len: usize) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut seed = 12345u64;

    for s in 0..len {
        // Simple LCG random
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        let t = (s + (seed % 3) as usize).saturating_sub(1).min(len - 1);
        tokens.push(format!("{}-{}", s, t));
    }
    tokens
}

/// Generate a sparse scattered alignment with many unlinked positions
fn generate_scattered(len: usize) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut seed = 54321u64;

    for _ in 0..len / 3 {
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        let s = (seed >> 8) as usize % len;
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        let t = (seed >> 8) as usize % len;
        tokens.push(format!("{}-{}", s, t));
    }
    tokens
}

fn bench_construction(c: &mut Criterion) {
    let sizes = [20, 80, 300];
    let mut group = c.benchmark_group("construction");

    for size in sizes.iter() {
        let tokens = generate_diagonal(*size);

        group.bench_with_input(BenchmarkId::new("diagonal", size), &tokens, |b, tokens| {
            b.iter(|| black_box(AlignmentIndex::new(black_box(tokens), *size, *size)));
        });
    }

    group.finish();
}

fn bench_groups(c: &mut Criterion) {
    let sizes = [20, 80, 300];
    let mut group = c.benchmark_group("groups");

    for size in sizes.iter() {
        for (name, tokens) in [
            ("diagonal", generate_diagonal(*size)),
            ("scattered", generate_scattered(*size)),
        ] {
            let index = match AlignmentIndex::new(&tokens, *size, *size) {
                Ok(index) => index,
                Err(e) => panic!("benchmark input rejected: {}", e),
            };

            group.bench_with_input(BenchmarkId::new(name, size), &index, |b, index| {
                b.iter(|| black_box(index.groups(Side::Source, false)));
            });

            group.bench_with_input(
                BenchmarkId::new(format!("{}_consecutive", name), size),
                &index,
                |b, index| {
                    b.iter(|| black_box(index.groups(Side::Source, true)));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_construction, bench_groups);
criterion_main!(benches);
