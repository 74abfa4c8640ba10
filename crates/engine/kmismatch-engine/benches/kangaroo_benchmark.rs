use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use kmismatch_engine::min_kangaroo;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ALPHABET: &[u8] = b"ACGT";
const PATTERN_LEN: usize = 32;
const TEXT_SIZES: &[usize] = &[1_000, 10_000, 100_000];
const BUDGETS: &[u32] = &[0, 2, 8];

fn random_bytes(rng: &mut StdRng, len: usize) -> Vec<u8> {
    (0..len).map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())]).collect()
}

fn benchmark_min_kangaroo(c: &mut Criterion) {
    let mut group = c.benchmark_group("min_kangaroo");
    group.sample_size(10);

    for &text_len in TEXT_SIZES {
        for &k in BUDGETS {
            let bench_name = format!("n{text_len}_k{k}");
            group.bench_function(&bench_name, |b| {
                b.iter_batched(
                    || {
                        let mut rng = StdRng::seed_from_u64(text_len as u64 + k as u64);
                        let pattern = random_bytes(&mut rng, PATTERN_LEN);
                        let text = random_bytes(&mut rng, text_len);
                        (pattern, text)
                    },
                    |(pattern, text)| min_kangaroo(k, &pattern, &text),
                    BatchSize::LargeInput,
                )
            });
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_min_kangaroo);
criterion_main!(benches);
