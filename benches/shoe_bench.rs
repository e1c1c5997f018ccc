use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use card_shoe::{GameRng, Shoe, ShoeConfig};

fn bench_deal(c: &mut Criterion) {
    let mut shoe = Shoe::with_defaults(GameRng::new(42)).unwrap();

    // Includes the amortized cost of rebuilding at the cut card.
    c.bench_function("deal_six_deck", |b| b.iter(|| black_box(shoe.deal())));
}

fn bench_reset(c: &mut Criterion) {
    let mut shoe = Shoe::with_defaults(GameRng::new(42)).unwrap();

    c.bench_function("reset_six_deck", |b| b.iter(|| shoe.reset().unwrap()));
}

fn bench_construct(c: &mut Criterion) {
    c.bench_function("new_eight_deck", |b| {
        b.iter_batched(
            || GameRng::new(7),
            |rng| Shoe::new(ShoeConfig::new(8), rng).unwrap(),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_deal, bench_reset, bench_construct);
criterion_main!(benches);
