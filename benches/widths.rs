use criterion::{criterion_group, criterion_main, Criterion};

use feistel::{
    width::{big, w32, w64},
    Isomorphism,
};
use num_bigint::BigUint;

fn widths_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("unbalanced 32 bits, 8 rounds");
    let keys = data_gen::round_keys(7, 8);
    let inputs: Vec<u64> = data_gen::random_inputs(7, u32::MAX as u64, 100_000);

    let narrow = w32::binary_split(8, 15, 17, {
        let f = data_gen::keyed_round(keys.clone());
        move |round: u32, value: &u32| f(round, &u64::from(*value)) as u32
    })
    .unwrap();
    let mut narrow_inputs = inputs.iter().map(|x| *x as u32).cycle();
    group.bench_function("u32", |b| b.iter(|| narrow.apply(narrow_inputs.next().unwrap())));

    let wide = w64::unbalanced(8, 32, 15, 17, data_gen::keyed_round(keys.clone())).unwrap();
    let mut wide_inputs = inputs.iter().copied().cycle();
    group.bench_function("u64", |b| b.iter(|| wide.apply(wide_inputs.next().unwrap())));

    let mask = BigUint::from(u64::MAX);
    let unbounded = big::unbalanced(8, 32, 15, 17, move |round: u32, value: &BigUint| {
        (value * (keys[round as usize] | 1)) & &mask
    })
    .unwrap();
    let mut big_inputs = inputs.iter().map(|x| BigUint::from(*x)).cycle();
    group.bench_function("BigUint", |b| b.iter(|| unbounded.apply(big_inputs.next().unwrap())));

    group.finish();
}

criterion_group!(
    name = widths;
    config = Criterion::default().sample_size(200);
    targets = widths_bench
);
criterion_main!(widths);
