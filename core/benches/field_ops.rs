use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use minefield_core::*;

fn bench_generation(c: &mut Criterion) {
    let config = FieldConfig::new((255, 255), 12_000).unwrap();

    c.bench_function("scan generate 255x255", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            ScanGenerator::from_seed(seed)
                .generate(black_box(config), (127, 127))
                .unwrap()
        })
    });
}

fn bench_cascade(c: &mut Criterion) {
    let config = FieldConfig::new((255, 255), 0).unwrap();

    c.bench_function("cascade 255x255 empty", |b| {
        b.iter(|| {
            let mut field = Field::new(config, 0).unwrap();
            field.open(black_box((0, 0))).unwrap()
        })
    });
}

criterion_group!(benches, bench_generation, bench_cascade);
criterion_main!(benches);
