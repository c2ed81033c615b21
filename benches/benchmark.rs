use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use setdict::store::Dictionary;

fn populated(keys: usize, members: usize) -> Dictionary {
    let mut dictionary = Dictionary::new();
    for k in 0..keys {
        let key = format!("key-{k}");
        for m in 0..members {
            dictionary
                .add(&key, &format!("member-{m}"))
                .expect("unique member");
        }
    }
    dictionary
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let small = populated(10, 10);
    c.bench_function("items 100", |b| b.iter(|| black_box(&small).items()));

    let large = populated(100, 100);
    c.bench_function("items 10k", |b| b.iter(|| black_box(&large).items()));
    c.bench_function("all members 10k", |b| {
        b.iter(|| black_box(&large).all_members())
    });

    c.bench_function("add and remove on 10k", |b| {
        b.iter_batched(
            || populated(100, 100),
            |mut dictionary| {
                dictionary.add("key-50", "member-extra").expect("unique");
                dictionary.remove("key-50", "member-extra").expect("present");
                dictionary
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
