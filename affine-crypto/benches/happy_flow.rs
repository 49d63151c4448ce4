use affine_crypto::{decrypt, encrypt};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_happy_flow(c: &mut Criterion) {
    // the same message and key every iteration
    let original = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG";
    let (a, b) = (5, 8);

    c.bench_function("happy_flow", |bencher| {
        bencher.iter(|| {
            let cipher = encrypt(black_box(original), a, b).expect("encrypt");
            let decoded = decrypt(&cipher, a, b).expect("decrypt");

            black_box(decoded);
        })
    });
}

criterion_group!(benches, bench_happy_flow);
criterion_main!(benches);
