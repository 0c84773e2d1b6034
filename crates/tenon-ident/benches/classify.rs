use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tenon_ident::{derive_name, extract_class, Candidate, ClassSpec, Instance};

fn mixed_candidates() -> Vec<Candidate> {
    let class = ClassSpec::named("UserService");
    vec![
        Candidate::from("my.service.id"),
        Candidate::Callable(class.clone()),
        Candidate::Callable(ClassSpec::anonymous()),
        Candidate::Instance(Instance::new(class)),
        Candidate::Int(42),
        Candidate::Null,
        Candidate::List(vec![Candidate::Int(1), Candidate::Int(2)]),
    ]
}

fn bench_derive_name(c: &mut Criterion) {
    let candidates = mixed_candidates();

    c.bench_function("derive_name_mixed", |b| {
        b.iter(|| {
            for candidate in black_box(&candidates) {
                black_box(derive_name(candidate));
            }
        });
    });
}

fn bench_extract_class(c: &mut Criterion) {
    let class = ClassSpec::named("UserService");
    let instance = Candidate::Instance(Instance::new(class.clone()));
    let callable = Candidate::Callable(class);

    c.bench_function("extract_class_instance", |b| {
        b.iter(|| extract_class(black_box(&instance)).unwrap());
    });

    c.bench_function("extract_class_callable", |b| {
        b.iter(|| extract_class(black_box(&callable)).unwrap());
    });
}

criterion_group!(benches, bench_derive_name, bench_extract_class);
criterion_main!(benches);
