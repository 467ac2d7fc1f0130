use criterion::{
    BenchmarkId, Criterion, black_box, criterion_group, criterion_main,
};
use ppc_regs::{Fpr, Gpr};

pub fn gpr_from_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("gpr_from_name");
    for name in ["sp", "r0", "r31", "not_a_register"] {
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| black_box(Gpr::from_name(black_box(name))))
        });
    }
}

pub fn fpr_from_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("fpr_from_name");
    for name in ["f0", "f31", "bogus"] {
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| black_box(Fpr::from_name(black_box(name))))
        });
    }
}

criterion_group!(benches, gpr_from_name, fpr_from_name);
criterion_main!(benches);
