use std::sync::OnceLock;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use bench_harness::adapters::adapters;
use bench_harness::datasets::{fast_datasets, synthetic_datasets, Dataset};
#[cfg(feature = "pprof")]
use pprof::criterion::{Output, PProfProfiler};

static DATASETS: OnceLock<Vec<Dataset>> = OnceLock::new();

fn fast_mode_enabled() -> bool {
    std::env::var_os("BENCH_FAST").is_some()
}

fn datasets() -> &'static Vec<Dataset> {
    DATASETS.get_or_init(|| {
        if fast_mode_enabled() {
            fast_datasets()
        } else {
            synthetic_datasets()
        }
    })
}

fn bench_encode(c: &mut Criterion) {
    for adapter in adapters() {
        let mut group = c.benchmark_group(format!("encode/{}", adapter.name()));
        for dataset in datasets() {
            group.throughput(Throughput::Bytes(dataset.bytes.len() as u64));
            group.bench_with_input(
                BenchmarkId::new("base64", &dataset.name),
                &dataset.bytes,
                |b, bytes| {
                    b.iter(|| {
                        let _ = adapter.encode(black_box(bytes)).unwrap();
                    })
                },
            );
        }
        group.finish();
    }
}

fn bench_decode(c: &mut Criterion) {
    let reference = adapters().remove(0);
    for adapter in adapters() {
        let mut group = c.benchmark_group(format!("decode/{}", adapter.name()));
        for dataset in datasets() {
            let text = reference.encode(&dataset.bytes).expect("encode dataset");
            assert_eq!(adapter.decode(&text).expect("decode dataset"), dataset.bytes);
            group.throughput(Throughput::Bytes(dataset.bytes.len() as u64));
            group.bench_with_input(
                BenchmarkId::new("base64", &dataset.name),
                &text,
                |b, text| {
                    b.iter(|| {
                        let _ = adapter.decode(black_box(text)).unwrap();
                    })
                },
            );
        }
        group.finish();
    }
}

fn criterion_config() -> Criterion {
    let mut criterion = Criterion::default();
    if fast_mode_enabled() {
        criterion = criterion
            .sample_size(10)
            .warm_up_time(Duration::from_millis(500))
            .measurement_time(Duration::from_secs(1))
            .without_plots();
    }
    #[cfg(feature = "pprof")]
    {
        criterion = criterion.with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    }
    criterion.configure_from_args()
}

criterion_group! {
    name = benches;
    config = criterion_config();
    targets = bench_encode, bench_decode
}
criterion_main!(benches);
