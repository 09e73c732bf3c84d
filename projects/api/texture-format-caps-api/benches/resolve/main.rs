use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use texture_format_caps_api::{resolver, ExtensionSet, FeatureProbe};
use texture_format_caps_common::{extensions::*, TextureFormat};

#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};

const EXTENSIONS: &[&str] = &[
    EXT_COLOR_BUFFER_FLOAT,
    OES_TEXTURE_FLOAT_LINEAR,
    WEBGL_COMPRESSED_TEXTURE_S3TC,
    WEBGL_COMPRESSED_TEXTURE_S3TC_SRGB,
    EXT_TEXTURE_COMPRESSION_RGTC,
    WEBGL_COMPRESSED_TEXTURE_ETC,
];

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Format Resolution");
    let formats = TextureFormat::all_values();
    group.throughput(criterion::Throughput::Elements(formats.len() as u64));

    // Warm cache; every extension has been probed once.
    let probe = FeatureProbe::new(ExtensionSet::modern(EXTENSIONS));
    group.bench_function("is_supported_by_format", |b| {
        b.iter(|| {
            formats
                .iter()
                .filter(|&&format| resolver::is_supported(&probe, black_box(format)))
                .count()
        })
    });

    group.bench_function("is_supported_by_identifier", |b| {
        b.iter(|| {
            formats
                .iter()
                .filter(|format| resolver::is_supported(&probe, black_box(format.as_str())))
                .count()
        })
    });

    group.bench_function("to_native_token", |b| {
        b.iter(|| {
            formats
                .iter()
                .filter_map(|format| resolver::to_native_token(black_box(format.as_str())).ok())
                .count()
        })
    });

    // Cold cache; a new probe per iteration.
    group.bench_function("texture_features_cold", |b| {
        b.iter(|| FeatureProbe::new(ExtensionSet::modern(black_box(EXTENSIONS))).texture_features())
    });

    group.finish();
}

#[cfg(not(target_os = "windows"))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(target_os = "windows")]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
