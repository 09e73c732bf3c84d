use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;
use texture_format_caps_glb::{decode_glb, parse_glb, GlbOptions};

#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};

const VERTEX_COUNT: usize = 16 * 1024;

/// A container with one interleaved position/normal view and two accessors.
fn create_mesh_glb() -> Vec<u8> {
    let stride = 24;
    let json = format!(
        r##"{{
            "asset": {{ "version": "2.0" }},
            "buffers": [{{ "byteLength": {length} }}],
            "bufferViews": [{{ "buffer": 0, "byteLength": {length}, "byteStride": {stride} }}],
            "accessors": [
                {{ "bufferView": 0, "componentType": 5126, "count": {VERTEX_COUNT}, "type": "VEC3" }},
                {{ "bufferView": 0, "byteOffset": 12, "componentType": 5126, "count": {VERTEX_COUNT}, "type": "VEC3" }}
            ],
            "meshes": [{{ "primitives": [{{ "attributes": {{ "POSITION": "#/accessors/0", "NORMAL": "#/accessors/1" }} }}] }}]
        }}"##,
        length = VERTEX_COUNT * stride,
    );
    let mut json = json.into_bytes();
    json.resize(json.len().div_ceil(4) * 4, b' ');
    let binary: Vec<u8> = (0..VERTEX_COUNT * stride).map(|x| (x % 251) as u8).collect();

    let mut data = Vec::new();
    data.extend_from_slice(b"glTF");
    data.extend_from_slice(&2u32.to_le_bytes());
    data.extend_from_slice(&((12 + 8 + json.len() + 8 + binary.len()) as u32).to_le_bytes());
    data.extend_from_slice(&(json.len() as u32).to_le_bytes());
    data.extend_from_slice(b"JSON");
    data.extend_from_slice(&json);
    data.extend_from_slice(&(binary.len() as u32).to_le_bytes());
    data.extend_from_slice(b"BIN\0");
    data.extend_from_slice(&binary);
    data
}

fn criterion_benchmark(c: &mut Criterion) {
    let data = create_mesh_glb();
    let options = GlbOptions::default();

    let mut group = c.benchmark_group("GLB Parsing");
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("decode_glb", |b| {
        b.iter(|| decode_glb(black_box(&data), &options))
    });

    group.bench_function("parse_glb", |b| {
        b.iter(|| parse_glb(black_box(&data), &options))
    });

    let unresolved = GlbOptions::builder().resolve_json_pointers(false).build();
    group.bench_function("parse_glb_without_pointers", |b| {
        b.iter(|| parse_glb(black_box(&data), &unresolved))
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
