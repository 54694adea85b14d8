use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use steam_vdf::{from_slice, from_str, to_string, to_vec, Map, Value};

fn schema_text(items: usize) -> String {
    let mut out = String::from("\"items_game\"\n{\n  \"items\"\n  {\n");
    for i in 0..items {
        out.push_str(&format!(
            "    \"{}\"\n    {{\n      \"name\" \"item {}\"\n      \"prefab\" \"hat\"\n      \"item_quality\" \"unique\"\n    }}\n",
            5000 + i,
            i
        ));
    }
    out.push_str("  }\n}\n");
    out
}

fn schema_tree(items: usize) -> Map {
    from_str(&schema_text(items)).unwrap()
}

fn benchmark_decode_simple(c: &mut Criterion) {
    let source = "\"node\"\n{\n  \"key\" \"value\"\n  \"count\" \"3\"\n}\n";

    c.bench_function("decode_simple_node", |b| {
        b.iter(|| from_str(black_box(source)))
    });
}

fn benchmark_decode_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_schema");

    for size in [10, 100, 1000].iter() {
        let source = schema_text(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &source, |b, source| {
            b.iter(|| from_str(black_box(source)));
        });
    }

    group.finish();
}

fn benchmark_decode_utf16_bytes(c: &mut Criterion) {
    let tree = schema_tree(100);
    let bytes = to_vec(&tree).unwrap();

    c.bench_function("decode_utf16_schema_100", |b| {
        b.iter(|| from_slice(black_box(&bytes)))
    });
}

fn benchmark_encode_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_schema");

    for size in [10, 100, 1000].iter() {
        let tree = schema_tree(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &tree, |b, tree| {
            b.iter(|| to_string(black_box(tree)));
        });
    }

    group.finish();
}

fn benchmark_multikey_promotion(c: &mut Criterion) {
    let mut source = String::from("\"node\"\n{\n");
    for i in 0..500 {
        source.push_str(&format!("  \"attribute\" \"{}\"\n", i));
    }
    source.push_str("}\n");

    c.bench_function("decode_multikey_500", |b| {
        b.iter(|| {
            let map = from_str(black_box(&source)).unwrap();
            black_box(
                map.get("node")
                    .and_then(Value::as_node)
                    .and_then(|n| n.get("attribute"))
                    .is_some(),
            )
        })
    });
}

criterion_group!(
    benches,
    benchmark_decode_simple,
    benchmark_decode_sizes,
    benchmark_decode_utf16_bytes,
    benchmark_encode_sizes,
    benchmark_multikey_promotion
);
criterion_main!(benches);
