//! Benchmarks pointer resolution against `serde_json`'s built-in
//! `Value::pointer`.
use criterion::{Criterion, criterion_group, criterion_main};
use jpointer::{Pointer, get};
use serde_json::{Value, json};
use std::hint::black_box;

/// Builds a document nested `depth` levels deep, alternating objects and
/// arrays, along with a pointer to its innermost value.
fn nested_document(depth: usize) -> (Value, String) {
    let mut value = json!("leaf");
    let mut pointer = String::new();
    for level in (0..depth).rev() {
        if level % 2 == 0 {
            value = json!({ format!("key~{level}"): value, "other": level });
            pointer = format!("/key~0{level}{pointer}");
        } else {
            value = json!([null, value]);
            pointer = format!("/1{pointer}");
        }
    }
    (value, pointer)
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    for depth in [4, 32] {
        let (doc, pointer) = nested_document(depth);
        let parsed = Pointer::parse(&pointer).expect("valid pointer");

        group.bench_function(format!("get/{depth}"), |b| {
            b.iter(|| get(black_box(&doc), black_box(&pointer)));
        });
        group.bench_function(format!("parsed/{depth}"), |b| {
            b.iter(|| parsed.resolve(black_box(&doc)));
        });
        group.bench_function(format!("serde_json/{depth}"), |b| {
            b.iter(|| black_box(&doc).pointer(black_box(&pointer)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
