// SPDX-License-Identifier: Apache-2.0

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use faro_catalog_model::{normalize_owners, EntityRef, RefDefaults};
use serde_json::json;

fn bench_ref_parse(c: &mut Criterion) {
    let defaults = RefDefaults::owner("default");
    c.bench_function("entity_ref_from_compound", |b| {
        b.iter(|| {
            EntityRef::from_compound(black_box("group:default/platform-team"), &defaults)
                .expect("ref parse")
        })
    });
}

fn bench_normalize_owners(c: &mut Criterion) {
    let raw = json!([
        "group:default/platform-team",
        {"name": "user:default/jane", "role": "tech-lead"},
        "  user:default/eve  ",
        {"role": "missing-name"},
    ]);
    c.bench_function("normalize_owners", |b| {
        b.iter(|| normalize_owners(Some(black_box(&raw))))
    });
}

criterion_group!(benches, bench_ref_parse, bench_normalize_owners);
criterion_main!(benches);
