//! Benchmarks for registry construction and lookups.
//!
//! ```bash
//! cargo bench --bench bind_benchmarks
//! ```

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use cti_schema::{SchemaConfig, bootstrap};
use cti_schema_core::{
    AttributeDefinition, Category, Converter, EntityTypeDefinition, RelationDeclaration,
    RelationTarget, Representative, StoreEntity, TypeInfo,
};
use cti_schema_registry::SchemaRegistry;
use serde_json::json;

/// Synthetic domain types, each relating to the previous one.
fn synthetic_definitions(count: usize) -> Vec<EntityTypeDefinition> {
    (0..count)
        .map(|i| {
            let name = format!("Type-{i}");
            let previous = format!("Type-{}", i.saturating_sub(1));
            EntityTypeDefinition::new(
                TypeInfo::new(name.to_lowercase(), name.clone(), Category::StixDomainObject),
                Converter::from_attributes(&name, vec!["name".to_string()]),
                Representative::field("name"),
            )
            .with_attribute(AttributeDefinition::string("name"))
            .with_attribute(AttributeDefinition::string("description"))
            .with_relation(RelationDeclaration::new(
                "related-to",
                vec![RelationTarget::new("related-to", previous)],
            ))
        })
        .collect()
}

fn bind_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry/bind");

    group.bench_function("builtin_modules", |b| {
        b.iter(|| {
            let mut registry = SchemaRegistry::new();
            registry.bind_all(cti_schema_modules::all());
            black_box(registry)
        });
    });

    for count in [10, 100, 1000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("synthetic_{count}"), |b| {
            b.iter_batched(
                || synthetic_definitions(count),
                |definitions| {
                    let mut registry = SchemaRegistry::new();
                    registry.bind_all(definitions);
                    black_box(registry)
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("bootstrap_default", |b| {
        let config = SchemaConfig::default();
        b.iter(|| black_box(bootstrap(black_box(&config))));
    });

    group.finish();
}

fn lookup_benchmarks(c: &mut Criterion) {
    let mut registry = SchemaRegistry::new();
    registry.bind_all(cti_schema_modules::all());

    let mut group = c.benchmark_group("registry/lookup");

    let mut entity = StoreEntity::new();
    entity.insert("standard_id".to_string(), json!("report--1"));
    entity.insert("name".to_string(), json!("Quarterly"));
    entity.insert("published".to_string(), json!("2024-03-01T10:00:00Z"));

    group.bench_function("convert_report", |b| {
        b.iter(|| black_box(registry.convert(black_box("Report"), &entity)));
    });

    let data = json!({ "name": "Quarterly", "published": "2024-03-01T10:00:00Z" });
    group.bench_function("standard_id_report", |b| {
        b.iter(|| black_box(registry.generate_standard_id(black_box("Report"), &data)));
    });

    group.bench_function("relations_between", |b| {
        b.iter(|| black_box(registry.relations().between("Indicator", black_box("Malware")).len()));
    });

    group.finish();
}

criterion_group!(benches, bind_benchmarks, lookup_benchmarks);
criterion_main!(benches);
