use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{TimeZone, Utc};
use storefront_catalog::{CatalogProduct, CategoryRef, Subcategory, classify, group_products};

const NAMES: &[&str] = &[
    "ПКП Astra-812 Pro",
    "Извещатель охранный",
    "Кабель КПСнг",
    "Блок питания 12В",
    "Модуль GSM",
    "Шкаф настенный",
    "Тестер шлейфов",
    "Стяжки нейлоновые",
];

const CATEGORIES: &[&str] = &[
    "Приемно-контрольные приборы",
    "Датчики и извещатели",
    "Кабельная продукция",
    "Блоки питания",
    "Модули расширения",
    "Корпуса и шкафы",
    "Сервисное оборудование",
    "Расходники",
];

/// Deterministic catalog page of `n` products spread over all categories.
fn catalog(n: usize) -> Vec<CatalogProduct> {
    (0..n)
        .map(|i| {
            let category = CATEGORIES[i % CATEGORIES.len()];
            CatalogProduct::new(format!("p{i}"), format!("{} #{i}", NAMES[i % NAMES.len()]))
                .unwrap()
                .with_category(CategoryRef::new(format!("c{}", i % CATEGORIES.len()), category).unwrap())
                .featured(i % 7 == 0)
                .created(Utc.timestamp_opt((i as i64 % 365) * 86_400, 0).unwrap())
        })
        .collect()
}

fn bench_group_products(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_products");
    for size in [24usize, 96, 1_000] {
        let products = catalog(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("no_subcategories", size), &products, |b, p| {
            b.iter(|| group_products(black_box(p), &[]))
        });

        let subs = vec![
            Subcategory::new("c1", "Датчики").unwrap(),
            Subcategory::new("c2", "Провода").unwrap(),
        ];
        group.bench_with_input(BenchmarkId::new("with_subcategories", size), &products, |b, p| {
            b.iter(|| group_products(black_box(p), black_box(&subs)))
        });
    }
    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let products = catalog(NAMES.len());
    c.bench_function("classify_cascade", |b| {
        b.iter(|| {
            for p in &products {
                black_box(classify(black_box(p)));
            }
        })
    });
}

criterion_group!(benches, bench_group_products, bench_classify);
criterion_main!(benches);
