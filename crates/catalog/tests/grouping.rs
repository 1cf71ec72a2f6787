use storefront_catalog::{
    CatalogPage, CatalogProduct, DeviceRole, GroupedCatalog, Subcategory, classify,
    decode_products, decode_subcategories, group_products,
};

const PAGE: &str = include_str!("fixtures/catalog_page.json");

fn titles(products: &[CatalogProduct], subcategories: &[Subcategory]) -> Vec<String> {
    group_products(products, subcategories)
        .into_iter()
        .map(|g| g.title)
        .collect()
}

#[test]
fn catalog_page_groups_in_display_order() {
    let products = decode_products(PAGE).expect("fixture decodes");
    assert_eq!(products.len(), 7);

    assert_eq!(
        titles(&products, &[]),
        [
            "Приемно-контрольные-приборы",
            "Датчики-и-извещатели",
            "Кабельная-продукция",
            "Security-Hub",
            "Другие-товары",
            "Сервисное-оборудование",
        ]
    );
}

#[test]
fn control_panels_sort_newest_first_within_group() {
    let products = decode_products(PAGE).unwrap();
    let groups = group_products(&products, &[]);
    let panels: Vec<&str> = groups[0].products.iter().map(|p| p.name.as_str()).collect();

    // both are control panels; Astra is featured so it wins over the newer Granit
    assert_eq!(panels, ["ПКП Astra-812 Pro", "Прибор приемно-контрольный Гранит-8"]);
    assert!(groups[0].products.iter().all(|p| classify(p) == DeviceRole::ControlPanel));
}

#[test]
fn subcategories_regroup_the_page() {
    let products = decode_products(PAGE).unwrap();
    let subs = decode_subcategories(r#"[{"id": "c-sens", "name": "Датчики"}, {"id": "c-cable", "name": "Провода"}]"#)
        .unwrap();

    let titles = titles(&products, &subs);
    assert!(titles.contains(&"Датчики".to_string()));
    assert!(titles.contains(&"Провода".to_string()));
    assert!(!titles.contains(&"Датчики-и-извещатели".to_string()));
}

#[test]
fn grouped_catalog_keeps_every_product() {
    let page = CatalogPage::from_json(PAGE).unwrap();
    let grouped = GroupedCatalog::build(&page.data, &[]);

    assert_eq!(grouped.total_products(), page.meta.total as usize);
    let display: Vec<&str> = grouped.iter().map(|g| g.display_title.as_str()).collect();
    assert!(display.contains(&"Security Hub"));
}

#[test]
fn worked_example_with_name_only_categories() {
    let json = r#"[{"id":1,"name":"Кабель КПСнг","category":{"name":"Кабельная продукция"}}, {"id":2,"name":"ПКП Astra-812","category":{"name":"Приемно-контрольные приборы"}}]"#;
    let products = decode_products(json).expect("categories without ids decode");
    assert!(products.iter().all(|p| p.category.as_ref().is_some_and(|c| c.id.is_none())));

    let groups = group_products(&products, &[]);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].title, "Приемно-контрольные-приборы");
    assert_eq!(groups[0].products[0].id.as_str(), "2");
    assert_eq!(groups[1].title, "Кабельная-продукция");
    assert_eq!(groups[1].products[0].id.as_str(), "1");
}

#[test]
fn name_only_categories_ignore_subcategories() {
    let json = r#"[
        {"id": 1, "name": "Извещатель", "category": {"name": "Пожарная сигнализация"}},
        {"id": 2, "name": "Стяжки"}
    ]"#;
    let products = decode_products(json).unwrap();
    let subs = decode_subcategories(r#"[{"id": "s1", "name": "Датчики"}]"#).unwrap();

    assert_eq!(titles(&products, &subs), ["Другие-товары", "Пожарная-сигнализация"]);
}

#[test]
fn serializes_groups_for_renderers() {
    let products = decode_products(PAGE).unwrap();
    let grouped = GroupedCatalog::build(&products, &[]);
    let json = serde_json::to_value(&grouped).unwrap();

    let first = &json[0];
    assert_eq!(first["title"], "Приемно-контрольные-приборы");
    assert_eq!(first["priority"], 10);
    assert_eq!(first["products"].as_array().map(Vec::len), Some(2));
}
