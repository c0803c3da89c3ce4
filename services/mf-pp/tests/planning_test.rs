//! 生产建议计算的整体性质

use mf_pp::domain::{
    Association, InventorySnapshot, Product, RawMaterial, SuggestionReport, plan, to_report,
};
use stockplan_domain_core::{Decimal, Entity, Money, Quantity};

fn money(units: i64) -> Money {
    Money::new(Decimal::from(units))
}

fn quantity(text: &str) -> Quantity {
    Quantity::new(text.parse().unwrap())
}

fn needs(product: &Product, raw_material: &RawMaterial, per_unit: &str) -> Association {
    Association::new(*product.id(), *raw_material.id(), quantity(per_unit))
}

fn report_for(snapshot: &InventorySnapshot) -> SuggestionReport {
    to_report(plan(
        &snapshot.products,
        &snapshot.associations_by_product(),
        &snapshot.stock(),
    ))
}

#[test]
fn scenario_binding_material_and_excluded_product() {
    let a = Product::new("A", "Product A", money(10));
    let b = Product::new("B", "Product B", money(50));
    let x = RawMaterial::new("X", "Material X", quantity("9"));
    let y = RawMaterial::new("Y", "Material Y", quantity("0"));
    let associations = vec![needs(&a, &x, "2"), needs(&b, &y, "1")];
    let snapshot = InventorySnapshot::new(vec![a.clone(), b], vec![x, y], associations);

    let report = report_for(&snapshot);

    assert_eq!(report.products_analyzed, 2);
    assert_eq!(report.producible_count, 1);
    assert_eq!(report.suggestions.len(), 1);
    assert_eq!(report.suggestions[0].product_id, *a.id());
    assert_eq!(report.suggestions[0].quantity_possible, 4);
    assert_eq!(report.total_production_value, money(40));
}

#[test]
fn empty_inventory_yields_empty_report() {
    let report = report_for(&InventorySnapshot::new(vec![], vec![], vec![]));

    let json = serde_json::to_string(&report).unwrap();
    assert_eq!(
        json,
        r#"{"total_production_value":0,"products_analyzed":0,"producible_count":0,"suggestions":[]}"#
    );
}

#[test]
fn floor_semantics() {
    let p = Product::new("P", "Product", money(1));
    let whole = RawMaterial::new("W", "Whole", quantity("10"));
    let fractional = RawMaterial::new("F", "Fractional", quantity("1.5"));

    let whole_only = InventorySnapshot::new(
        vec![p.clone()],
        vec![whole.clone()],
        vec![needs(&p, &whole, "3")],
    );
    assert_eq!(report_for(&whole_only).suggestions[0].quantity_possible, 3);

    let fractional_only = InventorySnapshot::new(
        vec![p.clone()],
        vec![fractional.clone()],
        vec![needs(&p, &fractional, "0.2")],
    );
    assert_eq!(report_for(&fractional_only).suggestions[0].quantity_possible, 7);
}

#[test]
fn product_without_associations_is_never_suggested() {
    let bare = Product::new("BARE", "No bill of materials", money(1000));
    let x = RawMaterial::new("X", "Material X", quantity("100"));
    let snapshot = InventorySnapshot::new(vec![bare], vec![x], vec![]);

    let report = report_for(&snapshot);
    assert!(report.suggestions.is_empty());
    assert_eq!(report.products_analyzed, 1);
    assert_eq!(report.total_production_value, Money::zero());
}

#[test]
fn quantity_is_monotonic_in_stock() {
    let p = Product::new("P", "Product", money(3));
    let x = RawMaterial::new("X", "Material X", quantity("0"));
    let y = RawMaterial::new("Y", "Material Y", quantity("7.5"));

    let mut previous = 0;
    for stock in ["0", "0.4", "1", "2.5", "2.999", "3", "10", "250.125"] {
        let mut x_at_level = x.clone();
        x_at_level.adjust_stock(quantity(stock));
        let snapshot = InventorySnapshot::new(
            vec![p.clone()],
            vec![x_at_level, y.clone()],
            vec![needs(&p, &x, "0.5"), needs(&p, &y, "0.25")],
        );

        let current = report_for(&snapshot)
            .suggestions
            .first()
            .map(|s| s.quantity_possible)
            .unwrap_or(0);
        assert!(current >= previous, "stock {} gave {} < {}", stock, current, previous);
        previous = current;
    }
    // 最终受 Y 约束：7.5 / 0.25
    assert_eq!(previous, 30);
}

#[test]
fn aggregates_are_consistent_and_within_stock() {
    let chair = Product::new("CHAIR", "Chair", Money::new(Decimal::new(8990, 2)));
    let table = Product::new("TABLE", "Table", Money::new(Decimal::new(34900, 2)));
    let shelf = Product::new("SHELF", "Shelf", Money::new(Decimal::new(4550, 2)));
    let wood = RawMaterial::new("WOOD", "Wood", quantity("120"));
    let screw = RawMaterial::new("SCREW", "Screw", quantity("500"));
    let glue = RawMaterial::new("GLUE", "Glue", quantity("3.5"));
    let associations = vec![
        needs(&chair, &wood, "4"),
        needs(&chair, &screw, "16"),
        needs(&chair, &glue, "0.1"),
        needs(&table, &wood, "12"),
        needs(&table, &glue, "0.25"),
        needs(&shelf, &wood, "2"),
        needs(&shelf, &screw, "6"),
    ];
    let snapshot = InventorySnapshot::new(
        vec![chair, table, shelf],
        vec![wood, screw, glue],
        associations,
    );

    let report = report_for(&snapshot);
    let stock = snapshot.stock();
    let bom = snapshot.associations_by_product();

    let summed: Money = report.suggestions.iter().map(|s| s.total_value).sum();
    assert_eq!(summed, report.total_production_value);
    assert_eq!(report.producible_count, report.suggestions.len());

    for suggestion in &report.suggestions {
        assert_eq!(
            suggestion.total_value,
            suggestion.unit_value.times(suggestion.quantity_possible)
        );
        for row in &bom[&suggestion.product_id] {
            let consumed = row.quantity_needed().value() * Decimal::from(suggestion.quantity_possible);
            assert!(consumed <= stock.available(row.raw_material_id()).value());
        }
    }

    // 价值降序
    let values: Vec<Money> = report.suggestions.iter().map(|s| s.total_value).collect();
    let mut sorted = values.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(values, sorted);
}

#[test]
fn equal_values_are_ranked_by_code() {
    let zeta = Product::new("ZETA", "Zeta", money(5));
    let alpha = Product::new("ALPHA", "Alpha", money(5));
    let x = RawMaterial::new("X", "Material X", quantity("10"));
    let snapshot = InventorySnapshot::new(
        vec![zeta.clone(), alpha.clone()],
        vec![x.clone()],
        vec![needs(&zeta, &x, "1"), needs(&alpha, &x, "1")],
    );

    let report = report_for(&snapshot);
    let codes: Vec<&str> = report
        .suggestions
        .iter()
        .map(|s| s.product_code.as_str())
        .collect();
    assert_eq!(codes, vec!["ALPHA", "ZETA"]);
    assert_eq!(report.suggestions[0].priority, 1);
    assert_eq!(report.suggestions[1].priority, 2);
}

#[test]
fn identical_input_gives_byte_identical_json() {
    let products: Vec<Product> = (0..6)
        .map(|i| Product::new(format!("P-{}", i), format!("Product {}", i), money(10 + i % 2)))
        .collect();
    let materials: Vec<RawMaterial> = (0..3)
        .map(|i| RawMaterial::new(format!("RM-{}", i), format!("Material {}", i), quantity("17.5")))
        .collect();
    let associations: Vec<Association> = products
        .iter()
        .enumerate()
        .map(|(i, p)| needs(p, &materials[i % 3], "1.25"))
        .collect();

    let forward = InventorySnapshot::new(products.clone(), materials.clone(), associations.clone());
    let mut reversed_products = products;
    reversed_products.reverse();
    let mut reversed_associations = associations;
    reversed_associations.reverse();
    let backward = InventorySnapshot::new(reversed_products, materials, reversed_associations);

    let first = serde_json::to_vec(&report_for(&forward)).unwrap();
    let second = serde_json::to_vec(&report_for(&forward)).unwrap();
    let shuffled = serde_json::to_vec(&report_for(&backward)).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, shuffled);
}

#[test]
fn snapshot_is_not_consumed_between_products() {
    // 两个产品共用同一原材料，各自都按完整库存计算
    let a = Product::new("A", "A", money(1));
    let b = Product::new("B", "B", money(1));
    let x = RawMaterial::new("X", "Material X", quantity("6"));
    let snapshot = InventorySnapshot::new(
        vec![a.clone(), b.clone()],
        vec![x.clone()],
        vec![needs(&a, &x, "2"), needs(&b, &x, "3")],
    );

    let report = report_for(&snapshot);
    let quantities: Vec<u64> = report.suggestions.iter().map(|s| s.quantity_possible).collect();
    assert_eq!(quantities, vec![3, 2]);
}
