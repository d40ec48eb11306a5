//! Tests for order specifications

use pretty_assertions::assert_eq;
use sqlmap_query::{FieldExpression, OrderEntry, OrderSpecification, SortDirection};

fn field(path: &str) -> FieldExpression {
    FieldExpression::field(path)
}

#[test]
fn test_empty_then_append() {
    let mut order = OrderSpecification::empty();
    assert!(order.is_empty());

    order.add_field("a").add_field_with("b", false);
    assert_eq!(order.attributes(), ["a", "b"]);
    assert_eq!(order.len(), 2);
    assert!(order.entries()[0].is_ascending());
    assert!(!order.entries()[1].is_ascending());
}

#[test]
fn test_seeded_defaults_to_ascending() {
    let by_path = OrderSpecification::by_field("name");
    let by_expr = OrderSpecification::by_expression(field("name"));

    assert_eq!(by_path, by_expr);
    assert_eq!(by_path.entries()[0].direction(), SortDirection::Ascending);
}

#[test]
fn test_seeded_with_direction() {
    let order = OrderSpecification::by_expression_with(FieldExpression::sum("total"), false);
    assert_eq!(order.entries()[0].direction(), SortDirection::Descending);
    assert_eq!(order.attributes(), ["total"]);
}

#[test]
fn test_add_field_wraps_as_plain_field() {
    let mut order = OrderSpecification::empty();
    order.add_field("customer.city");
    assert_eq!(order.entries()[0].expression(), &field("customer.city"));
}

#[test]
fn test_add_prebuilt_entry() {
    let mut order = OrderSpecification::by_field("a");
    order.add_entry(OrderEntry::descending(FieldExpression::count()));
    assert_eq!(order.len(), 2);
    assert_eq!(order.to_string(), "a ASC, COUNT(*) DESC");
}

#[test]
fn test_direction_matters_for_equality() {
    let asc = OrderSpecification::by_field_with("a", true);
    let desc = OrderSpecification::by_field_with("a", false);
    assert_ne!(asc, desc);
}

#[test]
fn test_entry_order_matters_for_equality() {
    let mut ab = OrderSpecification::empty();
    ab.add_field("a").add_field("b");
    let mut ba = OrderSpecification::empty();
    ba.add_field("b").add_field("a");

    assert_ne!(ab, ba);
    ba.entries_mut().swap(0, 1);
    assert_eq!(ab, ba);
}

#[test]
fn test_length_matters_for_equality() {
    let mut longer = OrderSpecification::by_field("a");
    longer.add_field("b");
    assert_ne!(OrderSpecification::by_field("a"), longer);
}

#[test]
fn test_attributes_concatenate_entries() {
    let mut order = OrderSpecification::empty();
    order
        .add_expression(FieldExpression::coalesce_fields(["nickname", "name"]))
        .add_expression_with(
            FieldExpression::divide(FieldExpression::sum("total"), field("count")),
            false,
        )
        .add_field("name");

    assert_eq!(order.attributes(), ["nickname", "name", "total", "count", "name"]);
    assert_eq!(
        order.distinct_attributes().into_iter().collect::<Vec<_>>(),
        ["nickname", "name", "total", "count"]
    );
}

#[test]
fn test_set_entries_replaces_everything() {
    let mut order = OrderSpecification::empty();
    order.add_field("a").add_field("b").add_field("c");

    order.set_entries(vec![
        OrderEntry::ascending(field("x")),
        OrderEntry::descending(field("y")),
    ]);
    assert_eq!(order.attributes(), ["x", "y"]);

    order.set_entries(Vec::<OrderEntry>::new());
    assert!(order.is_empty());
}

#[test]
fn test_iterate_and_collect() {
    let order: OrderSpecification = ["a", "b", "c"]
        .into_iter()
        .map(|p| OrderEntry::ascending(field(p)))
        .collect();

    let rendered: Vec<String> = (&order).into_iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["a ASC", "b ASC", "c ASC"]);
}
