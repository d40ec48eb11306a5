//! Tests for field expression construction and traversal
//!
//! Covers:
//! - Leaf nodes (fields, constants, count)
//! - Unary functions in path and nested form
//! - Binary and variadic functions
//! - Attribute collection order and duplicates
//! - Structural equality and hashing

use pretty_assertions::assert_eq;
use rstest::rstest;
use rust_decimal::Decimal;
use sqlmap_query::{ConstantValue, FieldExpression, FieldFunction};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

fn field(path: &str) -> FieldExpression {
    FieldExpression::field(path)
}

fn hash_of(expr: &FieldExpression) -> u64 {
    let mut hasher = DefaultHasher::new();
    expr.hash(&mut hasher);
    hasher.finish()
}

// ============================================================================
// Leaves
// ============================================================================

#[test]
fn test_field_attributes() {
    let expr = field("customer.name");
    assert_eq!(expr.function(), FieldFunction::Field);
    assert_eq!(expr.attributes(), ["customer.name"]);
}

#[test]
fn test_constants_have_no_attributes() {
    assert!(FieldExpression::constant_null().attributes().is_empty());
    assert!(FieldExpression::constant_string("x").attributes().is_empty());
    assert!(FieldExpression::constant_number(3).attributes().is_empty());
    assert!(FieldExpression::count().attributes().is_empty());
}

#[test]
fn test_null_constant_is_empty() {
    let expr = FieldExpression::constant_null();
    assert_eq!(expr.function(), FieldFunction::NullConstant);
    assert_eq!(expr.field_path(), None);
    assert!(expr.children().is_empty());
    assert_eq!(expr.constant_value(), None);
}

#[test]
fn test_constant_values() {
    assert_eq!(
        FieldExpression::constant_string("open").constant_value(),
        Some(&ConstantValue::String("open".to_string()))
    );
    assert_eq!(
        FieldExpression::constant_number(Decimal::new(995, 2))
            .constant_value()
            .and_then(ConstantValue::as_number),
        Some(Decimal::new(995, 2))
    );
}

#[test]
fn test_empty_path_is_accepted() {
    let expr = field("");
    assert_eq!(expr.attributes(), [""]);
}

// ============================================================================
// Unary functions
// ============================================================================

#[rstest]
#[case(FieldExpression::sum("amount"), FieldFunction::Sum)]
#[case(FieldExpression::minimum("amount"), FieldFunction::Minimum)]
#[case(FieldExpression::maximum("amount"), FieldFunction::Maximum)]
#[case(FieldExpression::month("amount"), FieldFunction::Month)]
#[case(FieldExpression::year("amount"), FieldFunction::Year)]
fn test_unary_path_form(#[case] expr: FieldExpression, #[case] function: FieldFunction) {
    assert_eq!(expr.function(), function);
    assert_eq!(expr.field_path(), Some("amount"));
    assert!(expr.children().is_empty());
    assert_eq!(expr.attributes(), ["amount"]);
}

#[rstest]
#[case(FieldExpression::sum_of(field("amount")), FieldFunction::Sum)]
#[case(FieldExpression::minimum_of(field("amount")), FieldFunction::Minimum)]
#[case(FieldExpression::maximum_of(field("amount")), FieldFunction::Maximum)]
#[case(FieldExpression::month_of(field("amount")), FieldFunction::Month)]
#[case(FieldExpression::year_of(field("amount")), FieldFunction::Year)]
fn test_unary_expression_form(#[case] expr: FieldExpression, #[case] function: FieldFunction) {
    assert_eq!(expr.function(), function);
    assert_eq!(expr.field_path(), None);
    assert_eq!(expr.children().len(), 1);
    assert_eq!(expr.attributes(), ["amount"]);
}

#[test]
fn test_sum_of_product() {
    let expr = FieldExpression::sum_of(FieldExpression::multiply(field("qty"), field("price")));

    assert_eq!(expr.attributes(), ["qty", "price"]);
    assert_eq!(expr.function(), FieldFunction::Sum);
    assert_eq!(expr.children().len(), 1);
    assert_eq!(expr.children()[0].function(), FieldFunction::Multiply);
    assert_eq!(expr.to_string(), "SUM((qty * price))");
}

#[test]
fn test_month_of_coalesce() {
    let expr = FieldExpression::month_of(FieldExpression::coalesce_fields(["shipped", "ordered"]));
    assert_eq!(expr.attributes(), ["shipped", "ordered"]);
    assert_eq!(expr.to_string(), "MONTH(COALESCE(shipped, ordered))");
}

// ============================================================================
// Binary and variadic functions
// ============================================================================

#[test]
fn test_divide_keeps_operand_order() {
    let expr = FieldExpression::divide(field("total"), field("count"));
    assert_eq!(expr.attributes(), ["total", "count"]);
    assert_eq!(expr.children()[0], field("total"));
    assert_ne!(expr, FieldExpression::divide(field("count"), field("total")));
}

#[test]
fn test_multiply_keeps_duplicates() {
    let expr = FieldExpression::multiply(field("a"), field("a"));
    assert_eq!(expr.attributes(), ["a", "a"]);
    assert_eq!(expr.distinct_attributes().into_iter().collect::<Vec<_>>(), ["a"]);
}

#[test]
fn test_coalesce_forms_are_equal() {
    let from_paths = FieldExpression::coalesce_fields(["x", "y"]);
    let from_exprs = FieldExpression::coalesce([field("x"), field("y")]);

    assert_eq!(from_paths, from_exprs);
    assert_eq!(hash_of(&from_paths), hash_of(&from_exprs));
    assert_eq!(from_exprs.attributes(), ["x", "y"]);
}

#[test]
fn test_coalesce_with_constant_fallback() {
    let expr = FieldExpression::coalesce([field("nickname"), FieldExpression::constant_string("n/a")]);
    assert_eq!(expr.attributes(), ["nickname"]);
    assert_eq!(expr.to_string(), "COALESCE(nickname, 'n/a')");
}

#[test]
fn test_concat_order_matters() {
    let a = FieldExpression::concat([field("first"), field("last")]);
    let b = FieldExpression::concat([field("last"), field("first")]);
    assert_ne!(a, b);
    assert_eq!(a.attributes(), ["first", "last"]);
    assert_eq!(b.attributes(), ["last", "first"]);
}

#[test]
fn test_nested_attributes_preorder() {
    // SUM(a) / COALESCE(MAX(b), c * a)
    let expr = FieldExpression::divide(
        FieldExpression::sum("a"),
        FieldExpression::coalesce([
            FieldExpression::maximum("b"),
            FieldExpression::multiply(field("c"), field("a")),
        ]),
    );
    assert_eq!(expr.attributes(), ["a", "b", "c", "a"]);
    assert_eq!(
        expr.distinct_attributes().into_iter().collect::<Vec<_>>(),
        ["a", "b", "c"]
    );
}

// ============================================================================
// Equality and hashing
// ============================================================================

#[test]
fn test_independent_trees_are_equal() {
    let build = || {
        FieldExpression::concat([
            FieldExpression::year("created"),
            FieldExpression::constant_string("-"),
            FieldExpression::month_of(field("created")),
        ])
    };
    let (a, b) = (build(), build());
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn test_tag_distinguishes_equal_shapes() {
    assert_ne!(FieldExpression::minimum("x"), FieldExpression::maximum("x"));
    assert_ne!(FieldExpression::constant_null(), FieldExpression::count());
    assert_ne!(
        FieldExpression::constant_string("1"),
        FieldExpression::constant_number(1)
    );
}

#[test]
fn test_usable_as_set_key() {
    let set: HashSet<FieldExpression> = [
        FieldExpression::sum("total"),
        FieldExpression::sum("total"),
        FieldExpression::count(),
    ]
    .into_iter()
    .collect();
    assert_eq!(set.len(), 2);
    assert!(set.contains(&FieldExpression::count()));
}
