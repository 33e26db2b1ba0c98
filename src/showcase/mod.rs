//! The showcase schema catalog.
//!
//! Eight small schemas that together exercise the whole engine surface:
//! coercion with defaults, nested objects, cross-field rules, computed
//! fields, wire aliases, strict typing with email/url formats, enums, and
//! extra-field rejection. The CLI registers them at startup; the integration
//! suite drives them end-to-end.

use crate::schema::{
    ComputedField, Constraint, FieldKind, FieldSpec, SchemaRegistry, SchemaResult, SchemaSpec,
};
use crate::validate::FieldValue;

/// Basic validation: required fields, defaults and simple bounds.
pub fn item() -> SchemaResult<SchemaSpec> {
    SchemaSpec::builder("Item")
        .field(FieldSpec::required("name", FieldKind::Str))
        .field(
            FieldSpec::optional("description", FieldKind::Str).default_value(FieldValue::Null),
        )
        .field(FieldSpec::required("price", FieldKind::Float).constraint(Constraint::gt(0.0)))
        .field(
            FieldSpec::optional("quantity", FieldKind::Int)
                .default_value(FieldValue::Int(1))
                .constraint(Constraint::ge(0.0)),
        )
        .field(
            FieldSpec::optional("tags", FieldKind::StringList)
                .default_value(FieldValue::StringList(Vec::new())),
        )
        .build()
}

/// Nested models: a user holding an address record.
pub fn user() -> SchemaResult<SchemaSpec> {
    let address = SchemaSpec::builder("Address")
        .field(FieldSpec::required("street", FieldKind::Str))
        .field(FieldSpec::required("city", FieldKind::Str))
        .field(
            FieldSpec::required("zip_code", FieldKind::Str)
                .constraint(Constraint::pattern(r"^\d{5}(-\d{4})?$")?),
        )
        .build()?;

    SchemaSpec::builder("User")
        .field(FieldSpec::required("username", FieldKind::Str))
        .field(FieldSpec::required("email", FieldKind::Email))
        .field(FieldSpec::required("address", FieldKind::Object(Box::new(address))))
        .field(
            FieldSpec::optional("hobbies", FieldKind::StringList)
                .default_value(FieldValue::StringList(Vec::new())),
        )
        .build()
}

/// Cross-field validation: the end date may not precede the start date.
pub fn event() -> SchemaResult<SchemaSpec> {
    SchemaSpec::builder("Event")
        .field(FieldSpec::required("name", FieldKind::Str))
        .field(FieldSpec::required("start_date", FieldKind::Date))
        .field(FieldSpec::required("end_date", FieldKind::Date))
        .rule("end date not before start date", |record| {
            match (record.as_date("start_date"), record.as_date("end_date")) {
                (Some(start), Some(end)) if end < start => {
                    Err("end date cannot be before start date".into())
                }
                _ => Ok(()),
            }
        })
        .build()
}

/// Computed fields: total cost derived from price and quantity.
pub fn order_item() -> SchemaResult<SchemaSpec> {
    SchemaSpec::builder("OrderItem")
        .field(FieldSpec::required("item_name", FieldKind::Str))
        .field(FieldSpec::required("price", FieldKind::Float).constraint(Constraint::gt(0.0)))
        .field(FieldSpec::required("quantity", FieldKind::Int).constraint(Constraint::ge(1.0)))
        .computed(ComputedField::new(
            "total_cost",
            FieldKind::Float,
            &["price", "quantity"],
            |view| {
                FieldValue::Float(
                    view.as_f64("price").unwrap_or(0.0) * view.as_f64("quantity").unwrap_or(0.0),
                )
            },
        ))
        .build()
}

/// Wire aliases: camelCase input keys mapping to snake_case fields.
pub fn product() -> SchemaResult<SchemaSpec> {
    SchemaSpec::builder("Product")
        .field(FieldSpec::required("product_id", FieldKind::Int).wire_name("productId"))
        .field(FieldSpec::required("item_name", FieldKind::Str).wire_name("itemName"))
        .field(
            FieldSpec::required("stock_count", FieldKind::Int)
                .wire_name("stockCount")
                .constraint(Constraint::ge(0.0)),
        )
        .build()
}

/// Strict typing plus email and url formats.
pub fn strict_data() -> SchemaResult<SchemaSpec> {
    SchemaSpec::builder("StrictData")
        .field(FieldSpec::required("strict_user_id", FieldKind::Int).strict())
        .field(FieldSpec::required("user_email", FieldKind::Email))
        .field(FieldSpec::optional("website", FieldKind::Url).default_value(FieldValue::Null))
        .build()
}

/// Enum validation: a status restricted to four states.
pub fn task() -> SchemaResult<SchemaSpec> {
    SchemaSpec::builder("Task")
        .field(FieldSpec::required("task_id", FieldKind::Str))
        .field(FieldSpec::required(
            "status",
            FieldKind::Enum(vec![
                "pending".into(),
                "running".into(),
                "completed".into(),
                "failed".into(),
            ]),
        ))
        .build()
}

/// Extra-field rejection via the forbid policy.
pub fn configured() -> SchemaResult<SchemaSpec> {
    SchemaSpec::builder("Configured")
        .field(FieldSpec::required("expected_field", FieldKind::Str))
        .field(
            FieldSpec::optional("optional_field", FieldKind::Int)
                .default_value(FieldValue::Null),
        )
        .forbid_extra_fields()
        .build()
}

/// Registers the whole catalog.
pub fn register_all(registry: &mut SchemaRegistry) -> SchemaResult<()> {
    registry.register(item()?)?;
    registry.register(user()?)?;
    registry.register(event()?)?;
    registry.register(order_item()?)?;
    registry.register(product()?)?;
    registry.register(strict_data()?)?;
    registry.register(task()?)?;
    registry.register(configured()?)?;
    Ok(())
}
