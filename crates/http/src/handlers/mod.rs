#![allow(clippy::shadow_reuse, reason = "Shadowing for Arc clones is idiomatic")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod actors;
pub mod directors;
pub mod movies;
pub mod overview;

use axum::Json;
use filmiq_core::{FilterSpec, to_columns};
use filmiq_service::{DashboardService, ServiceError};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::api_error::ApiError;
use crate::query_types::{FilterQuery, TableFormat};

/// Fills the omitted filter fields from the session defaults.
fn resolve_filter(
    service: &DashboardService,
    filter: FilterQuery,
) -> Result<FilterSpec, ServiceError> {
    Ok(filter.into_spec(service.default_filter()?))
}

/// Serializes `value`, pivoting row lists into column maps when asked to.
fn render<T: Serialize>(value: &T, format: TableFormat) -> Result<Json<Value>, ApiError> {
    let value = serde_json::to_value(value)?;
    Ok(Json(match format {
        TableFormat::Rows => value,
        TableFormat::Columns => pivot(value)?,
    }))
}

/// A top-level row list, or every row-list field of an object, becomes
/// `column -> values`.
fn pivot(value: Value) -> serde_json::Result<Value> {
    match value {
        Value::Array(rows) => to_columns(&rows).map(Value::Object),
        Value::Object(fields) => fields
            .into_iter()
            .map(|(name, field)| {
                let field = match field {
                    Value::Array(rows) if rows.iter().all(Value::is_object) => {
                        Value::Object(to_columns(&rows)?)
                    },
                    other => other,
                };
                Ok((name, field))
            })
            .collect::<serde_json::Result<Map<String, Value>>>()
            .map(Value::Object),
        other => Ok(other),
    }
}
