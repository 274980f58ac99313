use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};

use crate::chart::{render_comparison, Chart, ChartKind};
use crate::compare::{compare, Comparison};
use crate::operand::parse_operand;
use crate::report::ComparisonReport;
use crate::Error;

type HandlerError = (StatusCode, String);

/// Operand pair, as decimal strings
#[derive(Debug, Clone, Deserialize)]
pub struct Numbers {
    pub num1: String,
    pub num2: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphResponse {
    pub charts: Vec<Chart>,
    /// The same charts drawn as text
    pub text: String,
}

fn rejected(e: Error) -> HandlerError {
    (StatusCode::from(e.clone()), e.to_string())
}

/// Parses both operands and compares the algorithms off the async runtime.
async fn compare_numbers(numbers: Numbers) -> Result<Comparison, HandlerError> {
    let x = parse_operand(&numbers.num1).map_err(rejected)?;
    let y = parse_operand(&numbers.num2).map_err(rejected)?;
    tokio::task::spawn_blocking(move || compare(&x, &y))
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    "ok"
}

/// POST /calculate - Compare both algorithms on one operand pair
pub async fn calculate(
    Json(numbers): Json<Numbers>,
) -> Result<Json<ComparisonReport>, HandlerError> {
    let comparison = compare_numbers(numbers).await?;
    Ok(Json(ComparisonReport::from(&comparison)))
}

/// GET /graph/{graph_type}?num1=..&num2=.. - Chart one operand pair
pub async fn graph(
    Path(graph_type): Path<String>,
    Query(numbers): Query<Numbers>,
) -> Result<Json<GraphResponse>, HandlerError> {
    let kind = graph_type.parse::<ChartKind>().map_err(rejected)?;
    let comparison = compare_numbers(numbers).await?;
    let charts = render_comparison(kind, &comparison).map_err(rejected)?;
    let text = charts.iter().map(|chart| chart.to_string()).collect();
    Ok(Json(GraphResponse { charts, text }))
}
