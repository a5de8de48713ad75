//! HTTP handlers.
//!
//! Handlers only extract parameters, delegate to the metric service, and
//! translate service errors into status codes. No metric logic lives here.

use std::fmt::Write as _;
use std::str::FromStr;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use vitals_core::{MetricKind, VitalsError};

use crate::app_state::AppState;

/// Service error carried out of a handler.
///
/// `UnknownMetricType`/`InvalidValue` map to 400, `NotFound` to 404,
/// anything else to 500 with an empty body so internals do not leak.
pub struct ApiError(VitalsError);

impl From<VitalsError> for ApiError {
    fn from(err: VitalsError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            VitalsError::UnknownMetricType | VitalsError::InvalidValue(_) => {
                (StatusCode::BAD_REQUEST, self.0.to_string()).into_response()
            }
            VitalsError::NotFound => {
                (StatusCode::NOT_FOUND, self.0.to_string()).into_response()
            }
            VitalsError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdatePath {
    metric_type: String,
    metric_name: String,
    metric_value: String,
}

#[derive(Debug, Deserialize)]
pub struct ValuePath {
    metric_type: String,
    metric_name: String,
}

/// `POST /update/{metricType}/{metricName}/{metricValue}`: 200, no body.
pub async fn update_metric(
    State(state): State<AppState>,
    Path(p): Path<UpdatePath>,
) -> Result<StatusCode, ApiError> {
    let kind = MetricKind::from_str(&p.metric_type)?;
    state
        .service()
        .set_value(kind, &p.metric_name, &p.metric_value)
        .map_err(|err| {
            tracing::warn!(
                metric_type = %p.metric_type,
                metric_name = %p.metric_name,
                metric_value = %p.metric_value,
                %err,
                "metric update rejected"
            );
            err
        })?;
    Ok(StatusCode::OK)
}

/// `GET /value/{metricType}/{metricName}`: raw decimal string, or 404.
///
/// An unrecognized kind is indistinguishable from an absent metric for
/// readers, so it answers 404 rather than 400.
pub async fn metric_value(
    State(state): State<AppState>,
    Path(p): Path<ValuePath>,
) -> Result<String, ApiError> {
    let kind = MetricKind::from_str(&p.metric_type).map_err(|_| VitalsError::NotFound)?;
    state
        .service()
        .get_value(kind, &p.metric_name)
        .ok_or_else(|| VitalsError::NotFound.into())
}

/// `GET /`: every gauge then every counter as an HTML unordered list.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let mut html = String::from("<html><body><ul>");
    for (name, value) in state.service().all_metrics(MetricKind::Gauge) {
        let _ = write!(html, "<li>{name}: {value}</li>");
    }
    for (name, value) in state.service().all_metrics(MetricKind::Counter) {
        let _ = write!(html, "<li>{name}: {value}</li>");
    }
    html.push_str("</ul></body></html>");
    Html(html)
}
