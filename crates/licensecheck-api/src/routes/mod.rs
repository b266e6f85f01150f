//! # Route Modules
//!
//! - `page`: the server-rendered search interface at `/`.
//! - `licenses`: JSON search and lookup under `/v1/licenses`.
//! - `i18n`: UI dictionaries under `/v1/i18n`.

pub mod i18n;
pub mod licenses;
pub mod page;

use axum::extract::rejection::QueryRejection;
use axum::extract::Query;

use crate::error::AppError;

/// Unwrap a query-string extraction. Malformed input is a 400.
pub(crate) fn query_params<T>(params: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    params
        .map(|Query(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}
