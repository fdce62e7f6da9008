//! Request parameter types and their conversion to typed query arguments.
//!
//! Parameters arrive as strings and are parsed here so that a malformed value
//! yields the same JSON error envelope as every other failure.

use std::str::FromStr;

use serde::Deserialize;
use vehicles_core::SearchQuery;

use crate::error::{AppError, AppResult};

/// Query parameters for `GET /vehicles/weight` (`?weight_min=&weight_max=`).
///
/// The range filter applies only when both bounds are present.
#[derive(Debug, Default, Deserialize)]
pub struct WeightRangeParams {
    pub weight_min: Option<String>,
    pub weight_max: Option<String>,
}

impl WeightRangeParams {
    /// Convert into a [`SearchQuery`] and the flag saying whether it applies.
    ///
    /// Supplying exactly one bound is rejected rather than silently ignored.
    pub fn to_search_query(&self) -> AppResult<(SearchQuery, bool)> {
        match (&self.weight_min, &self.weight_max) {
            (Some(min), Some(max)) => {
                let from = parse_param::<f64>("weight_min", min)?;
                let to = parse_param::<f64>("weight_max", max)?;
                Ok((SearchQuery::new(from, to), true))
            }
            (None, None) => Ok((SearchQuery::default(), false)),
            _ => Err(AppError::BadRequest(
                "weight_min and weight_max must be provided together".into(),
            )),
        }
    }
}

/// Parse a single request parameter, naming it in the error on failure.
pub fn parse_param<T: FromStr>(name: &str, raw: &str) -> AppResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid {name}: {raw}")))
}
