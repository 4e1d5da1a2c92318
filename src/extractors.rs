use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use serde::Deserialize;

/// Query parameters accepted by the weather and forecast endpoints
#[derive(Debug, Deserialize)]
pub struct CityQuery {
    pub city: Option<String>,
}

/// City taken from the path segment, else from `?city=`
///
/// Empty values count as absent so the handler falls back to the
/// configured default city.
#[derive(Debug)]
pub struct CityParam(pub Option<String>);

impl CityParam {
    pub fn or_default(self, default: impl Into<String>) -> String {
        self.0.unwrap_or_else(|| default.into())
    }
}

impl<S> FromRequestParts<S> for CityParam
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Ok(Path(city)) = Path::<String>::from_request_parts(parts, state).await {
            if !city.is_empty() {
                return Ok(CityParam(Some(city)));
            }
        }

        if let Ok(Query(query)) = Query::<CityQuery>::from_request_parts(parts, state).await {
            return Ok(CityParam(query.city.filter(|c| !c.is_empty())));
        }

        Ok(CityParam(None))
    }
}
