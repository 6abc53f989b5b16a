//! Stateless HTTP request builder and response parser for the listing API.
//!
//! # Design
//! `PropertyClient` holds only a `base_url` and carries no mutable state
//! between calls. Each read operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse` and returns mapped domain records. The executor performs
//! the actual round-trip in between, keeping this module free of I/O.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::mapper::map_listings;
use crate::model::{Listing, ListingDetail};
use crate::types::{ListingDto, ListingsResponseDto};

/// Synchronous, stateless client for the listing API.
#[derive(Debug, Clone)]
pub struct PropertyClient {
    base_url: String,
}

impl PropertyClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_listings(&self) -> HttpRequest {
        self.get(format!("{}/listings.json", self.base_url))
    }

    pub fn build_get_listing(&self, id: i64) -> HttpRequest {
        self.get(format!("{}/listings/{id}.json", self.base_url))
    }

    pub fn parse_list_listings(&self, response: HttpResponse) -> Result<Vec<Listing>, ApiError> {
        let dto: ListingsResponseDto = decode(response)?;
        Ok(map_listings(dto))
    }

    pub fn parse_get_listing(&self, response: HttpResponse) -> Result<ListingDetail, ApiError> {
        let dto: ListingDto = decode(response)?;
        Ok(ListingDetail::from(dto))
    }

    fn get(&self, path: String) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path,
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response, 200)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
