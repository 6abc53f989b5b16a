//! Wire DTOs for the listing API.
//!
//! # Design
//! These mirror the server's JSON exactly and are defined independently from
//! the mock-server crate; integration tests catch schema drift. Every field
//! except `id` is optional: an absent key and an explicit `null` both decode
//! to `None`. A payload without `id` fails to decode.

use serde::{Deserialize, Serialize};

/// A single listing as sent over the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingDto {
    pub id: i64,
    pub bedrooms: Option<i32>,
    pub city: Option<String>,
    pub area: Option<f64>,
    /// Image URL.
    pub url: Option<String>,
    pub price: Option<f64>,
    pub professional: Option<String>,
    pub property_type: Option<String>,
    pub offer_type: Option<i32>,
    pub rooms: Option<i32>,
}

/// Envelope returned by `GET listings.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ListingsResponseDto {
    pub items: Vec<ListingDto>,
}
