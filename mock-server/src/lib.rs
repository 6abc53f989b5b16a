use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: i64,
    pub bedrooms: Option<i32>,
    pub city: Option<String>,
    pub area: Option<f64>,
    pub url: Option<String>,
    pub price: Option<f64>,
    pub professional: Option<String>,
    pub property_type: Option<String>,
    pub offer_type: Option<i32>,
    pub rooms: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListingsResponse {
    pub items: Vec<Listing>,
}

pub type Db = Arc<Vec<Listing>>;

/// Listings served by `app()`. Some records leave optional fields out on
/// purpose so clients exercise their defaults.
pub fn seed_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: 1,
            bedrooms: Some(4),
            city: Some("Villers-sur-Mer".to_string()),
            area: Some(250.0),
            url: Some("https://images.example.com/listings/1.jpg".to_string()),
            price: Some(1500000.0),
            professional: Some("GSL EXPLORE".to_string()),
            property_type: Some("Maison - Villa".to_string()),
            offer_type: Some(1),
            rooms: Some(8),
        },
        Listing {
            id: 2,
            bedrooms: Some(7),
            city: Some("Deauville".to_string()),
            area: Some(600.0),
            url: Some("https://images.example.com/listings/2.jpg".to_string()),
            price: Some(3500000.0),
            professional: Some("GSL STICKINESS".to_string()),
            property_type: Some("Maison - Villa".to_string()),
            offer_type: Some(2),
            rooms: Some(11),
        },
        Listing {
            id: 3,
            city: Some("Bordeaux".to_string()),
            area: Some(550.0),
            price: Some(3000000.0),
            professional: Some("GSL OWNERS".to_string()),
            property_type: Some("Maison - Villa".to_string()),
            offer_type: Some(1),
            rooms: Some(7),
            ..Default::default()
        },
        Listing {
            id: 4,
            city: Some("Nice".to_string()),
            area: Some(250.0),
            url: Some("https://images.example.com/listings/4.jpg".to_string()),
            price: Some(5000000.0),
            professional: Some("GSL CONTACTING".to_string()),
            property_type: Some("Maison - Villa".to_string()),
            offer_type: Some(3),
            ..Default::default()
        },
    ]
}

pub fn app() -> Router {
    app_with(seed_listings())
}

/// Router serving `listings` in the given order.
pub fn app_with(listings: Vec<Listing>) -> Router {
    let db: Db = Arc::new(listings);
    Router::new()
        .route("/listings.json", get(list_listings))
        .route("/listings/{file}", get(get_listing))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, seed_listings()).await
}

pub async fn run_with(listener: TcpListener, listings: Vec<Listing>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(listings)).await
}

async fn list_listings(State(db): State<Db>) -> Json<ListingsResponse> {
    Json(ListingsResponse {
        items: db.as_ref().clone(),
    })
}

/// `GET /listings/{id}.json`. Anything that is not `<integer>.json` is 404.
async fn get_listing(
    State(db): State<Db>,
    Path(file): Path<String>,
) -> Result<Json<Listing>, StatusCode> {
    let id = parse_listing_file(&file).ok_or(StatusCode::NOT_FOUND)?;
    db.iter()
        .find(|listing| listing.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

fn parse_listing_file(file: &str) -> Option<i64> {
    file.strip_suffix(".json")?.parse().ok()
}
