//! Text rendering of the two screens.
//!
//! Views only read a `UiState`; they never trigger fetches themselves.

use std::fmt::Write;

use listing_core::{format_price, Listing, ListingDetail, UiState};

pub const LISTING_TITLE: &str = "Discover Your Dream Home";
pub const DETAIL_TITLE: &str = "Property Details";
pub const EMPTY_MESSAGE: &str = "No listings available";
pub const LOADING_MESSAGE: &str = "Loading...";

fn header(out: &mut String, title: &str) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));
}

fn error_block(out: &mut String, message: &str) {
    let _ = writeln!(out, "Error: {message}");
    let _ = writeln!(out, "[r] Retry");
}

/// Area rendered as whole square metres, truncated.
fn area(value: f64) -> String {
    format!("{} m²", value.trunc() as i64)
}

fn card(out: &mut String, listing: &Listing) {
    let _ = writeln!(
        out,
        "#{:<4} {}  [{}]",
        listing.id,
        format_price(listing.price),
        listing.offer_type
    );
    let _ = writeln!(out, "      {} - {}", listing.property_type, listing.city);
    let _ = writeln!(
        out,
        "      {} beds · {} rooms · {}",
        listing.bedrooms,
        listing.rooms,
        area(listing.area)
    );
    if !listing.image_url.is_empty() {
        let _ = writeln!(out, "      {}", listing.image_url);
    }
}

pub fn render_listing_screen(state: &UiState<Vec<Listing>>) -> String {
    let mut out = String::new();
    header(&mut out, LISTING_TITLE);
    match state {
        UiState::Loading => {
            let _ = writeln!(out, "{LOADING_MESSAGE}");
        }
        UiState::Success(listings) if listings.is_empty() => {
            let _ = writeln!(out, "{EMPTY_MESSAGE}");
        }
        UiState::Success(listings) => {
            for (i, listing) in listings.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                card(&mut out, listing);
            }
        }
        UiState::Error(message) => error_block(&mut out, message),
    }
    out
}

pub fn render_detail_screen(state: &UiState<ListingDetail>) -> String {
    let mut out = String::new();
    header(&mut out, DETAIL_TITLE);
    match state {
        UiState::Loading => {
            let _ = writeln!(out, "{LOADING_MESSAGE}");
        }
        UiState::Success(detail) => {
            let _ = writeln!(
                out,
                "{}  [{}]",
                format_price(detail.price),
                detail.offer_type
            );
            let _ = writeln!(out, "{}", detail.city);
            let _ = writeln!(out, "{}", detail.property_type);
            if !detail.image_url.is_empty() {
                let _ = writeln!(out, "{}", detail.image_url);
            }
            let _ = writeln!(out);
            let _ = writeln!(out, "Property Features");
            let rows = [
                ("Bedrooms", detail.bedrooms.to_string()),
                ("Rooms", detail.rooms.to_string()),
                ("Area", area(detail.area)),
                ("Professional", detail.professional.clone()),
            ];
            for (label, value) in rows {
                let _ = writeln!(out, "  {label:<14}{value}");
            }
        }
        UiState::Error(message) => error_block(&mut out, message),
    }
    out
}
