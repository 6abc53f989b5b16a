//! Domain records handed to the presentation layer.
//!
//! Unlike the wire DTOs, every field here is concrete: the mapper has already
//! resolved absent values to defaults and the offer code to `OfferType`.

use std::fmt;

/// Whether a listing is offered for sale or for rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OfferType {
    Sale,
    Rent,
    Unknown,
}

impl OfferType {
    /// Resolve a wire code. Only 1 and 2 are meaningful.
    pub fn from_code(code: Option<i32>) -> Self {
        match code {
            Some(1) => OfferType::Rent,
            Some(2) => OfferType::Sale,
            _ => OfferType::Unknown,
        }
    }

    /// Badge text shown next to a price.
    pub fn label(&self) -> &'static str {
        match self {
            OfferType::Sale => "For Sale",
            OfferType::Rent => "For Rent",
            OfferType::Unknown => "N/A",
        }
    }
}

impl fmt::Display for OfferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A listing as shown in the list screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: i64,
    pub bedrooms: i32,
    pub city: String,
    pub area: f64,
    /// Empty when the listing has no picture.
    pub image_url: String,
    pub price: f64,
    pub professional: String,
    pub property_type: String,
    pub offer_type: OfferType,
    pub rooms: i32,
}

/// A listing as shown in the detail screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingDetail {
    pub id: i64,
    pub bedrooms: i32,
    pub city: String,
    pub area: f64,
    pub image_url: String,
    pub price: f64,
    pub professional: String,
    pub property_type: String,
    pub offer_type: OfferType,
    pub rooms: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offer_codes_resolve() {
        assert_eq!(OfferType::from_code(Some(1)), OfferType::Rent);
        assert_eq!(OfferType::from_code(Some(2)), OfferType::Sale);
    }

    #[test]
    fn other_offer_codes_are_unknown() {
        for code in [None, Some(0), Some(3), Some(-1), Some(i32::MIN), Some(i32::MAX)] {
            assert_eq!(OfferType::from_code(code), OfferType::Unknown, "{code:?}");
        }
    }

    #[test]
    fn labels() {
        assert_eq!(OfferType::Sale.to_string(), "For Sale");
        assert_eq!(OfferType::Rent.label(), "For Rent");
        assert_eq!(OfferType::Unknown.label(), "N/A");
    }
}
