//! Wire-to-domain mapping.
//!
//! Mapping is total: absent optional fields fall back to `0`, `"Unknown"`
//! for descriptive strings, and `""` for the image URL.

use crate::model::{Listing, ListingDetail, OfferType};
use crate::types::{ListingDto, ListingsResponseDto};

pub const UNKNOWN_TEXT: &str = "Unknown";

fn text_or_unknown(value: Option<String>) -> String {
    value.unwrap_or_else(|| UNKNOWN_TEXT.to_string())
}

impl From<ListingDto> for Listing {
    fn from(dto: ListingDto) -> Self {
        Listing {
            id: dto.id,
            bedrooms: dto.bedrooms.unwrap_or(0),
            city: text_or_unknown(dto.city),
            area: dto.area.unwrap_or(0.0),
            image_url: dto.url.unwrap_or_default(),
            price: dto.price.unwrap_or(0.0),
            professional: text_or_unknown(dto.professional),
            property_type: text_or_unknown(dto.property_type),
            offer_type: OfferType::from_code(dto.offer_type),
            rooms: dto.rooms.unwrap_or(0),
        }
    }
}

impl From<ListingDto> for ListingDetail {
    fn from(dto: ListingDto) -> Self {
        ListingDetail {
            id: dto.id,
            bedrooms: dto.bedrooms.unwrap_or(0),
            city: text_or_unknown(dto.city),
            area: dto.area.unwrap_or(0.0),
            image_url: dto.url.unwrap_or_default(),
            price: dto.price.unwrap_or(0.0),
            professional: text_or_unknown(dto.professional),
            property_type: text_or_unknown(dto.property_type),
            offer_type: OfferType::from_code(dto.offer_type),
            rooms: dto.rooms.unwrap_or(0),
        }
    }
}

/// Map every item of a list response, keeping server order.
pub fn map_listings(response: ListingsResponseDto) -> Vec<Listing> {
    response.items.into_iter().map(Listing::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_dto(id: i64, city: &str) -> ListingDto {
        ListingDto {
            id,
            bedrooms: Some(2),
            city: Some(city.to_string()),
            area: Some(100.0),
            url: Some("https://example.com/image.jpg".to_string()),
            price: Some(300000.0),
            professional: Some("Real Estate Pro".to_string()),
            property_type: Some("Apartment".to_string()),
            offer_type: Some(2),
            rooms: Some(3),
        }
    }

    #[test]
    fn maps_every_field() {
        let listing = Listing::from(full_dto(1, "Berlin"));
        assert_eq!(
            listing,
            Listing {
                id: 1,
                bedrooms: 2,
                city: "Berlin".to_string(),
                area: 100.0,
                image_url: "https://example.com/image.jpg".to_string(),
                price: 300000.0,
                professional: "Real Estate Pro".to_string(),
                property_type: "Apartment".to_string(),
                offer_type: OfferType::Sale,
                rooms: 3,
            }
        );
    }

    #[test]
    fn bare_record_gets_defaults() {
        let detail = ListingDetail::from(ListingDto {
            id: 5,
            ..Default::default()
        });
        assert_eq!(detail.id, 5);
        assert_eq!(detail.bedrooms, 0);
        assert_eq!(detail.rooms, 0);
        assert_eq!(detail.area, 0.0);
        assert_eq!(detail.price, 0.0);
        assert_eq!(detail.city, "Unknown");
        assert_eq!(detail.professional, "Unknown");
        assert_eq!(detail.property_type, "Unknown");
        assert_eq!(detail.image_url, "");
        assert_eq!(detail.offer_type, OfferType::Unknown);
    }

    #[test]
    fn each_missing_field_defaults_independently() {
        let clears: [fn(&mut ListingDto); 9] = [
            |d| d.bedrooms = None,
            |d| d.city = None,
            |d| d.area = None,
            |d| d.url = None,
            |d| d.price = None,
            |d| d.professional = None,
            |d| d.property_type = None,
            |d| d.offer_type = None,
            |d| d.rooms = None,
        ];
        for (i, clear) in clears.iter().enumerate() {
            let mut dto = full_dto(7, "Paris");
            clear(&mut dto);
            let listing = Listing::from(dto);
            assert_eq!(listing.id, 7, "case {i}");
            match i {
                0 => assert_eq!(listing.bedrooms, 0),
                1 => assert_eq!(listing.city, "Unknown"),
                2 => assert_eq!(listing.area, 0.0),
                3 => assert_eq!(listing.image_url, ""),
                4 => assert_eq!(listing.price, 0.0),
                5 => assert_eq!(listing.professional, "Unknown"),
                6 => assert_eq!(listing.property_type, "Unknown"),
                7 => assert_eq!(listing.offer_type, OfferType::Unknown),
                _ => assert_eq!(listing.rooms, 0),
            }
            if i != 1 {
                assert_eq!(listing.city, "Paris", "case {i}");
            }
        }
    }

    #[test]
    fn list_mapping_preserves_order_and_count() {
        let response = ListingsResponseDto {
            items: vec![full_dto(3, "Hamburg"), full_dto(1, "Berlin"), full_dto(2, "Munich")],
        };
        let listings = map_listings(response);
        let ids: Vec<i64> = listings.iter().map(|l| l.id).collect();
        let cities: Vec<&str> = listings.iter().map(|l| l.city.as_str()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(cities, vec!["Hamburg", "Berlin", "Munich"]);
    }

    #[test]
    fn empty_list_maps_to_empty() {
        assert!(map_listings(ListingsResponseDto::default()).is_empty());
    }
}
