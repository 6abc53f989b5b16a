//! C-ABI wrapper around `listing-core`.
//!
//! # Overview
//! Exposes the listing API's request building, response parsing and
//! wire-to-domain mapping through `extern "C"` functions, so a mobile host
//! can run its own HTTP stack and still receive fully defaulted listings.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - Per-operation `build_*` / `parse_*` mirrors the core API 1:1.
//! - A single `FfiListingResult` envelope with `FfiDataTag` + `void* data`
//!   conveys success payloads and errors uniformly.
//! - The C caller owns all returned pointers and must call the matching
//!   `listing_free_*` function to release them.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use listing_core::http::HttpResponse;

use types::*;

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a new `PropertyClient` bound to `base_url`.
///
/// Returns null if `base_url` is null, not UTF-8, or if an internal panic
/// occurs. The caller must free the returned pointer with
/// `listing_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn listing_client_new(base_url: *const c_char) -> *mut FfiPropertyClient {
    catch_unwind(|| {
        if base_url.is_null() {
            return std::ptr::null_mut();
        }
        let Ok(url) = unsafe { CStr::from_ptr(base_url) }.to_str() else {
            return std::ptr::null_mut();
        };
        let client = listing_core::PropertyClient::new(url);
        Box::into_raw(Box::new(FfiPropertyClient { inner: client }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a client created by `listing_client_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn listing_client_free(client: *mut FfiPropertyClient) {
    if !client.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(client) });
        });
    }
}

// ---------------------------------------------------------------------------
// Build request functions
// ---------------------------------------------------------------------------

/// Build the request for `GET listings.json`.
///
/// Returns null if `client` is null.
/// The caller must free the returned pointer with `listing_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn listing_build_list_listings(
    client: *const FfiPropertyClient,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        FfiHttpRequest::from_core(client.inner.build_list_listings())
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build the request for `GET listings/{id}.json`.
///
/// Returns null if `client` is null.
#[unsafe(no_mangle)]
pub extern "C" fn listing_build_get_listing(
    client: *const FfiPropertyClient,
    id: i64,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        FfiHttpRequest::from_core(client.inner.build_get_listing(id))
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Parse response functions
// ---------------------------------------------------------------------------

/// Convert an `FfiHttpResponse` to a core `HttpResponse`.
///
/// A null or non-UTF-8 body is treated as empty.
fn ffi_response_to_core(resp: &FfiHttpResponse) -> HttpResponse {
    let body = if resp.body.is_null() {
        String::new()
    } else {
        unsafe { CStr::from_ptr(resp.body) }
            .to_str()
            .unwrap_or("")
            .to_string()
    };
    HttpResponse::new(resp.status, body)
}

/// Parse the response of a list request.
///
/// Returns a result with `data_tag = ListingList` on success.
#[unsafe(no_mangle)]
pub extern "C" fn listing_parse_list_listings(
    client: *const FfiPropertyClient,
    response: *const FfiHttpResponse,
) -> *mut FfiListingResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiListingResult::null_arg("client");
        }
        if response.is_null() {
            return FfiListingResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        match client.inner.parse_list_listings(ffi_response_to_core(resp)) {
            Ok(listings) => FfiListingResult::ok_listing_list(listings),
            Err(e) => FfiListingResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiListingResult::panic("panic in listing_parse_list_listings"))
}

/// Parse the response of a detail request.
///
/// Returns a result with `data_tag = Detail` on success.
#[unsafe(no_mangle)]
pub extern "C" fn listing_parse_get_listing(
    client: *const FfiPropertyClient,
    response: *const FfiHttpResponse,
) -> *mut FfiListingResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiListingResult::null_arg("client");
        }
        if response.is_null() {
            return FfiListingResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        match client.inner.parse_get_listing(ffi_response_to_core(resp)) {
            Ok(detail) => FfiListingResult::ok_detail(detail),
            Err(e) => FfiListingResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiListingResult::panic("panic in listing_parse_get_listing"))
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Format a price the way the app displays it (`500 000,00 €`).
///
/// The caller must free the returned string with `listing_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn listing_format_price(amount: f64) -> *mut c_char {
    catch_unwind(|| c_string(listing_core::format_price(amount))).unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiHttpRequest` returned by any `listing_build_*` function.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn listing_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        free_c_string(req.path);
        let headers = unsafe { reclaim_vec(req.headers, req.headers_len) };
        for h in headers.iter() {
            free_c_string(h.key);
            free_c_string(h.value);
        }
    });
}

/// Free an `FfiListingResult` returned by any `listing_parse_*` function.
/// Safe to call with null. Uses `data_tag` to determine what `data` points to.
#[unsafe(no_mangle)]
pub extern "C" fn listing_free_result(result: *mut FfiListingResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        free_c_string(result.error_message);
        if result.data.is_null() {
            return;
        }
        match result.data_tag {
            FfiDataTag::Detail => {
                let listing = unsafe { Box::from_raw(result.data as *mut FfiListing) };
                free_ffi_listing_fields(&listing);
            }
            FfiDataTag::ListingList => {
                let list = unsafe { Box::from_raw(result.data as *mut FfiListingList) };
                let items = unsafe { reclaim_vec(list.items, list.len) };
                for item in items.iter() {
                    free_ffi_listing_fields(item);
                }
            }
            FfiDataTag::None => {}
        }
    });
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn listing_free_string(s: *mut c_char) {
    let _ = catch_unwind(|| free_c_string(s));
}

fn free_c_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

/// Take back ownership of a slice handed out by `leak_vec`.
///
/// # Safety
/// `ptr`/`len` must come from `leak_vec` and not have been reclaimed before.
unsafe fn reclaim_vec<T>(ptr: *mut T, len: u32) -> Box<[T]> {
    if ptr.is_null() || len == 0 {
        return Box::new([]);
    }
    unsafe { Box::from_raw(std::ptr::slice_from_raw_parts_mut(ptr, len as usize)) }
}

/// Free the C-string fields of an `FfiListing` (but not the struct itself).
fn free_ffi_listing_fields(listing: &FfiListing) {
    free_c_string(listing.city);
    free_c_string(listing.image_url);
    free_c_string(listing.professional);
    free_c_string(listing.property_type);
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn new_client() -> *mut FfiPropertyClient {
        let url = CString::new("http://localhost:3000").unwrap();
        listing_client_new(url.as_ptr())
    }

    fn c_str<'a>(ptr: *const c_char) -> &'a str {
        unsafe { CStr::from_ptr(ptr) }.to_str().unwrap()
    }

    #[test]
    fn client_new_and_free() {
        let client = new_client();
        assert!(!client.is_null());
        listing_client_free(client);
    }

    #[test]
    fn client_new_null_returns_null() {
        assert!(listing_client_new(std::ptr::null()).is_null());
    }

    #[test]
    fn client_free_null_is_safe() {
        listing_client_free(std::ptr::null_mut());
    }

    #[test]
    fn build_list_listings_returns_correct_request() {
        let client = new_client();
        let req = listing_build_list_listings(client);
        assert!(!req.is_null());

        let req_ref = unsafe { &*req };
        assert!(matches!(req_ref.method, FfiHttpMethod::Get));
        assert_eq!(c_str(req_ref.path), "http://localhost:3000/listings.json");
        assert_eq!(req_ref.headers_len, 1);

        let header = unsafe { &*req_ref.headers };
        assert_eq!(c_str(header.key), "accept");
        assert_eq!(c_str(header.value), "application/json");

        listing_free_request(req);
        listing_client_free(client);
    }

    #[test]
    fn build_list_listings_null_client_returns_null() {
        assert!(listing_build_list_listings(std::ptr::null()).is_null());
    }

    #[test]
    fn build_get_listing_embeds_id() {
        let client = new_client();
        let req = listing_build_get_listing(client, 17);
        assert!(!req.is_null());

        let req_ref = unsafe { &*req };
        assert_eq!(c_str(req_ref.path), "http://localhost:3000/listings/17.json");

        listing_free_request(req);
        listing_client_free(client);
    }

    #[test]
    fn parse_list_listings_maps_and_defaults() {
        let client = new_client();
        let body = CString::new(
            r#"{"items":[
                {"id":1,"city":"Berlin","price":500000.0,"offerType":2,"rooms":4},
                {"id":2,"offerType":1}
            ]}"#,
        )
        .unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let result = listing_parse_list_listings(client, &resp);
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::Ok));
        assert!(r.error_message.is_null());
        assert!(matches!(r.data_tag, FfiDataTag::ListingList));

        let list = unsafe { &*(r.data as *const FfiListingList) };
        assert_eq!(list.len, 2);
        let items = unsafe { std::slice::from_raw_parts(list.items, list.len as usize) };

        assert_eq!(items[0].id, 1);
        assert_eq!(c_str(items[0].city), "Berlin");
        assert_eq!(items[0].price, 500000.0);
        assert!(matches!(items[0].offer_type, FfiOfferType::Sale));
        assert_eq!(items[0].rooms, 4);

        assert_eq!(items[1].id, 2);
        assert_eq!(c_str(items[1].city), "Unknown");
        assert_eq!(c_str(items[1].image_url), "");
        assert_eq!(items[1].bedrooms, 0);
        assert!(matches!(items[1].offer_type, FfiOfferType::Rent));

        listing_free_result(result);
        listing_client_free(client);
    }

    #[test]
    fn parse_list_listings_empty() {
        let client = new_client();
        let body = CString::new(r#"{"items":[]}"#).unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let result = listing_parse_list_listings(client, &resp);
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::Ok));

        let list = unsafe { &*(r.data as *const FfiListingList) };
        assert_eq!(list.len, 0);
        assert!(list.items.is_null());

        listing_free_result(result);
        listing_client_free(client);
    }

    #[test]
    fn parse_get_listing_success() {
        let client = new_client();
        let body = CString::new(r#"{"id":5,"bedrooms":null,"city":null,"offerType":9}"#).unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let result = listing_parse_get_listing(client, &resp);
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::Ok));
        assert!(matches!(r.data_tag, FfiDataTag::Detail));

        let detail = unsafe { &*(r.data as *const FfiListing) };
        assert_eq!(detail.id, 5);
        assert_eq!(detail.bedrooms, 0);
        assert_eq!(c_str(detail.city), "Unknown");
        assert_eq!(c_str(detail.professional), "Unknown");
        assert!(matches!(detail.offer_type, FfiOfferType::Unknown));

        listing_free_result(result);
        listing_client_free(client);
    }

    #[test]
    fn parse_get_listing_not_found() {
        let client = new_client();
        let resp = FfiHttpResponse {
            status: 404,
            body: std::ptr::null(),
        };
        let result = listing_parse_get_listing(client, &resp);
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::NotFound));
        assert_eq!(r.http_status, 404);
        assert_eq!(c_str(r.error_message), "resource not found");
        assert!(r.data.is_null());

        listing_free_result(result);
        listing_client_free(client);
    }

    #[test]
    fn parse_get_listing_server_error() {
        let client = new_client();
        let body = CString::new("unavailable").unwrap();
        let resp = FfiHttpResponse {
            status: 503,
            body: body.as_ptr(),
        };
        let result = listing_parse_get_listing(client, &resp);
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::Http));
        assert_eq!(r.http_status, 503);
        assert_eq!(c_str(r.error_message), "HTTP 503: unavailable");

        listing_free_result(result);
        listing_client_free(client);
    }

    #[test]
    fn parse_missing_id_is_deserialization_error() {
        let client = new_client();
        let body = CString::new(r#"{"city":"Paris"}"#).unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let result = listing_parse_get_listing(client, &resp);
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::Deserialization));

        listing_free_result(result);
        listing_client_free(client);
    }

    #[test]
    fn parse_null_client_returns_null_arg() {
        let body = CString::new(r#"{"items":[]}"#).unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let result = listing_parse_list_listings(std::ptr::null(), &resp);
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::NullArg));
        assert_eq!(c_str(r.error_message), "null argument: client");

        listing_free_result(result);
    }

    #[test]
    fn parse_null_response_returns_null_arg() {
        let client = new_client();
        let result = listing_parse_get_listing(client, std::ptr::null());
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::NullArg));

        listing_free_result(result);
        listing_client_free(client);
    }

    #[test]
    fn format_price_returns_owned_string() {
        let s = listing_format_price(1234.5);
        assert_eq!(c_str(s), "1\u{202F}234,50\u{00A0}€");
        listing_free_string(s);
    }

    #[test]
    fn free_request_null_is_safe() {
        listing_free_request(std::ptr::null_mut());
    }

    #[test]
    fn free_result_null_is_safe() {
        listing_free_result(std::ptr::null_mut());
    }

    #[test]
    fn free_string_null_is_safe() {
        listing_free_string(std::ptr::null_mut());
    }
}
