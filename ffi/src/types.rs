//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, raw pointers instead of `Vec`, and
//! tagged enums with explicit discriminants. Conversion functions live here
//! to keep `lib.rs` focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use listing_core::error::ApiError;
use listing_core::http::HttpMethod;
use listing_core::model::{Listing, ListingDetail, OfferType};

/// Opaque handle to a `PropertyClient`. C callers receive a pointer to this
/// and pass it back into every FFI function.
pub struct FfiPropertyClient {
    pub(crate) inner: listing_core::PropertyClient,
}

/// Move `s` into a heap C string. Interior NULs truncate to an empty string.
pub(crate) fn c_string(s: String) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

/// Hand a vector to C as a raw pointer; null when empty.
pub(crate) fn leak_vec<T>(items: Vec<T>) -> *mut T {
    if items.is_empty() {
        return std::ptr::null_mut();
    }
    let mut items = items.into_boxed_slice();
    let ptr = items.as_mut_ptr();
    std::mem::forget(items);
    ptr
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// HTTP method as a C enum.
#[repr(C)]
pub enum FfiHttpMethod {
    Get = 0,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
        }
    }
}

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP request described as C-compatible plain data.
///
/// Built by `listing_build_*` functions. The C caller executes the request
/// and passes the response back through `listing_parse_*`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub path: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    pub(crate) fn from_core(req: listing_core::HttpRequest) -> *mut Self {
        let headers_len = req.headers.len() as u32;
        let headers = leak_vec(
            req.headers
                .into_iter()
                .map(|(k, v)| FfiHeader {
                    key: c_string(k),
                    value: c_string(v),
                })
                .collect(),
        );

        Box::into_raw(Box::new(FfiHttpRequest {
            method: req.method.into(),
            path: c_string(req.path),
            headers,
            headers_len,
        }))
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The C caller constructs this on the stack after executing a request, then
/// passes a pointer to a `listing_parse_*` function. The FFI layer reads but
/// does not free these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiListingResult`.
#[repr(C)]
pub enum FfiErrorCode {
    Ok = 0,
    NotFound = 1,
    Http = 2,
    Deserialization = 3,
    Transport = 4,
    Panic = 5,
    NullArg = 6,
}

/// Tag that tells `listing_free_result` what `FfiListingResult::data` points to.
#[repr(C)]
pub enum FfiDataTag {
    None = 0,
    Detail = 1,
    ListingList = 2,
}

#[repr(C)]
pub enum FfiOfferType {
    Unknown = 0,
    Rent = 1,
    Sale = 2,
}

impl From<OfferType> for FfiOfferType {
    fn from(o: OfferType) -> Self {
        match o {
            OfferType::Unknown => FfiOfferType::Unknown,
            OfferType::Rent => FfiOfferType::Rent,
            OfferType::Sale => FfiOfferType::Sale,
        }
    }
}

/// A mapped listing exposed to C. Used for list items and for the detail.
/// Strings are never null; absent values were already defaulted by the core.
#[repr(C)]
pub struct FfiListing {
    pub id: i64,
    pub bedrooms: i32,
    pub city: *mut c_char,
    pub area: f64,
    pub image_url: *mut c_char,
    pub price: f64,
    pub professional: *mut c_char,
    pub property_type: *mut c_char,
    pub offer_type: FfiOfferType,
    pub rooms: i32,
}

impl From<Listing> for FfiListing {
    fn from(l: Listing) -> Self {
        FfiListing {
            id: l.id,
            bedrooms: l.bedrooms,
            city: c_string(l.city),
            area: l.area,
            image_url: c_string(l.image_url),
            price: l.price,
            professional: c_string(l.professional),
            property_type: c_string(l.property_type),
            offer_type: l.offer_type.into(),
            rooms: l.rooms,
        }
    }
}

impl From<ListingDetail> for FfiListing {
    fn from(d: ListingDetail) -> Self {
        FfiListing {
            id: d.id,
            bedrooms: d.bedrooms,
            city: c_string(d.city),
            area: d.area,
            image_url: c_string(d.image_url),
            price: d.price,
            professional: c_string(d.professional),
            property_type: c_string(d.property_type),
            offer_type: d.offer_type.into(),
            rooms: d.rooms,
        }
    }
}

/// A list of listings exposed to C.
#[repr(C)]
pub struct FfiListingList {
    pub items: *mut FfiListing,
    pub len: u32,
}

/// Result envelope for all parse operations.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `data`
/// points to the parsed payload (tagged by `data_tag`).
/// On failure `error_code` describes the category, `error_message` is a
/// human-readable C string, and `data` is null.
#[repr(C)]
pub struct FfiListingResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub http_status: u16,
    pub data_tag: FfiDataTag,
    pub data: *mut std::ffi::c_void,
}

impl FfiListingResult {
    fn ok(data_tag: FfiDataTag, data: *mut std::ffi::c_void) -> *mut Self {
        Box::into_raw(Box::new(FfiListingResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 200,
            data_tag,
            data,
        }))
    }

    fn err(error_code: FfiErrorCode, http_status: u16, msg: String) -> *mut Self {
        Box::into_raw(Box::new(FfiListingResult {
            error_code,
            error_message: c_string(msg),
            http_status,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        }))
    }

    /// Build a success result carrying a single detail record.
    pub(crate) fn ok_detail(detail: ListingDetail) -> *mut Self {
        let listing = Box::new(FfiListing::from(detail));
        Self::ok(FfiDataTag::Detail, Box::into_raw(listing) as *mut std::ffi::c_void)
    }

    /// Build a success result carrying an `FfiListingList`.
    pub(crate) fn ok_listing_list(listings: Vec<Listing>) -> *mut Self {
        let len = listings.len() as u32;
        let items = leak_vec(listings.into_iter().map(FfiListing::from).collect());
        let list = Box::new(FfiListingList { items, len });
        Self::ok(FfiDataTag::ListingList, Box::into_raw(list) as *mut std::ffi::c_void)
    }

    /// Build an error result from an `ApiError`.
    pub(crate) fn from_error(err: ApiError) -> *mut Self {
        let (error_code, http_status) = match &err {
            ApiError::NotFound => (FfiErrorCode::NotFound, 404u16),
            ApiError::HttpError { status, .. } => (FfiErrorCode::Http, *status),
            ApiError::DeserializationError(_) => (FfiErrorCode::Deserialization, 200),
            ApiError::Transport(_) | ApiError::Task(_) => (FfiErrorCode::Transport, 0),
        };
        Self::err(error_code, http_status, err.to_string())
    }

    /// Build an error result for a null argument.
    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::err(FfiErrorCode::NullArg, 0, format!("null argument: {name}"))
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::err(FfiErrorCode::Panic, 0, msg.to_string())
    }
}
