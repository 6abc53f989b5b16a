//! Data, domain and presentation core for the property listing app.
//!
//! # Overview
//! The fetch → map → present pipeline, one module per stage:
//! `client` builds and parses HTTP exchanges as plain data (host-does-IO),
//! `transport` executes them, `mapper` turns wire records into domain
//! records, `repository` wraps one round-trip into a one-shot stream,
//! `usecase` is the presentation layer's entry point, and `presentation`
//! holds the per-screen Loading / Success / Error state.
//!
//! # Design
//! - `PropertyClient` is stateless; it holds only `base_url`.
//! - Wire DTOs are defined independently from the mock-server crate;
//!   integration tests catch schema drift.
//! - Hosts that do their own I/O (mobile apps through the C ABI) use
//!   `PropertyClient` directly; Rust hosts use the repository stack.

pub mod client;
pub mod error;
pub mod format;
pub mod http;
pub mod mapper;
pub mod model;
pub mod presentation;
pub mod repository;
pub mod transport;
pub mod types;
pub mod usecase;

pub use client::PropertyClient;
pub use error::ApiError;
pub use format::format_price;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use model::{Listing, ListingDetail, OfferType};
pub use presentation::{DetailViewModel, ListingViewModel, StateContainer, UiState, UNKNOWN_ERROR};
pub use repository::{PropertyRepository, RemotePropertyRepository, ResultStream};
pub use transport::{Transport, TransportConfig, UreqTransport};
pub use types::{ListingDto, ListingsResponseDto};
pub use usecase::{GetListingDetailUseCase, GetListingsUseCase};
