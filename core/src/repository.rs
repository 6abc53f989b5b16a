//! Repository: one remote call, mapped, delivered as a one-shot stream.
//!
//! # Design
//! Each operation yields exactly one `Result` and then ends. The blocking
//! round-trip runs on tokio's blocking pool; every failure (transport,
//! status, decoding, task cancellation) is turned into an `Err` item here and
//! never escapes as a panic or early return.

use std::sync::Arc;

use futures::stream::{self, BoxStream, StreamExt};
use tracing::{debug, warn};

use crate::client::PropertyClient;
use crate::error::ApiError;
use crate::model::{Listing, ListingDetail};
use crate::transport::Transport;

/// A stream that emits a single success or failure.
pub type ResultStream<T> = BoxStream<'static, Result<T, ApiError>>;

pub trait PropertyRepository: Send + Sync {
    fn get_listings(&self) -> ResultStream<Vec<Listing>>;
    fn get_listing_detail(&self, listing_id: i64) -> ResultStream<ListingDetail>;
}

/// `PropertyRepository` that talks to the listing API through a `Transport`.
pub struct RemotePropertyRepository<T> {
    client: PropertyClient,
    transport: Arc<T>,
}

impl<T: Transport> RemotePropertyRepository<T> {
    pub fn new(client: PropertyClient, transport: T) -> Self {
        Self {
            client,
            transport: Arc::new(transport),
        }
    }

    /// Run `call` once on the blocking pool and wrap its outcome in a stream.
    fn one_shot<R, F>(&self, operation: &'static str, call: F) -> ResultStream<R>
    where
        R: Send + 'static,
        F: FnOnce(&PropertyClient, &T) -> Result<R, ApiError> + Send + 'static,
    {
        let client = self.client.clone();
        let transport = Arc::clone(&self.transport);
        stream::once(async move {
            debug!(operation, "fetching");
            let result = tokio::task::spawn_blocking(move || call(&client, transport.as_ref()))
                .await
                .unwrap_or_else(|e| Err(ApiError::Task(e.to_string())));
            if let Err(e) = &result {
                warn!(operation, error = %e, "fetch failed");
            }
            result
        })
        .boxed()
    }
}

impl<T: Transport> PropertyRepository for RemotePropertyRepository<T> {
    fn get_listings(&self) -> ResultStream<Vec<Listing>> {
        self.one_shot("get_listings", |client, transport| {
            let response = transport.execute(client.build_list_listings())?;
            client.parse_list_listings(response)
        })
    }

    fn get_listing_detail(&self, listing_id: i64) -> ResultStream<ListingDetail> {
        self.one_shot("get_listing_detail", move |client, transport| {
            let response = transport.execute(client.build_get_listing(listing_id))?;
            client.parse_get_listing(response)
        })
    }
}
