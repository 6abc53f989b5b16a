//! Per-screen state containers.
//!
//! # Design
//! A `StateContainer` owns a `watch` channel holding the current `UiState`
//! and at most one fetch task. Creating the container starts the first
//! fetch; `reload` starts another one. Every cycle publishes `Loading`
//! synchronously, then exactly one terminal state (`Success` or `Error`)
//! once the use case's stream yields its single item.
//!
//! A reload aborts the previous task, and each cycle carries a generation
//! number checked under the channel's write lock, so a late result from an
//! older cycle is never published over a newer one. Dropping the container
//! aborts the running task.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use futures::StreamExt;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::model::{Listing, ListingDetail};
use crate::repository::ResultStream;
use crate::usecase::{GetListingDetailUseCase, GetListingsUseCase};

/// Shown when a failure carries no message.
pub const UNKNOWN_ERROR: &str = "Unknown error occurred";

#[derive(Debug, Clone, PartialEq)]
pub enum UiState<T> {
    Loading,
    Success(T),
    Error(String),
}

impl<T> UiState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }
}

type Loader<T> = Box<dyn Fn() -> ResultStream<T> + Send + Sync>;

pub struct StateContainer<T> {
    state: Arc<watch::Sender<UiState<T>>>,
    generation: Arc<AtomicU64>,
    loader: Loader<T>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl<T> StateContainer<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create the container and start the first fetch.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new<F>(loader: F) -> Self
    where
        F: Fn() -> ResultStream<T> + Send + Sync + 'static,
    {
        let (state, _) = watch::channel(UiState::Loading);
        let container = Self {
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            loader: Box::new(loader),
            task: Mutex::new(None),
        };
        container.reload();
        container
    }

    /// Abort any fetch in flight, publish `Loading` and fetch again.
    pub fn reload(&self) {
        let mut task = self.task.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = task.take() {
            previous.abort();
        }

        let cycle = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(UiState::Loading);
        debug!(cycle, "fetch cycle started");

        let stream = (self.loader)();
        let state = Arc::clone(&self.state);
        let generation = Arc::clone(&self.generation);
        *task = Some(tokio::spawn(async move {
            let outcome = resolve(stream).await;
            publish(&state, &generation, cycle, outcome);
        }));
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> UiState<T> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<UiState<T>> {
        self.state.subscribe()
    }

    /// Wait until the current cycle reaches `Success` or `Error`.
    pub async fn settled(&self) -> UiState<T> {
        let mut receiver = self.subscribe();
        // Bound to a local so the `Ref` is released before `receiver` drops.
        let settled = match receiver.wait_for(|state| !state.is_loading()).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        };
        settled
    }
}

impl<T> Drop for StateContainer<T> {
    fn drop(&mut self) {
        let task = self.task.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(task) = task.take() {
            task.abort();
        }
    }
}

/// Publish `outcome` unless a newer cycle has started since `cycle`.
///
/// The generation is read under the channel's write lock, so a reload that
/// raced the abort of `cycle` still wins.
fn publish<T>(
    state: &watch::Sender<UiState<T>>,
    generation: &AtomicU64,
    cycle: u64,
    outcome: UiState<T>,
) -> bool {
    state.send_if_modified(|current| {
        if generation.load(Ordering::SeqCst) != cycle {
            return false;
        }
        *current = outcome;
        true
    })
}

/// Await the single item of a one-shot stream and turn it into a state.
async fn resolve<T>(mut stream: ResultStream<T>) -> UiState<T> {
    match stream.next().await {
        Some(Ok(payload)) => UiState::Success(payload),
        Some(Err(error)) => UiState::Error(error_message(error.to_string())),
        None => UiState::Error(UNKNOWN_ERROR.to_string()),
    }
}

fn error_message(message: String) -> String {
    if message.trim().is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        message
    }
}

/// State for the listing screen.
pub struct ListingViewModel {
    container: StateContainer<Vec<Listing>>,
}

impl ListingViewModel {
    pub fn new(get_listings: GetListingsUseCase) -> Self {
        Self {
            container: StateContainer::new(move || get_listings.invoke()),
        }
    }

    /// Retry action.
    pub fn load_listings(&self) {
        self.container.reload();
    }

    pub fn ui_state(&self) -> UiState<Vec<Listing>> {
        self.container.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<UiState<Vec<Listing>>> {
        self.container.subscribe()
    }

    pub async fn settled(&self) -> UiState<Vec<Listing>> {
        self.container.settled().await
    }
}

/// State for the detail screen of one listing.
pub struct DetailViewModel {
    listing_id: i64,
    container: StateContainer<ListingDetail>,
}

impl DetailViewModel {
    pub fn new(get_listing_detail: GetListingDetailUseCase, listing_id: i64) -> Self {
        Self {
            listing_id,
            container: StateContainer::new(move || get_listing_detail.invoke(listing_id)),
        }
    }

    pub fn listing_id(&self) -> i64 {
        self.listing_id
    }

    /// Retry action.
    pub fn load_listing_detail(&self) {
        self.container.reload();
    }

    pub fn ui_state(&self) -> UiState<ListingDetail> {
        self.container.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<UiState<ListingDetail>> {
        self.container.subscribe()
    }

    pub async fn settled(&self) -> UiState<ListingDetail> {
        self.container.settled().await
    }
}
