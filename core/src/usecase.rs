//! Use cases: the only way presentation code reaches the repository.

use std::sync::Arc;

use crate::model::{Listing, ListingDetail};
use crate::repository::{PropertyRepository, ResultStream};

#[derive(Clone)]
pub struct GetListingsUseCase {
    repository: Arc<dyn PropertyRepository>,
}

impl GetListingsUseCase {
    pub fn new(repository: Arc<dyn PropertyRepository>) -> Self {
        Self { repository }
    }

    pub fn invoke(&self) -> ResultStream<Vec<Listing>> {
        self.repository.get_listings()
    }
}

#[derive(Clone)]
pub struct GetListingDetailUseCase {
    repository: Arc<dyn PropertyRepository>,
}

impl GetListingDetailUseCase {
    pub fn new(repository: Arc<dyn PropertyRepository>) -> Self {
        Self { repository }
    }

    pub fn invoke(&self, listing_id: i64) -> ResultStream<ListingDetail> {
        self.repository.get_listing_detail(listing_id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use futures::stream::{self, StreamExt};

    use super::*;
    use crate::error::ApiError;
    use crate::model::OfferType;

    /// Records which repository operations were called, with what argument.
    #[derive(Default)]
    struct RecordingRepository {
        calls: Mutex<Vec<String>>,
    }

    fn detail(id: i64) -> ListingDetail {
        ListingDetail {
            id,
            bedrooms: 3,
            city: "Berlin".to_string(),
            area: 150.0,
            image_url: String::new(),
            price: 500000.0,
            professional: "Real Estate Pro".to_string(),
            property_type: "House".to_string(),
            offer_type: OfferType::Sale,
            rooms: 4,
        }
    }

    impl PropertyRepository for RecordingRepository {
        fn get_listings(&self) -> ResultStream<Vec<Listing>> {
            self.calls.lock().unwrap().push("get_listings".to_string());
            stream::once(async { Err(ApiError::Transport("offline".into())) }).boxed()
        }

        fn get_listing_detail(&self, listing_id: i64) -> ResultStream<ListingDetail> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("get_listing_detail({listing_id})"));
            stream::once(async move { Ok(detail(listing_id)) }).boxed()
        }
    }

    #[tokio::test]
    async fn listings_use_case_delegates() {
        let repo = Arc::new(RecordingRepository::default());
        let use_case = GetListingsUseCase::new(repo.clone());

        let items: Vec<_> = use_case.invoke().collect().await;

        assert_eq!(items, vec![Err(ApiError::Transport("offline".into()))]);
        assert_eq!(*repo.calls.lock().unwrap(), vec!["get_listings"]);
    }

    #[tokio::test]
    async fn detail_use_case_passes_id_through() {
        let repo = Arc::new(RecordingRepository::default());
        let use_case = GetListingDetailUseCase::new(repo.clone());

        let items: Vec<_> = use_case.invoke(42).collect().await;

        assert_eq!(items, vec![Ok(detail(42))]);
        assert_eq!(*repo.calls.lock().unwrap(), vec!["get_listing_detail(42)"]);
    }
}
