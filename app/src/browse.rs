//! Interactive navigation between the listing and detail screens.

use listing_core::{DetailViewModel, GetListingDetailUseCase, ListingViewModel};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::view::{render_detail_screen, render_listing_screen};

const PROMPT_LIST: &str = "[id] open  [r] retry  [q] quit > ";
const PROMPT_DETAIL: &str = "[b] back  [r] retry  [q] quit > ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Open(i64),
    Retry,
    Back,
    Quit,
    Unknown(String),
}

impl Input {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "q" | "quit" => Input::Quit,
            "r" | "retry" => Input::Retry,
            "b" | "back" => Input::Back,
            other => match other.parse::<i64>() {
                Ok(id) => Input::Open(id),
                Err(_) => Input::Unknown(other.to_string()),
            },
        }
    }
}

/// Holds the list screen for the whole session and at most one detail
/// screen on top of it.
pub struct Browser {
    listings: ListingViewModel,
    get_listing_detail: GetListingDetailUseCase,
    detail: Option<DetailViewModel>,
}

impl Browser {
    pub fn new(listings: ListingViewModel, get_listing_detail: GetListingDetailUseCase) -> Self {
        Self {
            listings,
            get_listing_detail,
            detail: None,
        }
    }

    pub fn detail_id(&self) -> Option<i64> {
        self.detail.as_ref().map(DetailViewModel::listing_id)
    }

    /// Wait for the visible screen to leave `Loading` and render it.
    pub async fn render(&self) -> String {
        match &self.detail {
            Some(detail) => render_detail_screen(&detail.settled().await),
            None => render_listing_screen(&self.listings.settled().await),
        }
    }

    /// Apply one input. Returns `false` once the user quits.
    pub fn apply(&mut self, input: Input) -> bool {
        match input {
            Input::Quit => return false,
            Input::Retry => match &self.detail {
                Some(detail) => detail.load_listing_detail(),
                None => self.listings.load_listings(),
            },
            Input::Back => {
                if let Some(id) = self.detail_id() {
                    debug!(id, "closing detail");
                }
                // Dropping the view model cancels its fetch.
                self.detail = None;
            }
            Input::Open(id) if self.detail.is_none() => {
                debug!(id, "opening detail");
                self.detail = Some(DetailViewModel::new(self.get_listing_detail.clone(), id));
            }
            Input::Open(_) | Input::Unknown(_) => {}
        }
        true
    }

    fn prompt(&self) -> &'static str {
        if self.detail.is_some() {
            PROMPT_DETAIL
        } else {
            PROMPT_LIST
        }
    }

    /// Drive the session until `q` or end of input.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        loop {
            let screen = self.render().await;
            output.write_all(screen.as_bytes()).await?;
            output.write_all(self.prompt().as_bytes()).await?;
            output.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            let input = Input::parse(&line);
            if let Input::Unknown(text) = &input {
                output
                    .write_all(format!("unrecognised input: {text}\n").as_bytes())
                    .await?;
            }
            if !self.apply(input) {
                break;
            }
            output.write_all(b"\n").await?;
        }
        output.flush().await
    }
}
