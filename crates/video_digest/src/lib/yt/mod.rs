pub mod scraper;

use std::{fmt::Debug, future::Future};

use crate::{
    parser::YtHtmlDocument,
    types::{CaptionTrack, Transcript},
};

/// Where watch pages and caption tracks come from.
pub trait VideoSource {
    const WATCH_URL: &'static str;

    type Error: Debug + Send;

    fn scrape_watch_page(
        &self,
        video_id: &str,
    ) -> impl Future<Output = Result<YtHtmlDocument, Self::Error>> + Send;

    fn fetch_transcript(
        &self,
        track: &CaptionTrack,
    ) -> impl Future<Output = Result<Transcript, Self::Error>> + Send;
}
