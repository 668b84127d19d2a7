use std::ops::Deref;

use crate::{
    parser::{parse_json3_captions, YtHtmlDocument},
    types::{CaptionTrack, Transcript},
    yt::VideoSource,
};

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("Caption track is empty")]
    EmptyTranscript,
    #[error(transparent)]
    Parse(#[from] crate::error::Error),
}

#[derive(Debug, Clone, Default)]
pub struct Scraper(pub reqwest::Client);

impl Deref for Scraper {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Scraper {
    async fn get_text(&self, request: reqwest::RequestBuilder) -> Result<String, ScrapeError> {
        let resp = request
            .header("Accept-Language", "pt-BR,pt;q=0.9,en-US;q=0.8,en;q=0.7")
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            return Err(ScrapeError::Status {
                status: resp.status().as_u16(),
                url: resp.url().to_string(),
            });
        }

        Ok(resp.text().await?)
    }
}

impl VideoSource for Scraper {
    const WATCH_URL: &'static str = "https://www.youtube.com/watch";

    type Error = ScrapeError;

    #[tracing::instrument(skip(self))]
    async fn scrape_watch_page(&self, video_id: &str) -> Result<YtHtmlDocument, Self::Error> {
        let request = self.get(Self::WATCH_URL).query(&[("v", video_id)]);
        let yt_html_document = self.get_text(request).await?;

        Ok(yt_html_document.into())
    }

    #[tracing::instrument(skip_all, fields(language_code = %track.language_code))]
    async fn fetch_transcript(&self, track: &CaptionTrack) -> Result<Transcript, Self::Error> {
        let request = self.get(&track.base_url).query(&[("fmt", "json3")]);
        let body = self.get_text(request).await?;

        let text = parse_json3_captions(&body)?;
        if text.is_empty() {
            return Err(ScrapeError::EmptyTranscript);
        }

        Ok(Transcript {
            language_code: track.language_code.clone(),
            text,
        })
    }
}
