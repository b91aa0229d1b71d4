/* This file is part of the TrackTube project - https://github.com/tracktube/tracktube
*
*  Copyright (C) 2026 the TrackTube contributors
*
*  This program is free software: you can redistribute it and/or modify
*  it under the terms of the GNU Affero General Public License as published by
*  the Free Software Foundation, either version 3 of the License, or
*  (at your option) any later version.
*
*  This program is distributed in the hope that it will be useful,
*  but WITHOUT ANY WARRANTY; without even the implied warranty of
*  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
*  GNU Affero General Public License for more details.
*
*  You should have received a copy of the GNU Affero General Public License
*  along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use cloneable_errors::{bail, ErrorContext, ResContext};
use futures::future::try_join_all;
use log::debug;
use reqwest::{Client, Response, Url};

use crate::types::{ApiErrorResponse, PlaylistItemsPage, Video, VideoListPage};

/// Public Data API v3 base; tests point the client elsewhere.
pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com/youtube/v3/";

/// Item cap shared by the `playlistItems` page size and the `videos` id
/// batch size.
pub const MAX_PAGE_SIZE: usize = 50;

/// Read-only YouTube Data API v3 client.
///
/// Carries the API key it was constructed with; nothing in this crate reads
/// ambient configuration.
#[derive(Clone, Debug)]
pub struct YoutubeClient {
    http: Client,
    base: Url,
    api_key: String,
}

impl YoutubeClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base(
            api_key,
            Url::parse(DEFAULT_API_BASE).expect("default API base should be a valid URL"),
        )
    }

    /// Client pointed at a custom API base, for tests against a mock server.
    pub fn with_base(api_key: impl Into<String>, base: Url) -> Self {
        Self {
            http: Client::new(),
            base,
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self, name: &str) -> Url {
        self.base
            .join(name)
            .expect("endpoint name should join onto the API base")
    }

    /// Fetches a single page of playlist items.
    pub async fn playlist_items_page(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
    ) -> Result<PlaylistItemsPage, ErrorContext> {
        let mut url = self.endpoint("playlistItems");
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("part", "contentDetails")
                .append_pair("maxResults", &MAX_PAGE_SIZE.to_string())
                .append_pair("playlistId", playlist_id)
                .append_pair("key", &self.api_key);
            if let Some(token) = page_token {
                query.append_pair("pageToken", token);
            }
        }
        self.get_json(url)
            .await
            .context("playlistItems request failed")
    }

    /// Collects every video id in the playlist, in playlist order.
    ///
    /// Pages are requested one at a time: each request needs the previous
    /// page's continuation token. The first failed page aborts the whole
    /// walk with no partial result.
    pub async fn playlist_video_ids(&self, playlist_id: &str) -> Result<Vec<String>, ErrorContext> {
        let mut video_ids = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self
                .playlist_items_page(playlist_id, page_token.as_deref())
                .await
                .with_context(|| format!("failed to list the items of playlist {playlist_id}"))?;
            video_ids.extend(
                page.items
                    .into_iter()
                    .map(|item| item.content_details.video_id),
            );
            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!(
            "playlist {playlist_id}: collected {} video ids",
            video_ids.len()
        );
        Ok(video_ids)
    }

    async fn video_details_batch(&self, ids: &[String]) -> Result<Vec<Video>, ErrorContext> {
        let mut url = self.endpoint("videos");
        url.query_pairs_mut()
            .append_pair("part", "snippet,contentDetails")
            .append_pair("id", &ids.join(","))
            .append_pair("key", &self.api_key);
        let page: VideoListPage = self.get_json(url).await.context("videos request failed")?;
        Ok(page.items)
    }

    /// Fetches details for an arbitrary number of video ids.
    ///
    /// Ids are split into contiguous batches of at most [`MAX_PAGE_SIZE`]
    /// (the endpoint's per-request limit), all batch requests run
    /// concurrently, and the results are concatenated in batch order. A
    /// single failed batch fails the whole call; nothing partial is
    /// returned.
    pub async fn video_details(&self, ids: &[String]) -> Result<Vec<Video>, ErrorContext> {
        let batches = try_join_all(
            ids.chunks(MAX_PAGE_SIZE)
                .map(|batch| self.video_details_batch(batch)),
        )
        .await?;
        Ok(batches.into_iter().flatten().collect())
    }

    async fn get_json<R>(&self, url: Url) -> Result<R, ErrorContext>
    where
        R: serde::de::DeserializeOwned,
    {
        self.http
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .context("failed to send the request")?
            .check_status()
            .await?
            .json()
            .await
            .context("failed to deserialize the response")
    }
}

trait ResponseExt: Sized {
    #[allow(async_fn_in_trait)] // this is for local use
    async fn check_status(self) -> Result<Self, ErrorContext>;
}

impl ResponseExt for Response {
    async fn check_status(self) -> Result<Self, ErrorContext> {
        let status = self.status();
        if status.is_success() {
            return Ok(self);
        }
        let body = self
            .text()
            .await
            .with_context(|| format!("the API returned a '{status}' status code"))?;
        match serde_json::from_str::<ApiErrorResponse>(&body) {
            Ok(envelope) => bail!(
                "the API returned an error (code {}): {}",
                envelope.error.code,
                envelope.error.message
            ),
            Err(..) => bail!("the API returned a '{status}' status code with the following body:\n{body}"),
        }
    }
}
