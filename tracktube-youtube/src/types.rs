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

use serde::Deserialize;

/// One page of `GET playlistItems`.
///
/// `next_page_token` absent means this was the last page.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemsPage {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItem {
    pub content_details: PlaylistItemDetails,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemDetails {
    pub video_id: String,
}

/// Response to `GET videos`.
#[derive(Deserialize, Clone, Debug)]
pub struct VideoListPage {
    #[serde(default)]
    pub items: Vec<Video>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub snippet: VideoSnippet,
    pub content_details: VideoContentDetails,
}

#[derive(Deserialize, Clone, Debug)]
pub struct VideoSnippet {
    pub title: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct VideoContentDetails {
    /// ISO-8601-style duration, e.g. `PT1H2M3S`.
    pub duration: String,
}

/// The envelope YouTube wraps non-2xx responses in.
#[derive(Deserialize, Clone, Debug)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApiError {
    pub code: u16,
    pub message: String,
}
