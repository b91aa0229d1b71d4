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

//! Client behavior against a mock API server: pagination, batching and
//! error propagation.

use reqwest::Url;
use serde_json::json;
use tracktube_youtube::YoutubeClient;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

fn client_for(server: &MockServer) -> YoutubeClient {
    YoutubeClient::with_base(
        "test-key",
        Url::parse(&server.uri()).expect("mock server URI should parse"),
    )
}

fn playlist_page(ids: &[&str], next_page_token: Option<&str>) -> serde_json::Value {
    let items: Vec<serde_json::Value> = ids
        .iter()
        .map(|id| json!({ "contentDetails": { "videoId": id } }))
        .collect();
    match next_page_token {
        Some(token) => json!({ "items": items, "nextPageToken": token }),
        None => json!({ "items": items }),
    }
}

/// Builds a `videos` response echoing the requested ids, so order and
/// batching can be checked without hardcoding 120 items.
struct EchoVideos;

impl Respond for EchoVideos {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let ids = request
            .url
            .query_pairs()
            .find(|(ref key, _)| key == "id")
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default();
        let items: Vec<serde_json::Value> = ids
            .split(',')
            .filter(|id| !id.is_empty())
            .map(|id| {
                json!({
                    "id": id,
                    "snippet": { "title": format!("Video {id}") },
                    "contentDetails": { "duration": "PT1M" },
                })
            })
            .collect();
        ResponseTemplate::new(200).set_body_json(json!({ "items": items }))
    }
}

#[tokio::test]
async fn pagination_walks_every_page_in_order() {
    let server = MockServer::start().await;

    // Later pages are keyed on their continuation token; the token-less
    // first request falls through to the last mounted mock.
    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .and(query_param("pageToken", "t1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(playlist_page(&["c", "d"], Some("t2"))),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .and(query_param("pageToken", "t2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(playlist_page(&["e"], None)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .and(query_param("playlistId", "PLtest"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(playlist_page(&["a", "b"], Some("t1"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ids = client.playlist_video_ids("PLtest").await.unwrap();

    assert_eq!(ids, ["a", "b", "c", "d", "e"]);
}

#[tokio::test]
async fn failed_page_aborts_with_no_partial_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .and(query_param("pageToken", "t1"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(playlist_page(&["a", "b"], Some("t1"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client.playlist_video_ids("PLtest").await.unwrap_err();

    assert!(format!("{error:?}").contains("PLtest"));
}

#[tokio::test]
async fn details_are_batched_in_groups_of_fifty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(EchoVideos)
        .expect(3)
        .mount(&server)
        .await;

    let ids: Vec<String> = (0..120).map(|n| format!("v{n:03}")).collect();
    let client = client_for(&server);
    let videos = client.video_details(&ids).await.unwrap();

    // 120 records, in the original order, regardless of which batch
    // finished first.
    assert_eq!(videos.len(), 120);
    let returned: Vec<&str> = videos.iter().map(|video| video.id.as_str()).collect();
    assert_eq!(returned, ids.iter().map(String::as_str).collect::<Vec<_>>());
    assert_eq!(videos[0].snippet.title, "Video v000");
    assert_eq!(videos[0].content_details.duration, "PT1M");

    // Exactly 3 requests: 50 + 50 + 20 ids. Arrival order at the server is
    // not deterministic for concurrent batches, so compare sorted.
    let mut batch_sizes: Vec<usize> = server
        .received_requests()
        .await
        .expect("request recording should be enabled")
        .iter()
        .map(|request| {
            request
                .url
                .query_pairs()
                .find(|(ref key, _)| key == "id")
                .map_or(0, |(_, value)| value.split(',').count())
        })
        .collect();
    batch_sizes.sort_unstable();
    assert_eq!(batch_sizes, [20, 50, 50]);
}

#[tokio::test]
async fn api_error_envelope_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "code": 403, "message": "quotaExceeded" }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client.playlist_video_ids("PLtest").await.unwrap_err();

    assert!(format!("{error:?}").contains("quotaExceeded"));
}

#[tokio::test]
async fn no_ids_means_no_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(EchoVideos)
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let videos = client.video_details(&[]).await.unwrap();

    assert!(videos.is_empty());
}
