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

//! Going between user-pasted YouTube URLs and API identifiers, and back.

use std::sync::LazyLock;

use cloneable_errors::{ErrorContext, ResContext};
use reqwest::Url;

static WATCH_BASE: LazyLock<Url> = LazyLock::new(|| {
    Url::parse("https://www.youtube.com/watch").expect("should be able to parse the watch base URL")
});
static PLAYLIST_BASE: LazyLock<Url> = LazyLock::new(|| {
    Url::parse("https://www.youtube.com/playlist")
        .expect("should be able to parse the playlist base URL")
});

/// Extracts the `list` query parameter from a pasted playlist URL.
///
/// Returns `Err` for text that isn't a URL at all and `Ok(None)` for a URL
/// without a `list` parameter. Neither should start a fetch.
pub fn extract_playlist_id(url: &str) -> Result<Option<String>, ErrorContext> {
    let url = Url::parse(url).context("not a valid URL")?;
    Ok(url
        .query_pairs()
        .find(|(ref key, _)| key == "list")
        .map(|(_, value)| value.into_owned()))
}

/// Deep link to a single video.
pub fn watch_link(video_id: &str) -> Url {
    let mut url = WATCH_BASE.clone();
    url.query_pairs_mut().append_pair("v", video_id);
    url
}

/// Deep link back to the playlist itself.
pub fn playlist_link(playlist_id: &str) -> Url {
    let mut url = PLAYLIST_BASE.clone();
    url.query_pairs_mut().append_pair("list", playlist_id);
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_the_list_parameter() {
        let id = extract_playlist_id("https://www.youtube.com/playlist?list=PLabc123").unwrap();
        assert_eq!(id.as_deref(), Some("PLabc123"));
    }

    #[test]
    fn extracts_among_other_parameters() {
        let id = extract_playlist_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PLxyz&index=4")
            .unwrap();
        assert_eq!(id.as_deref(), Some("PLxyz"));
    }

    #[test]
    fn missing_parameter_is_none() {
        let id = extract_playlist_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        assert_eq!(id, None);
    }

    #[test]
    fn non_url_is_an_error() {
        assert!(extract_playlist_id("not a url").is_err());
    }

    #[test]
    fn deep_links_carry_the_id() {
        assert_eq!(
            watch_link("dQw4w9WgXcQ").as_str(),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
        assert_eq!(
            playlist_link("PLabc").as_str(),
            "https://www.youtube.com/playlist?list=PLabc"
        );
    }
}
