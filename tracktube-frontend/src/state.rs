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

//! Application state for one loaded playlist.

use std::collections::HashSet;
use std::rc::Rc;

use gloo_console::warn;
use yew::Reducible;

use tracktube_youtube::duration::parse_duration;
use tracktube_youtube::Video;

/// One row of the checklist. Order matches the playlist order returned by
/// the API, preserved across pagination and batching.
#[derive(Clone, PartialEq)]
pub struct VideoEntry {
    pub video_id: Rc<str>,
    pub title: Rc<str>,
    /// Raw `PT#H#M#S` duration as returned by the API.
    pub duration: Rc<str>,
    pub duration_seconds: u64,
}

/// Aggregate view of a fetched playlist.
///
/// Built once per successful submit and replaced wholesale by the next one;
/// nothing mutates it in place.
#[derive(Clone, PartialEq)]
pub struct PlaylistSummary {
    pub total_videos: usize,
    pub total_length_seconds: u64,
    pub videos: Vec<VideoEntry>,
}

impl PlaylistSummary {
    pub fn build(videos: Vec<Video>) -> Self {
        let videos: Vec<VideoEntry> = videos
            .into_iter()
            .map(|video| {
                let duration_seconds = match parse_duration(&video.content_details.duration) {
                    Some(seconds) => seconds,
                    None => {
                        warn!(format!(
                            "video {}: unparseable duration {:?}, counting it as 0s",
                            video.id, video.content_details.duration
                        ));
                        0
                    }
                };
                VideoEntry {
                    video_id: video.id.into(),
                    title: video.snippet.title.into(),
                    duration: video.content_details.duration.into(),
                    duration_seconds,
                }
            })
            .collect();
        Self {
            total_videos: videos.len(),
            total_length_seconds: videos.iter().map(|entry| entry.duration_seconds).sum(),
            videos,
        }
    }
}

/// Watched and highlighted marks, keyed by video id.
///
/// Keying by id rather than display title means two different videos that
/// happen to share a title track independently; repeated occurrences of the
/// same video in one playlist still toggle together.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WatchState {
    watched: HashSet<Rc<str>>,
    highlighted: HashSet<Rc<str>>,
}

pub enum WatchAction {
    ToggleWatched(Rc<str>),
    ToggleHighlight(Rc<str>),
    Reset,
}

fn toggle(set: &mut HashSet<Rc<str>>, video_id: Rc<str>) {
    if !set.remove(&video_id) {
        set.insert(video_id);
    }
}

impl Reducible for WatchState {
    type Action = WatchAction;

    fn reduce(self: Rc<Self>, action: WatchAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            WatchAction::ToggleWatched(id) => toggle(&mut next.watched, id),
            WatchAction::ToggleHighlight(id) => toggle(&mut next.highlighted, id),
            WatchAction::Reset => next = WatchState::default(),
        }
        Rc::new(next)
    }
}

impl WatchState {
    pub fn is_watched(&self, video_id: &str) -> bool {
        self.watched.contains(video_id)
    }

    pub fn is_highlighted(&self, video_id: &str) -> bool {
        self.highlighted.contains(video_id)
    }

    /// Time-weighted progress through the playlist, in percent.
    ///
    /// A 2h lecture counts for more than a 30s teaser; the old
    /// count-weighted formula treated them the same.
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self, summary: &PlaylistSummary) -> f64 {
        if summary.total_length_seconds == 0 || self.watched.is_empty() {
            return 0.0;
        }
        let watched_seconds: u64 = summary
            .videos
            .iter()
            .filter(|entry| self.watched.contains(&entry.video_id))
            .map(|entry| entry.duration_seconds)
            .sum();
        watched_seconds as f64 / summary.total_length_seconds as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(video_id: &str, duration_seconds: u64) -> VideoEntry {
        VideoEntry {
            video_id: video_id.into(),
            title: format!("Video {video_id}").into(),
            duration: "PT1M".into(),
            duration_seconds,
        }
    }

    fn summary(entries: Vec<VideoEntry>) -> PlaylistSummary {
        PlaylistSummary {
            total_videos: entries.len(),
            total_length_seconds: entries.iter().map(|e| e.duration_seconds).sum(),
            videos: entries,
        }
    }

    fn apply(state: WatchState, action: WatchAction) -> WatchState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn toggle_watched_is_an_involution() {
        let state = WatchState::default();
        let state = apply(state, WatchAction::ToggleWatched("a".into()));
        assert!(state.is_watched("a"));
        let state = apply(state, WatchAction::ToggleWatched("a".into()));
        assert!(!state.is_watched("a"));
        assert_eq!(state, WatchState::default());
    }

    #[test]
    fn toggle_highlight_is_an_involution() {
        let state = WatchState::default();
        let state = apply(state, WatchAction::ToggleHighlight("a".into()));
        assert!(state.is_highlighted("a"));
        let state = apply(state, WatchAction::ToggleHighlight("a".into()));
        assert!(!state.is_highlighted("a"));
    }

    #[test]
    fn watched_and_highlighted_are_independent() {
        let state = apply(WatchState::default(), WatchAction::ToggleWatched("a".into()));
        assert!(!state.is_highlighted("a"));
        let state = apply(state, WatchAction::ToggleHighlight("b".into()));
        assert!(!state.is_watched("b"));
    }

    #[test]
    fn reset_clears_everything() {
        let state = apply(WatchState::default(), WatchAction::ToggleWatched("a".into()));
        let state = apply(state, WatchAction::ToggleHighlight("b".into()));
        let state = apply(state, WatchAction::Reset);
        assert_eq!(state, WatchState::default());
    }

    #[test]
    fn progress_is_zero_with_nothing_watched() {
        let summary = summary(vec![entry("a", 60), entry("b", 120)]);
        assert_eq!(WatchState::default().progress(&summary), 0.0);
    }

    #[test]
    fn progress_is_zero_for_an_empty_playlist() {
        let summary = summary(vec![]);
        let state = apply(WatchState::default(), WatchAction::ToggleWatched("a".into()));
        assert_eq!(state.progress(&summary), 0.0);
    }

    #[test]
    fn progress_is_time_weighted() {
        let summary = summary(vec![entry("short", 30), entry("long", 90)]);
        let state = apply(
            WatchState::default(),
            WatchAction::ToggleWatched("long".into()),
        );
        assert!((state.progress(&summary) - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn progress_reaches_one_hundred() {
        let summary = summary(vec![entry("a", 60), entry("b", 120)]);
        let state = apply(WatchState::default(), WatchAction::ToggleWatched("a".into()));
        let state = apply(state, WatchAction::ToggleWatched("b".into()));
        assert!((state.progress(&summary) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn repeated_playlist_entries_count_together() {
        // The same video twice in one playlist: both occurrences follow the
        // single watched mark.
        let summary = summary(vec![entry("a", 50), entry("a", 50), entry("b", 100)]);
        let state = apply(WatchState::default(), WatchAction::ToggleWatched("a".into()));
        assert!((state.progress(&summary) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn summary_build_totals_durations() {
        let videos = vec![
            video("a", "First", "PT1M"),
            video("b", "Second", "PT1H2M3S"),
        ];
        let summary = PlaylistSummary::build(videos);
        assert_eq!(summary.total_videos, 2);
        assert_eq!(summary.total_length_seconds, 60 + 3723);
        assert_eq!(&*summary.videos[0].title, "First");
        assert_eq!(summary.videos[1].duration_seconds, 3723);
    }

    fn video(id: &str, title: &str, duration: &str) -> Video {
        use tracktube_youtube::{VideoContentDetails, VideoSnippet};
        Video {
            id: id.to_owned(),
            snippet: VideoSnippet {
                title: title.to_owned(),
            },
            content_details: VideoContentDetails {
                duration: duration.to_owned(),
            },
        }
    }
}
