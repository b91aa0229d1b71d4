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

//! Parsing and rendering of the `PT#H#M#S` durations the API returns.

use std::sync::LazyLock;

use regex::Regex;

static DURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").expect("duration pattern should compile")
});

/// Parses a `PT#H#M#S` duration into seconds.
///
/// Any subset of the hour/minute/second components may be absent; absent
/// components count as 0, so a bare `PT` parses to `Some(0)`. Text that
/// doesn't contain the pattern at all yields `None` - the caller decides
/// whether that's worth reporting or coerced to a zero duration.
pub fn parse_duration(text: &str) -> Option<u64> {
    let captures = DURATION_PATTERN.captures(text)?;
    let component = |index: usize| {
        captures
            .get(index)
            .map_or(0, |m| m.as_str().parse::<u64>().unwrap_or(0))
    };
    Some(component(1) * 3600 + component(2) * 60 + component(3))
}

/// Renders seconds as `H:M:S` without zero padding (65 becomes `0:1:5`).
///
/// This is what the playlist summary has always displayed, not a standard
/// time format.
pub fn seconds_to_hms(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let seconds = seconds % 60;
    format!("{hours}:{minutes}:{seconds}")
}

/// Checklist row label: `title (H:M:S)`.
///
/// An unparseable duration renders as `0:0:0` rather than breaking the row.
pub fn format_video_duration(title: &str, duration: &str) -> String {
    let seconds = parse_duration(duration).unwrap_or(0);
    format!("{title} ({})", seconds_to_hms(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_triple_round_trips() {
        assert_eq!(parse_duration("PT1H2M3S"), Some(3723));
        assert_eq!(seconds_to_hms(3723), "1:2:3");
    }

    #[test]
    fn seconds_only() {
        assert_eq!(parse_duration("PT45S"), Some(45));
        assert_eq!(seconds_to_hms(45), "0:0:45");
    }

    #[test]
    fn hours_only() {
        assert_eq!(parse_duration("PT2H"), Some(7200));
        assert_eq!(seconds_to_hms(7200), "2:0:0");
    }

    #[test]
    fn minutes_and_seconds() {
        assert_eq!(parse_duration("PT4M13S"), Some(253));
    }

    #[test]
    fn bare_pt_is_zero() {
        assert_eq!(parse_duration("PT"), Some(0));
    }

    #[test]
    fn garbage_is_none() {
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("4:13"), None);
        assert_eq!(parse_duration("P1D"), None);
    }

    #[test]
    fn rendering_is_unpadded() {
        assert_eq!(seconds_to_hms(65), "0:1:5");
        assert_eq!(seconds_to_hms(0), "0:0:0");
    }

    #[test]
    fn row_label() {
        assert_eq!(format_video_duration("Intro", "PT1M5S"), "Intro (0:1:5)");
    }

    #[test]
    fn row_label_with_broken_duration() {
        assert_eq!(format_video_duration("Broken", "???"), "Broken (0:0:0)");
    }
}
