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

/// Build-time metadata collected by `built`.
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

/// YouTube Data API key, baked in when the bundle is built.
///
/// `None` when the variable was missing at build time; the app then shows a
/// configuration warning instead of failing each fetch silently.
pub const YOUTUBE_API_KEY: Option<&str> = option_env!("TRACKTUBE_API_KEY");
