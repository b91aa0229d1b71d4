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

//! Everything TrackTube knows about YouTube: the wire models for the two
//! Data API v3 endpoints it reads, a read-only API client, playlist URL
//! parsing, and the `PT#H#M#S` duration codec.
//!
//! The crate is target-agnostic: the frontend compiles it to wasm, the test
//! suite runs it natively against a mock server.

mod client;
pub mod duration;
mod types;
mod urls;

pub use client::{YoutubeClient, DEFAULT_API_BASE, MAX_PAGE_SIZE};
pub use types::*;
pub use urls::{extract_playlist_id, playlist_link, watch_link};
