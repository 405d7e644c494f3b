// followtree — interactive terminal explorer for micro.blog follower graphs
// Copyright (C) 2026  followtree contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

pub mod app;
pub mod fetch;
pub mod ui;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "followtree", about = "Drill-down explorer for micro.blog follower graphs")]
pub struct Cli {
    /// Root account to explore (pre-fills the setup form)
    #[arg(long, short)]
    pub user: Option<String>,

    /// micro.blog access token (falls back to MICROBLOG_TOKEN)
    #[arg(long, short)]
    pub token: Option<String>,

    /// API base URL
    #[arg(long, default_value = crate::fetch::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Write diagnostics to this file (tracing is disabled without it)
    #[arg(long)]
    pub log_file: Option<std::path::PathBuf>,

    /// Tracing filter directives (falls back to RUST_LOG, then "info")
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Append to the log file instead of truncating it
    #[arg(long)]
    pub log_append: bool,
}
