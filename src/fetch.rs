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

use async_trait::async_trait;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://micro.blog";

/// One account in a follower list, with its display attributes.
/// Immutable once fetched; field names match the wire JSON.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Follower {
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub avatar: String,
}

/// Session credential, threaded through every fetch. Redacted in Debug
/// output so it never leaks into logs.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The `Authorization` header value the micro.blog API expects.
    pub fn header_value(&self) -> String {
        format!("Token {}", self.0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(..)")
    }
}

/// A fetch either succeeds with a follower list or fails; there is no
/// retry and no partial result. The split between HTTP status and
/// transport failure exists only so the footer message is useful.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("server returned HTTP {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Transport(String),
}

/// Fetches one account's follower list. Exactly one network round trip per
/// call; no caching here — memoization lives in the controller.
#[async_trait(?Send)]
pub trait FetchFollowers {
    async fn fetch(&self, username: &str, token: &AccessToken)
    -> Result<Vec<Follower>, FetchError>;
}

/// The real fetcher: `GET {base}/users/following/{username}` with a
/// `Token` authorization header.
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { client: reqwest::Client::new(), base_url }
    }

    fn following_url(&self, username: &str) -> String {
        format!("{}/users/following/{username}", self.base_url)
    }
}

#[async_trait(?Send)]
impl FetchFollowers for HttpFetcher {
    async fn fetch(
        &self,
        username: &str,
        token: &AccessToken,
    ) -> Result<Vec<Follower>, FetchError> {
        let response = self
            .client
            .get(self.following_url(username))
            .header(reqwest::header::AUTHORIZATION, token.header_value())
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .json::<Vec<Follower>>()
            .await
            .map_err(|e| FetchError::Transport(e.without_url().to_string()))
    }
}
