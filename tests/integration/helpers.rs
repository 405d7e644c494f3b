use async_trait::async_trait;
use followtree::app::{self, App};
use followtree::fetch::{AccessToken, FetchError, FetchFollowers, Follower};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

pub fn follower(username: &str) -> Follower {
    Follower {
        username: username.to_owned(),
        name: format!("Name of {username}"),
        url: format!("https://{username}.example"),
        avatar: format!("https://{username}.example/avatar.png"),
    }
}

/// In-memory fetcher with a call log. Unknown usernames fail with a 404,
/// which doubles as the failure fixture.
pub struct FakeFetcher {
    lists: RefCell<HashMap<String, Vec<Follower>>>,
    calls: RefCell<Vec<String>>,
}

impl FakeFetcher {
    pub fn new(fixtures: &[(&str, &[&str])]) -> Rc<Self> {
        let lists = fixtures
            .iter()
            .map(|(owner, followers)| {
                ((*owner).to_owned(), followers.iter().map(|u| follower(u)).collect())
            })
            .collect();
        Rc::new(Self { lists: RefCell::new(lists), calls: RefCell::new(Vec::new()) })
    }

    /// Add or replace a fixture after construction (retry scenarios).
    pub fn set_list(&self, owner: &str, followers: &[&str]) {
        self.lists
            .borrow_mut()
            .insert(owner.to_owned(), followers.iter().map(|u| follower(u)).collect());
    }

    pub fn calls_for(&self, username: &str) -> usize {
        self.calls.borrow().iter().filter(|u| u.as_str() == username).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.borrow().len()
    }
}

#[async_trait(?Send)]
impl FetchFollowers for FakeFetcher {
    async fn fetch(
        &self,
        username: &str,
        _token: &AccessToken,
    ) -> Result<Vec<Follower>, FetchError> {
        self.calls.borrow_mut().push(username.to_owned());
        self.lists.borrow().get(username).cloned().ok_or(FetchError::Status(404))
    }
}

/// Wraps a `FakeFetcher` with per-username artificial latency, for
/// exercising interleaved completions under a paused tokio clock.
pub struct DelayedFetcher {
    pub inner: Rc<FakeFetcher>,
    pub delays: HashMap<String, Duration>,
}

#[async_trait(?Send)]
impl FetchFollowers for DelayedFetcher {
    async fn fetch(
        &self,
        username: &str,
        token: &AccessToken,
    ) -> Result<Vec<Follower>, FetchError> {
        if let Some(delay) = self.delays.get(username) {
            tokio::time::sleep(*delay).await;
        }
        self.inner.fetch(username, token).await
    }
}

/// Build a minimal `App` for integration testing.
/// No real network, no TUI — just state plus the fetch channel.
pub fn test_app(fetcher: Rc<dyn FetchFollowers>) -> App {
    App::new(fetcher, AccessToken::new("test-token"))
}

/// Let spawned fetch tasks run, then apply every queued completion.
/// Must be called inside a `LocalSet`.
pub async fn settle(app: &mut App) {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
    while let Ok(event) = app.event_rx.try_recv() {
        app::handle_fetch_event(app, event);
    }
}

pub fn path_names(app: &App) -> Vec<String> {
    app.state
        .as_ref()
        .map(|state| state.path.iter().map(str::to_owned).collect())
        .unwrap_or_default()
}
