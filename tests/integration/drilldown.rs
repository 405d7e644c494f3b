// Drill-down integration tests: the selection/cache/render cycle across
// multi-step sessions, driven through the public dispatch functions.

use crate::helpers::{FakeFetcher, path_names, settle, test_app};
use followtree::app::{self, Screen};
use followtree::ui::columns::column_views;
use pretty_assertions::assert_eq;

// --- Start ---

#[tokio::test]
async fn start_renders_one_root_column_with_nothing_selected() {
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let fetcher = FakeFetcher::new(&[("alice", &["bob", "carol"])]);
            let mut app = test_app(fetcher.clone());

            app::dispatch_start(&mut app, "alice".to_owned());
            assert_eq!(app.screen, Screen::Tree);
            assert!(app.state.is_none(), "root fetch still in flight");

            settle(&mut app).await;

            assert_eq!(path_names(&app), vec!["alice"]);
            let state = app.state.as_ref().unwrap();
            let views = column_views(&state.path, &state.cache);
            assert_eq!(views.len(), 1);
            let entries = views[0].entries.as_ref().unwrap();
            assert_eq!(entries.len(), 2);
            assert!(entries.iter().all(|e| !e.selected), "nothing selected at the root");
        })
        .await;
}

#[tokio::test]
async fn start_marks_the_root_in_flight_until_resolution() {
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let fetcher = FakeFetcher::new(&[("alice", &[])]);
            let mut app = test_app(fetcher);

            app::dispatch_start(&mut app, "alice".to_owned());
            assert!(app.in_flight.contains("alice"));

            settle(&mut app).await;
            assert!(app.in_flight.is_empty());
        })
        .await;
}

// --- Select: cache miss ---

#[tokio::test]
async fn drilling_into_a_follower_extends_path_and_cache() {
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let fetcher = FakeFetcher::new(&[("alice", &["bob", "carol"]), ("bob", &["dave"])]);
            let mut app = test_app(fetcher.clone());
            app::dispatch_start(&mut app, "alice".to_owned());
            settle(&mut app).await;

            app::dispatch_select(&mut app, "bob", 0);
            settle(&mut app).await;

            assert_eq!(path_names(&app), vec!["alice", "bob"]);
            let state = app.state.as_ref().unwrap();
            assert_eq!(state.cache.len(), 2);
            assert!(state.cache.contains("alice"));
            assert!(state.cache.contains("bob"));

            let views = column_views(&state.path, &state.cache);
            assert_eq!(views.len(), 2);
            let first = views[0].entries.as_ref().unwrap();
            let selected: Vec<&str> = first
                .iter()
                .filter(|e| e.selected)
                .map(|e| e.follower.username.as_str())
                .collect();
            assert_eq!(selected, vec!["bob"], "column 0 marks bob selected");

            let second = views[1].entries.as_ref().unwrap();
            let names: Vec<&str> = second.iter().map(|e| e.follower.username.as_str()).collect();
            assert_eq!(names, vec!["dave"]);
        })
        .await;
}

#[tokio::test]
async fn drilling_in_focuses_the_new_column() {
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let fetcher = FakeFetcher::new(&[("alice", &["bob"]), ("bob", &["dave"])]);
            let mut app = test_app(fetcher);
            app::dispatch_start(&mut app, "alice".to_owned());
            settle(&mut app).await;
            assert_eq!(app.cursor.column, 0);

            app::dispatch_select(&mut app, "bob", 0);
            settle(&mut app).await;
            assert_eq!(app.cursor.column, 1);
            assert_eq!(app.cursor.row, 0);
        })
        .await;
}

// --- Select: sibling switch ---

#[tokio::test]
async fn switching_sibling_refetches_and_replaces_deeper_columns() {
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let fetcher = FakeFetcher::new(&[
                ("alice", &["bob", "carol"]),
                ("bob", &["dave"]),
                ("carol", &["erin", "frank"]),
            ]);
            let mut app = test_app(fetcher.clone());
            app::dispatch_start(&mut app, "alice".to_owned());
            settle(&mut app).await;
            app::dispatch_select(&mut app, "bob", 0);
            settle(&mut app).await;

            // carol is a cache miss: a fresh fetch replaces column 1 wholesale.
            app::dispatch_select(&mut app, "carol", 0);
            settle(&mut app).await;

            assert_eq!(fetcher.calls_for("carol"), 1);
            assert_eq!(path_names(&app), vec!["alice", "carol"]);

            let state = app.state.as_ref().unwrap();
            let views = column_views(&state.path, &state.cache);
            let second = views[1].entries.as_ref().unwrap();
            let names: Vec<&str> = second.iter().map(|e| e.follower.username.as_str()).collect();
            assert_eq!(names, vec!["erin", "frank"], "bob's column is gone");

            // bob stays cached even though his column is no longer shown.
            assert!(state.cache.contains("bob"));
        })
        .await;
}

// --- Select: cache hit / memoization ---

#[tokio::test]
async fn revisiting_a_cached_selection_renders_without_a_fetch() {
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let fetcher = FakeFetcher::new(&[
                ("alice", &["bob", "carol"]),
                ("bob", &["dave"]),
                ("carol", &[]),
            ]);
            let mut app = test_app(fetcher.clone());
            app::dispatch_start(&mut app, "alice".to_owned());
            settle(&mut app).await;
            app::dispatch_select(&mut app, "bob", 0);
            settle(&mut app).await;
            app::dispatch_select(&mut app, "carol", 0);
            settle(&mut app).await;

            // Re-click bob: the render is immediate, no settle needed.
            app::dispatch_select(&mut app, "bob", 0);
            assert_eq!(path_names(&app), vec!["alice", "bob"]);

            let state = app.state.as_ref().unwrap();
            let views = column_views(&state.path, &state.cache);
            let names: Vec<&str> = views[1]
                .entries
                .as_ref()
                .unwrap()
                .iter()
                .map(|e| e.follower.username.as_str())
                .collect();
            assert_eq!(names, vec!["dave"], "previously cached list is reused");
            assert_eq!(fetcher.calls_for("bob"), 1, "memoization hit on re-selection");
        })
        .await;
}

#[tokio::test]
async fn each_username_is_fetched_at_most_once_across_any_sequence() {
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let fetcher = FakeFetcher::new(&[
                ("alice", &["bob", "carol"]),
                ("bob", &["carol", "dave"]),
                ("carol", &[]),
                ("dave", &[]),
            ]);
            let mut app = test_app(fetcher.clone());
            app::dispatch_start(&mut app, "alice".to_owned());
            settle(&mut app).await;

            // Bounce around, revisiting the same accounts via different paths.
            for _ in 0..3 {
                app::dispatch_select(&mut app, "bob", 0);
                settle(&mut app).await;
                app::dispatch_select(&mut app, "carol", 1);
                settle(&mut app).await;
                app::dispatch_select(&mut app, "carol", 0);
                settle(&mut app).await;
                app::dispatch_select(&mut app, "dave", 1);
                settle(&mut app).await;
            }

            for username in ["alice", "bob", "carol", "dave"] {
                assert_eq!(fetcher.calls_for(username), 1, "{username} fetched more than once");
            }
            assert_eq!(fetcher.total_calls(), 4);
        })
        .await;
}

// --- Path truncation ---

#[tokio::test]
async fn selecting_in_an_earlier_column_truncates_the_path() {
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let fetcher = FakeFetcher::new(&[
                ("alice", &["bob"]),
                ("bob", &["carol"]),
                ("carol", &["dave"]),
                ("dave", &[]),
            ]);
            let mut app = test_app(fetcher);
            app::dispatch_start(&mut app, "alice".to_owned());
            settle(&mut app).await;
            app::dispatch_select(&mut app, "bob", 0);
            settle(&mut app).await;
            app::dispatch_select(&mut app, "carol", 1);
            settle(&mut app).await;
            app::dispatch_select(&mut app, "dave", 2);
            settle(&mut app).await;
            assert_eq!(path_names(&app), vec!["alice", "bob", "carol", "dave"]);

            // Selecting bob again in column 0 discards everything deeper.
            app::dispatch_select(&mut app, "bob", 0);
            assert_eq!(path_names(&app), vec!["alice", "bob"]);
        })
        .await;
}
