//! Integration tests for elbi
//!
//! These tests drive the views and the application shell through the public
//! API with a canned fetcher, a manual clock and real or in-memory storage.

use std::collections::HashMap;
use std::sync::{Arc, Barrier, Mutex};
use std::thread;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use serde_json::{Value, json};

use elbi::api::error::Result as ApiResult;
use elbi::api::{ApiError, Endpoints, Fetcher};
use elbi::config::AppConfig;
use elbi::query::{CacheSettings, QueryClient};
use elbi::storage::{KeyValueStore, MemoryStore, PAGE_KEY, SEARCH_TERM_KEY, SledStore};
use elbi::timer::ManualClock;
use elbi::ui::views::{DetailView, SharedStore, ViewContext, ViewState};
use elbi::ui::{App, Route};

const WAIT: Duration = Duration::from_secs(5);
const DEBOUNCE: Duration = Duration::from_millis(500);

/// Fetcher serving fixed bodies and counting calls per URL
#[derive(Default)]
struct CannedFetcher {
    bodies: HashMap<String, Value>,
    latency: Duration,
    calls: Mutex<HashMap<String, usize>>,
}

impl CannedFetcher {
    fn with(mut self, url: String, body: Value) -> Self {
        self.bodies.insert(url, body);
        self
    }

    fn calls(&self, url: &str) -> usize {
        self.calls.lock().unwrap().get(url).copied().unwrap_or(0)
    }
}

impl Fetcher for CannedFetcher {
    fn get_json(&self, url: &str) -> ApiResult<Value> {
        *self.calls.lock().unwrap().entry(url.to_string()).or_default() += 1;
        thread::sleep(self.latency);
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| ApiError::request_failed(url, "HTTP 500"))
    }
}

fn endpoints() -> Endpoints {
    let config = AppConfig {
        api_key: "token".into(),
        movie_list_url: "https://api.example.test/3/movie/popular".into(),
        movie_search_url: "https://api.example.test/3/search/movie".into(),
        movie_detail_url: "https://api.example.test/3/movie/".into(),
        image_url: "https://img.example.test/t/p/original".into(),
        ..AppConfig::default()
    };
    Endpoints::from_config(&config).unwrap()
}

fn listing(page: u32, total_pages: u32, titles: &[&str]) -> Value {
    let results: Vec<Value> = titles
        .iter()
        .enumerate()
        .map(|(i, title)| json!({"id": u64::from(page) * 100 + i as u64 + 1, "title": title}))
        .collect();
    json!({"page": page, "results": results, "total_pages": total_pages, "total_results": 0})
}

fn context(
    fetcher: Arc<CannedFetcher>,
    store: SharedStore,
    clock: &ManualClock,
) -> ViewContext<ManualClock> {
    ViewContext {
        client: QueryClient::new(fetcher, CacheSettings::default()),
        endpoints: endpoints(),
        store,
        clock: clock.clone(),
        debounce: DEBOUNCE,
    }
}

fn press(app: &mut App<ManualClock>, code: KeyCode) {
    app.handle_key(&KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App<ManualClock>, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn screen(app: &App<ManualClock>) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 50)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    text(terminal.backend().buffer())
}

fn text(buffer: &Buffer) -> String {
    let width = usize::from(buffer.area.width);
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_detail_failure_renders_error_state() {
    let e = endpoints();
    let fetcher = Arc::new(CannedFetcher::default());
    let clock = ManualClock::new();
    let ctx = context(fetcher.clone(), Arc::new(MemoryStore::new()), &clock);

    let mut view = DetailView::mount(27205, &ctx);
    view.settle(WAIT);

    assert_eq!(view.state(), ViewState::Error);
    assert_eq!(fetcher.calls(&e.movie(27205)), 1);

    let mut app = App::new(ctx, Route::Detail(27205));
    app.settle(WAIT);
    let shown = screen(&app);
    assert!(shown.contains("Sorry"));
    assert!(shown.contains("An error occurred in the application"));
    assert!(!shown.contains("Loading..."));
    assert!(!shown.contains("Overview"));
}

#[test]
fn test_concurrent_identical_requests_make_one_call() {
    let e = endpoints();
    let url = e.popular(1);
    let fetcher = Arc::new(CannedFetcher {
        latency: Duration::from_millis(150),
        ..CannedFetcher::default()
    }
    .with(url.clone(), listing(1, 1, &["Heat"])));
    let client = QueryClient::new(fetcher.clone(), CacheSettings::default());
    let barrier = Arc::new(Barrier::new(3));

    let handles: Vec<_> = (0..3)
        .map(|_| {
            let client = client.clone();
            let barrier = Arc::clone(&barrier);
            let url = url.clone();
            thread::spawn(move || {
                barrier.wait();
                client.fetch(&url).is_ok()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
    assert_eq!(fetcher.calls(&url), 1);
}

#[test]
fn test_search_open_detail_and_return() {
    let e = endpoints();
    let fetcher = Arc::new(
        CannedFetcher::default()
            .with(e.popular(1), listing(1, 10, &["Popular One"]))
            .with(e.search("dune", 1), listing(1, 2, &["Dune", "Dune: Part Two"]))
            .with(
                e.movie(102),
                json!({"id": 102, "title": "Dune: Part Two", "runtime": 166}),
            ),
    );
    let clock = ManualClock::new();
    let store = MemoryStore::new();
    let mut app = App::new(context(fetcher.clone(), Arc::new(store.clone()), &clock), Route::List);
    app.settle(WAIT);
    assert!(screen(&app).contains("Popular One"));

    type_text(&mut app, "dune");
    clock.advance(Duration::from_millis(499));
    app.sync();
    assert_eq!(fetcher.calls(&e.search("dune", 1)), 0);

    clock.advance(Duration::from_millis(1));
    app.sync();
    app.settle(WAIT);
    assert!(screen(&app).contains("Dune: Part Two"));

    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.route(), Route::Detail(102));
    app.settle(WAIT);
    let shown = screen(&app);
    assert!(shown.contains("166 Minutes"));
    assert!(shown.contains("Back To Home Page"));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.route(), Route::List);
    app.settle(WAIT);
    assert!(screen(&app).contains("Dune: Part Two"));
    assert_eq!(fetcher.calls(&e.search("dune", 1)), 1);
    assert_eq!(store.get(SEARCH_TERM_KEY).unwrap().as_deref(), Some("dune"));
}

#[test]
fn test_leaving_before_debounce_never_writes_storage() {
    let e = endpoints();
    let fetcher = Arc::new(
        CannedFetcher::default()
            .with(e.popular(1), listing(1, 1, &["Alien"]))
            .with(e.movie(101), json!({"id": 101, "title": "Alien"})),
    );
    let clock = ManualClock::new();
    let store = MemoryStore::new();
    let mut app = App::new(context(fetcher, Arc::new(store.clone()), &clock), Route::List);
    app.settle(WAIT);

    type_text(&mut app, "ali");
    press(&mut app, KeyCode::Enter);
    clock.advance(Duration::from_secs(2));
    app.sync();

    assert!(store.is_empty());
}

#[test]
fn test_search_state_restored_from_sled() {
    let dir = tempfile::tempdir().unwrap();
    let sled = Arc::new(SledStore::open(dir.path().join("storage")).unwrap());
    let e = endpoints();
    let fetcher = Arc::new(
        CannedFetcher::default()
            .with(e.popular(1), listing(1, 1, &["Popular"]))
            .with(e.search("one piece", 1), listing(1, 3, &["One Piece Film: Red"]))
            .with(e.search("one piece", 2), listing(2, 3, &["One Piece: Stampede"])),
    );
    let clock = ManualClock::new();

    {
        let mut app = App::new(context(fetcher.clone(), sled.clone(), &clock), Route::List);
        app.settle(WAIT);
        type_text(&mut app, "one piece");
        clock.advance(DEBOUNCE);
        app.sync();
        app.settle(WAIT);
        press(&mut app, KeyCode::PageDown);
        app.settle(WAIT);
    }
    assert_eq!(sled.get(PAGE_KEY).unwrap().as_deref(), Some("2"));

    let mut app = App::new(context(fetcher, sled.clone(), &clock), Route::List);
    app.settle(WAIT);
    let shown = screen(&app);
    assert!(shown.contains("one piece"));
    assert!(shown.contains("One Piece: Stampede"));
    assert!(shown.contains("Page 2 of 3"));
}
