// SPDX-License-Identifier: MPL-2.0
use iced_folio::error::{FetchError, LOAD_FAILED_MESSAGE};
use iced_folio::projects::{self, ProjectId, ProjectRecord, ProjectSource};
use iced_folio::ui::projects::{card, modal, section, Message, Settings, State};
use iced_folio::ui::state::{CloseDelay, PageScroll};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tempfile::tempdir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const TWO_PROJECTS: &str = r#"[
    {"id": 1, "name": "One", "description": "first",
     "images": [{"url": "a"}, {"url": "b"}, {"url": "c"}],
     "technology": ["Rust"], "keyFeatures": ["fast"]},
    {"id": "two", "name": "Two", "description": "second", "images": []}
]"#;

/// Answers one connection per entry in `responses`, in order.
async fn serve(responses: Vec<(u16, &'static str)>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local listener");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        for (status, body) in responses {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut buf = vec![0_u8; 8192];
            let mut read = 0;
            loop {
                let n = socket.read(&mut buf[read..]).await.expect("read request");
                read += n;
                if n == 0 || buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let reason = if status == 200 { "OK" } else { "Internal Server Error" };
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket
                .write_all(response.as_bytes())
                .await
                .expect("write response");
            let _ = socket.shutdown().await;
        }
    });

    addr
}

fn settings_for(source: ProjectSource) -> Settings {
    Settings {
        source,
        ..Settings::default()
    }
}

fn record(json: &str) -> ProjectRecord {
    serde_json::from_str(json).expect("valid record")
}

fn gallery(n: usize) -> Arc<ProjectRecord> {
    let images: Vec<String> = (0..n).map(|i| format!(r#"{{"url": "img-{i}"}}"#)).collect();
    Arc::new(record(&format!(
        r#"{{"id": 7, "name": "Gallery", "description": "d", "images": [{}]}}"#,
        images.join(",")
    )))
}

#[tokio::test]
async fn http_500_then_retry_reaches_ready_list() {
    let addr = serve(vec![(500, "oops"), (200, TWO_PROJECTS)]).await;
    let source = ProjectSource::Http(format!("http://{addr}/projects.json"));

    let (mut section, _task) = State::mount(settings_for(source.clone()), PageScroll::new());

    let first = section.pending_request().expect("loading after mount");
    let result = projects::load(source.clone()).await;
    assert_eq!(result, Err(FetchError::Status(500)));
    section.update(Message::Loaded(first, result));
    assert_eq!(section.error(), Some(LOAD_FAILED_MESSAGE));
    assert!(section.projects().is_empty());

    section.update(Message::Retry);
    let second = section.pending_request().expect("loading after retry");
    let result = projects::load(source).await;
    section.update(Message::Loaded(second, result));

    assert!(section.error().is_none());
    assert!(matches!(section.load_state(), section::Load::Ready { .. }));
    let ids: Vec<_> = section.projects().iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids, vec![ProjectId::from(1), ProjectId::from("two")]);
}

#[tokio::test]
async fn malformed_body_is_a_fetch_failure() {
    let addr = serve(vec![(200, "{\"not\": \"an array\"}")]).await;
    let source = ProjectSource::Http(format!("http://{addr}/"));

    let result = projects::load(source).await;
    assert!(matches!(result, Err(FetchError::Decode(_))));
}

#[tokio::test]
async fn file_and_bundled_sources_load() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("projects.json");
    std::fs::write(&path, TWO_PROJECTS).expect("write projects");

    let from_file = projects::load(ProjectSource::File(path)).await.expect("file loads");
    assert_eq!(from_file.len(), 2);

    let bundled = projects::load(ProjectSource::Bundled).await.expect("bundled loads");
    assert!(!bundled.is_empty());
}

#[tokio::test]
async fn missing_file_reports_io_error() {
    let dir = tempdir().expect("temp dir");
    let result = projects::load(ProjectSource::File(dir.path().join("absent.json"))).await;
    assert!(matches!(result, Err(FetchError::Io(_))));
}

fn ready_section(page: &PageScroll) -> State {
    let (mut section, _task) = State::mount(Settings::default(), page.clone());
    let request = section.pending_request().expect("loading");
    let records: Vec<ProjectRecord> = serde_json::from_str(TWO_PROJECTS).expect("fixture");
    section.update(Message::Loaded(request, Ok(records)));
    section
}

#[test]
fn card_autoplay_and_indicator_scenario() {
    let page = PageScroll::new();
    let mut section = ready_section(&page);
    let id = ProjectId::from(1);

    section.update(Message::Card(id.clone(), card::Message::Tick));
    section.update(Message::Card(id.clone(), card::Message::Tick));
    assert_eq!(section.card(&id).map(card::State::current_image), Some(2));

    section.update(Message::Card(id.clone(), card::Message::SelectImage(0)));
    assert_eq!(section.card(&id).map(card::State::current_image), Some(0));
    assert!(section.modal().is_none(), "indicator click must not open details");
}

#[test]
fn hovered_card_ignores_ticks() {
    let page = PageScroll::new();
    let mut section = ready_section(&page);
    let id = ProjectId::from(1);

    section.update(Message::Card(id.clone(), card::Message::HoverChanged(true)));
    for _ in 0..5 {
        section.update(Message::Card(id.clone(), card::Message::Tick));
    }
    assert_eq!(section.card(&id).map(card::State::current_image), Some(0));
}

#[test]
fn single_image_cards_have_no_autoplay() {
    let page = PageScroll::new();
    let section = ready_section(&page);
    let card = section.card(&ProjectId::from("two")).expect("card");
    assert!(!card.wants_autoplay());
}

#[test]
fn at_most_one_modal_and_latest_request_wins() {
    let page = PageScroll::new();
    let mut section = ready_section(&page);

    section.update(Message::Card(ProjectId::from(1), card::Message::ViewDetails));
    section.update(Message::Card(ProjectId::from("two"), card::Message::ViewDetails));

    assert_eq!(section.selected(), Some(&ProjectId::from("two")));
    assert!(page.is_locked());
}

#[test]
fn modal_close_fires_once_after_delay_and_restores_scroll() {
    let page = PageScroll::new();
    let mut section = ready_section(&page);
    section.update(Message::Card(ProjectId::from(1), card::Message::ViewDetails));
    let id = section.modal().expect("modal mounted").id();

    section.update(Message::Modal(modal::Message::RequestClose));
    section.update(Message::Modal(modal::Message::RequestClose));
    let modal = section.modal().expect("still mounted during exit");
    assert!(!modal.is_open());
    assert!(page.is_locked());

    section.update(Message::Modal(modal::Message::CloseDelayElapsed(id)));
    assert!(section.modal().is_none());
    assert!(section.selected().is_none());
    assert!(!page.is_locked());

    // A late duplicate tick has nothing left to close.
    section.update(Message::Modal(modal::Message::CloseDelayElapsed(id)));
    assert!(section.modal().is_none());
}

#[test]
fn modal_navigation_cycles_with_period_n() {
    for n in 2..=6 {
        let page = PageScroll::new();
        let (mut modal, _task) = modal::State::new(gallery(n), &page, CloseDelay::default());

        let mut seen = Vec::new();
        for _ in 0..n {
            seen.push(modal.current_image());
            modal.update(modal::Message::NextImage);
        }
        assert_eq!(seen, (0..n).collect::<Vec<_>>());
        assert_eq!(modal.current_image(), 0);

        modal.update(modal::Message::NextImage);
        modal.update(modal::Message::PrevImage);
        assert_eq!(modal.current_image(), 0);
        modal.update(modal::Message::PrevImage);
        assert_eq!(modal.current_image(), n - 1);
    }
}

#[test]
fn modal_navigation_is_noop_for_zero_or_one_image() {
    for n in 0..=1 {
        let page = PageScroll::new();
        let (mut modal, _task) = modal::State::new(gallery(n), &page, CloseDelay::default());
        modal.update(modal::Message::NextImage);
        modal.update(modal::Message::PrevImage);
        assert_eq!(modal.current_image(), 0);
        modal.update(modal::Message::ToggleFullscreen);
        assert!(!modal.is_fullscreen());
    }
}

#[test]
fn metrics_tab_without_achievements_renders() {
    let page = PageScroll::new();
    let mut section = ready_section(&page);
    section.update(Message::Card(ProjectId::from("two"), card::Message::ViewDetails));
    section.update(Message::Modal(modal::Message::SelectTab(modal::Tab::Metrics)));

    assert_eq!(section.modal().map(modal::State::active_tab), Some(modal::Tab::Metrics));
    assert!(section.modal_view(Instant::now()).is_some());
}
