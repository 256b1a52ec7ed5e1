use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::modules::banners::adapters::outbound::banner_store_in_memory::InMemoryBannerStore;
use crate::modules::banners::core::banner::Banner;
use crate::shared::infrastructure::image_sink::filesystem::FilesystemImageSink;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::multipart::MultipartBody;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn save(id: &str, title: &str, file_name: &str, content: &[u8]) -> Request<Body> {
    let body = MultipartBody::new()
        .text("id", id)
        .text("title", title)
        .text("content", "Limited offer")
        .text("button", "Open")
        .text("link", "https://shop.example")
        .file("image", file_name, content)
        .build();
    Request::post("/banners.save")
        .header("content-type", MultipartBody::content_type())
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn creates_updates_and_removes_a_banner_with_its_image() {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::new(
        Arc::new(InMemoryBannerStore::new()),
        Arc::new(FilesystemImageSink::new(dir.path())),
        10 * 1024 * 1024,
    );
    let app = router(state, dir.path());

    let (status, created) = send(&app, save("0", "Sale", "sale.jpg", b"jpeg-1")).await;
    assert_eq!(status, StatusCode::OK);
    let created: Banner = serde_json::from_value(created).unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.title, "Sale");
    assert_eq!(created.image, "1.jpg");
    assert_eq!(std::fs::read(dir.path().join("1.jpg")).unwrap(), b"jpeg-1");

    let (status, updated) = send(&app, save("1", "Sale2", "sale.png", b"png-2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Sale2");
    assert_eq!(updated["image"], "1.png");
    assert!(!dir.path().join("1.jpg").exists());

    let (status, loaded) = send(&app, get("/banners.getById?id=1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(loaded, updated);

    let response = app.clone().oneshot(get("/web/banners/1.png")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (status, removed) = send(&app, get("/banners.removeById?id=1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(removed, updated);
    assert!(!dir.path().join("1.png").exists());

    let (status, _) = send(&app, get("/banners.getById?id=1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, listed) = send(&app, get("/banners.getAll")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, serde_json::json!([]));
}

#[tokio::test]
async fn never_reassigns_the_id_of_a_removed_banner() {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::new(
        Arc::new(InMemoryBannerStore::new()),
        Arc::new(FilesystemImageSink::new(dir.path())),
        1024,
    );
    let app = router(state, dir.path());

    send(&app, save("0", "first", "a.png", b"a")).await;
    send(&app, get("/banners.removeById?id=1")).await;
    let (status, created) = send(&app, save("", "second", "b.png", b"b")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], 2);
    assert_eq!(created["image"], "2.png");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn keeps_every_banner_saved_concurrently() {
    const SAVES: usize = 32;
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::new(
        Arc::new(InMemoryBannerStore::new()),
        Arc::new(FilesystemImageSink::new(dir.path())),
        1024,
    );
    let app = router(state, dir.path());

    let tasks: Vec<_> = (0..SAVES)
        .map(|n| {
            let app = app.clone();
            tokio::spawn(async move {
                send(&app, save("0", &format!("banner-{n}"), "x.png", b"x")).await
            })
        })
        .collect();
    for task in tasks {
        let (status, _) = task.await.unwrap();
        assert_eq!(status, StatusCode::OK);
    }

    let (_, listed) = send(&app, get("/banners.getAll")).await;
    let mut ids: Vec<i64> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|banner| banner["id"].as_i64().unwrap())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=SAVES as i64).collect::<Vec<_>>());

    let stored = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(stored, SAVES);
}
