//! End-to-end discovery pass over mocked collaborators.

mod support;

use aniforge::animelist::KitsuClient;
use aniforge::config::DiscoveryConfig;
use aniforge::discovery::Controller;
use aniforge::downloads::QBittorrentClient;
use aniforge::search::NyaaClient;
use serde_json::json;
use support::{mock_kitsu, mock_nyaa, FEED_WITH_BATCH_FIRST};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn discovery_config() -> DiscoveryConfig {
    DiscoveryConfig {
        sources: vec!["SubsPlease".to_string()],
        qualities: vec!["1080p".to_string()],
        create_show_folder: true,
        ..DiscoveryConfig::default()
    }
}

async fn controller(kitsu: &MockServer, nyaa: &MockServer, qb: &MockServer) -> Controller {
    let animelist = KitsuClient::connect(&kitsu.uri(), "someone").await.unwrap();
    Controller::new(
        discovery_config(),
        Box::new(animelist),
        NyaaClient::new(&nyaa.uri()),
        QBittorrentClient::new(&qb.uri(), "admin", "adminadmin"),
    )
}

#[tokio::test]
async fn pass_adds_first_eligible_new_release() {
    let kitsu = MockServer::start().await;
    let nyaa = MockServer::start().await;
    let qb = MockServer::start().await;

    mock_kitsu(&kitsu).await;
    mock_nyaa(&nyaa, "Frieren (SubsPlease) (1080p)", FEED_WITH_BATCH_FIRST).await;

    // Nothing downloaded yet.
    Mock::given(method("GET"))
        .and(path("/api/v2/torrents/info"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .expect(1)
        .mount(&qb)
        .await;
    // The batch is skipped (entry is airing); episode 29 is added with
    // the three-part tag key and the per-show save path.
    Mock::given(method("POST"))
        .and(path("/api/v2/torrents/add"))
        .and(body_string_contains("S00E29"))
        .and(body_string_contains("aniforge"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&qb)
        .await;

    let controller = controller(&kitsu, &nyaa, &qb).await;
    controller.run_once().await.unwrap();
}

#[tokio::test]
async fn pass_skips_release_that_already_exists() {
    let kitsu = MockServer::start().await;
    let nyaa = MockServer::start().await;
    let qb = MockServer::start().await;

    mock_kitsu(&kitsu).await;
    mock_nyaa(&nyaa, "Frieren (SubsPlease) (1080p)", FEED_WITH_BATCH_FIRST).await;

    Mock::given(method("GET"))
        .and(path("/api/v2/torrents/info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "[SubsPlease] Frieren - 29 (1080p)", "hash": "abc123"}
        ])))
        .expect(1)
        .mount(&qb)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v2/torrents/add"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&qb)
        .await;

    let controller = controller(&kitsu, &nyaa, &qb).await;
    controller.run_once().await.unwrap();
}

#[tokio::test]
async fn pass_survives_search_failure_for_one_entry() {
    let kitsu = MockServer::start().await;
    let nyaa = MockServer::start().await;
    let qb = MockServer::start().await;

    mock_kitsu(&kitsu).await;
    // No nyaa mock: the search returns 404 and the entry is skipped.

    let controller = controller(&kitsu, &nyaa, &qb).await;
    assert!(controller.run_once().await.is_ok());
}
