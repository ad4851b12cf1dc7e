//! Integration tests for the qBittorrent download client.

use aniforge::downloads::{AddTorrent, DownloadError, QBittorrentClient};
use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/v2/auth/login"))
        .and(body_string_contains("username=admin"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Ok."))
        .mount(server)
        .await;
}

#[tokio::test]
async fn connect_logs_in_and_reads_version() {
    let server = MockServer::start().await;
    mock_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/v2/app/version"))
        .respond_with(ResponseTemplate::new(200).set_body_string("v4.6.3"))
        .mount(&server)
        .await;

    let client = QBittorrentClient::connect(&server.uri(), "admin", "adminadmin").await;
    assert!(client.is_ok());
}

#[tokio::test]
async fn bad_credentials_are_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Fails."))
        .mount(&server)
        .await;

    let err = QBittorrentClient::connect(&server.uri(), "admin", "wrong")
        .await
        .err()
        .expect("connect must fail");
    assert_matches!(err, DownloadError::Unauthorized);
}

#[tokio::test]
async fn list_tagged_queries_joined_tags() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/torrents/info"))
        .and(query_param("tag", "aniforge,Frieren,S02E15"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "[SubsPlease] Frieren S02E15", "hash": "abc123"}
        ])))
        .mount(&server)
        .await;

    let client = QBittorrentClient::new(&server.uri(), "admin", "adminadmin");
    let torrents = client
        .list_tagged(&["aniforge", "Frieren", "S02E15"])
        .await
        .unwrap();
    assert_eq!(torrents.len(), 1);
    assert_eq!(torrents[0].hash, "abc123");
}

#[tokio::test]
async fn add_posts_urls_path_category_and_tags() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/torrents/add"))
        .and(body_string_contains("urls="))
        .and(body_string_contains("category=anime"))
        .and(body_string_contains("S02E15"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = QBittorrentClient::new(&server.uri(), "admin", "adminadmin");
    client
        .add(&AddTorrent {
            urls: vec!["https://nyaa.si/download/1.torrent".to_string()],
            save_path: "/downloads/anime/Frieren".to_string(),
            category: "anime".to_string(),
            tags: vec![
                "aniforge".to_string(),
                "Frieren".to_string(),
                "S02E15".to_string(),
            ],
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn expired_session_relogs_in_once() {
    let server = MockServer::start().await;
    mock_login(&server).await;
    // First request is rejected, the retry after re-login succeeds.
    Mock::given(method("GET"))
        .and(path("/api/v2/torrents/info"))
        .respond_with(ResponseTemplate::new(403))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/torrents/info"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .mount(&server)
        .await;

    let client = QBittorrentClient::new(&server.uri(), "admin", "adminadmin");
    let torrents = client.list_tagged(&["aniforge"]).await.unwrap();
    assert!(torrents.is_empty());
}

#[tokio::test]
async fn persistent_rejection_is_unauthorized() {
    let server = MockServer::start().await;
    mock_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/v2/torrents/info"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = QBittorrentClient::new(&server.uri(), "admin", "adminadmin");
    let err = client.list_tagged(&["aniforge"]).await.unwrap_err();
    assert_matches!(err, DownloadError::Unauthorized);
}
