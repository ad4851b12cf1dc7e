//! Shared wiremock fixtures for the discovery tests.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const FEED_WITH_BATCH_FIRST: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<rss version="2.0" xmlns:nyaa="https://nyaa.si/xmlns/nyaa">
  <channel>
    <title>Nyaa - Home</title>
    <item>
      <title>[EMBER] Frieren S01 1080p WEBRip</title>
      <link>https://nyaa.si/download/1.torrent</link>
    </item>
    <item>
      <title>[SubsPlease] Frieren - 29 (1080p)</title>
      <link>https://nyaa.si/download/2.torrent</link>
    </item>
  </channel>
</rss>"#;

const USER_BODY: &str = r#"{"data":[{"id":"77","type":"users"}]}"#;

const LIBRARY_BODY: &str = r#"{
  "data": [
    {
      "id": "1",
      "type": "libraryEntries",
      "attributes": { "status": "current" },
      "relationships": { "anime": { "data": { "type": "anime", "id": "41024" } } }
    }
  ],
  "included": [
    {
      "id": "41024",
      "type": "anime",
      "attributes": {
        "canonicalTitle": "Frieren: Beyond Journey's End",
        "status": "current"
      }
    }
  ]
}"#;

/// One user with one currently-airing show on the watch list.
pub async fn mock_kitsu(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(USER_BODY, "application/vnd.api+json"))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/library-entries"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(LIBRARY_BODY, "application/vnd.api+json"),
        )
        .mount(server)
        .await;
}

/// An RSS response for the exact query the controller should build.
pub async fn mock_nyaa(server: &MockServer, expected_query: &str, feed: &str) {
    Mock::given(method("GET"))
        .and(query_param("page", "rss"))
        .and(query_param("q", expected_query))
        .respond_with(ResponseTemplate::new(200).set_body_raw(feed.to_string(), "application/rss+xml"))
        .mount(server)
        .await;
}
