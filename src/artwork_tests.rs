//! Tests for the artwork client.

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::error::WtpError;

const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

// ── pad_id ───────────────────────────────────────────────────────────

#[test]
fn pad_id_two_digits() {
    assert_eq!(pad_id("25").unwrap(), "025");
}

#[test]
fn pad_id_one_digit() {
    assert_eq!(pad_id("7").unwrap(), "007");
}

#[test]
fn pad_id_already_wide() {
    assert_eq!(pad_id("150").unwrap(), "150");
    assert_eq!(pad_id("1010").unwrap(), "1010");
}

#[test]
fn pad_id_keeps_existing_zeros() {
    assert_eq!(pad_id("025").unwrap(), "025");
    assert_eq!(pad_id("0").unwrap(), "000");
}

#[test]
fn pad_id_rejects_empty() {
    assert!(matches!(pad_id(""), Err(FetchError::MalformedId(_))));
}

#[test]
fn pad_id_rejects_non_numeric() {
    assert!(matches!(pad_id("25a"), Err(FetchError::MalformedId(_))));
    assert!(matches!(pad_id(" 25"), Err(FetchError::MalformedId(_))));
    assert!(matches!(pad_id("-1"), Err(FetchError::MalformedId(_))));
}

// ── artwork_url ──────────────────────────────────────────────────────

#[test]
fn artwork_url_uses_padded_id() {
    assert_eq!(
        artwork_url(crate::config::DEFAULT_ARTWORK_BASE_URL, "25").unwrap(),
        "https://assets.pokemon.com/assets/cms2/img/pokedex/full/025.png"
    );
}

#[test]
fn artwork_url_tolerates_trailing_slash() {
    assert_eq!(
        artwork_url("http://localhost/art/", "7").unwrap(),
        "http://localhost/art/007.png"
    );
}

// ── fetch_artwork_from ───────────────────────────────────────────────

#[tokio::test]
async fn fetch_artwork_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/full/025.png"))
        .and(header("User-Agent", USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(PNG_MAGIC.to_vec()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let base_url = format!("{}/full", mock_server.uri());
    let result = tokio::task::spawn_blocking(move || fetch_artwork_from(&base_url, "25"))
        .await
        .unwrap();

    assert_eq!(result.unwrap(), PNG_MAGIC.to_vec());
}

#[tokio::test]
async fn fetch_artwork_404_returns_http_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/999.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let result = tokio::task::spawn_blocking(move || fetch_artwork_from(&base_url, "999"))
        .await
        .unwrap();

    match result {
        Err(WtpError::Fetch(FetchError::HttpStatus { url, status })) => {
            assert!(url.ends_with("/999.png"));
            assert_eq!(status.as_u16(), 404);
        }
        other => panic!("Expected HttpStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_artwork_204_returns_http_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/025.png"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let result = tokio::task::spawn_blocking(move || fetch_artwork_from(&base_url, "25"))
        .await
        .unwrap();

    match result {
        Err(WtpError::Fetch(FetchError::HttpStatus { status, .. })) => {
            assert_eq!(status.as_u16(), 204);
        }
        other => panic!("Expected HttpStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_artwork_malformed_id_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let result = tokio::task::spawn_blocking(move || fetch_artwork_from(&base_url, "abc"))
        .await
        .unwrap();

    assert!(matches!(
        result,
        Err(WtpError::Fetch(FetchError::MalformedId(_)))
    ));
}

// ── HttpArtwork ──────────────────────────────────────────────────────

#[tokio::test]
async fn http_artwork_stages_bytes_in_png_tempfile() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/150.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(PNG_MAGIC.to_vec()))
        .mount(&mock_server)
        .await;

    let source = HttpArtwork::new(mock_server.uri());
    let scratch = tokio::task::spawn_blocking(move || source.fetch("150"))
        .await
        .unwrap()
        .unwrap();

    assert!(scratch.path().to_string_lossy().ends_with(".png"));
    assert_eq!(std::fs::read(scratch.path()).unwrap(), PNG_MAGIC.to_vec());

    let staged = scratch.path().to_path_buf();
    drop(scratch);
    assert!(!staged.exists(), "scratch file should be removed on drop");
}

#[test]
fn http_artwork_from_config() {
    let config = crate::config::Config::new("/cache").with_artwork_base_url("http://x/art");
    assert_eq!(HttpArtwork::from_config(&config).base_url(), "http://x/art");
}
