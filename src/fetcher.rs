//! HTTP page fetching.
//!
//! One [`reqwest::Client`] is built per [`Fetcher`] and reused for every
//! source. Requests carry a fixed browser User-Agent and a hard timeout;
//! there are no retries, so a single failure fails the source for this run.
//!
//! Bodies are kept as raw bytes; [`Page::text`] decodes them using the
//! charset the server or the document itself declares.

use crate::error::FetchError;
use encoding_rs::{Encoding, UTF_8};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, instrument};

/// User-Agent sent with every request.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Upper bound on a single request, connect through body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// How far into the body a `<meta>` charset declaration is looked for.
const META_SNIFF_BYTES: usize = 1024;

/// A downloaded page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub body: Vec<u8>,
    /// Raw `Content-Type` header, if the server sent one.
    pub content_type: Option<String>,
}

impl Page {
    /// Decode the body to text.
    ///
    /// A byte order mark wins, then the `Content-Type` charset, then a
    /// `<meta>` charset near the top of the document, then UTF-8.
    /// Undecodable bytes become U+FFFD.
    pub fn text(&self) -> String {
        let declared = self
            .content_type
            .as_deref()
            .and_then(charset_param)
            .map(str::to_string)
            .or_else(|| meta_charset(&self.body));
        let encoding = declared
            .and_then(|label| Encoding::for_label(label.as_bytes()))
            .unwrap_or(UTF_8);

        let (text, _, _) = encoding.decode(&self.body);
        text.into_owned()
    }
}

/// `charset` parameter of a media type, e.g. `text/html; charset=utf-8`.
fn charset_param(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches(['"', '\'']))
    })
}

/// Charset from `<meta charset=..>` or `<meta http-equiv .. content="..; charset=..">`.
fn meta_charset(body: &[u8]) -> Option<String> {
    let head = &body[..body.len().min(META_SNIFF_BYTES)];
    let head = String::from_utf8_lossy(head).to_ascii_lowercase();

    let mut rest = head.as_str();
    while let Some(start) = rest.find("<meta") {
        let tag = &rest[start..];
        let tag = &tag[..tag.find('>').unwrap_or(tag.len())];
        if let Some(pos) = tag.find("charset=") {
            let value = tag[pos + "charset=".len()..].trim_start_matches(['"', '\'']);
            let end = value
                .find(|c: char| matches!(c, '"' | '\'' | ';' | '/') || c.is_whitespace())
                .unwrap_or(value.len());
            if end > 0 {
                return Some(value[..end].to_string());
            }
        }
        rest = &rest[start + "<meta".len()..];
    }
    None
}

#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    timeout: Duration,
}

impl Fetcher {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .no_proxy()
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, timeout })
    }

    /// GET `url` and return the raw response body with its content type.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Timeout`] if the request exceeds the timeout
    /// - [`FetchError::Status`] for any non-2xx response
    /// - [`FetchError::Request`] for connection and body read failures
    #[instrument(level = "debug", skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<Page, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            debug!(%url, %status, "Non-success response");
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await.map_err(|e| self.classify(url, e))?;
        debug!(%url, bytes = body.len(), ?content_type, "Fetched page");

        Ok(Page {
            body: body.to_vec(),
            content_type,
        })
    }

    fn classify(&self, url: &str, error: reqwest::Error) -> FetchError {
        debug!(%url, error = %error, "Request failed");
        if error.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
                timeout_secs: self.timeout.as_secs(),
            }
        } else {
            FetchError::Request {
                url: url.to_string(),
                cause: error,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_fetch_returns_body_and_sends_user_agent() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/news")
            .match_header("user-agent", USER_AGENT)
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><body>hello</body></html>")
            .expect(1)
            .create_async()
            .await;

        let fetcher = Fetcher::new().unwrap();
        let page = fetcher.fetch(&format!("{}/news", server.url())).await.unwrap();
        assert_eq!(page.body, b"<html><body>hello</body></html>");
        assert_eq!(page.content_type.as_deref(), Some("text/html"));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/world/")
            .with_status(503)
            .with_body("Service Unavailable")
            .create_async()
            .await;

        let fetcher = Fetcher::new().unwrap();
        let err = fetcher
            .fetch(&format!("{}/world/", server.url()))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("503"));
        match err {
            FetchError::Status { status, .. } => assert_eq!(status.as_u16(), 503),
            other => panic!("expected status error, got {other:?}"),
        }

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_silent_server_times_out() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/news", listener.local_addr().unwrap());

        let fetcher = Fetcher::with_timeout(Duration::from_millis(200)).unwrap();
        let err = fetcher.fetch(&url).await.unwrap_err();

        assert!(matches!(err, FetchError::Timeout { .. }), "got {err:?}");
        drop(listener);
    }

    #[tokio::test]
    async fn test_refused_connection_is_request_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let fetcher = Fetcher::new().unwrap();
        let err = fetcher.fetch(&format!("http://{addr}/")).await.unwrap_err();

        assert!(matches!(err, FetchError::Request { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn test_latin1_body_decoded_from_header_charset() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/news")
            .with_status(200)
            .with_header("content-type", "text/html; charset=ISO-8859-1")
            .with_body(b"<h2>\xC9conomie mondiale</h2>".to_vec())
            .create_async()
            .await;

        let fetcher = Fetcher::new().unwrap();
        let page = fetcher.fetch(&format!("{}/news", server.url())).await.unwrap();

        assert_eq!(page.text(), "<h2>Économie mondiale</h2>");
    }

    fn page(body: &[u8], content_type: Option<&str>) -> Page {
        Page {
            body: body.to_vec(),
            content_type: content_type.map(str::to_string),
        }
    }

    #[test]
    fn test_meta_charset_used_without_header_charset() {
        let body = b"<html><head><meta charset=\"iso-8859-1\"></head><p>caf\xE9</p></html>";
        assert!(page(body, Some("text/html")).text().contains("café"));
    }

    #[test]
    fn test_http_equiv_meta_charset() {
        let body = b"<meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1252\"><p>\x93quoted\x94</p>";
        assert!(page(body, None).text().contains("“quoted”"));
    }

    #[test]
    fn test_header_charset_beats_meta() {
        let body = "<meta charset=\"iso-8859-1\"><p>café</p>".as_bytes();
        let text = page(body, Some("text/html; charset=\"utf-8\"")).text();
        assert!(text.contains("café"));
    }

    #[test]
    fn test_undeclared_charset_defaults_to_utf8() {
        let body = "<p>naïve</p>".as_bytes();
        assert_eq!(page(body, None).text(), "<p>naïve</p>");
    }

    #[test]
    fn test_unknown_label_falls_back_to_utf8() {
        let body = "<p>é</p>".as_bytes();
        assert_eq!(page(body, Some("text/html; charset=bogus")).text(), "<p>é</p>");
    }
}
