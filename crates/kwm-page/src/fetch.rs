//! Page retrieval over HTTP or from disk.

use std::{fs, path::Path, time::Duration};

use kwm_config::FetchSettings;
use reqwest::{Url, blocking::Client};
use tracing::{debug, info};

use crate::PageError;

/// Raw HTML of a page and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// Final URL after redirects, or the file path for local pages.
    pub location: String,
    /// Response body.
    pub html: String,
}

/// Fetches a page with a blocking GET.
///
/// Redirects are followed. Network errors and timeouts surface as
/// [`PageError::Fetch`]; any non-2xx response as [`PageError::Status`].
pub fn fetch_page(url: &str, settings: &FetchSettings) -> Result<FetchedPage, PageError> {
    let parsed = validate_url(url)?;

    let client = Client::builder()
        .timeout(Duration::from_secs(settings.timeout_secs))
        .user_agent(settings.user_agent.as_str())
        .build()
        .map_err(|source| PageError::Fetch {
            url: url.to_string(),
            source,
        })?;

    info!(url, timeout_secs = settings.timeout_secs, "fetching page");
    let response = client
        .get(parsed)
        .send()
        .map_err(|source| PageError::Fetch {
            url: url.to_string(),
            source,
        })?;

    let location = response.url().to_string();
    let status = response.status();
    if !status.is_success() {
        return Err(PageError::Status {
            url: location,
            status: status.as_u16(),
        });
    }

    let html = response.text().map_err(|source| PageError::Fetch {
        url: location.clone(),
        source,
    })?;
    debug!(%location, bytes = html.len(), "fetched page");

    Ok(FetchedPage { location, html })
}

/// Reads a page from a local HTML file.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_page_file(path: &Path) -> Result<FetchedPage, PageError> {
    let bytes = fs::read(path).map_err(|source| PageError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read page file");
    Ok(FetchedPage {
        location: path.display().to_string(),
        html: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

/// Parses a URL and requires an http or https scheme.
fn validate_url(url: &str) -> Result<Url, PageError> {
    let parsed = Url::parse(url).map_err(|e| PageError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(PageError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

#[cfg(test)]
mod test {
    use std::{
        io::{Read, Write},
        net::TcpListener,
        thread,
    };

    use super::*;

    /// Serves one canned HTTP response on a local port and returns its base URL.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 4096];
            let mut request = Vec::new();
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{addr}/page")
    }

    #[test]
    fn fetches_successful_page() {
        let url = serve_once("200 OK", "<title>Hello</title>");
        let page = fetch_page(&url, &FetchSettings::default()).unwrap();
        assert_eq!(page.html, "<title>Hello</title>");
        assert_eq!(page.location, url);
    }

    #[test]
    fn non_success_status_is_error() {
        let url = serve_once("404 Not Found", "missing");
        match fetch_page(&url, &FetchSettings::default()) {
            Err(PageError::Status { status, .. }) => assert_eq!(status, 404),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn connection_refused_is_fetch_error() {
        // Bind then drop to get a port with nothing listening.
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let url = format!("http://127.0.0.1:{port}/");
        let err = fetch_page(&url, &FetchSettings::default()).unwrap_err();
        assert!(matches!(err, PageError::Fetch { .. }));
    }

    #[test]
    fn rejects_malformed_and_non_http_urls() {
        let settings = FetchSettings::default();
        assert!(matches!(
            fetch_page("not a url", &settings),
            Err(PageError::InvalidUrl { .. })
        ));
        let err = fetch_page("ftp://example.com/", &settings).unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'ftp'"));
    }

    #[test]
    fn reads_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, "<h1>Local</h1>").unwrap();
        let page = read_page_file(&path).unwrap();
        assert_eq!(page.html, "<h1>Local</h1>");
        assert_eq!(page.location, path.display().to_string());
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = read_page_file(Path::new("/nonexistent/page.html")).unwrap_err();
        assert!(matches!(err, PageError::ReadFile { .. }));
    }
}
