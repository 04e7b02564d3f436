use std::fs;
use std::path::Path;

use reqwest::blocking::Client;

/// Fetches a remote artifact into a local file.
///
/// A narrow seam over the network so the acquisition flow can be driven by
/// deterministic fakes in tests.
pub trait Transport {
    fn fetch(&self, url: &str, dest: &Path) -> Result<(), String>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, url: &str, dest: &Path) -> Result<(), String> {
        let resp = self
            .client
            .get(url)
            .header("User-Agent", "rusky-installer")
            .send()
            .map_err(|e| format!("failed to download {url}: {e}"))?;

        if !resp.status().is_success() {
            return Err(format!("download of {url} returned {}", resp.status()));
        }

        let bytes = resp
            .bytes()
            .map_err(|e| format!("failed to read download body: {e}"))?;

        fs::write(dest, &bytes)
            .map_err(|e| format!("failed to write {}: {e}", dest.display()))?;

        Ok(())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::significant_drop_tightening
)]
mod tests {
    use super::*;

    #[test]
    fn fetch_writes_body_to_dest() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/releases/download/v1.0.0/rusky-linux-x64")
            .with_status(200)
            .with_body("binary-bytes")
            .create();

        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("rusky");
        let url = format!("{}/releases/download/v1.0.0/rusky-linux-x64", server.url());

        HttpTransport::new().fetch(&url, &dest).unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"binary-bytes");
        mock.assert();
    }

    #[test]
    fn fetch_rejects_non_success_status() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/releases/download/v9.9.9/rusky-linux-x64")
            .with_status(404)
            .create();

        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("rusky");
        let url = format!("{}/releases/download/v9.9.9/rusky-linux-x64", server.url());

        let err = HttpTransport::new().fetch(&url, &dest).unwrap_err();

        assert!(err.contains("404"));
        assert!(!dest.exists(), "no file should be written on failure");
        mock.assert();
    }

    #[test]
    fn fetch_unreachable_host_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("rusky");

        let result = HttpTransport::new().fetch("http://127.0.0.1:1/rusky", &dest);

        assert!(result.is_err());
    }
}
