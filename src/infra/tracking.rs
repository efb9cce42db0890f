//! Tracking data providers.
//!
//! - `SampleTrackingProvider` answers every lookup from the bundled template.
//! - `HttpTrackingProvider` calls `GET {base}/api/tracking/{awb}` and expects
//!   the record in the same JSON shape.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::{
    domain::{
        tracking::{normalize_identifier, record_from_template},
        TrackingError, TrackingRecord,
    },
    util::{
        assets::{self, AssetError},
        config::AppConfig,
        version::user_agent,
    },
};

#[async_trait]
pub trait TrackingProvider: Send + Sync {
    async fn lookup(&self, awb: &str) -> Result<TrackingRecord, TrackingError>;

    /// Short label for the settings screen.
    fn source_label(&self) -> String;
}

#[derive(Clone, Debug)]
pub struct SampleTrackingProvider {
    template: TrackingRecord,
}

impl SampleTrackingProvider {
    pub fn new(template: TrackingRecord) -> Self {
        Self { template }
    }

    pub fn bundled() -> Result<Self, AssetError> {
        let template = assets::load_json::<TrackingRecord>(assets::TRACKING_TEMPLATE_JSON)?;
        Ok(Self::new(template))
    }
}

#[async_trait]
impl TrackingProvider for SampleTrackingProvider {
    async fn lookup(&self, awb: &str) -> Result<TrackingRecord, TrackingError> {
        record_from_template(awb, &self.template)
    }

    fn source_label(&self) -> String {
        "Bundled sample data".to_string()
    }
}

#[derive(Clone)]
pub struct HttpTrackingProvider {
    http: Client,
    base_url: Url,
}

impl HttpTrackingProvider {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .user_agent(user_agent())
            .timeout(timeout)
            .build()?;
        Ok(Self { http, base_url })
    }
}

#[async_trait]
impl TrackingProvider for HttpTrackingProvider {
    async fn lookup(&self, awb: &str) -> Result<TrackingRecord, TrackingError> {
        let awb = normalize_identifier(awb)?;
        let url = tracking_url(&self.base_url, awb)?;
        tracing::info!(%url, "requesting tracking record");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| TrackingError::Transient(describe(&err)))?;

        check_status(response.status(), awb)?;

        let mut record = response
            .json::<TrackingRecord>()
            .await
            .map_err(|err| TrackingError::Transient(format!("malformed response: {err}")))?;
        if record.awb != awb {
            tracing::debug!(served = %record.awb, requested = awb, "overriding served awb");
        }
        record.awb = awb.to_string();
        Ok(record)
    }

    fn source_label(&self) -> String {
        self.base_url.to_string()
    }
}

/// Picks the HTTP provider when an API URL is configured, the bundled sample
/// otherwise.
pub fn provider_from_config(config: &AppConfig) -> Result<Arc<dyn TrackingProvider>, String> {
    if let Some(base_url) = config.api_base_url.clone() {
        let provider = HttpTrackingProvider::new(base_url, config.http_timeout)
            .map_err(|err| format!("failed to build HTTP client: {err}"))?;
        tracing::info!(source = %provider.source_label(), "using HTTP tracking provider");
        return Ok(Arc::new(provider));
    }

    let provider = SampleTrackingProvider::bundled().map_err(|err| err.to_string())?;
    tracing::info!("using bundled tracking sample");
    Ok(Arc::new(provider))
}

fn tracking_url(base: &Url, awb: &str) -> Result<Url, TrackingError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| TrackingError::Transient(format!("invalid API base URL: {base}")))?
        .pop_if_empty()
        .extend(["api", "tracking", awb]);
    Ok(url)
}

fn check_status(status: StatusCode, awb: &str) -> Result<(), TrackingError> {
    if status == StatusCode::NOT_FOUND {
        return Err(TrackingError::NotFound(awb.to_string()));
    }
    if !status.is_success() {
        return Err(TrackingError::Transient(format!("HTTP {status}")));
    }
    Ok(())
}

fn describe(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "request timed out".to_string()
    } else if err.is_connect() {
        "could not reach tracking service".to_string()
    } else {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io::{Read, Write},
        net::{SocketAddr, TcpListener},
        sync::mpsc,
        thread,
    };

    use super::*;

    const TEMPLATE_BODY: &str = include_str!("../../assets/tracking_sample.json");

    /// Serves exactly one canned HTTP response and reports the request line it
    /// received.
    fn serve_once(status: &'static str, body: &'static str) -> (SocketAddr, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let head = String::from_utf8_lossy(&request);
            let _ = tx.send(head.lines().next().unwrap_or_default().to_string());

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
        });
        (addr, rx)
    }

    fn http_provider(addr: SocketAddr) -> HttpTrackingProvider {
        let base = Url::parse(&format!("http://{addr}/")).unwrap();
        HttpTrackingProvider::new(base, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn http_provider_reports_requested_awb() {
        let (addr, requests) = serve_once("200 OK", TEMPLATE_BODY);
        let record = http_provider(addr).lookup("  SR123 ").await.unwrap();

        assert_eq!(record.awb, "SR123");
        assert_eq!(record.status, "Delivered");
        assert_eq!(record.history.len(), 9);
        assert_eq!(
            requests.recv().unwrap(),
            "GET /api/tracking/SR123 HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn http_provider_maps_404_to_not_found() {
        let (addr, _requests) = serve_once("404 Not Found", "{}");
        assert_eq!(
            http_provider(addr).lookup("SR123").await,
            Err(TrackingError::NotFound("SR123".into()))
        );
    }

    #[tokio::test]
    async fn http_provider_treats_503_as_retryable() {
        let (addr, _requests) = serve_once("503 Service Unavailable", "{}");
        let err = http_provider(addr).lookup("SR123").await.unwrap_err();
        assert!(err.is_retryable());
        assert!(matches!(err, TrackingError::Transient(ref msg) if msg.contains("503")));
    }

    #[tokio::test]
    async fn http_provider_rejects_malformed_body() {
        let (addr, _requests) = serve_once("200 OK", r#"{"awb": 42"#);
        let err = http_provider(addr).lookup("SR123").await.unwrap_err();
        assert!(matches!(err, TrackingError::Transient(ref msg) if msg.starts_with("malformed response")));
    }

    #[tokio::test]
    async fn http_provider_reports_unreachable_service() {
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        assert_eq!(
            http_provider(addr).lookup("SR123").await,
            Err(TrackingError::Transient("could not reach tracking service".into()))
        );
    }

    #[tokio::test]
    async fn http_provider_rejects_blank_input_without_request() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let provider = http_provider(listener.local_addr().unwrap());

        assert_eq!(provider.lookup("   ").await, Err(TrackingError::EmptyInput));
        assert!(listener.accept().is_err(), "blank input reached the server");
    }

    #[tokio::test]
    async fn sample_provider_echoes_awb() {
        let provider = SampleTrackingProvider::bundled().unwrap();
        let record = provider.lookup("SR123").await.unwrap();
        assert_eq!(record.awb, "SR123");
        assert_eq!(record.status, "Delivered");
        assert_eq!(record.history.len(), 9);
        assert_eq!(record.history[0].event, "Shipment Delivered");
        assert_eq!(
            record.history.last().map(|e| e.event.as_str()),
            Some("Order Picked Up from seller")
        );
    }

    #[tokio::test]
    async fn sample_provider_rejects_blank_input() {
        let provider = SampleTrackingProvider::bundled().unwrap();
        assert_eq!(provider.lookup("  ").await, Err(TrackingError::EmptyInput));
    }

    #[test]
    fn tracking_url_escapes_identifier() {
        let base = Url::parse("https://api.example.com/v1/").unwrap();
        assert_eq!(
            tracking_url(&base, "SR 1/2").unwrap().as_str(),
            "https://api.example.com/v1/api/tracking/SR%201%2F2"
        );
    }

    #[test]
    fn status_codes_map_to_errors() {
        assert_eq!(check_status(StatusCode::OK, "SR1"), Ok(()));
        assert_eq!(
            check_status(StatusCode::NOT_FOUND, "SR1"),
            Err(TrackingError::NotFound("SR1".into()))
        );
        assert!(check_status(StatusCode::SERVICE_UNAVAILABLE, "SR1")
            .unwrap_err()
            .is_retryable());
    }

    #[test]
    fn config_without_url_uses_sample() {
        let provider = provider_from_config(&AppConfig::default()).unwrap();
        assert_eq!(provider.source_label(), "Bundled sample data");
    }
}
