//! Channel-backed navigation and alert adapters.
//!
//! The use case runs on a background task; these adapters hand its requests
//! to the UI event loop.

use reqwest::Url;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::domain::entities::Alert;
use crate::domain::errors::NavigationError;
use crate::domain::ports::{AlertPort, NavigatorPort};

/// Route the application lands on for an empty URL.
pub const ROOT_ROUTE: &str = "/";

/// Request forwarded to the UI loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterEvent {
    /// Switch to the given in-app route.
    Navigate(String),
    /// Show a blocking modal.
    Alert(Alert),
}

/// Normalizes an in-app URL.
///
/// # Errors
/// Returns error for URLs carrying a scheme or a network host.
pub fn normalize_url(url: &str) -> Result<String, NavigationError> {
    let url = url.trim();

    if url.starts_with("//") || Url::parse(url).is_ok() {
        return Err(NavigationError::External(url.to_string()));
    }

    if url.is_empty() {
        return Ok(ROOT_ROUTE.to_string());
    }

    if url.starts_with('/') {
        Ok(url.to_string())
    } else {
        Ok(format!("/{url}"))
    }
}

/// Navigator that forwards to the UI loop.
#[derive(Clone)]
pub struct ChannelNavigator {
    tx: mpsc::UnboundedSender<RouterEvent>,
}

impl ChannelNavigator {
    /// Creates navigator over a channel.
    #[must_use]
    pub const fn new(tx: mpsc::UnboundedSender<RouterEvent>) -> Self {
        Self { tx }
    }
}

impl NavigatorPort for ChannelNavigator {
    fn navigate_by_url(&self, url: &str) -> Result<(), NavigationError> {
        let target = normalize_url(url).inspect_err(|e| {
            warn!(error = %e, "Rejected navigation target");
        })?;

        debug!(target = %target, "Navigating");
        self.tx
            .send(RouterEvent::Navigate(target))
            .map_err(|_| NavigationError::Closed)
    }
}

/// Alert sink that forwards to the UI loop.
#[derive(Clone)]
pub struct ChannelAlerts {
    tx: mpsc::UnboundedSender<RouterEvent>,
}

impl ChannelAlerts {
    /// Creates alert sink over a channel.
    #[must_use]
    pub const fn new(tx: mpsc::UnboundedSender<RouterEvent>) -> Self {
        Self { tx }
    }
}

impl AlertPort for ChannelAlerts {
    fn fire(&self, alert: Alert) {
        if self.tx.send(RouterEvent::Alert(alert)).is_err() {
            warn!("Alert dropped, UI loop is gone");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("", "/" ; "empty_is_root")]
    #[test_case("/dashboard", "/dashboard" ; "absolute_path")]
    #[test_case("orders/42?tab=items", "/orders/42?tab=items" ; "relative_path")]
    #[test_case("/search?q=https://example.com", "/search?q=https://example.com" ; "url_in_query")]
    fn test_normalize_url(input: &str, expected: &str) {
        assert_eq!(normalize_url(input).unwrap(), expected);
    }

    #[test_case("https://evil.example.com" ; "scheme")]
    #[test_case("//evil.example.com/path" ; "protocol_relative")]
    #[test_case("javascript:alert(1)" ; "non_http_scheme")]
    fn test_external_urls_rejected(input: &str) {
        assert!(matches!(
            normalize_url(input),
            Err(NavigationError::External(_))
        ));
    }

    #[test]
    fn test_navigator_forwards_event() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let navigator = ChannelNavigator::new(tx);

        navigator.navigate_by_url("/dashboard").unwrap();

        assert_eq!(
            rx.try_recv().unwrap(),
            RouterEvent::Navigate("/dashboard".to_string())
        );
    }

    #[test]
    fn test_navigator_reports_closed_loop() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);

        let navigator = ChannelNavigator::new(tx);

        assert_eq!(
            navigator.navigate_by_url("/dashboard"),
            Err(NavigationError::Closed)
        );
    }

    #[test]
    fn test_alerts_forward_event() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        ChannelAlerts::new(tx).fire(Alert::invalid_credentials());

        assert_eq!(
            rx.try_recv().unwrap(),
            RouterEvent::Alert(Alert::invalid_credentials())
        );
    }
}
