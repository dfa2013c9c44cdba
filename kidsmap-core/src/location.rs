//! One-shot current-position lookup used only to center the map.

use crate::error::LocationError;
use crate::models::Position;
use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info};

/// Default viewpoint when no location is available (Seoul City Hall)
pub const DEFAULT_CENTER: Position = Position {
    lat: 37.5665,
    lon: 126.9780,
};
pub const DEFAULT_ZOOM: u8 = 11;
/// Zoom used after centering on the user's own position
pub const LOCATED_ZOOM: u8 = 13;

/// External capability that can report the device's position
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn request_current_position(&self) -> Result<Position, LocationError>;
}

/// Provider that always reports the same coordinate
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Position);

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn request_current_position(&self) -> Result<Position, LocationError> {
        Ok(self.0)
    }
}

/// Provider for environments without any location capability
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

#[async_trait]
impl LocationProvider for NoLocation {
    async fn request_current_position(&self) -> Result<Position, LocationError> {
        Err(LocationError::Unavailable(
            "no location provider configured".to_string(),
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CenterSource {
    Default,
    CurrentLocation,
}

/// Where the map should be centered
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: Position,
    pub zoom: u8,
    pub source: CenterSource,
    /// Informational message when the location lookup failed
    pub notice: Option<String>,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            source: CenterSource::Default,
            notice: None,
        }
    }
}

/// Ask the provider once. Success recenters the map; any failure keeps
/// `fallback` and attaches a notice. There is no retry.
pub async fn resolve_map_view(provider: &dyn LocationProvider, fallback: MapView) -> MapView {
    match provider.request_current_position().await {
        Ok(position) if position.is_valid() => {
            info!(%position, "Centering map on current location");
            MapView {
                center: position,
                zoom: LOCATED_ZOOM,
                source: CenterSource::CurrentLocation,
                notice: None,
            }
        }
        Ok(position) => {
            debug!(%position, "Ignoring out-of-range location");
            MapView {
                notice: Some("현재 위치를 확인할 수 없어 기본 위치를 표시합니다.".to_string()),
                ..fallback
            }
        }
        Err(err) => {
            info!(error = %err, "Location unavailable, using default view");
            MapView {
                notice: Some(format!(
                    "현재 위치를 확인할 수 없어 기본 위치를 표시합니다. ({})",
                    err
                )),
                ..fallback
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingDenied(AtomicUsize);

    #[async_trait]
    impl LocationProvider for CountingDenied {
        async fn request_current_position(&self) -> Result<Position, LocationError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Err(LocationError::PermissionDenied)
        }
    }

    #[tokio::test]
    async fn test_success_recenters() {
        let here = Position::new(35.1796, 129.0756);
        let view = resolve_map_view(&FixedLocation(here), MapView::default()).await;

        assert_eq!(view.center, here);
        assert_eq!(view.zoom, LOCATED_ZOOM);
        assert_eq!(view.source, CenterSource::CurrentLocation);
        assert!(view.notice.is_none());
    }

    #[tokio::test]
    async fn test_failure_keeps_fallback_without_retry() {
        let provider = CountingDenied(AtomicUsize::new(0));
        let view = resolve_map_view(&provider, MapView::default()).await;

        assert_eq!(provider.0.load(Ordering::SeqCst), 1);
        assert_eq!(view.center, DEFAULT_CENTER);
        assert_eq!(view.source, CenterSource::Default);
        assert!(view.notice.unwrap().contains("Location permission denied"));
    }

    #[tokio::test]
    async fn test_no_location_provider() {
        let view = resolve_map_view(&NoLocation, MapView::default()).await;
        assert_eq!(view.zoom, DEFAULT_ZOOM);
        assert!(view.notice.is_some());
    }

    #[tokio::test]
    async fn test_invalid_position_ignored() {
        let bogus = FixedLocation(Position::new(200.0, 0.0));
        let view = resolve_map_view(&bogus, MapView::default()).await;
        assert_eq!(view.source, CenterSource::Default);
    }
}
