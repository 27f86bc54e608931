//! Brand banner route handler.

use axum::Json;
use serde::Serialize;

/// Banner returned from `GET /`.
#[derive(Debug, Serialize)]
pub struct Banner {
    pub brand: &'static str,
    pub message: &'static str,
}

/// Liveness banner.
///
/// GET /
pub async fn banner() -> Json<Banner> {
    Json(Banner {
        brand: "Vic Signature",
        message: "Welcome to the Vic Signature backend",
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_banner_fields() {
        let Json(banner) = banner().await;
        assert_eq!(banner.brand, "Vic Signature");
        assert_eq!(banner.message, "Welcome to the Vic Signature backend");
    }
}
