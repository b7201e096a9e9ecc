//! Greeting endpoint.

use axum::Json;
use common::{PLATFORM_ENV, RootResponse};

use crate::error::ApiError;

/// Reads the machine's network name.
pub fn resolve_hostname() -> Result<String, ApiError> {
    let name = hostname::get().map_err(ApiError::Hostname)?;
    Ok(name.to_string_lossy().into_owned())
}

/// Reads the platform label. Unset and non-Unicode values both yield `None`.
pub fn current_platform() -> Option<String> {
    std::env::var(PLATFORM_ENV).ok()
}

/// GET / — greeting plus host name and platform, both read per request.
pub async fn greet() -> Result<Json<RootResponse>, ApiError> {
    let hostname = resolve_hostname()?;
    let platform = current_platform();
    tracing::debug!(%hostname, platform = ?platform, "serving greeting");

    Ok(Json(RootResponse::new(hostname, platform)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_hostname_is_not_empty() {
        let name = resolve_hostname().unwrap();
        assert!(!name.is_empty());
        assert!(!name.contains('\0'));
    }

    #[test]
    fn resolve_hostname_is_stable() {
        assert_eq!(resolve_hostname().unwrap(), resolve_hostname().unwrap());
    }
}
