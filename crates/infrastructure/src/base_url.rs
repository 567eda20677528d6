use complaintdesk_core::{AppError, AppResult};
use url::Url;

/// Validates an absolute http(s) base URL and strips trailing slashes.
pub fn normalize_base_url(raw: &str) -> AppResult<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed)
        .map_err(|error| AppError::Validation(format!("invalid base URL '{raw}': {error}")))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AppError::Validation(format!(
            "base URL '{raw}' must use http or https"
        )));
    }

    Ok(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::normalize_base_url;

    #[test]
    fn keeps_path_prefix_and_drops_trailing_slashes() {
        assert_eq!(
            normalize_base_url(" https://cft.example.com/backend/ ").unwrap_or_default(),
            "https://cft.example.com/backend"
        );
    }

    #[test]
    fn rejects_non_http_schemes() {
        assert!(normalize_base_url("ftp://cft.example.com").is_err());
        assert!(normalize_base_url("").is_err());
    }
}
