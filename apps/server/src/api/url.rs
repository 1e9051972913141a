//! URL helpers for building absolute base URLs.

use axum::http::HeaderMap;

/// Build the server base URL (`{scheme}://{host}`), honoring forwarding
/// headers from reverse proxies.
pub fn base_url_from_headers(headers: &HeaderMap) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");

    let host = headers
        .get("x-forwarded-host")
        .or_else(|| headers.get("host"))
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");

    format!("{scheme}://{host}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forwarded_headers_win() {
        let mut headers = HeaderMap::new();
        headers.insert("host", "internal:8080".parse().unwrap());
        assert_eq!(base_url_from_headers(&headers), "http://internal:8080");

        headers.insert("x-forwarded-proto", "https".parse().unwrap());
        headers.insert("x-forwarded-host", "fhir.example.org".parse().unwrap());
        assert_eq!(base_url_from_headers(&headers), "https://fhir.example.org");
    }
}
