//! Header introspection handler

use axum::http::HeaderMap;

/// Dump the request headers as plain text, one `name: value` per line
pub async fn headers(headers: HeaderMap) -> String {
    headers
        .iter()
        .map(|(name, value)| {
            format!("{name}: {}", String::from_utf8_lossy(value.as_bytes()))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[tokio::test]
    async fn renders_one_line_per_header() {
        let mut map = HeaderMap::new();
        map.insert("host", HeaderValue::from_static("127.0.0.1:3000"));
        map.insert("user-agent", HeaderValue::from_static("curl/8.0"));

        let body = headers(map).await;
        assert!(body.contains("host: 127.0.0.1:3000"));
        assert!(body.contains("user-agent: curl/8.0"));
        assert_eq!(body.lines().count(), 2);
    }

    #[tokio::test]
    async fn empty_header_map_is_an_empty_body() {
        let body = headers(HeaderMap::new()).await;
        assert!(body.is_empty());
    }
}
