//! Per-request response data and client classification.

use serde::Serialize;

use crate::geo::GeoRecord;

/// What the visitor sees: address, location and user agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseRecord {
    pub ip: String,
    pub city: String,
    pub region_name: String,
    pub country: String,
    pub isp: String,
    pub user_agent: Option<String>,
    /// "Yes" / "No", or the unknown placeholder when no geo data.
    pub proxy: String,
}

impl ResponseRecord {
    /// Combine the resolved IP with geo data, substituting `unknown` when absent.
    pub fn new(
        ip: String,
        geo: Option<GeoRecord>,
        user_agent: Option<String>,
        unknown: &str,
    ) -> Self {
        match geo {
            Some(geo) => Self {
                ip,
                city: geo.city,
                region_name: geo.region,
                country: geo.country,
                isp: geo.isp,
                user_agent,
                proxy: if geo.proxy { "Yes" } else { "No" }.to_string(),
            },
            None => Self {
                ip,
                city: unknown.to_string(),
                region_name: unknown.to_string(),
                country: unknown.to_string(),
                isp: unknown.to_string(),
                user_agent,
                proxy: unknown.to_string(),
            },
        }
    }
}

/// Kind of client, decides between bare text and the full page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientKind {
    Cli,
    Browser,
}

impl ClientKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientKind::Cli => "cli",
            ClientKind::Browser => "browser",
        }
    }
}

/// `Cli` when the user agent contains any token (case-sensitive), else `Browser`.
pub fn classify_client<S: AsRef<str>>(user_agent: Option<&str>, cli_tokens: &[S]) -> ClientKind {
    match user_agent {
        Some(ua) if cli_tokens.iter().any(|t| ua.contains(t.as_ref())) => ClientKind::Cli,
        _ => ClientKind::Browser,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKENS: &[&str] = &["curl", "Wget", "wget"];

    #[test]
    fn test_classify_cli_tools() {
        assert_eq!(classify_client(Some("curl/7.88.1"), TOKENS), ClientKind::Cli);
        assert_eq!(classify_client(Some("Wget/1.21.3"), TOKENS), ClientKind::Cli);
        assert_eq!(classify_client(Some("wget2"), TOKENS), ClientKind::Cli);
    }

    #[test]
    fn test_classify_browser() {
        assert_eq!(
            classify_client(Some("Mozilla/5.0 (X11; Linux x86_64) Firefox/128.0"), TOKENS),
            ClientKind::Browser
        );
        assert_eq!(classify_client(None, TOKENS), ClientKind::Browser);
        assert_eq!(classify_client(Some(""), TOKENS), ClientKind::Browser);
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        assert_eq!(classify_client(Some("CURL/8.0"), TOKENS), ClientKind::Browser);
    }

    #[test]
    fn test_client_kind_labels() {
        assert_eq!(ClientKind::Cli.as_str(), "cli");
        assert_eq!(ClientKind::Browser.as_str(), "browser");
    }

    #[test]
    fn test_record_with_geo() {
        let geo = GeoRecord {
            country: "Vietnam".into(),
            region: "Northern".into(),
            city: "Hanoi".into(),
            isp: "Viettel".into(),
            proxy: false,
        };
        let record = ResponseRecord::new(
            "1.2.3.4".into(),
            Some(geo),
            Some("Mozilla/5.0".into()),
            "Unknown",
        );
        assert_eq!(record.city, "Hanoi");
        assert_eq!(record.region_name, "Northern");
        assert_eq!(record.proxy, "No");
    }

    #[test]
    fn test_record_without_geo_uses_placeholder() {
        let record = ResponseRecord::new("1.2.3.4".into(), None, None, "Unknown");
        assert_eq!(record.country, "Unknown");
        assert_eq!(record.isp, "Unknown");
        assert_eq!(record.proxy, "Unknown");
        assert_eq!(record.user_agent, None);
    }

    #[test]
    fn test_record_json_keys() {
        let record = ResponseRecord::new("1.2.3.4".into(), None, None, "Unknown");
        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();
        for key in ["ip", "city", "region_name", "country", "isp", "user_agent", "proxy"] {
            assert!(obj.contains_key(key), "missing {}", key);
        }
        assert!(obj["user_agent"].is_null());
    }
}
