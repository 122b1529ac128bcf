use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use fin_core::enums::{IncomeKind, SessionSync};

    use super::parse_enum;

    #[test]
    fn parses_snake_case_enum() {
        let kind: IncomeKind = parse_enum("investment", "kind").expect("kind should parse");
        assert_eq!(kind, IncomeKind::Investment);
    }

    #[test]
    fn parses_hyphenated_alias() {
        let sync: SessionSync =
            parse_enum("Provider-Authoritative", "session_sync").expect("sync should parse");
        assert_eq!(sync, SessionSync::ProviderAuthoritative);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<IncomeKind>("lottery", "kind").expect_err("should fail");
        assert!(err.to_string().contains("invalid kind 'lottery'"));
    }
}
