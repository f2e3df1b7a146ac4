/// Split a comma-separated value, dropping blank entries.
pub fn parse_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|part| {
            let trimmed = part.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

/// Treat empty or whitespace-only values as unset.
pub fn non_blank(raw: String) -> Option<String> {
    if raw.trim().is_empty() { None } else { Some(raw) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_drops_blank_entries() {
        assert_eq!(
            parse_csv(" GET, ,POST,"),
            vec!["GET".to_string(), "POST".to_string()]
        );
        assert!(parse_csv("").is_empty());
    }
}
