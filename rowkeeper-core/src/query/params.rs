//! Lenient query-string handling for list requests.
//!
//! `page` and `limit` are read the way a browser client sends them: leading
//! digits are honoured (`"3abc"` is 3), anything that does not yield a
//! positive number falls back to the default. Each key is normalized on its
//! own and a repeated key keeps its first value, so parsing never rejects a
//! request.

use rowkeeper_model::PageRequest;

use crate::error::Result;

/// Raw `GET /api/items` query parameters.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
}

impl ListParams {
    /// Collect decoded query pairs. Unknown keys are ignored and only the
    /// first occurrence of a key counts.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                "search" => &mut params.search,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    /// Resolve into a [`PageRequest`]: page defaults to 1 and limit to
    /// `default_limit`. Fails only when `default_limit` itself is zero.
    pub fn into_request(self, default_limit: u64) -> Result<PageRequest> {
        let page = self.page.as_deref().and_then(parse_positive).unwrap_or(1);
        let limit = self
            .limit
            .as_deref()
            .and_then(parse_positive)
            .unwrap_or(default_limit);
        let search = self.search.unwrap_or_default();

        Ok(PageRequest::new(page, limit, search)?)
    }
}

/// Leading-integer parse that only accepts values above zero. Values too
/// large for `u64` saturate.
pub fn parse_positive(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if digits.starts_with('-') {
        return None;
    }

    let mut value: u64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(u64::from(byte - b'0'));
    }

    (seen_digit && value > 0).then_some(value)
}
