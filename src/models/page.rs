//! Pagination parameters shared by all list endpoints

use serde::{Deserialize, Deserializer};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// Sanitized page/limit pair
///
/// `page` and `limit` are clamped to a minimum of 1; the offset saturates
/// for absurdly large pages instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: i64,
    pub limit: i64,
}

impl PageParams {
    /// Build from raw query parameters. Absent or out-of-range values fall
    /// back to the defaults rather than erroring.
    pub fn from_query(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = page.filter(|p| *p >= 1).unwrap_or(DEFAULT_PAGE);
        let limit = limit.filter(|l| *l >= 1).unwrap_or(DEFAULT_LIMIT);
        Self { page, limit }
    }

    /// Number of rows to skip before the requested page
    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// Total page count for a matching-row total: ceil(total / limit),
    /// zero when nothing matches
    pub fn total_pages(&self, total: i64) -> i64 {
        if total <= 0 {
            0
        } else {
            (total + self.limit - 1) / self.limit
        }
    }
}

/// Deserialize an optional numeric query parameter leniently: anything that
/// does not parse as an integer is treated as absent, so the caller falls
/// back to the default instead of receiving a 400.
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.trim().parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_absent() {
        let pages = PageParams::from_query(None, None);
        assert_eq!(pages.page, 1);
        assert_eq!(pages.limit, 10);
        assert_eq!(pages.offset(), 0);
    }

    #[test]
    fn zero_or_negative_values_fall_back_to_defaults() {
        assert_eq!(PageParams::from_query(Some(0), Some(0)), PageParams { page: 1, limit: 10 });
        assert_eq!(
            PageParams::from_query(Some(-3), Some(-50)),
            PageParams { page: 1, limit: 10 }
        );
    }

    #[test]
    fn offset_is_page_minus_one_times_limit() {
        let pages = PageParams::from_query(Some(2), Some(5));
        assert_eq!(pages.offset(), 5);
        let pages = PageParams::from_query(Some(7), Some(20));
        assert_eq!(pages.offset(), 120);
    }

    #[test]
    fn huge_page_numbers_saturate_instead_of_overflowing() {
        let pages = PageParams::from_query(Some(i64::MAX), Some(10));
        assert_eq!(pages.offset(), i64::MAX);
        let pages = PageParams::from_query(Some(i64::MAX), Some(i64::MAX));
        assert_eq!(pages.offset(), i64::MAX);
    }

    #[test]
    fn total_pages_rounds_up() {
        let pages = PageParams::from_query(Some(2), Some(5));
        assert_eq!(pages.total_pages(12), 3);
        assert_eq!(pages.total_pages(10), 2);
        assert_eq!(pages.total_pages(1), 1);
    }

    #[test]
    fn zero_total_means_zero_pages() {
        let pages = PageParams::from_query(None, None);
        assert_eq!(pages.total_pages(0), 0);
    }

    #[test]
    fn lenient_parsing_ignores_garbage() {
        #[derive(serde::Deserialize)]
        struct Q {
            #[serde(default, deserialize_with = "lenient_i64")]
            page: Option<i64>,
        }

        // Query strings always arrive as text, as serde_urlencoded does
        let q: Q = serde_json::from_str(r#"{"page":"3"}"#).unwrap();
        assert_eq!(q.page, Some(3));
        let q: Q = serde_json::from_str(r#"{"page":"abc"}"#).unwrap();
        assert_eq!(q.page, None);
        let q: Q = serde_json::from_str("{}").unwrap();
        assert_eq!(q.page, None);
    }
}
