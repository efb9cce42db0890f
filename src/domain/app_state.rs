use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use time::{macros::format_description, OffsetDateTime};

use super::entities::Country;

/// How many tracking numbers the "Recent Searches" list keeps.
pub const RECENT_SEARCH_LIMIT: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentSearch {
    pub awb: String,
    /// Unix timestamp (seconds) of the lookup.
    pub searched_at: u64,
}

impl RecentSearch {
    pub fn now(awb: impl Into<String>) -> Self {
        let searched_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            awb: awb.into(),
            searched_at,
        }
    }

    /// Formats the lookup time like booking dates, e.g. `23 Dec, 2025 - 10:45 AM` (UTC).
    pub fn searched_label(&self) -> String {
        let format = format_description!(
            "[day] [month repr:short], [year] - [hour repr:12]:[minute] [period]"
        );
        i64::try_from(self.searched_at)
            .ok()
            .and_then(|secs| OffsetDateTime::from_unix_timestamp(secs).ok())
            .and_then(|dt| dt.format(&format).ok())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// App-wide preferences shared by every screen. Screen-local state (typed
/// input, the displayed tracking record, pager positions) stays in the pages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    /// Rate card tab opened first.
    pub default_country: Country,
    /// Most recent first, unique by AWB.
    pub recent_searches: Vec<RecentSearch>,
}

impl AppState {
    /// Moves `search` to the front, dropping older duplicates and anything
    /// past the limit.
    pub fn record_search(&mut self, search: RecentSearch) {
        self.recent_searches
            .retain(|existing| !existing.awb.eq_ignore_ascii_case(&search.awb));
        self.recent_searches.insert(0, search);
        self.recent_searches.truncate(RECENT_SEARCH_LIMIT);
    }

    pub fn clear_recent_searches(&mut self) {
        self.recent_searches.clear();
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.default_country = persisted.default_country;
        self.recent_searches = persisted.recent_searches;
        self.recent_searches.truncate(RECENT_SEARCH_LIMIT);
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            default_country: self.default_country,
            recent_searches: self.recent_searches.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub default_country: Country,
    #[serde(default)]
    pub recent_searches: Vec<RecentSearch>,
}
