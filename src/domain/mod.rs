//! Domain logic for tracking, rates, manifests and support lives here.

pub mod app_state;
pub mod entities;
pub mod manifest;
pub mod rates;
pub mod tracking;

#[allow(unused_imports)]
pub use app_state::{AppState, PersistedState, RecentSearch, RECENT_SEARCH_LIMIT};
#[allow(unused_imports)]
pub use entities::{
    Country, ManifestOrder, ManifestSummary, RateTier, ServiceLevel, SupportContact,
    TrackingEvent, TrackingRecord, SUPPORT_CONTACT,
};
#[allow(unused_imports)]
pub use manifest::{paginate, visible_pages, Manifest, OrderSelection, PageSlice, ITEMS_PER_PAGE};
#[allow(unused_imports)]
pub use rates::{quote, rate_lookup, rates_for, Quote, QuoteError, RateLookupError, RateTable};
#[allow(unused_imports)]
pub use tracking::{
    status_tone, LookupState, LookupTicket, StatusTone, TrackingError, TrackingSession,
};
