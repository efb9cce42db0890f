pub mod history_table;
pub mod order_table;
pub mod pager;
pub mod rate_table;
pub mod stat_card;
pub mod status_badge;
pub mod toast;

pub use history_table::HistoryTable;
pub use order_table::OrderTable;
pub use pager::Pager;
pub use rate_table::RateTable;
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
