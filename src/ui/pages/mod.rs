pub mod manifest;
pub mod rates;
pub mod settings;
pub mod support;
pub mod track;

pub use manifest::ManifestPage;
pub use rates::RatesPage;
pub use settings::SettingsPage;
pub use support::SupportPage;
pub use track::TrackPage;
