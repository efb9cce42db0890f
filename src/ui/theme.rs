//! Fixed palette and class helpers shared across screens.

use crate::domain::{status_tone, ServiceLevel, StatusTone};

/// Brand colours. Immutable for the lifetime of the app.
pub struct Palette;

impl Palette {
    pub const PRIMARY: &'static str = "#2563EB";
    pub const ORANGE: &'static str = "#F97316";
    pub const GREEN: &'static str = "#10B981";
}

// ============================================
// STATUS COLOURS
// ============================================

pub fn tone_color(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Success => Palette::GREEN,
        StatusTone::Warning => Palette::ORANGE,
        StatusTone::Primary => Palette::PRIMARY,
    }
}

/// Display colour for a carrier status string.
pub fn status_color(status: &str) -> &'static str {
    tone_color(status_tone(status))
}

/// Inline style for a status pill: solid text on a 12% tint of the same hue.
pub fn status_badge_style(status: &str) -> String {
    let color = status_color(status);
    format!("color: {color}; background-color: {color}20;")
}

/// (background, foreground) of the delivery-window badge on rate headers.
pub fn service_badge(service: ServiceLevel) -> (&'static str, &'static str) {
    match service {
        ServiceLevel::Standard => ("#ECFDF5", "#10B981"),
        ServiceLevel::Express => ("#FEF3C7", "#D97706"),
        ServiceLevel::Priority => ("#FEE2E2", "#EF4444"),
    }
}

// ============================================
// CONTROLS
// ============================================

pub fn tab_class(active: bool) -> &'static str {
    if active {
        "sr-tab sr-tab-active"
    } else {
        "sr-tab"
    }
}

pub fn nav_class(active: bool) -> &'static str {
    if active {
        "sr-nav-item sr-nav-item-active"
    } else {
        "sr-nav-item"
    }
}

pub fn page_button(active: bool) -> &'static str {
    if active {
        "sr-page-btn sr-page-btn-active"
    } else {
        "sr-page-btn"
    }
}

pub fn row_class(index: usize) -> &'static str {
    if index % 2 == 0 {
        "sr-row sr-row-even"
    } else {
        "sr-row"
    }
}

pub const BTN_PRIMARY: &str = "sr-btn sr-btn-primary";
pub const BTN_OUTLINE: &str = "sr-btn sr-btn-outline";
pub const INPUT: &str = "sr-input";
pub const CARD: &str = "sr-card";
pub const SECTION_TITLE: &str = "sr-section-title";
pub const MUTED: &str = "sr-muted";
