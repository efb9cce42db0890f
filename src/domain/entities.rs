use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Snapshot of a shipment as shown on the tracking screen.
///
/// Field names serialize in camelCase so the record shape matches what the
/// tracking endpoint and the bundled template use.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingRecord {
    pub awb: String,
    /// Display string, already formatted at booking time.
    pub booking_date: String,
    pub consignee: String,
    pub destination: String,
    /// Free-form carrier status ("Delivered", "In Transit", ...).
    pub status: String,
    pub lastmile_awb: String,
    /// Most recent event first. Callers supply the order; nothing re-sorts it.
    #[serde(default)]
    pub history: Vec<TrackingEvent>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingEvent {
    pub timestamp: String,
    pub location: String,
    pub event: String,
}

/// Destination countries with a published rate card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    #[default]
    Usa,
    Canada,
    Germany,
    Uk,
}

impl Country {
    pub const ALL: [Country; 4] = [Country::Usa, Country::Canada, Country::Germany, Country::Uk];

    pub fn id(&self) -> &'static str {
        match self {
            Country::Usa => "usa",
            Country::Canada => "canada",
            Country::Germany => "germany",
            Country::Uk => "uk",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Country::Usa => "USA (United State Of America)",
            Country::Canada => "Canada",
            Country::Germany => "Germany",
            Country::Uk => "UK (United Kingdom)",
        }
    }

    pub fn flag_url(&self) -> &'static str {
        match self {
            Country::Usa => "https://flagcdn.com/w40/us.png",
            Country::Canada => "https://flagcdn.com/w40/ca.png",
            Country::Germany => "https://flagcdn.com/w40/de.png",
            Country::Uk => "https://flagcdn.com/w40/gb.png",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Country {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Country::ALL
            .into_iter()
            .find(|country| country.id().eq_ignore_ascii_case(key))
            .ok_or_else(|| key.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ServiceLevel {
    Standard,
    Express,
    Priority,
}

impl ServiceLevel {
    pub const ALL: [ServiceLevel; 3] = [
        ServiceLevel::Standard,
        ServiceLevel::Express,
        ServiceLevel::Priority,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ServiceLevel::Standard => "Standard",
            ServiceLevel::Express => "Express",
            ServiceLevel::Priority => "Priority",
        }
    }

    pub fn delivery_window(&self) -> &'static str {
        match self {
            ServiceLevel::Standard => "7-10 Days",
            ServiceLevel::Express => "5-7 Days",
            ServiceLevel::Priority => "3-5 Days",
        }
    }
}

/// One weight bracket of a country's rate card. Prices are whole rupees,
/// GST inclusive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTier {
    pub weight: String,
    pub standard: u32,
    pub express: u32,
    pub priority: u32,
}

impl RateTier {
    pub fn price(&self, service: ServiceLevel) -> u32 {
        match service {
            ServiceLevel::Standard => self.standard,
            ServiceLevel::Express => self.express,
            ServiceLevel::Priority => self.priority,
        }
    }

    /// Parses the numeric part of labels like `"0.50 kg"`.
    pub fn weight_kg(&self) -> Option<f64> {
        self.weight
            .trim()
            .trim_end_matches(|c: char| c.is_ascii_alphabetic())
            .trim()
            .parse::<f64>()
            .ok()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ManifestSummary {
    pub shipment_cost: f64,
    pub invoice_value: f64,
    pub weight_kg: f64,
    pub box_count: u32,
}

impl ManifestSummary {
    pub fn shipment_cost_label(&self) -> String {
        format!("Rs. {:.2}", self.shipment_cost)
    }

    pub fn invoice_value_label(&self) -> String {
        format!("Rs. {:.2}", self.invoice_value)
    }

    pub fn weight_label(&self) -> String {
        format!("{} KG", self.weight_kg)
    }

    pub fn box_count_label(&self) -> String {
        self.box_count.to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ManifestOrder {
    pub id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub order_date: String,
    pub order_time: String,
    pub weight: String,
    pub package_type: String,
    pub address: String,
    pub last_mile_awb: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SupportContact {
    pub email: &'static str,
    pub phone: &'static str,
}

pub const SUPPORT_CONTACT: SupportContact = SupportContact {
    email: "support@shipreward.in",
    phone: "+91 7096826135",
};

impl SupportContact {
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel_href(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{digits}")
    }
}
