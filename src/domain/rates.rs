//! Static rate cards keyed by destination country.
//!
//! The table ships inside the binary (`assets/rates.json`), is parsed once on
//! first use and never mutated afterwards.

use std::{collections::HashMap, sync::OnceLock};

use thiserror::Error;

use super::entities::{Country, RateTier, ServiceLevel};
use crate::util::assets::{self, AssetError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RateLookupError {
    #[error("no rate card for country '{0}'")]
    UnknownCountry(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum QuoteError {
    #[error("weight must be a positive number of kg (got {0})")]
    InvalidWeight(f64),
    #[error("{weight_kg} kg exceeds the largest {country} tier ({max_kg} kg)")]
    OverweightForCountry {
        country: Country,
        weight_kg: f64,
        max_kg: f64,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Quote {
    pub country: Country,
    pub service: ServiceLevel,
    pub tier: RateTier,
    pub price: u32,
}

#[derive(Clone, Debug, Default)]
pub struct RateTable {
    cards: HashMap<Country, Vec<RateTier>>,
}

impl RateTable {
    #[cfg(test)]
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let cards = serde_json::from_str::<HashMap<Country, Vec<RateTier>>>(raw)?;
        Ok(Self { cards })
    }

    fn load_bundled() -> Result<Self, AssetError> {
        let cards = assets::load_json::<HashMap<Country, Vec<RateTier>>>(assets::RATES_JSON)?;
        Ok(Self { cards })
    }

    /// Process-wide table parsed from the bundled asset.
    pub fn bundled() -> &'static RateTable {
        static TABLE: OnceLock<RateTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            let table = Self::load_bundled()
                .unwrap_or_else(|err| panic!("bundled rate table is invalid: {err}"));
            tracing::info!(countries = table.cards.len(), "loaded rate table");
            table
        })
    }

    pub fn tiers(&self, country: Country) -> &[RateTier] {
        self.cards
            .get(&country)
            .map(|tiers| tiers.as_slice())
            .unwrap_or(&[])
    }

    pub fn lookup(&self, key: &str) -> Result<&[RateTier], RateLookupError> {
        let country = key.parse::<Country>().map_err(RateLookupError::UnknownCountry)?;
        match self.cards.get(&country) {
            Some(tiers) => Ok(tiers.as_slice()),
            None => Err(RateLookupError::UnknownCountry(key.trim().to_string())),
        }
    }

    /// Picks the smallest tier whose weight covers `weight_kg`.
    pub fn quote(
        &self,
        country: Country,
        weight_kg: f64,
        service: ServiceLevel,
    ) -> Result<Quote, QuoteError> {
        if !(weight_kg.is_finite() && weight_kg > 0.0) {
            return Err(QuoteError::InvalidWeight(weight_kg));
        }

        let tiers = self.tiers(country);
        let tier = tiers
            .iter()
            .find(|tier| tier.weight_kg().is_some_and(|max| weight_kg <= max));

        match tier {
            Some(tier) => Ok(Quote {
                country,
                service,
                tier: tier.clone(),
                price: tier.price(service),
            }),
            None => Err(QuoteError::OverweightForCountry {
                country,
                weight_kg,
                max_kg: tiers
                    .iter()
                    .filter_map(RateTier::weight_kg)
                    .fold(0.0, f64::max),
            }),
        }
    }
}

/// Rate rows for a country key such as `"uk"`.
pub fn rate_lookup(key: &str) -> Result<&'static [RateTier], RateLookupError> {
    RateTable::bundled().lookup(key)
}

pub fn rates_for(country: Country) -> &'static [RateTier] {
    RateTable::bundled().tiers(country)
}

pub fn quote(country: Country, weight_kg: f64, service: ServiceLevel) -> Result<Quote, QuoteError> {
    RateTable::bundled().quote(country, weight_kg, service)
}

/// Groups a rupee amount the way the rate card prints it (`3,350`).
pub fn format_rupees(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("₹ {out}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strictly_increasing(values: &[f64]) -> bool {
        values.windows(2).all(|pair| pair[0] < pair[1])
    }

    #[test]
    fn every_country_has_increasing_tiers() {
        for country in Country::ALL {
            let tiers = rate_lookup(country.id()).unwrap();
            assert!(!tiers.is_empty(), "{country} has no tiers");

            let weights: Vec<f64> = tiers.iter().map(|t| t.weight_kg().unwrap()).collect();
            assert!(strictly_increasing(&weights), "{country} weights");
            for service in ServiceLevel::ALL {
                let prices: Vec<f64> = tiers.iter().map(|t| t.price(service) as f64).collect();
                assert!(strictly_increasing(&prices), "{country} {}", service.name());
            }
        }
    }

    #[test]
    fn uk_first_row_matches_rate_card() {
        let first = &rate_lookup("uk").unwrap()[0];
        assert_eq!(
            first,
            &RateTier {
                weight: "0.50 kg".into(),
                standard: 800,
                express: 1100,
                priority: 1500,
            }
        );
    }

    #[test]
    fn unknown_country_is_not_found() {
        assert_eq!(
            rate_lookup("france"),
            Err(RateLookupError::UnknownCountry("france".into()))
        );
    }

    #[test]
    fn country_missing_from_table_is_not_found() {
        let table = RateTable::from_json(r#"{"usa": []}"#).unwrap();
        assert_eq!(
            table.lookup("uk"),
            Err(RateLookupError::UnknownCountry("uk".into()))
        );
        assert!(table.tiers(Country::Uk).is_empty());
    }

    #[test]
    fn quote_rounds_up_to_covering_tier() {
        let quote = quote(Country::Usa, 0.6, ServiceLevel::Express).unwrap();
        assert_eq!(quote.tier.weight, "0.75 kg");
        assert_eq!(quote.price, 1450);

        let exact = super::quote(Country::Usa, 0.5, ServiceLevel::Standard).unwrap();
        assert_eq!(exact.price, 950);
    }

    #[test]
    fn quote_rejects_bad_weights() {
        assert_eq!(
            quote(Country::Uk, 0.0, ServiceLevel::Standard),
            Err(QuoteError::InvalidWeight(0.0))
        );
        assert!(matches!(
            quote(Country::Uk, 12.0, ServiceLevel::Priority),
            Err(QuoteError::OverweightForCountry { max_kg, .. }) if max_kg == 5.0
        ));
    }

    #[test]
    fn non_finite_weight_reads_as_invalid() {
        let err = quote(Country::Uk, f64::INFINITY, ServiceLevel::Standard).unwrap_err();
        assert_eq!(err.to_string(), "weight must be a positive number of kg (got inf)");
        assert!(matches!(
            quote(Country::Uk, f64::NAN, ServiceLevel::Standard),
            Err(QuoteError::InvalidWeight(w)) if w.is_nan()
        ));
    }

    #[test]
    fn rupees_are_grouped_by_thousands() {
        assert_eq!(format_rupees(800), "₹ 800");
        assert_eq!(format_rupees(3350), "₹ 3,350");
        assert_eq!(format_rupees(1_234_567), "₹ 1,234,567");
    }
}
