//! Tracking lookup model: identifier validation, status tones and the
//! per-screen lookup session.

use thiserror::Error;

use super::entities::TrackingRecord;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TrackingError {
    #[error("enter a tracking number")]
    EmptyInput,
    #[error("no shipment found for {0}")]
    NotFound(String),
    #[error("tracking service unavailable: {0}")]
    Transient(String),
}

impl TrackingError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, TrackingError::Transient(_))
    }
}

/// Trims the submitted identifier, rejecting blank input.
pub fn normalize_identifier(input: &str) -> Result<&str, TrackingError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(TrackingError::EmptyInput)
    } else {
        Ok(trimmed)
    }
}

/// Builds a record for `input` from a canned template. Only the AWB differs
/// between lookups.
pub fn record_from_template(
    input: &str,
    template: &TrackingRecord,
) -> Result<TrackingRecord, TrackingError> {
    let awb = normalize_identifier(input)?;
    Ok(TrackingRecord {
        awb: awb.to_string(),
        ..template.clone()
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusTone {
    Success,
    Warning,
    Primary,
}

/// Maps a free-form carrier status onto a display tone. Total: anything
/// unrecognised falls back to `Primary`.
pub fn status_tone(status: &str) -> StatusTone {
    // Upper-casing folds more variants than lower-casing (e.g. 'ſ' -> 'S').
    match status.to_uppercase().as_str() {
        "DELIVERED" => StatusTone::Success,
        "IN TRANSIT" => StatusTone::Warning,
        _ => StatusTone::Primary,
    }
}

/// Identifies one submitted lookup. Only the newest ticket may update the
/// session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LookupTicket(u64);

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LookupState {
    #[default]
    Idle,
    Loading {
        awb: String,
    },
    Loaded(TrackingRecord),
    Failed {
        awb: String,
        error: TrackingError,
    },
}

impl LookupState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LookupState::Loading { .. })
    }
}

/// View-model behind the tracking screen. Owns the displayed state and
/// discards responses for lookups that were superseded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackingSession {
    state: LookupState,
    latest: u64,
    /// Last successful record, kept visible while a new lookup is in flight.
    displayed: Option<TrackingRecord>,
}

impl TrackingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    pub fn displayed(&self) -> Option<&TrackingRecord> {
        self.displayed.as_ref()
    }

    /// Starts a lookup. Blank input leaves the session untouched.
    pub fn begin(&mut self, input: &str) -> Result<(LookupTicket, String), TrackingError> {
        let awb = normalize_identifier(input)?.to_string();
        self.latest += 1;
        self.state = LookupState::Loading { awb: awb.clone() };
        Ok((LookupTicket(self.latest), awb))
    }

    /// Applies a provider response. Returns `false` when the ticket is stale
    /// and the response was dropped.
    pub fn resolve(
        &mut self,
        ticket: LookupTicket,
        result: Result<TrackingRecord, TrackingError>,
    ) -> bool {
        if ticket.0 != self.latest {
            tracing::debug!(?ticket, latest = self.latest, "dropping stale tracking response");
            return false;
        }

        let awb = match &self.state {
            LookupState::Loading { awb } => awb.clone(),
            _ => return false,
        };

        self.state = match result {
            Ok(record) => {
                self.displayed = Some(record.clone());
                LookupState::Loaded(record)
            }
            Err(TrackingError::NotFound(_)) => {
                self.displayed = None;
                LookupState::Failed {
                    error: TrackingError::NotFound(awb.clone()),
                    awb,
                }
            }
            Err(error) => LookupState::Failed { awb, error },
        };
        true
    }

    /// Begins and resolves in one step with a synchronous lookup.
    #[cfg(test)]
    pub fn submit_with<F>(&mut self, input: &str, lookup: F) -> Result<(), TrackingError>
    where
        F: FnOnce(&str) -> Result<TrackingRecord, TrackingError>,
    {
        let (ticket, awb) = self.begin(input)?;
        self.resolve(ticket, lookup(&awb));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::domain::entities::TrackingEvent;

    fn template() -> TrackingRecord {
        TrackingRecord {
            awb: "TEMPLATE".into(),
            booking_date: "20 Dec, 2025 - 02:30 PM".into(),
            consignee: "John Smith".into(),
            destination: "USA (United States)".into(),
            status: "Delivered".into(),
            lastmile_awb: "UUS5CN4989718184382".into(),
            history: vec![
                TrackingEvent {
                    timestamp: "23-Dec-2025 10:45 AM".into(),
                    location: "USA".into(),
                    event: "Shipment Delivered".into(),
                },
                TrackingEvent {
                    timestamp: "20-Dec-2025 02:30 PM".into(),
                    location: "Delhi, India".into(),
                    event: "Order Picked Up from seller".into(),
                },
            ],
        }
    }

    #[test]
    fn template_lookup_uses_input_as_awb() {
        let record = record_from_template("SR123", &template()).unwrap();
        assert_eq!(record.awb, "SR123");
        assert_eq!(record.lastmile_awb, "UUS5CN4989718184382");

        let padded = record_from_template("  SR123 \n", &template()).unwrap();
        assert_eq!(padded.awb, "SR123");
    }

    #[test]
    fn blank_lookup_is_rejected() {
        assert_eq!(
            record_from_template("", &template()),
            Err(TrackingError::EmptyInput)
        );
        assert_eq!(
            record_from_template("   ", &template()),
            Err(TrackingError::EmptyInput)
        );
    }

    #[test]
    fn known_statuses_map_to_tones() {
        assert_eq!(status_tone("Delivered"), StatusTone::Success);
        assert_eq!(status_tone("IN TRANSIT"), StatusTone::Warning);
        assert_eq!(status_tone("in transit"), StatusTone::Warning);
        assert_eq!(status_tone("Out for delivery"), StatusTone::Primary);
        assert_eq!(status_tone(""), StatusTone::Primary);
    }

    #[test]
    fn non_ascii_letters_fold_onto_known_statuses() {
        assert_eq!(status_tone("in tranſit"), StatusTone::Warning);
        assert_eq!(status_tone("delıvered"), StatusTone::Success);
        assert_eq!(status_tone("in trańsit"), StatusTone::Primary);
    }

    proptest! {
        #[test]
        fn status_tone_ignores_case(status in "[a-zA-Z ]{0,12}|[dD][eE][lL][iI][vV][eE][rR][eE][dD]|[iI][nN] [tT][rR][aA][nN][sS][iI][tT]") {
            let tone = status_tone(&status);
            prop_assert_eq!(tone, status_tone(&status.to_uppercase()));
            prop_assert_eq!(tone, status_tone(&status.to_lowercase()));
        }
    }

    #[test]
    fn blank_submission_keeps_displayed_record() {
        let mut session = TrackingSession::new();
        session
            .submit_with("SR123", |awb| record_from_template(awb, &template()))
            .unwrap();
        let before = session.clone();

        assert_eq!(
            session.submit_with("", |awb| record_from_template(awb, &template())),
            Err(TrackingError::EmptyInput)
        );
        assert_eq!(
            session.submit_with("   ", |awb| record_from_template(awb, &template())),
            Err(TrackingError::EmptyInput)
        );
        assert_eq!(session, before);
        assert_eq!(session.displayed().map(|r| r.awb.as_str()), Some("SR123"));
    }

    #[test]
    fn history_keeps_fixture_order() {
        let mut session = TrackingSession::new();
        session
            .submit_with("ABC999", |awb| record_from_template(awb, &template()))
            .unwrap();
        let LookupState::Loaded(record) = session.state() else {
            panic!("expected loaded state, got {:?}", session.state());
        };
        assert!(!record.history.is_empty());
        assert_eq!(record.history, template().history);
    }

    #[test]
    fn superseded_response_is_discarded() {
        let mut session = TrackingSession::new();
        let (first, _) = session.begin("OLD1").unwrap();
        let (second, _) = session.begin("NEW2").unwrap();

        assert!(session.resolve(second, record_from_template("NEW2", &template())));
        assert!(!session.resolve(first, record_from_template("OLD1", &template())));

        assert_eq!(session.displayed().map(|r| r.awb.as_str()), Some("NEW2"));
    }

    #[test]
    fn not_found_clears_display_but_transient_keeps_it() {
        let mut session = TrackingSession::new();
        session
            .submit_with("SR1", |awb| record_from_template(awb, &template()))
            .unwrap();

        session
            .submit_with("SR2", |_| Err(TrackingError::Transient("timeout".into())))
            .unwrap();
        assert!(matches!(
            session.state(),
            LookupState::Failed { error, .. } if error.is_retryable()
        ));
        assert_eq!(session.displayed().map(|r| r.awb.as_str()), Some("SR1"));

        session
            .submit_with("SR3", |awb| Err(TrackingError::NotFound(awb.to_string())))
            .unwrap();
        assert_eq!(
            session.state(),
            &LookupState::Failed {
                awb: "SR3".into(),
                error: TrackingError::NotFound("SR3".into()),
            }
        );
        assert!(session.displayed().is_none());
    }
}
