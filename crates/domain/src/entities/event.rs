//! Planned event entity
//!
//! Describes an activity whose suitability depends on the weather.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// A planned event that may be affected by the weather
///
/// # Examples
///
/// ```
/// use domain::Event;
///
/// let event = Event::new("Picnic", true, false, 12).unwrap();
/// assert!(event.is_daytime());
/// assert_eq!(event.to_string(), "Event(Picnic @ 12, true, false)");
///
/// assert!(Event::new("Late show", false, true, 24).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(try_from = "EventFields")]
pub struct Event {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    name: String,
    outdoors: bool,
    cover_available: bool,
    /// Closest hour to the start of the event (0-23)
    #[validate(range(max = 23, message = "hour must be 0-23"))]
    hour: u8,
}

impl Event {
    /// Create a validated event
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEvent` if the name is empty or too long,
    /// or the hour is not 0-23.
    pub fn new(
        name: impl Into<String>,
        outdoors: bool,
        cover_available: bool,
        hour: u8,
    ) -> Result<Self, DomainError> {
        let candidate = Self {
            name: name.into().trim().to_string(),
            outdoors,
            cover_available,
            hour,
        };
        candidate
            .validate()
            .map_err(|e| DomainError::InvalidEvent(e.to_string()))?;

        Ok(candidate)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn is_outdoors(&self) -> bool {
        self.outdoors
    }

    /// Whether covered shelter is available at the venue
    #[must_use]
    pub const fn has_cover(&self) -> bool {
        self.cover_available
    }

    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Starts between 06:00 and 19:00 inclusive
    #[must_use]
    pub const fn is_daytime(&self) -> bool {
        matches!(self.hour, 6..=19)
    }

    /// Starts between midnight and 05:00 inclusive
    #[must_use]
    pub const fn is_early_morning(&self) -> bool {
        matches!(self.hour, 0..=5)
    }

    /// Starts between 20:00 and 23:00 inclusive
    #[must_use]
    pub const fn is_evening(&self) -> bool {
        matches!(self.hour, 20..=23)
    }
}

/// Unvalidated wire form of [`Event`]
#[derive(Deserialize)]
struct EventFields {
    name: String,
    outdoors: bool,
    cover_available: bool,
    hour: u8,
}

impl TryFrom<EventFields> for Event {
    type Error = DomainError;

    fn try_from(fields: EventFields) -> Result<Self, Self::Error> {
        Self::new(
            fields.name,
            fields.outdoors,
            fields.cover_available,
            fields.hour,
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event({} @ {}, {}, {})",
            self.name, self.hour, self.outdoors, self.cover_available
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_event() {
        let event = Event::new("Football match", true, true, 15).unwrap();
        assert_eq!(event.name(), "Football match");
        assert!(event.is_outdoors());
        assert!(event.has_cover());
        assert_eq!(event.hour(), 15);
    }

    #[test]
    fn test_name_is_trimmed() {
        let event = Event::new("  Concert ", false, false, 20).unwrap();
        assert_eq!(event.name(), "Concert");
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Event::new("   ", true, false, 10).unwrap_err();
        assert!(matches!(err, DomainError::InvalidEvent(_)));
    }

    #[test]
    fn test_hour_out_of_range_rejected() {
        assert!(Event::new("Dinner", false, false, 23).is_ok());
        let err = Event::new("Dinner", false, false, 24).unwrap_err();
        assert!(err.to_string().contains("hour must be 0-23"));
    }

    #[test]
    fn test_time_of_day_bands() {
        let early = Event::new("Sunrise yoga", true, false, 5).unwrap();
        assert!(early.is_early_morning());
        assert!(!early.is_daytime());

        let day = Event::new("Lunch", true, false, 6).unwrap();
        assert!(day.is_daytime());

        let late = Event::new("Gig", false, false, 19).unwrap();
        assert!(late.is_daytime());
        assert!(!late.is_evening());

        let evening = Event::new("Gig", false, false, 20).unwrap();
        assert!(evening.is_evening());
    }

    #[test]
    fn test_display() {
        let event = Event::new("BBQ", true, false, 18).unwrap();
        assert_eq!(event.to_string(), "Event(BBQ @ 18, true, false)");
    }

    #[test]
    fn test_serialization() {
        let event = Event::new("BBQ", true, false, 18).unwrap();
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"cover_available\":false"));
    }

    #[test]
    fn test_deserialization_validates() {
        let event: Event = serde_json::from_str(
            r#"{"name":" BBQ ","outdoors":true,"cover_available":false,"hour":18}"#,
        )
        .unwrap();
        assert_eq!(event, Event::new("BBQ", true, false, 18).unwrap());

        let empty_name = serde_json::from_str::<Event>(
            r#"{"name":"","outdoors":true,"cover_available":false,"hour":12}"#,
        );
        assert!(empty_name.is_err());

        let bad_hour = serde_json::from_str::<Event>(
            r#"{"name":"BBQ","outdoors":true,"cover_available":false,"hour":99}"#,
        )
        .unwrap_err();
        assert!(bad_hour.to_string().contains("hour must be 0-23"));
    }
}
