//! Domain Value Objects

use chrono::{NaiveDate, NaiveTime};
use derive_more::Display;
use serde::{Deserialize, Serialize};

// ============================================================================
// Booking status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    #[display("pending")]
    Pending,
    #[display("confirmed")]
    Confirmed,
    #[display("completed")]
    Completed,
    #[display("cancelled")]
    Cancelled,
}

impl BookingStatus {
    /// Pending and confirmed bookings hold their slot
    #[inline]
    pub const fn holds_slot(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }

    /// Completed and cancelled bookings are final
    pub const fn can_transition_to(&self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (*self, next),
            (Pending, Pending)
                | (Pending, Confirmed)
                | (Pending, Cancelled)
                | (Confirmed, Confirmed)
                | (Confirmed, Completed)
                | (Confirmed, Cancelled)
                | (Completed, Completed)
                | (Cancelled, Cancelled)
        )
    }
}

// ============================================================================
// Employment type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    #[default]
    #[display("full_time")]
    FullTime,
    #[display("part_time")]
    PartTime,
    #[display("contract")]
    Contract,
    #[display("internship")]
    Internship,
}

// ============================================================================
// Message status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageStatus {
    #[default]
    #[display("new")]
    New,
    #[display("read")]
    Read,
    #[display("replied")]
    Replied,
    #[display("archived")]
    Archived,
}

// ============================================================================
// Booking schedule
// ============================================================================

/// `YYYY-MM-DD`
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

/// Strict `HH:MM`, 24-hour clock
pub fn parse_time(input: &str) -> Option<NaiveTime> {
    let input = input.trim();
    if input.len() != 5 {
        return None;
    }
    NaiveTime::parse_from_str(input, "%H:%M").ok()
}

/// Serde adapter rendering [`NaiveTime`] as `HH:MM`
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format("%H:%M"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw).ok_or_else(|| de::Error::custom("expected time as HH:MM"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_status_transitions() {
        use BookingStatus::*;
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Confirmed.can_transition_to(Completed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(!Pending.can_transition_to(Completed));
        assert!(!Cancelled.can_transition_to(Pending));
        assert!(!Completed.can_transition_to(Cancelled));
    }

    #[test]
    fn test_holds_slot() {
        assert!(BookingStatus::Pending.holds_slot());
        assert!(BookingStatus::Confirmed.holds_slot());
        assert!(!BookingStatus::Cancelled.holds_slot());
    }

    #[test]
    fn test_status_wire_format_matches_display() {
        let json = serde_json::to_string(&EmploymentType::PartTime).unwrap();
        assert_eq!(json, format!("\"{}\"", EmploymentType::PartTime));
        let status: MessageStatus = serde_json::from_str("\"replied\"").unwrap();
        assert_eq!(status, MessageStatus::Replied);
    }

    #[test]
    fn test_parse_time_is_strict() {
        assert_eq!(parse_time("09:30"), NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(parse_time("23:59"), NaiveTime::from_hms_opt(23, 59, 0));
        assert_eq!(parse_time("9:30"), None);
        assert_eq!(parse_time("24:00"), None);
        assert_eq!(parse_time("09:30:00"), None);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2030-02-28"), NaiveDate::from_ymd_opt(2030, 2, 28));
        assert_eq!(parse_date("2030-02-30"), None);
        assert_eq!(parse_date("28/02/2030"), None);
    }
}
