//! Event type enum as the single source of truth for event type tags and colors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of event types a cluster can be classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Ceremony,
    Cocktails,
    Dinner,
    FirstDance,
    Party,
    Prep,
    Unknown,
}

impl EventType {
    pub const ALL: [Self; 7] = [
        Self::Ceremony,
        Self::Cocktails,
        Self::Dinner,
        Self::FirstDance,
        Self::Party,
        Self::Prep,
        Self::Unknown,
    ];

    /// Tag used in serialized events.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ceremony => "ceremony",
            Self::Cocktails => "cocktails",
            Self::Dinner => "dinner",
            Self::FirstDance => "first_dance",
            Self::Party => "party",
            Self::Prep => "prep",
            Self::Unknown => "unknown",
        }
    }

    /// Suggested display color as a hex string.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Ceremony => "#3B82F6",
            Self::Cocktails => "#10B981",
            Self::Dinner => "#F59E0B",
            Self::FirstDance => "#EC4899",
            Self::Party => "#8B5CF6",
            Self::Prep => "#14B8A6",
            Self::Unknown => "#6B7280",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = UnknownEventType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownEventType(s.to_string()))
    }
}

impl Serialize for EventType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for unknown event type strings.
#[derive(Debug, Clone)]
pub struct UnknownEventType(String);

impl fmt::Display for UnknownEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown event type: {}", self.0)
    }
}

impl std::error::Error for UnknownEventType {}
