//! Tournament model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Tournament lifecycle status.
///
/// The backend sends display-cased strings (`"Active"`) on reads but expects
/// SCREAMING-case (`"ACTIVE"`) on writes, so this type owns both spellings:
/// deserialization accepts either, serialization always emits the wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TournamentStatus {
    Upcoming,
    Active,
    Completed,
}

impl TournamentStatus {
    /// Display-cased form, as list and detail responses carry it
    pub fn display(&self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }

    /// SCREAMING-case form expected by create and update requests
    pub fn wire(&self) -> &'static str {
        match self {
            Self::Upcoming => "UPCOMING",
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
        }
    }

    /// Parse either spelling
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "UPCOMING" => Some(Self::Upcoming),
            "ACTIVE" => Some(Self::Active),
            "COMPLETED" => Some(Self::Completed),
            _ => None,
        }
    }
}

impl Serialize for TournamentStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire())
    }
}

impl<'de> Deserialize<'de> for TournamentStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("unknown tournament status: {s}")))
    }
}

/// Tournament snapshot as the backend serves it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Problem statement markup, rendered by the document renderer
    pub statement: Option<String>,
    pub status: TournamentStatus,
    pub start_date: String,
    pub end_date: String,
    pub prize_pool: Option<String>,
    #[serde(default)]
    pub points: i64,
    pub difficulty: Option<String>,
    pub creator_id: Option<i64>,
}

impl Tournament {
    /// Whether solutions can currently be submitted
    pub fn accepts_submissions(&self) -> bool {
        self.status == TournamentStatus::Active
    }
}
