//! ADR status categories
//!
//! A record's status is decided from the paragraphs found under its
//! `## Status` heading. Rules are checked in a fixed priority order, so a
//! record that was accepted and later amended reads as `amended` no matter
//! which line comes first in the document.

use serde::Serialize;

/// Status of an architecture decision record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AdrStatus {
    /// Changed by a later record
    Amended,

    /// In force
    Accepted,

    /// Replaced by a later record
    Superceded,

    /// Proposed, no decision yet
    Pending,

    /// Declined
    Rejected,

    /// No recognizable status line
    #[default]
    Unknown,
}

/// Prefix rules in priority order
const RULES: &[(&str, AdrStatus)] = &[
    ("Amended by", AdrStatus::Amended),
    ("Accepted", AdrStatus::Accepted),
    ("Superceded by", AdrStatus::Superceded),
    ("Pending", AdrStatus::Pending),
    ("Rejected", AdrStatus::Rejected),
];

impl AdrStatus {
    /// Classifies a set of status lines.
    ///
    /// Prefix matching is literal and case-sensitive. Only the presence of a
    /// matching line matters, not its position or how many there are.
    pub fn classify<S: AsRef<str>>(lines: &[S]) -> Self {
        RULES
            .iter()
            .find(|(prefix, _)| lines.iter().any(|line| line.as_ref().starts_with(prefix)))
            .map(|(_, status)| *status)
            .unwrap_or(AdrStatus::Unknown)
    }

    /// Returns the lowercase label used in CSS classes and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            AdrStatus::Amended => "amended",
            AdrStatus::Accepted => "accepted",
            AdrStatus::Superceded => "superceded",
            AdrStatus::Pending => "pending",
            AdrStatus::Rejected => "rejected",
            AdrStatus::Unknown => "unknown",
        }
    }

    /// Returns all valid status values
    pub fn all() -> &'static [AdrStatus] {
        &[
            AdrStatus::Amended,
            AdrStatus::Accepted,
            AdrStatus::Superceded,
            AdrStatus::Pending,
            AdrStatus::Rejected,
            AdrStatus::Unknown,
        ]
    }
}

impl std::fmt::Display for AdrStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AdrStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AdrStatus::all()
            .iter()
            .find(|status| status.as_str() == s.to_lowercase())
            .copied()
            .ok_or_else(|| format!("Unknown ADR status: {}", s))
    }
}
