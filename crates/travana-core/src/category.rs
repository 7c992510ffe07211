//! Activity and expense categories
//!
//! Closed sets decoded leniently from the wire: anything unknown becomes
//! `Other`. Icons and colours are resolved by exhaustive matches so adding a
//! category fails to compile until every table knows about it.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ActivityCategory {
    Activity,
    Food,
    Shopping,
    Experience,
    Sightseeing,
    Stay,
    Travel,
    Other,
}

impl ActivityCategory {
    pub const ALL: [ActivityCategory; 8] = [
        ActivityCategory::Activity,
        ActivityCategory::Food,
        ActivityCategory::Shopping,
        ActivityCategory::Experience,
        ActivityCategory::Sightseeing,
        ActivityCategory::Stay,
        ActivityCategory::Travel,
        ActivityCategory::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityCategory::Activity => "activity",
            ActivityCategory::Food => "food",
            ActivityCategory::Shopping => "shopping",
            ActivityCategory::Experience => "experience",
            ActivityCategory::Sightseeing => "sightseeing",
            ActivityCategory::Stay => "stay",
            ActivityCategory::Travel => "travel",
            ActivityCategory::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityCategory::Activity => "Activity",
            ActivityCategory::Food => "Food",
            ActivityCategory::Shopping => "Shopping",
            ActivityCategory::Experience => "Experience",
            ActivityCategory::Sightseeing => "Sightseeing",
            ActivityCategory::Stay => "Stay",
            ActivityCategory::Travel => "Travel",
            ActivityCategory::Other => "Other",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            ActivityCategory::Sightseeing => Icon::Landmark,
            ActivityCategory::Travel => Icon::Plane,
            ActivityCategory::Food => Icon::Utensils,
            ActivityCategory::Shopping => Icon::ShoppingBag,
            ActivityCategory::Stay => Icon::Bed,
            ActivityCategory::Experience => Icon::Sparkles,
            ActivityCategory::Activity => Icon::Ticket,
            ActivityCategory::Other => Icon::MapPin,
        }
    }

    /// Strict parse used by forms; the wire decoder is lenient instead.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl From<String> for ActivityCategory {
    fn from(value: String) -> Self {
        Self::parse(&value).unwrap_or(ActivityCategory::Other)
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ExpenseCategory {
    Food,
    Stay,
    Transport,
    Shopping,
    Activity,
    Sightseeing,
    Experience,
    Travel,
    Misc,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 10] = [
        ExpenseCategory::Food,
        ExpenseCategory::Stay,
        ExpenseCategory::Transport,
        ExpenseCategory::Shopping,
        ExpenseCategory::Activity,
        ExpenseCategory::Sightseeing,
        ExpenseCategory::Experience,
        ExpenseCategory::Travel,
        ExpenseCategory::Misc,
        ExpenseCategory::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExpenseCategory::Food => "food",
            ExpenseCategory::Stay => "stay",
            ExpenseCategory::Transport => "transport",
            ExpenseCategory::Shopping => "shopping",
            ExpenseCategory::Activity => "activity",
            ExpenseCategory::Sightseeing => "sightseeing",
            ExpenseCategory::Experience => "experience",
            ExpenseCategory::Travel => "travel",
            ExpenseCategory::Misc => "misc",
            ExpenseCategory::Other => "other",
        }
    }

    /// Chart colour (hex)
    pub fn color(self) -> &'static str {
        match self {
            ExpenseCategory::Food => "#34d399",
            ExpenseCategory::Stay => "#60a5fa",
            ExpenseCategory::Transport => "#fbbf24",
            ExpenseCategory::Shopping => "#f472b6",
            ExpenseCategory::Activity => "#f97316",
            ExpenseCategory::Sightseeing => "#a78bfa",
            ExpenseCategory::Experience => "#4ade80",
            ExpenseCategory::Travel => "#38bdf8",
            ExpenseCategory::Misc => "#d1d5db",
            ExpenseCategory::Other => "#9ca3af",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl From<String> for ExpenseCategory {
    fn from(value: String) -> Self {
        Self::parse(&value).unwrap_or(ExpenseCategory::Other)
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icons the view layer knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Landmark,
    Plane,
    Utensils,
    ShoppingBag,
    Bed,
    Sparkles,
    Ticket,
    MapPin,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Landmark => "🏛",
            Icon::Plane => "✈",
            Icon::Utensils => "🍴",
            Icon::ShoppingBag => "🛍",
            Icon::Bed => "🛏",
            Icon::Sparkles => "✨",
            Icon::Ticket => "🎟",
            Icon::MapPin => "📍",
        }
    }
}
