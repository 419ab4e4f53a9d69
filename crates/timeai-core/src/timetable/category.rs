use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::slot::TimeSlot;
use crate::error::ValidationError;

/// Occupation categories the assistant knows a timetable for.
///
/// Declaration order is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Housewife,
    Employee,
    Mechanic,
}

impl CategoryId {
    /// Every category, in canonical order.
    pub const ALL: [CategoryId; 3] = [
        CategoryId::Housewife,
        CategoryId::Employee,
        CategoryId::Mechanic,
    ];

    /// Section title shown above the category's slots.
    pub fn title(self) -> &'static str {
        match self {
            CategoryId::Housewife => "Housewife / Homemaker",
            CategoryId::Employee => "White-Collar Employee",
            CategoryId::Mechanic => "Mechanic",
        }
    }

    /// Lowercase substrings that select this category.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            CategoryId::Housewife => &["housewife", "homemaker"],
            CategoryId::Employee => &["white collar", "employee", "office"],
            CategoryId::Mechanic => &["mechanic", "workshop"],
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            CategoryId::Housewife => "housewife",
            CategoryId::Employee => "employee",
            CategoryId::Mechanic => "mechanic",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for CategoryId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        CategoryId::ALL
            .into_iter()
            .find(|id| id.slug() == wanted)
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

/// A titled, ordered daily timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub title: &'static str,
    pub slots: Vec<TimeSlot>,
}

impl Category {
    pub fn new(id: CategoryId, slots: Vec<TimeSlot>) -> Self {
        Self {
            id,
            title: id.title(),
            slots,
        }
    }
}
