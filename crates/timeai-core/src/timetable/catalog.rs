//! Built-in timetables.
//!
//! The catalog is built once on first use and shared read-only for the
//! rest of the process.

use std::sync::OnceLock;

use super::category::{Category, CategoryId};
use super::slot::TimeSlot;
use crate::error::ValidationError;

type SlotRow = (&'static str, &'static str, &'static str);

// ============================================================================
// BUILT-IN TIMETABLES
// ============================================================================

const HOUSEWIFE: &[SlotRow] = &[
    ("06:00", "07:00", "Wake up, hydration, light exercise"),
    ("07:00", "09:00", "Breakfast prep, family readiness, household setup"),
    ("09:00", "11:00", "Cleaning and organizing"),
    ("11:00", "13:00", "Lunch prep and errands"),
    ("13:00", "14:00", "Lunch + short rest"),
    ("14:00", "16:00", "Personal development / side project"),
    ("16:00", "19:00", "Snacks, kids/family support, dinner prep"),
    ("19:00", "21:00", "Dinner, cleanup, plan next day"),
    ("21:00", "22:00", "Relaxation / reading"),
];

const EMPLOYEE: &[SlotRow] = &[
    ("06:30", "07:30", "Wake up, workout, get ready"),
    ("07:30", "09:00", "Breakfast + commute"),
    ("09:00", "12:00", "Deep work block"),
    ("12:00", "13:00", "Lunch + short walk"),
    ("13:00", "17:30", "Meetings + task execution"),
    ("17:30", "19:00", "Commute back + unwind"),
    ("19:00", "21:00", "Family time / learning"),
    ("21:00", "22:30", "Light planning + sleep prep"),
];

const MECHANIC: &[SlotRow] = &[
    ("06:00", "07:00", "Wake up, stretching, breakfast"),
    ("07:00", "08:00", "Workshop opening and tool inspection"),
    ("08:00", "12:00", "Vehicle diagnosis and priority repairs"),
    ("12:00", "13:00", "Lunch break"),
    ("13:00", "17:00", "Repairs, testing, customer updates"),
    ("17:00", "18:00", "Parts inventory + cleanup"),
    ("18:00", "20:00", "Family time / hobby / skill upgrade"),
    ("20:00", "21:30", "Dinner + rest"),
];

fn rows_for(id: CategoryId) -> &'static [SlotRow] {
    match id {
        CategoryId::Housewife => HOUSEWIFE,
        CategoryId::Employee => EMPLOYEE,
        CategoryId::Mechanic => MECHANIC,
    }
}

/// Fixed mapping from category to its timetable.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Build the catalog from the built-in tables, validating every time.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError::InvalidTime`] found.
    pub fn try_builtin() -> Result<Self, ValidationError> {
        let categories = CategoryId::ALL
            .into_iter()
            .map(|id| -> Result<Category, ValidationError> {
                let slots = rows_for(id)
                    .iter()
                    .map(|(start, end, activity)| TimeSlot::new(start, end, *activity))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Category::new(id, slots))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { categories })
    }

    /// Shared process-wide catalog.
    pub fn builtin() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            // The tables above are checked by `builtin_tables_are_valid`.
            Catalog::try_builtin().expect("built-in timetables contain only valid HH:MM times")
        })
    }

    /// All categories in canonical order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: CategoryId) -> &Category {
        // `categories` is built from `CategoryId::ALL`, so the index always exists.
        &self.categories[id as usize]
    }

    pub fn schedule_for(&self, id: CategoryId) -> &[TimeSlot] {
        &self.category(id).slots
    }
}
