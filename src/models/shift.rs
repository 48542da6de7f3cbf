//! Shift catalog and shift assignment types.
//!
//! This module defines the closed set of shift types, the static catalog that
//! maps each type to its time window and duration, and the [`ShiftAssignment`]
//! record produced by the allocator.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A shift-type label from the catalog.
///
/// # Example
///
/// ```
/// use shift_allocator::models::ShiftType;
///
/// let shift_type: ShiftType = "full_day".parse().unwrap();
/// assert_eq!(shift_type, ShiftType::FullDay);
/// assert_eq!(shift_type.to_string(), "full_day");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    /// 09:00 - 13:00.
    Morning,
    /// 13:00 - 17:00.
    Afternoon,
    /// 17:00 - 21:00.
    Evening,
    /// 09:00 - 17:00.
    FullDay,
    /// 21:00 - 05:00, crossing midnight.
    Night,
}

impl ShiftType {
    /// Every shift type, in catalog order.
    pub const ALL: [ShiftType; 5] = [
        ShiftType::Morning,
        ShiftType::Afternoon,
        ShiftType::Evening,
        ShiftType::FullDay,
        ShiftType::Night,
    ];

    /// Returns the wire label for this shift type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftType::Morning => "morning",
            ShiftType::Afternoon => "afternoon",
            ShiftType::Evening => "evening",
            ShiftType::FullDay => "full_day",
            ShiftType::Night => "night",
        }
    }

    /// Returns the catalog entry for this shift type.
    pub fn definition(&self) -> &'static ShiftDefinition {
        match self {
            ShiftType::Morning => &SHIFT_CATALOG[0],
            ShiftType::Afternoon => &SHIFT_CATALOG[1],
            ShiftType::Evening => &SHIFT_CATALOG[2],
            ShiftType::FullDay => &SHIFT_CATALOG[3],
            ShiftType::Night => &SHIFT_CATALOG[4],
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShiftType {
    type Err = EngineError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        ShiftType::ALL
            .into_iter()
            .find(|shift_type| shift_type.as_str() == label)
            .ok_or_else(|| EngineError::UnknownShiftType {
                label: label.to_string(),
            })
    }
}

/// A catalog entry: the time window and paid hours of one shift type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftDefinition {
    /// The shift type this entry describes.
    pub shift_type: ShiftType,
    /// Start time as `HH:MM`.
    pub start_time: &'static str,
    /// End time as `HH:MM`.
    pub end_time: &'static str,
    /// Duration in hours.
    pub hours: f64,
}

/// The process-wide shift catalog.
pub static SHIFT_CATALOG: [ShiftDefinition; 5] = [
    ShiftDefinition {
        shift_type: ShiftType::Morning,
        start_time: "09:00",
        end_time: "13:00",
        hours: 4.0,
    },
    ShiftDefinition {
        shift_type: ShiftType::Afternoon,
        start_time: "13:00",
        end_time: "17:00",
        hours: 4.0,
    },
    ShiftDefinition {
        shift_type: ShiftType::Evening,
        start_time: "17:00",
        end_time: "21:00",
        hours: 4.0,
    },
    ShiftDefinition {
        shift_type: ShiftType::FullDay,
        start_time: "09:00",
        end_time: "17:00",
        hours: 8.0,
    },
    ShiftDefinition {
        shift_type: ShiftType::Night,
        start_time: "21:00",
        end_time: "05:00",
        hours: 8.0,
    },
];

/// Looks up a catalog entry by its wire label.
///
/// Returns `None` for labels outside the catalog.
///
/// # Example
///
/// ```
/// use shift_allocator::models::shift_definition;
///
/// assert_eq!(shift_definition("night").unwrap().hours, 8.0);
/// assert!(shift_definition("brunch").is_none());
/// ```
pub fn shift_definition(label: &str) -> Option<&'static ShiftDefinition> {
    label.parse::<ShiftType>().ok().map(|t| t.definition())
}

/// One employee working one shift on one date.
///
/// The employee name is a snapshot taken at allocation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    /// The assigned employee's identifier.
    pub employee_id: String,
    /// The assigned employee's name when the assignment was made.
    pub employee_name: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The shift type worked.
    pub shift_type: ShiftType,
    /// Start time as `HH:MM`.
    pub start_time: String,
    /// End time as `HH:MM`.
    pub end_time: String,
    /// Duration in hours, always the catalog duration of `shift_type`.
    pub hours: f64,
}

impl ShiftAssignment {
    /// Creates an assignment for `employee` on `date`, copying times and
    /// duration from the catalog entry.
    pub fn new(
        employee_id: impl Into<String>,
        employee_name: impl Into<String>,
        date: NaiveDate,
        definition: &ShiftDefinition,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            employee_name: employee_name.into(),
            date,
            shift_type: definition.shift_type,
            start_time: definition.start_time.to_string(),
            end_time: definition.end_time.to_string(),
            hours: definition.hours,
        }
    }
}
