//! Employee model and availability entries.
//!
//! The allocator treats an [`Employee`] as read-only input for the duration
//! of one run. Creation and updates go through [`EmployeeInput`], which
//! normalizes and validates the user-supplied fields.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::ShiftType;

/// Maximum length of the name and role fields.
pub const MAX_NAME_LENGTH: usize = 100;
/// Maximum length of an email address.
pub const MAX_EMAIL_LENGTH: usize = 255;
/// Upper bound for monthly hours (31 days * 24 hours).
pub const MAX_MONTHLY_HOURS: u32 = 744;

/// The meaning of an availability entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityKind {
    /// Explicitly available. Has no effect beyond the default.
    Available,
    /// Cannot work matching shifts.
    Unavailable,
    /// Would like to work matching shifts.
    Preferred,
}

/// A date-range-scoped availability rule.
///
/// Both `start_date` and `end_date` are inclusive. An empty `shift_types`
/// list applies the entry to every shift type. An entry whose end precedes
/// its start never matches any date.
///
/// # Example
///
/// ```
/// use shift_allocator::models::{Availability, AvailabilityKind, ShiftType};
/// use chrono::NaiveDate;
///
/// let leave = Availability {
///     start_date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
///     kind: AvailabilityKind::Unavailable,
///     reason: Some("Vacation".to_string()),
///     shift_types: vec![],
/// };
///
/// assert!(leave.matches(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(), ShiftType::Night));
/// assert!(!leave.matches(NaiveDate::from_ymd_opt(2025, 1, 11).unwrap(), ShiftType::Night));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    /// First day covered (inclusive).
    pub start_date: NaiveDate,
    /// Last day covered (inclusive).
    pub end_date: NaiveDate,
    /// Whether this marks the employee available, unavailable or preferred.
    #[serde(rename = "type")]
    pub kind: AvailabilityKind,
    /// Free-text reason, ignored by the allocator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Shift types this entry is scoped to; empty means all.
    #[serde(default)]
    pub shift_types: Vec<ShiftType>,
}

impl Availability {
    /// Returns true if `date` lies within the entry's inclusive range.
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns true if the entry is unscoped or scoped to `shift_type`.
    pub fn applies_to(&self, shift_type: ShiftType) -> bool {
        self.shift_types.is_empty() || self.shift_types.contains(&shift_type)
    }

    /// Returns true if the entry covers `date` and applies to `shift_type`.
    pub fn matches(&self, date: NaiveDate, shift_type: ShiftType) -> bool {
        self.covers(date) && self.applies_to(shift_type)
    }
}

/// An employee in the allocation pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email (normalized to lowercase).
    pub email: String,
    /// Job role.
    pub role: String,
    /// Longer description of the role.
    #[serde(default)]
    pub role_description: String,
    /// Hours the employee should work in a nominal 30-day month.
    pub monthly_hours: u32,
    /// Inactive employees are excluded from new schedules.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Availability entries, evaluated together regardless of order.
    #[serde(default)]
    pub availability: Vec<Availability>,
    /// When the record was created.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// When the record was last changed.
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl Employee {
    /// Builds an active employee with no availability entries from `input`.
    pub fn from_input(id: impl Into<String>, input: EmployeeInput) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: input.name,
            email: input.email,
            role: input.role,
            role_description: input.role_description,
            monthly_hours: input.monthly_hours,
            active: true,
            availability: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites the editable fields with those from `input`.
    pub fn apply(&mut self, input: EmployeeInput) {
        self.name = input.name;
        self.email = input.email;
        self.role = input.role;
        self.role_description = input.role_description;
        self.monthly_hours = input.monthly_hours;
    }
}

/// The fields supplied when creating or updating an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeInput {
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Job role.
    pub role: String,
    /// Longer description of the role.
    #[serde(default)]
    pub role_description: String,
    /// Monthly hours target.
    pub monthly_hours: u32,
}

impl EmployeeInput {
    /// Trims text fields and lowercases the email.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            role: self.role.trim().to_string(),
            role_description: self.role_description.trim().to_string(),
            monthly_hours: self.monthly_hours,
        }
    }

    /// Checks every field, returning the first violation.
    ///
    /// Call on normalized input; surrounding whitespace is not stripped here.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_allocator::models::EmployeeInput;
    ///
    /// let input = EmployeeInput {
    ///     name: "John Doe".to_string(),
    ///     email: "john@example.com".to_string(),
    ///     role: "Developer".to_string(),
    ///     role_description: String::new(),
    ///     monthly_hours: 0,
    /// };
    /// assert!(input.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.name.trim().is_empty() || self.name.chars().count() > MAX_NAME_LENGTH {
            return Err(invalid(
                "name",
                "is required and must be at most 100 characters",
            ));
        }
        if self.email.chars().count() > MAX_EMAIL_LENGTH || !is_valid_email(&self.email) {
            return Err(invalid(
                "email",
                "a valid email of at most 255 characters is required",
            ));
        }
        if self.role.trim().is_empty() || self.role.chars().count() > MAX_NAME_LENGTH {
            return Err(invalid(
                "role",
                "is required and must be at most 100 characters",
            ));
        }
        if self.monthly_hours == 0 || self.monthly_hours > MAX_MONTHLY_HOURS {
            return Err(invalid("monthly_hours", "must be between 1 and 744"));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidEmployee {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.contains(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
