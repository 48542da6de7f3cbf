//! Shift allocation engine.
//!
//! The pipeline for one period:
//! - [`calendar`] enumerates the period and marks workdays
//! - [`targets`] prorates each employee's monthly hours to the period
//! - [`availability`] answers whether an employee can or prefers to work a slot
//! - [`day_allocator`] picks who works each workday
//! - [`period_allocator`] drives the day allocator across the period
//!
//! [`statistics`] summarizes the resulting assignment list.

pub mod availability;
pub mod calendar;
pub mod day_allocator;
pub mod period_allocator;
pub mod statistics;
pub mod targets;

pub use availability::{is_available, preference_weight};
pub use calendar::{DayType, PeriodDays, count_workdays, days_in_period, get_day_type, is_workday};
pub use day_allocator::{
    ALLOCATION_SHIFT_TYPE, AllocationState, DAILY_SHIFT_CAP, PREFERENCE_BONUS, allocate_day,
    ranking_score,
};
pub use period_allocator::{allocate_period, allocate_period_with_state};
pub use statistics::{employee_stats, period_stats};
pub use targets::{NOMINAL_MONTH_DAYS, calculate_targets, month_fraction};
