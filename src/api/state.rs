//! Application state for the shift allocation API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::CompanyConfig;
use crate::service::{EmployeeService, ScheduleService};
use crate::store::CompanyStore;

/// Shared application state.
///
/// Holds the services the handlers call into and the editable company
/// profile. Cloning is cheap; everything inside is reference counted.
#[derive(Debug, Clone)]
pub struct AppState {
    employees: EmployeeService,
    schedules: ScheduleService,
    company: Arc<CompanyStore>,
    period_days: u32,
}

impl AppState {
    /// Creates the state.
    ///
    /// `period_days` is the length used by `POST /schedules/generate`.
    pub fn new(
        employees: EmployeeService,
        schedules: ScheduleService,
        company: CompanyConfig,
        period_days: u32,
    ) -> Self {
        Self {
            employees,
            schedules,
            company: Arc::new(CompanyStore::new(company)),
            period_days,
        }
    }

    /// The employee service.
    pub fn employees(&self) -> &EmployeeService {
        &self.employees
    }

    /// The schedule service.
    pub fn schedules(&self) -> &ScheduleService {
        &self.schedules
    }

    /// The company profile store.
    pub fn company(&self) -> &CompanyStore {
        &self.company
    }

    /// Length of recurring periods in days.
    pub fn period_days(&self) -> u32 {
        self.period_days
    }
}
