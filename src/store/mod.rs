//! In-memory persistence for employees, schedules and the company profile.

mod company_store;
mod employee_store;
mod schedule_store;

pub use company_store::CompanyStore;
pub use employee_store::EmployeeStore;
pub use schedule_store::ScheduleStore;
