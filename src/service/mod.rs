//! Services combining the stores, the allocator and webhook delivery.

mod employee_service;
mod schedule_service;

pub use employee_service::EmployeeService;
pub use schedule_service::ScheduleService;
