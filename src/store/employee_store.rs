//! In-memory employee persistence.

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EmployeeInput};

fn not_found(id: &str) -> EngineError {
    EngineError::EmployeeNotFound { id: id.to_string() }
}

/// Rejects `email` if any employee other than `except` holds it.
fn ensure_email_free(employees: &[Employee], email: &str, except: Option<&str>) -> EngineResult<()> {
    let taken = employees
        .iter()
        .any(|e| e.email == email && Some(e.id.as_str()) != except);
    if taken {
        return Err(EngineError::EmployeeAlreadyExists {
            email: email.to_string(),
        });
    }
    Ok(())
}

/// Employees in insertion order behind an async lock.
///
/// Every write takes the lock once and does its checks under it, so
/// concurrent edits to the same employee never overwrite each other.
/// Deleting an employee only clears `active`; the record stays so that
/// existing schedules keep a valid reference.
#[derive(Debug, Default)]
pub struct EmployeeStore {
    employees: RwLock<Vec<Employee>>,
}

impl EmployeeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new active employee under a fresh id.
    ///
    /// Fails with `EmployeeAlreadyExists` if `input.email` is taken.
    pub async fn create(&self, input: EmployeeInput) -> EngineResult<Employee> {
        let mut employees = self.employees.write().await;
        ensure_email_free(&employees, &input.email, None)?;

        let employee = Employee::from_input(Uuid::new_v4().to_string(), input);
        employees.push(employee.clone());
        Ok(employee)
    }

    /// Looks up an employee by id.
    pub async fn get(&self, id: &str) -> EngineResult<Employee> {
        self.employees
            .read()
            .await
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Every employee, active or not.
    pub async fn list(&self) -> Vec<Employee> {
        self.employees.read().await.clone()
    }

    /// Active employees only.
    pub async fn list_active(&self) -> Vec<Employee> {
        self.employees
            .read()
            .await
            .iter()
            .filter(|e| e.active)
            .cloned()
            .collect()
    }

    /// Overwrites the editable fields of an employee.
    ///
    /// Fails with `EmployeeAlreadyExists` if another employee holds
    /// `input.email`.
    pub async fn update(&self, id: &str, input: EmployeeInput) -> EngineResult<Employee> {
        let mut employees = self.employees.write().await;
        let index = employees
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| not_found(id))?;
        ensure_email_free(&employees, &input.email, Some(id))?;

        let employee = &mut employees[index];
        employee.apply(input);
        employee.updated_at = Utc::now();
        Ok(employee.clone())
    }

    /// Applies `change` to one employee and bumps `updated_at`.
    ///
    /// `change` runs on a copy while the write lock is held. If it returns
    /// an error the stored record is left as it was.
    pub async fn modify<F>(&self, id: &str, change: F) -> EngineResult<Employee>
    where
        F: FnOnce(&mut Employee) -> EngineResult<()>,
    {
        let mut employees = self.employees.write().await;
        let slot = employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| not_found(id))?;

        let mut employee = slot.clone();
        change(&mut employee)?;
        employee.updated_at = Utc::now();
        *slot = employee.clone();
        Ok(employee)
    }

    /// Marks the employee inactive.
    pub async fn delete(&self, id: &str) -> EngineResult<()> {
        self.modify(id, |employee| {
            employee.active = false;
            Ok(())
        })
        .await?;
        Ok(())
    }
}
