//! Employee management: validation, uniqueness and availability edits.

use std::sync::Arc;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{Availability, Employee, EmployeeInput};
use crate::store::EmployeeStore;

/// Business rules for creating and editing employees.
#[derive(Debug, Clone)]
pub struct EmployeeService {
    store: Arc<EmployeeStore>,
}

impl EmployeeService {
    /// Creates a service over `store`.
    pub fn new(store: Arc<EmployeeStore>) -> Self {
        Self { store }
    }

    /// Normalizes, validates and stores a new employee.
    ///
    /// Fails with `EmployeeAlreadyExists` if the normalized email is taken.
    pub async fn create(&self, input: EmployeeInput) -> EngineResult<Employee> {
        let input = input.normalized();
        input.validate()?;

        let employee = self.store.create(input).await?;
        info!(employee_id = %employee.id, email = %employee.email, "Employee created");
        Ok(employee)
    }

    /// Fetches one employee.
    pub async fn get(&self, id: &str) -> EngineResult<Employee> {
        self.store.get(id).await
    }

    /// Every employee, active or not.
    pub async fn list(&self) -> Vec<Employee> {
        self.store.list().await
    }

    /// Active employees only.
    pub async fn list_active(&self) -> Vec<Employee> {
        self.store.list_active().await
    }

    /// Replaces the editable fields of an employee.
    pub async fn update(&self, id: &str, input: EmployeeInput) -> EngineResult<Employee> {
        let input = input.normalized();
        input.validate()?;

        let employee = self.store.update(id, input).await?;
        info!(employee_id = %employee.id, "Employee updated");
        Ok(employee)
    }

    /// Deactivates an employee.
    pub async fn delete(&self, id: &str) -> EngineResult<()> {
        self.store.delete(id).await?;
        info!(employee_id = %id, "Employee deactivated");
        Ok(())
    }

    /// Appends an availability entry.
    ///
    /// Entries ending before they start are rejected here even though the
    /// allocator would ignore them.
    pub async fn add_availability(
        &self,
        id: &str,
        availability: Availability,
    ) -> EngineResult<Employee> {
        if availability.end_date < availability.start_date {
            return Err(EngineError::InvalidAvailability {
                message: format!(
                    "end_date {} is before start_date {}",
                    availability.end_date, availability.start_date
                ),
            });
        }

        self.store
            .modify(id, |employee| {
                employee.availability.push(availability);
                Ok(())
            })
            .await
    }

    /// Removes the availability entry at `index`.
    pub async fn remove_availability(&self, id: &str, index: usize) -> EngineResult<Employee> {
        self.store
            .modify(id, |employee| {
                if index >= employee.availability.len() {
                    return Err(EngineError::AvailabilityNotFound {
                        employee_id: employee.id.clone(),
                        index,
                    });
                }
                employee.availability.remove(index);
                Ok(())
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AvailabilityKind;
    use chrono::NaiveDate;

    fn service() -> EmployeeService {
        EmployeeService::new(Arc::new(EmployeeStore::new()))
    }

    fn input(name: &str, email: &str) -> EmployeeInput {
        EmployeeInput {
            name: name.to_string(),
            email: email.to_string(),
            role: "Developer".to_string(),
            role_description: String::new(),
            monthly_hours: 160,
        }
    }

    fn leave(start: u32, end: u32) -> Availability {
        Availability {
            start_date: NaiveDate::from_ymd_opt(2025, 1, start).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, end).unwrap(),
            kind: AvailabilityKind::Unavailable,
            reason: Some("Vacation".to_string()),
            shift_types: vec![],
        }
    }

    #[tokio::test]
    async fn test_create_normalizes_input() {
        let employee = service()
            .create(input("  John Doe ", " John@Example.COM "))
            .await
            .unwrap();

        assert_eq!(employee.name, "John Doe");
        assert_eq!(employee.email, "john@example.com");
        assert!(employee.active);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_email() {
        let service = service();
        service.create(input("A", "a@example.com")).await.unwrap();

        let result = service.create(input("B", "A@EXAMPLE.com")).await;

        match result {
            Err(EngineError::EmployeeAlreadyExists { email }) => {
                assert_eq!(email, "a@example.com")
            }
            other => panic!("Expected EmployeeAlreadyExists, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input() {
        let result = service().create(input("A", "not-an-email")).await;
        assert!(matches!(
            result,
            Err(EngineError::InvalidEmployee { field, .. }) if field == "email"
        ));
    }

    #[tokio::test]
    async fn test_update_keeps_own_email() {
        let service = service();
        let created = service.create(input("A", "a@example.com")).await.unwrap();

        let mut changed = input("A Renamed", "a@example.com");
        changed.monthly_hours = 80;
        let updated = service.update(&created.id, changed).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "A Renamed");
        assert_eq!(updated.monthly_hours, 80);
    }

    #[tokio::test]
    async fn test_update_rejects_email_of_other_employee() {
        let service = service();
        service.create(input("A", "a@example.com")).await.unwrap();
        let b = service.create(input("B", "b@example.com")).await.unwrap();

        let result = service.update(&b.id, input("B", "a@example.com")).await;
        assert!(matches!(result, Err(EngineError::EmployeeAlreadyExists { .. })));
    }

    #[tokio::test]
    async fn test_delete_removes_from_active_list() {
        let service = service();
        let a = service.create(input("A", "a@example.com")).await.unwrap();
        service.create(input("B", "b@example.com")).await.unwrap();

        service.delete(&a.id).await.unwrap();

        let active: Vec<_> = service.list_active().await.into_iter().map(|e| e.name).collect();
        assert_eq!(active, vec!["B"]);
        assert_eq!(service.list().await.len(), 2);
    }

    #[tokio::test]
    async fn test_availability_add_and_remove() {
        let service = service();
        let a = service.create(input("A", "a@example.com")).await.unwrap();

        service.add_availability(&a.id, leave(6, 10)).await.unwrap();
        let employee = service.add_availability(&a.id, leave(20, 24)).await.unwrap();
        assert_eq!(employee.availability.len(), 2);

        let employee = service.remove_availability(&a.id, 0).await.unwrap();
        assert_eq!(employee.availability, vec![leave(20, 24)]);
    }

    #[tokio::test]
    async fn test_reversed_availability_is_rejected() {
        let service = service();
        let a = service.create(input("A", "a@example.com")).await.unwrap();

        let result = service.add_availability(&a.id, leave(10, 6)).await;

        assert!(matches!(result, Err(EngineError::InvalidAvailability { .. })));
        assert!(service.get(&a.id).await.unwrap().availability.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_availability_adds_are_all_kept() {
        let service = service();
        let a = service.create(input("A", "a@example.com")).await.unwrap();

        let handles: Vec<_> = (0..200u32)
            .map(|i| {
                let service = service.clone();
                let id = a.id.clone();
                let day = i % 28 + 1;
                tokio::spawn(async move { service.add_availability(&id, leave(day, day)).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(service.get(&a.id).await.unwrap().availability.len(), 200);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_creates_with_same_email_admit_one() {
        let service = service();

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let service = service.clone();
                tokio::spawn(async move {
                    service.create(input(&format!("Dup {i}"), "dup@example.com")).await
                })
            })
            .collect();
        let mut created = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => created += 1,
                Err(EngineError::EmployeeAlreadyExists { .. }) => {}
                Err(other) => panic!("Unexpected error: {other:?}"),
            }
        }

        assert_eq!(created, 1);
        assert_eq!(service.list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_availability_edit_bumps_updated_at() {
        let service = service();
        let a = service.create(input("A", "a@example.com")).await.unwrap();

        let employee = service.add_availability(&a.id, leave(6, 10)).await.unwrap();

        assert_eq!(employee.created_at, a.created_at);
        assert!(employee.updated_at >= a.updated_at);
    }

    #[tokio::test]
    async fn test_remove_out_of_range_availability() {
        let service = service();
        let a = service.create(input("A", "a@example.com")).await.unwrap();

        match service.remove_availability(&a.id, 3).await {
            Err(EngineError::AvailabilityNotFound { employee_id, index }) => {
                assert_eq!(employee_id, a.id);
                assert_eq!(index, 3);
            }
            other => panic!("Expected AvailabilityNotFound, got {other:?}"),
        }
    }
}
