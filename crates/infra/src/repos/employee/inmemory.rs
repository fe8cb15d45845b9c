use super::IEmployeeRepo;
use crate::repos::shared::inmemory_repo::*;
use birthday_reminder_domain::{Employee, ID};

pub struct InMemoryEmployeeRepo {
    employees: std::sync::Mutex<Vec<Employee>>,
}

impl InMemoryEmployeeRepo {
    pub fn new() -> Self {
        Self {
            employees: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IEmployeeRepo for InMemoryEmployeeRepo {
    async fn insert(&self, employee: &Employee) -> anyhow::Result<()> {
        insert(employee, &self.employees);
        Ok(())
    }

    async fn save(&self, employee: &Employee) -> anyhow::Result<()> {
        if save(employee, &self.employees) {
            Ok(())
        } else {
            Err(anyhow::anyhow!("Employee {} does not exist", employee.id))
        }
    }

    async fn find(&self, employee_id: &ID) -> Option<Employee> {
        find(employee_id, &self.employees)
    }

    async fn find_reminder_enabled(&self) -> Vec<Employee> {
        find_by(&self.employees, |employee| employee.remind_enabled)
    }

    async fn delete(&self, employee_id: &ID) -> Option<Employee> {
        delete(employee_id, &self.employees)
    }

    async fn unlink_identity(&self, identity_id: &ID) -> anyhow::Result<()> {
        update_many(
            &self.employees,
            |employee| employee.identity_id.as_ref() == Some(identity_id),
            |employee| employee.identity_id = None,
        );
        Ok(())
    }
}
