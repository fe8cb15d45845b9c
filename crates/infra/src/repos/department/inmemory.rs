use super::IDepartmentRepo;
use crate::repos::shared::inmemory_repo::*;
use birthday_reminder_domain::{Department, ID};

pub struct InMemoryDepartmentRepo {
    departments: std::sync::Mutex<Vec<Department>>,
}

impl InMemoryDepartmentRepo {
    pub fn new() -> Self {
        Self {
            departments: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IDepartmentRepo for InMemoryDepartmentRepo {
    async fn insert(&self, department: &Department) -> anyhow::Result<()> {
        insert(department, &self.departments);
        Ok(())
    }

    async fn find(&self, department_id: &ID) -> Option<Department> {
        find(department_id, &self.departments)
    }

    async fn delete(&self, department_id: &ID) -> Option<Department> {
        delete(department_id, &self.departments)
    }
}
