mod inmemory;

use birthday_reminder_domain::{Department, ID};
pub use inmemory::InMemoryDepartmentRepo;

#[async_trait::async_trait]
pub trait IDepartmentRepo: Send + Sync {
    async fn insert(&self, department: &Department) -> anyhow::Result<()>;
    async fn find(&self, department_id: &ID) -> Option<Department>;
    async fn delete(&self, department_id: &ID) -> Option<Department>;
}
