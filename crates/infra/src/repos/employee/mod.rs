mod inmemory;

use birthday_reminder_domain::{Employee, ID};
pub use inmemory::InMemoryEmployeeRepo;

#[async_trait::async_trait]
pub trait IEmployeeRepo: Send + Sync {
    async fn insert(&self, employee: &Employee) -> anyhow::Result<()>;
    async fn save(&self, employee: &Employee) -> anyhow::Result<()>;
    async fn find(&self, employee_id: &ID) -> Option<Employee>;
    /// All `Employee`s that opted in to the birthday reminders
    async fn find_reminder_enabled(&self) -> Vec<Employee>;
    async fn delete(&self, employee_id: &ID) -> Option<Employee>;
    /// Unlinks the `Identity` from every `Employee` linked to it
    async fn unlink_identity(&self, identity_id: &ID) -> anyhow::Result<()>;
}
