mod inmemory;

use birthday_reminder_domain::{ReminderList, ID};
pub use inmemory::InMemoryReminderListRepo;

#[async_trait::async_trait]
pub trait IReminderListRepo: Send + Sync {
    async fn insert(&self, list: &ReminderList) -> anyhow::Result<()>;
    async fn save(&self, list: &ReminderList) -> anyhow::Result<()>;
    async fn find(&self, list_id: &ID) -> Option<ReminderList>;
    /// The lists the `Identity` is a recipient of
    async fn find_by_recipient(&self, identity_id: &ID) -> Vec<ReminderList>;
    async fn find_by_department(&self, department_id: &ID) -> Vec<ReminderList>;
    async fn delete(&self, list_id: &ID) -> Option<ReminderList>;
    /// Removes the `Identity` from the recipients of every list
    async fn remove_recipient(&self, identity_id: &ID) -> anyhow::Result<()>;
    /// Clears the department of every list that belongs to it
    async fn clear_department(&self, department_id: &ID) -> anyhow::Result<()>;
}
