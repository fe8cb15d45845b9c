mod inmemory;

use birthday_reminder_domain::{Identity, ID};
pub use inmemory::InMemoryIdentityRepo;

#[async_trait::async_trait]
pub trait IIdentityRepo: Send + Sync {
    async fn insert(&self, identity: &Identity) -> anyhow::Result<()>;
    async fn find(&self, identity_id: &ID) -> Option<Identity>;
    async fn find_many(&self, identity_ids: &[ID]) -> Vec<Identity>;
    async fn delete(&self, identity_id: &ID) -> Option<Identity>;
}
