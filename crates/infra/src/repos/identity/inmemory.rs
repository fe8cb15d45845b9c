use super::IIdentityRepo;
use crate::repos::shared::inmemory_repo::*;
use birthday_reminder_domain::{Identity, ID};

pub struct InMemoryIdentityRepo {
    identities: std::sync::Mutex<Vec<Identity>>,
}

impl InMemoryIdentityRepo {
    pub fn new() -> Self {
        Self {
            identities: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IIdentityRepo for InMemoryIdentityRepo {
    async fn insert(&self, identity: &Identity) -> anyhow::Result<()> {
        insert(identity, &self.identities);
        Ok(())
    }

    async fn find(&self, identity_id: &ID) -> Option<Identity> {
        find(identity_id, &self.identities)
    }

    async fn find_many(&self, identity_ids: &[ID]) -> Vec<Identity> {
        find_by(&self.identities, |identity| {
            identity_ids.contains(&identity.id)
        })
    }

    async fn delete(&self, identity_id: &ID) -> Option<Identity> {
        delete(identity_id, &self.identities)
    }
}
