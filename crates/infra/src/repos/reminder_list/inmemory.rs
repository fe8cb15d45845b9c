use super::IReminderListRepo;
use crate::repos::shared::inmemory_repo::*;
use birthday_reminder_domain::{ReminderList, ID};

pub struct InMemoryReminderListRepo {
    lists: std::sync::Mutex<Vec<ReminderList>>,
}

impl InMemoryReminderListRepo {
    pub fn new() -> Self {
        Self {
            lists: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IReminderListRepo for InMemoryReminderListRepo {
    async fn insert(&self, list: &ReminderList) -> anyhow::Result<()> {
        insert(list, &self.lists);
        Ok(())
    }

    async fn save(&self, list: &ReminderList) -> anyhow::Result<()> {
        if save(list, &self.lists) {
            Ok(())
        } else {
            Err(anyhow::anyhow!("Reminder list {} does not exist", list.id))
        }
    }

    async fn find(&self, list_id: &ID) -> Option<ReminderList> {
        find(list_id, &self.lists)
    }

    async fn find_by_recipient(&self, identity_id: &ID) -> Vec<ReminderList> {
        find_by(&self.lists, |list| list.has_recipient(identity_id))
    }

    async fn find_by_department(&self, department_id: &ID) -> Vec<ReminderList> {
        find_by(&self.lists, |list| {
            list.department_id.as_ref() == Some(department_id)
        })
    }

    async fn delete(&self, list_id: &ID) -> Option<ReminderList> {
        delete(list_id, &self.lists)
    }

    async fn remove_recipient(&self, identity_id: &ID) -> anyhow::Result<()> {
        update_many(
            &self.lists,
            |list| list.has_recipient(identity_id),
            |list| list.remove_recipient(identity_id),
        );
        Ok(())
    }

    async fn clear_department(&self, department_id: &ID) -> anyhow::Result<()> {
        update_many(
            &self.lists,
            |list| list.department_id.as_ref() == Some(department_id),
            |list| list.department_id = None,
        );
        Ok(())
    }
}
