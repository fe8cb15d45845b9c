use birthday_reminder_domain::{ReminderList, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReminderListDTO {
    pub id: ID,
    pub name: String,
    pub lead_days: u32,
    pub department_id: Option<ID>,
    pub recipients: Vec<ID>,
}

impl ReminderListDTO {
    pub fn new(list: ReminderList) -> Self {
        Self {
            id: list.id,
            name: list.name,
            lead_days: list.lead_days,
            department_id: list.department_id,
            recipients: list.recipients,
        }
    }
}
