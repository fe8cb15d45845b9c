use birthday_reminder_domain::{Department, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDTO {
    pub id: ID,
    pub name: String,
}

impl DepartmentDTO {
    pub fn new(department: Department) -> Self {
        Self {
            id: department.id,
            name: department.name,
        }
    }
}
