use crate::dtos::{DepartmentDTO, ReminderListDTO};
use birthday_reminder_domain::{Department, ReminderList, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentResponse {
    pub department: DepartmentDTO,
}

impl DepartmentResponse {
    pub fn new(department: Department) -> Self {
        Self {
            department: DepartmentDTO::new(department),
        }
    }
}

pub mod create_department {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
    }

    pub type APIResponse = DepartmentResponse;
}

pub mod get_department {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub department_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub department: DepartmentDTO,
        pub reminder_lists: Vec<ReminderListDTO>,
    }

    impl APIResponse {
        pub fn new(department: Department, reminder_lists: Vec<ReminderList>) -> Self {
            Self {
                department: DepartmentDTO::new(department),
                reminder_lists: reminder_lists.into_iter().map(ReminderListDTO::new).collect(),
            }
        }
    }
}

pub mod delete_department {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub department_id: ID,
    }

    pub type APIResponse = DepartmentResponse;
}
