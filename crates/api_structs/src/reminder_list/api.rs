use crate::dtos::ReminderListDTO;
use crate::nullable::deserialize_nullable;
use birthday_reminder_domain::{ReminderList, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderListResponse {
    pub reminder_list: ReminderListDTO,
}

impl ReminderListResponse {
    pub fn new(list: ReminderList) -> Self {
        Self {
            reminder_list: ReminderListDTO::new(list),
        }
    }
}

pub mod create_reminder_list {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub lead_days: Option<u32>,
        pub department_id: Option<ID>,
        #[serde(default)]
        pub recipients: Vec<ID>,
    }

    pub type APIResponse = ReminderListResponse;
}

pub mod get_reminder_list {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub reminder_list_id: ID,
    }

    pub type APIResponse = ReminderListResponse;
}

pub mod update_reminder_list {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub reminder_list_id: ID,
    }

    /// Missing fields are left unchanged, a `null` department detaches the list
    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: Option<String>,
        pub lead_days: Option<u32>,
        #[serde(
            default,
            deserialize_with = "deserialize_nullable",
            skip_serializing_if = "Option::is_none"
        )]
        pub department_id: Option<Option<ID>>,
        pub recipients: Option<Vec<ID>>,
    }

    pub type APIResponse = ReminderListResponse;
}

pub mod delete_reminder_list {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub reminder_list_id: ID,
    }

    pub type APIResponse = ReminderListResponse;
}
