use crate::dtos::EmployeeDTO;
use crate::nullable::deserialize_nullable;
use birthday_reminder_domain::{Employee, ReminderList, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub employee: EmployeeDTO,
}

impl EmployeeResponse {
    pub fn new(employee: Employee, memberships: &[ReminderList], today: &NaiveDate) -> Self {
        Self {
            employee: EmployeeDTO::new(employee, memberships, today),
        }
    }
}

pub mod create_employee {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub birthdate: Option<NaiveDate>,
        #[serde(default)]
        pub remind_enabled: bool,
        pub identity_id: Option<ID>,
        pub department_id: Option<ID>,
        pub work_email: Option<String>,
    }

    pub type APIResponse = EmployeeResponse;
}

pub mod get_employee {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub employee_id: ID,
    }

    pub type APIResponse = EmployeeResponse;
}

pub mod update_employee {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub employee_id: ID,
    }

    /// Missing fields are left unchanged, `null` clears a field
    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: Option<String>,
        #[serde(
            default,
            deserialize_with = "deserialize_nullable",
            skip_serializing_if = "Option::is_none"
        )]
        pub birthdate: Option<Option<NaiveDate>>,
        pub remind_enabled: Option<bool>,
        #[serde(
            default,
            deserialize_with = "deserialize_nullable",
            skip_serializing_if = "Option::is_none"
        )]
        pub identity_id: Option<Option<ID>>,
        #[serde(
            default,
            deserialize_with = "deserialize_nullable",
            skip_serializing_if = "Option::is_none"
        )]
        pub department_id: Option<Option<ID>>,
        #[serde(
            default,
            deserialize_with = "deserialize_nullable",
            skip_serializing_if = "Option::is_none"
        )]
        pub work_email: Option<Option<String>>,
    }

    pub type APIResponse = EmployeeResponse;
}

pub mod delete_employee {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub employee_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub employee_id: ID,
    }
}

pub mod search_employees {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        /// `next_occurrence` or `remind_trigger`
        pub field: String,
        /// One of `=`, `>`, `>=`, `<`, `<=` and `!=`
        pub operator: String,
        /// A `YYYY-MM-DD` date
        pub value: String,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub employees: Vec<EmployeeDTO>,
    }

    impl APIResponse {
        pub fn new(employees: Vec<EmployeeDTO>) -> Self {
            Self { employees }
        }
    }
}
