use crate::dtos::{IdentityDTO, ReminderListDTO};
use birthday_reminder_domain::{Identity, ReminderList, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponse {
    pub identity: IdentityDTO,
}

impl IdentityResponse {
    pub fn new(identity: Identity) -> Self {
        Self {
            identity: IdentityDTO::new(identity),
        }
    }
}

pub mod create_identity {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub email: Option<String>,
    }

    pub type APIResponse = IdentityResponse;
}

pub mod get_identity {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub identity_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub identity: IdentityDTO,
        /// The reminder lists this identity is a recipient of
        pub reminder_memberships: Vec<ReminderListDTO>,
    }

    impl APIResponse {
        pub fn new(identity: Identity, memberships: Vec<ReminderList>) -> Self {
            Self {
                identity: IdentityDTO::new(identity),
                reminder_memberships: memberships.into_iter().map(ReminderListDTO::new).collect(),
            }
        }
    }
}

pub mod delete_identity {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub identity_id: ID,
    }

    pub type APIResponse = IdentityResponse;
}
