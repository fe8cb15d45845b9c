use birthday_reminder_domain::{Identity, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct IdentityDTO {
    pub id: ID,
    pub name: String,
    pub email: Option<String>,
}

impl IdentityDTO {
    pub fn new(identity: Identity) -> Self {
        Self {
            id: identity.id,
            name: identity.name,
            email: identity.email,
        }
    }
}
