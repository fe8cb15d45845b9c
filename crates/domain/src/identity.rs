use crate::shared::entity::{Entity, ID};
use serde::Serialize;

/// A contact that can be a sender, a member or a recipient of a `ReminderList`.
/// An `Employee` is linked to at most one `Identity`.
#[derive(Debug, Clone, Serialize)]
pub struct Identity {
    pub id: ID,
    pub name: String,
    pub email: Option<String>,
}

impl Identity {
    pub fn new(name: String, email: Option<String>) -> Self {
        Self {
            id: Default::default(),
            name,
            email,
        }
    }
}

impl Entity for Identity {
    fn id(&self) -> &ID {
        &self.id
    }
}
