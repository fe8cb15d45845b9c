use crate::shared::entity::{Entity, ID};

#[derive(Debug, Clone)]
pub struct Department {
    pub id: ID,
    pub name: String,
}

impl Department {
    pub fn new(name: String) -> Self {
        Self {
            id: Default::default(),
            name,
        }
    }
}

impl Entity for Department {
    fn id(&self) -> &ID {
        &self.id
    }
}
