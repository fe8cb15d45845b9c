mod department;
mod employee;
mod identity;
mod nullable;
mod reminder;
mod reminder_list;
mod status;

pub mod dtos {
    pub use crate::department::dtos::*;
    pub use crate::employee::dtos::*;
    pub use crate::identity::dtos::*;
    pub use crate::reminder::dtos::*;
    pub use crate::reminder_list::dtos::*;
}

pub use crate::department::api::*;
pub use crate::employee::api::*;
pub use crate::identity::api::*;
pub use crate::reminder::api::*;
pub use crate::reminder_list::api::*;
pub use crate::status::api::*;
