mod date;
mod department;
mod dispatch;
mod employee;
mod identity;
mod reminder_list;
mod search;
mod shared;

pub use date::{anniversary_in_year, format_date, is_leap_year, next_occurrence, parse_date};
pub use department::Department;
pub use dispatch::{
    birthday_subject, resolve_recipients, DispatchReport, NotifierFailure, ReminderMessage, Sender,
};
pub use employee::Employee;
pub use identity::Identity;
pub use reminder_list::{select_trigger_list, ReminderList, DEFAULT_LEAD_DAYS};
pub use search::{
    filter_by_derived_date, CompareOperator, DateValue, DerivedDateField, DerivedDateQuery,
    SearchError,
};
pub use shared::entity::{Entity, InvalidIDError, ID};
