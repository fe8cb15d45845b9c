use crate::{
    date::next_occurrence,
    reminder_list::{select_trigger_list, ReminderList},
    search::DerivedDateField,
    shared::entity::{Entity, ID},
};
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct Employee {
    pub id: ID,
    pub name: String,
    /// Only month and day matter for the reminders
    pub birthdate: Option<NaiveDate>,
    /// Opt-in flag for being included in the birthday reminders
    pub remind_enabled: bool,
    /// The `Identity` representing this `Employee` as a member of `ReminderList`s
    pub identity_id: Option<ID>,
    pub department_id: Option<ID>,
    pub work_email: Option<String>,
}

impl Employee {
    pub fn new(name: String) -> Self {
        Self {
            id: Default::default(),
            name,
            birthdate: None,
            remind_enabled: false,
            identity_id: None,
            department_id: None,
            work_email: None,
        }
    }

    pub fn next_occurrence_date(&self, today: &NaiveDate) -> Option<NaiveDate> {
        self.birthdate
            .as_ref()
            .and_then(|birthdate| next_occurrence(birthdate, today))
    }

    /// The date at which the reminder for the next birthday fires.
    ///
    /// `memberships` are the `ReminderList`s the linked `Identity` is a recipient of.
    /// The list with the most lead days decides the date.
    pub fn remind_trigger_date(
        &self,
        today: &NaiveDate,
        memberships: &[ReminderList],
    ) -> Option<NaiveDate> {
        if !self.remind_enabled || self.identity_id.is_none() {
            return None;
        }
        let occurrence = self.next_occurrence_date(today)?;
        select_trigger_list(memberships)?.trigger_date(&occurrence)
    }

    pub fn derived_date(
        &self,
        field: DerivedDateField,
        today: &NaiveDate,
        memberships: &[ReminderList],
    ) -> Option<NaiveDate> {
        match field {
            DerivedDateField::NextOccurrence => self.next_occurrence_date(today),
            DerivedDateField::RemindTrigger => self.remind_trigger_date(today, memberships),
        }
    }
}

impl Entity for Employee {
    fn id(&self) -> &ID {
        &self.id
    }
}
