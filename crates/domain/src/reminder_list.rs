use crate::shared::entity::{Entity, ID};
use chrono::{Days, NaiveDate};

pub const DEFAULT_LEAD_DAYS: u32 = 3;

/// A `ReminderList` groups the `Identity`s that should be notified
/// `lead_days` days before the birthday of an `Employee`.
#[derive(Debug, Clone)]
pub struct ReminderList {
    pub id: ID,
    pub name: String,
    /// Number of days before the birthday at which the reminder fires
    pub lead_days: u32,
    /// Informational only, it does not affect who gets notified
    pub department_id: Option<ID>,
    /// The `Identity`s that receive the notification
    pub recipients: Vec<ID>,
}

impl ReminderList {
    pub fn new(name: String) -> Self {
        Self {
            id: Default::default(),
            name,
            lead_days: DEFAULT_LEAD_DAYS,
            department_id: None,
            recipients: Vec::new(),
        }
    }

    pub fn has_recipient(&self, identity_id: &ID) -> bool {
        self.recipients.contains(identity_id)
    }

    pub fn set_recipients(&mut self, recipients: Vec<ID>) {
        self.recipients.clear();
        for identity_id in recipients {
            self.add_recipient(identity_id);
        }
    }

    pub fn add_recipient(&mut self, identity_id: ID) {
        if !self.has_recipient(&identity_id) {
            self.recipients.push(identity_id);
        }
    }

    pub fn remove_recipient(&mut self, identity_id: &ID) {
        self.recipients.retain(|id| id != identity_id);
    }

    /// The date this list fires for a birthday occurring at `occurrence`
    pub fn trigger_date(&self, occurrence: &NaiveDate) -> Option<NaiveDate> {
        occurrence.checked_sub_days(Days::new(u64::from(self.lead_days)))
    }
}

impl Entity for ReminderList {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// Selects the list that fires first, i.e. the one with the most lead days.
/// When several lists share the maximum the first one wins.
pub fn select_trigger_list(memberships: &[ReminderList]) -> Option<&ReminderList> {
    memberships.iter().fold(None, |selected, list| match selected {
        Some(current) if current.lead_days >= list.lead_days => Some(current),
        _ => Some(list),
    })
}
