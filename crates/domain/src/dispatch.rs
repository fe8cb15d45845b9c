use crate::{employee::Employee, identity::Identity, reminder_list::ReminderList, shared::entity::ID};
use chrono::NaiveDate;
use serde::Serialize;

pub fn birthday_subject(employee_name: &str) -> String {
    format!("Birthday Reminder for {}", employee_name)
}

/// Unions the recipients of every list and removes the celebrant's own `Identity`,
/// nobody should be reminded about their own birthday.
pub fn resolve_recipients(celebrant: &Employee, lists: &[ReminderList]) -> Vec<ID> {
    let mut recipients: Vec<ID> = Vec::new();
    for identity_id in lists.iter().flat_map(|list| list.recipients.iter()) {
        if celebrant.identity_id.as_ref() == Some(identity_id) || recipients.contains(identity_id) {
            continue;
        }
        recipients.push(identity_id.clone());
    }
    recipients
}

/// The identity the reminders are sent on behalf of
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Sender {
    pub name: String,
    pub email: String,
}

impl Sender {
    pub fn formatted(&self) -> String {
        format!("\"{}\" <{}>", self.name, self.email)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderMessage {
    pub employee_id: ID,
    pub subject: String,
    pub body: String,
    pub sender: Sender,
    pub recipients: Vec<Identity>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierFailure {
    pub employee_id: ID,
    pub reason: String,
}

/// Outcome of a daily reminders run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    pub date: NaiveDate,
    pub employees_processed: usize,
    pub notifications_sent: usize,
    /// Employees whose only recipient was themselves, or no one at all
    pub skipped_no_recipients: usize,
    pub failures: Vec<NotifierFailure>,
}

impl DispatchReport {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            employees_processed: 0,
            notifications_sent: 0,
            skipped_no_recipients: 0,
            failures: Vec::new(),
        }
    }

    pub fn record_failure(&mut self, employee_id: &ID, reason: impl Into<String>) {
        self.failures.push(NotifierFailure {
            employee_id: employee_id.clone(),
            reason: reason.into(),
        });
    }
}
