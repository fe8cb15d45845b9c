use birthday_reminder_domain::{Employee, ReminderList, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDTO {
    pub id: ID,
    pub name: String,
    pub birthdate: Option<NaiveDate>,
    pub remind_enabled: bool,
    pub identity_id: Option<ID>,
    pub department_id: Option<ID>,
    pub work_email: Option<String>,
    pub next_birthday_date: Option<NaiveDate>,
    pub birthday_remind_date: Option<NaiveDate>,
}

impl EmployeeDTO {
    /// Includes the derived dates as of `today`
    pub fn new(employee: Employee, memberships: &[ReminderList], today: &NaiveDate) -> Self {
        let next_birthday_date = employee.next_occurrence_date(today);
        let birthday_remind_date = employee.remind_trigger_date(today, memberships);
        Self {
            id: employee.id,
            name: employee.name,
            birthdate: employee.birthdate,
            remind_enabled: employee.remind_enabled,
            identity_id: employee.identity_id,
            department_id: employee.department_id,
            work_email: employee.work_email,
            next_birthday_date,
            birthday_remind_date,
        }
    }
}
