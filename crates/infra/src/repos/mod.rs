mod department;
mod employee;
mod identity;
mod reminder_list;
mod shared;

use birthday_reminder_domain::{filter_by_derived_date, DerivedDateQuery, Employee, ReminderList};
use chrono::NaiveDate;
pub use department::{IDepartmentRepo, InMemoryDepartmentRepo};
pub use employee::{IEmployeeRepo, InMemoryEmployeeRepo};
pub use identity::{IIdentityRepo, InMemoryIdentityRepo};
pub use reminder_list::{IReminderListRepo, InMemoryReminderListRepo};
use std::sync::Arc;

#[derive(Clone)]
pub struct Repos {
    pub employees: Arc<dyn IEmployeeRepo>,
    pub reminder_lists: Arc<dyn IReminderListRepo>,
    pub identities: Arc<dyn IIdentityRepo>,
    pub departments: Arc<dyn IDepartmentRepo>,
}

impl Repos {
    pub fn create_inmemory() -> Self {
        Self {
            employees: Arc::new(InMemoryEmployeeRepo::new()),
            reminder_lists: Arc::new(InMemoryReminderListRepo::new()),
            identities: Arc::new(InMemoryIdentityRepo::new()),
            departments: Arc::new(InMemoryDepartmentRepo::new()),
        }
    }

    /// The `ReminderList`s the `Identity` linked to the `Employee` is a recipient of
    pub async fn employee_memberships(&self, employee: &Employee) -> Vec<ReminderList> {
        match &employee.identity_id {
            Some(identity_id) => self.reminder_lists.find_by_recipient(identity_id).await,
            None => Vec::new(),
        }
    }

    /// Finds the `Employee`s matching a query on a derived date.
    ///
    /// The derived dates are not stored so this is a full scan over the
    /// reminder enabled `Employee`s, computing the dates for each of them.
    pub async fn find_employees_by_derived_date(
        &self,
        query: &DerivedDateQuery,
        today: &NaiveDate,
    ) -> Vec<Employee> {
        let employees = self.employees.find_reminder_enabled().await;
        let mut candidates = Vec::with_capacity(employees.len());
        for employee in employees {
            let memberships = self.employee_memberships(&employee).await;
            candidates.push((employee, memberships));
        }

        let employee_ids = filter_by_derived_date(
            candidates
                .iter()
                .map(|(employee, memberships)| (employee, memberships.as_slice())),
            query,
            today,
        );

        candidates
            .into_iter()
            .map(|(employee, _)| employee)
            .filter(|employee| employee_ids.contains(&employee.id))
            .collect()
    }
}
