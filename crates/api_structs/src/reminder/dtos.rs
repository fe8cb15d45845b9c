use birthday_reminder_domain::{DispatchReport, NotifierFailure, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NotifierFailureDTO {
    pub employee_id: ID,
    pub reason: String,
}

impl NotifierFailureDTO {
    pub fn new(failure: NotifierFailure) -> Self {
        Self {
            employee_id: failure.employee_id,
            reason: failure.reason,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DispatchReportDTO {
    pub date: NaiveDate,
    pub employees_processed: usize,
    pub notifications_sent: usize,
    pub skipped_no_recipients: usize,
    pub failures: Vec<NotifierFailureDTO>,
}

impl DispatchReportDTO {
    pub fn new(report: DispatchReport) -> Self {
        Self {
            date: report.date,
            employees_processed: report.employees_processed,
            notifications_sent: report.notifications_sent,
            skipped_no_recipients: report.skipped_no_recipients,
            failures: report
                .failures
                .into_iter()
                .map(NotifierFailureDTO::new)
                .collect(),
        }
    }
}
