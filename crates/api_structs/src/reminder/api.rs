use crate::dtos::DispatchReportDTO;
use birthday_reminder_domain::DispatchReport;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod run_birthday_reminders {
    use super::*;

    #[derive(Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        /// Defaults to today
        pub date: Option<NaiveDate>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub report: DispatchReportDTO,
    }

    impl APIResponse {
        pub fn new(report: DispatchReport) -> Self {
            Self {
                report: DispatchReportDTO::new(report),
            }
        }
    }
}
