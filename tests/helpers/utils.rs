use super::setup::TestApp;
use birthday_reminder_api_structs::dtos::{EmployeeDTO, IdentityDTO, ReminderListDTO};
use birthday_reminder_api_structs as api;
use birthday_reminder_domain::ID;
use chrono::NaiveDate;
use serde_json::json;

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("Valid test date")
}

pub async fn create_identity(app: &TestApp, name: &str) -> IdentityDTO {
    let res = app
        .client
        .post(app.url("/identities"))
        .json(&json!({ "name": name, "email": format!("{}@example.com", name.to_lowercase()) }))
        .send()
        .await
        .expect("Expected to create identity");
    assert_eq!(res.status(), reqwest::StatusCode::CREATED);
    res.json::<api::create_identity::APIResponse>()
        .await
        .expect("Identity response")
        .identity
}

pub async fn create_reminder_list(
    app: &TestApp,
    lead_days: u32,
    recipients: &[ID],
) -> ReminderListDTO {
    let res = app
        .client
        .post(app.url("/reminder-lists"))
        .json(&json!({ "name": "Team", "leadDays": lead_days, "recipients": recipients }))
        .send()
        .await
        .expect("Expected to create reminder list");
    assert_eq!(res.status(), reqwest::StatusCode::CREATED);
    res.json::<api::create_reminder_list::APIResponse>()
        .await
        .expect("Reminder list response")
        .reminder_list
}

pub async fn create_employee(
    app: &TestApp,
    identity: &IdentityDTO,
    birthdate: &str,
) -> EmployeeDTO {
    let res = app
        .client
        .post(app.url("/employees"))
        .json(&json!({
            "name": identity.name,
            "birthdate": birthdate,
            "remindEnabled": true,
            "identityId": identity.id,
        }))
        .send()
        .await
        .expect("Expected to create employee");
    assert_eq!(res.status(), reqwest::StatusCode::CREATED);
    res.json::<api::create_employee::APIResponse>()
        .await
        .expect("Employee response")
        .employee
}
