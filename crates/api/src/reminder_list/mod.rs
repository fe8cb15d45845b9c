mod create_reminder_list;
mod delete_reminder_list;
mod get_reminder_list;
mod update_reminder_list;

use actix_web::web;
use birthday_reminder_domain::ID;
use birthday_reminder_infra::BirthdayContext;
use create_reminder_list::create_reminder_list_controller;
use delete_reminder_list::delete_reminder_list_controller;
use get_reminder_list::get_reminder_list_controller;
use update_reminder_list::update_reminder_list_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/reminder-lists",
        web::post().to(create_reminder_list_controller),
    );
    cfg.route(
        "/reminder-lists/{reminder_list_id}",
        web::get().to(get_reminder_list_controller),
    );
    cfg.route(
        "/reminder-lists/{reminder_list_id}",
        web::put().to(update_reminder_list_controller),
    );
    cfg.route(
        "/reminder-lists/{reminder_list_id}",
        web::delete().to(delete_reminder_list_controller),
    );
}

#[derive(Debug, PartialEq)]
pub enum MissingReference {
    Identity(ID),
    Department(ID),
}

/// Makes sure every recipient and the department of a `ReminderList` exist
async fn find_missing_reference(
    recipients: &[ID],
    department_id: Option<&ID>,
    ctx: &BirthdayContext,
) -> Option<MissingReference> {
    let identities = ctx.repos.identities.find_many(recipients).await;
    if let Some(missing) = recipients
        .iter()
        .find(|id| !identities.iter().any(|identity| identity.id == **id))
    {
        return Some(MissingReference::Identity(missing.clone()));
    }
    if let Some(department_id) = department_id {
        if ctx.repos.departments.find(department_id).await.is_none() {
            return Some(MissingReference::Department(department_id.clone()));
        }
    }
    None
}
