mod create_employee;
mod delete_employee;
mod get_employee;
mod search_employees;
mod update_employee;

use actix_web::web;
use birthday_reminder_domain::ID;
use birthday_reminder_infra::BirthdayContext;
use create_employee::create_employee_controller;
use delete_employee::delete_employee_controller;
use get_employee::get_employee_controller;
use search_employees::search_employees_controller;
use update_employee::update_employee_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/employees", web::post().to(create_employee_controller));
    // Registered before `/employees/{employee_id}` so that `search` is not taken as an id
    cfg.route(
        "/employees/search",
        web::get().to(search_employees_controller),
    );
    cfg.route(
        "/employees/{employee_id}",
        web::get().to(get_employee_controller),
    );
    cfg.route(
        "/employees/{employee_id}",
        web::put().to(update_employee_controller),
    );
    cfg.route(
        "/employees/{employee_id}",
        web::delete().to(delete_employee_controller),
    );
}

#[derive(Debug, PartialEq)]
pub enum MissingReference {
    Identity(ID),
    Department(ID),
}

async fn find_missing_reference(
    identity_id: Option<&ID>,
    department_id: Option<&ID>,
    ctx: &BirthdayContext,
) -> Option<MissingReference> {
    if let Some(identity_id) = identity_id {
        if ctx.repos.identities.find(identity_id).await.is_none() {
            return Some(MissingReference::Identity(identity_id.clone()));
        }
    }
    if let Some(department_id) = department_id {
        if ctx.repos.departments.find(department_id).await.is_none() {
            return Some(MissingReference::Department(department_id.clone()));
        }
    }
    None
}
