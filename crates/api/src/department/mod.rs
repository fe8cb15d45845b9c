mod create_department;
mod delete_department;
mod get_department;

use actix_web::web;
use create_department::create_department_controller;
use delete_department::delete_department_controller;
use get_department::get_department_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/departments", web::post().to(create_department_controller));
    cfg.route(
        "/departments/{department_id}",
        web::get().to(get_department_controller),
    );
    cfg.route(
        "/departments/{department_id}",
        web::delete().to(delete_department_controller),
    );
}
