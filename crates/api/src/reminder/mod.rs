pub mod send_birthday_reminders;

use actix_web::web;
use send_birthday_reminders::run_birthday_reminders_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/reminders/run",
        web::post().to(run_birthday_reminders_controller),
    );
}
