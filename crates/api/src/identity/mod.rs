mod create_identity;
mod delete_identity;
mod get_identity;

use actix_web::web;
use create_identity::create_identity_controller;
use delete_identity::delete_identity_controller;
use get_identity::get_identity_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/identities", web::post().to(create_identity_controller));
    cfg.route(
        "/identities/{identity_id}",
        web::get().to(get_identity_controller),
    );
    cfg.route(
        "/identities/{identity_id}",
        web::delete().to(delete_identity_controller),
    );
}
