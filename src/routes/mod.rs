use actix_web::web;

pub mod misc;
pub mod planets;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(misc::hello_world);
    cfg.service(misc::super_simple);
    cfg.service(misc::not_found);
    cfg.service(misc::parameters);
    cfg.service(misc::url_variables);

    cfg.service(
        web::scope("/planets")
            .service(planets::list::list)
            .service(planets::create::create)
            .service(planets::get::get_planet)
            .service(planets::update::update)
            .service(planets::delete::delete_planet),
    );

    cfg.service(user::register::register);
    cfg.service(user::login::login);
    cfg.service(user::password::retrieve_password);
    cfg.service(user::password::reset_password);
}
