use crate::{
    api::{attendance, employee},
    config::Config,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    cfg.service(
        web::scope(&config.api_prefix).service(
            web::scope("/v1")
                .service(
                    web::scope("/employees")
                        // /employees
                        .service(
                            web::resource("")
                                .route(web::post().to(employee::create_employee))
                                .route(web::get().to(employee::list_employees)),
                        )
                        // /employees/{employee_id}
                        .service(
                            web::resource("/{employee_id}")
                                .route(web::get().to(employee::get_employee))
                                .route(web::delete().to(employee::delete_employee)),
                        ),
                )
                .service(
                    web::scope("/attendance")
                        // /attendance
                        .service(
                            web::resource("")
                                .route(web::post().to(attendance::mark_attendance))
                                .route(web::get().to(attendance::list_attendance)),
                        )
                        // /attendance/employee/{employee_id}
                        .service(
                            web::resource("/employee/{employee_id}")
                                .route(web::get().to(attendance::employee_attendance)),
                        ),
                ),
        ),
    );
}
