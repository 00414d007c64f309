use crate::{
    api::{attendance, employee},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use std::sync::Arc;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    let api_limiter = Arc::new(build_limiter(config.rate_api_per_min));

    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(api_limiter)
            .service(
                web::scope("/employees")
                    // /employees
                    .service(
                        web::resource("")
                            .route(web::get().to(employee::list_employees))
                            .route(web::post().to(employee::create_employee)),
                    )
                    // /employees/{employee_id}
                    .service(
                        web::resource("/{employee_id}")
                            .route(web::delete().to(employee::delete_employee)),
                    ),
            )
            .service(
                web::scope("/attendance")
                    // /attendance/summary — must come before the {employee_id} route
                    .service(
                        web::resource("/summary").route(web::get().to(attendance::get_summary)),
                    )
                    // /attendance
                    .service(
                        web::resource("").route(web::post().to(attendance::mark_attendance)),
                    )
                    // /attendance/{employee_id}
                    .service(
                        web::resource("/{employee_id}")
                            .route(web::get().to(attendance::get_attendance)),
                    ),
            ),
    );
}
