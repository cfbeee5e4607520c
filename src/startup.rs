use actix_files as fs;
use actix_web::dev::Server;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::net::TcpListener;

use crate::configuration::Settings;
use crate::logger::RequestLogger;
use crate::rate_limit::SlidingWindowLimiter;
use crate::routes::{
    engineering_metrics, health_check, index, issue_csrf_token, not_found_page,
    server_error_page, simulate_alert, submit_contact,
};
use crate::security::SecurityHeaders;
use crate::storage::MessageStore;

pub fn run(listener: TcpListener, settings: Settings) -> Result<Server, std::io::Error> {
    let limiter = web::Data::new(SlidingWindowLimiter::new(
        settings.rate_limit.max_requests,
        settings.rate_limit.window(),
    ));
    let store = web::Data::new(MessageStore::new(&settings.storage.messages_path));
    let static_root = settings.application.static_root.clone();
    let settings = web::Data::new(settings);

    let server = HttpServer::new(move || {
        App::new()
            // Global middleware
            .wrap(Logger::default())
            .wrap(RequestLogger)
            .wrap(SecurityHeaders)

            // Shared state
            .app_data(limiter.clone())
            .app_data(store.clone())
            .app_data(settings.clone())

            // API routes
            .route("/api/health", web::get().to(health_check))
            .route("/api/contact", web::post().to(submit_contact))
            .route("/api/simulate-alert", web::post().to(simulate_alert))
            .route("/api/metrics", web::get().to(engineering_metrics))
            .route("/api/csrf-token", web::get().to(issue_csrf_token))

            // Named pages
            .route("/", web::get().to(index))
            .route("/404.html", web::get().to(not_found_page))
            .route("/500.html", web::get().to(server_error_page))

            // Static assets (must be last to not override API routes)
            .service(fs::Files::new("/", static_root.clone()))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
