use std::path::Path;

use actix_files::NamedFile;
use actix_web::web;

use crate::configuration::Settings;

/// Named pages under the static root. Arbitrary asset paths are handled
/// by the `actix_files::Files` service registered in startup, which also
/// rejects traversal outside the root.

pub async fn index(settings: web::Data<Settings>) -> actix_web::Result<NamedFile> {
    serve_page(&settings, "index.html").await
}

pub async fn not_found_page(settings: web::Data<Settings>) -> actix_web::Result<NamedFile> {
    serve_page(&settings, "404.html").await
}

pub async fn server_error_page(settings: web::Data<Settings>) -> actix_web::Result<NamedFile> {
    serve_page(&settings, "500.html").await
}

async fn serve_page(settings: &Settings, file: &str) -> actix_web::Result<NamedFile> {
    let path = Path::new(&settings.application.static_root).join(file);
    Ok(NamedFile::open_async(path).await?)
}
