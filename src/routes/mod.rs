mod alerts;
mod contact;
mod csrf_token;
mod health_check;
mod metrics;
mod static_pages;

pub use alerts::simulate_alert;
pub use contact::submit_contact;
pub use csrf_token::issue_csrf_token;
pub use health_check::health_check;
pub use metrics::engineering_metrics;
pub use static_pages::{index, not_found_page, server_error_page};
