pub mod admin;
pub mod home;
pub mod metrics;
pub mod not_found;

pub use admin::Admin;
pub use home::Home;
pub use metrics::Metrics;
pub use not_found::NotFound;
