pub mod empty_state;
pub mod icons;
pub mod server_status;
pub mod sidebar;
