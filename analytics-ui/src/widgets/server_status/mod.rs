mod component;
mod status;

pub use component::ServerStatus;
pub use status::ConnectionStatus;
