use strum_macros::Display;

use crate::store::AppState;
use crate::widgets::icons::IconKind;

/// What the status control shows. Exactly one applies at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ConnectionStatus {
    #[strum(to_string = "Connecting...")]
    Connecting,
    Connected,
    Disconnected,
}

impl ConnectionStatus {
    /// Loading wins over availability.
    pub fn from_flags(is_loading_credentials: bool, is_server_available: bool) -> Self {
        if is_loading_credentials {
            ConnectionStatus::Connecting
        } else if is_server_available {
            ConnectionStatus::Connected
        } else {
            ConnectionStatus::Disconnected
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::from_flags(state.is_loading_credentials, state.is_server_available)
    }

    pub fn icon(self) -> IconKind {
        match self {
            ConnectionStatus::Connecting => IconKind::Loader,
            ConnectionStatus::Connected => IconKind::CircleCheck,
            ConnectionStatus::Disconnected => IconKind::AlertCircle,
        }
    }

    pub fn tone_class(self) -> &'static str {
        match self {
            ConnectionStatus::Connecting => "status-connecting spin",
            ConnectionStatus::Connected => "status-connected",
            ConnectionStatus::Disconnected => "status-disconnected",
        }
    }
}
