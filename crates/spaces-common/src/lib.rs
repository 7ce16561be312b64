pub mod errors;
pub mod events;
pub mod identity;
pub mod session;

pub use errors::{ConfigError, SpacesError};
pub use events::{EventBus, NavigationEvent, Navigator, SessionEvent};
pub use identity::{display_name, ParticipantId};
pub use session::SessionState;

pub type Result<T> = std::result::Result<T, SpacesError>;
