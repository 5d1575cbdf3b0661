pub mod bus;
pub mod event;
pub mod profile;
pub mod tag;

pub use bus::{EventBus, EventHandler};
pub use event::player::receive_name_tag::PlayerReceiveNameTagEvent;
pub use event::player::PlayerEvent;
pub use event::{Event, EventPriority};
pub use profile::{PlayerProfile, ProfileError};
