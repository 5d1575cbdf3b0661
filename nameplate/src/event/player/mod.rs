pub mod receive_name_tag;

use std::sync::Arc;

use crate::profile::PlayerProfile;

/// A trait representing events related to players.
///
/// This trait provides a method to retrieve the player associated with the event.
pub trait PlayerEvent: Send + Sync {
    /// Retrieves the profile of the player the event primarily concerns.
    ///
    /// # Returns
    /// A reference to the `Arc<PlayerProfile>` involved in the event.
    fn get_player(&self) -> &Arc<PlayerProfile>;
}
