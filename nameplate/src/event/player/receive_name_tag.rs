use nameplate_macros::Event;
use std::sync::Arc;
use uuid::Uuid;

use crate::profile::PlayerProfile;
use crate::tag;

use super::PlayerEvent;

/// An event that occurs when a player is about to be shown another player's
/// name tag.
///
/// The host fires it once per recipient, right before composing the outbound
/// packet, and transmits whatever `tag` and `uuid` hold after every handler
/// has run. It may fire on or off the host's primary thread, check
/// [`Self::is_async`].
///
/// Handle this event to have an effect on the name tag the recipient sees.
///
/// Fields are private on purpose: the modified flags answer "did a handler
/// change this", which only holds if every write goes through the setters.
#[derive(Event, Clone)]
pub struct PlayerReceiveNameTagEvent {
    /// The player who will see the tag.
    recipient: Arc<PlayerProfile>,

    /// The player whose tag is being shown.
    named: Arc<PlayerProfile>,

    /// The tag text to display.
    tag: String,

    /// The uuid transmitted alongside the tag on protocol 1.7.x.
    uuid: Uuid,

    tag_modified: bool,
    uuid_modified: bool,
    async_dispatch: bool,
}

impl PlayerReceiveNameTagEvent {
    /// Creates a new instance of `PlayerReceiveNameTagEvent`.
    ///
    /// # Arguments
    /// - `recipient`: The player who will see the tag.
    /// - `named`: The player whose tag is being shown.
    /// - `initial_tag`: The tag the host was about to transmit, normally the
    ///   named player's current name. The tag starts out marked modified iff
    ///   the two differ.
    /// - `uuid`: The uuid to transmit alongside the tag on protocol 1.7.x.
    /// - `async_dispatch`: Whether the host is constructing the event off its
    ///   primary thread. Fixed for the event's lifetime.
    ///
    /// # Returns
    /// A new instance of `PlayerReceiveNameTagEvent`.
    #[must_use]
    pub fn new(
        recipient: Arc<PlayerProfile>,
        named: Arc<PlayerProfile>,
        initial_tag: String,
        uuid: Uuid,
        async_dispatch: bool,
    ) -> Self {
        let tag_modified = initial_tag != named.name;
        Self {
            recipient,
            named,
            tag: initial_tag,
            uuid,
            tag_modified,
            uuid_modified: false,
            async_dispatch,
        }
    }

    /// Gets the player receiving the tag.
    ///
    /// # Returns
    /// A reference to the `Arc<PlayerProfile>` of the recipient.
    #[must_use]
    pub fn recipient(&self) -> &Arc<PlayerProfile> {
        &self.recipient
    }

    /// Gets the player whose tag is being shown.
    ///
    /// # Returns
    /// A reference to the `Arc<PlayerProfile>` of the named player.
    #[must_use]
    pub fn named_player(&self) -> &Arc<PlayerProfile> {
        &self.named
    }

    /// Gets the tag that will be sent.
    ///
    /// # Returns
    /// The tag text as it will go out on the wire.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Gets the uuid that will be sent.
    ///
    /// Only meaningful on protocol 1.7.x; clients from 1.7.6 on ignore it and
    /// trust the profile id instead.
    ///
    /// # Returns
    /// The uuid transmitted alongside the tag.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Checks if the tag was modified.
    ///
    /// # Returns
    /// A boolean indicating whether a setter has changed the tag, or the
    /// initial tag already differed from the named player's name.
    #[must_use]
    pub fn is_tag_modified(&self) -> bool {
        self.tag_modified
    }

    /// Checks if the uuid was modified.
    ///
    /// # Returns
    /// A boolean indicating whether a setter has changed the uuid.
    #[must_use]
    pub fn is_uuid_modified(&self) -> bool {
        self.uuid_modified
    }

    /// Checks if the event was dispatched asynchronously.
    ///
    /// # Returns
    /// A boolean indicating whether the event was constructed off the host's
    /// primary thread.
    #[must_use]
    pub fn is_async(&self) -> bool {
        self.async_dispatch
    }

    /// Sets the tag to be sent.
    ///
    /// Setting the current value again is a no-op. Tags over
    /// [`tag::MAX_TAG_LEN`] chars are truncated before being stored, so
    /// [`Self::tag`] always reports exactly what goes out on the wire.
    ///
    /// # Arguments
    /// - `tag`: The tag text to display.
    ///
    /// # Returns
    /// `true` if the tag was accepted as given, `false` if it had to be
    /// truncated.
    pub fn set_tag(&mut self, tag: String) -> bool {
        if self.tag == tag {
            return true;
        }
        self.tag_modified = true;
        if tag::exceeds_limit(&tag) {
            self.tag = tag::truncate(&tag).to_string();
            return false;
        }
        self.tag = tag;
        true
    }

    /// Sets the uuid to be sent. Setting the current value again is a no-op.
    ///
    /// # Arguments
    /// - `uuid`: The uuid to transmit alongside the tag.
    #[deprecated(note = "clients on protocol 1.7.6 and newer ignore the transmitted uuid")]
    pub fn set_uuid(&mut self, uuid: Uuid) {
        if self.uuid == uuid {
            return;
        }
        self.uuid_modified = true;
        self.uuid = uuid;
    }
}

impl PlayerEvent for PlayerReceiveNameTagEvent {
    fn get_player(&self) -> &Arc<PlayerProfile> {
        &self.recipient
    }
}
