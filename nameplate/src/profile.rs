use serde::Deserialize;
use sha2::{Digest, Sha256};
use thiserror::Error;
use uuid::Uuid;

/// Identity of a player as known to the host runtime.
///
/// This is the view the host hands to an event: the account uuid and the
/// account name. Everything else about a player (connection, entity, skin)
/// stays on the host side.
#[derive(Deserialize, Clone, Debug)]
pub struct PlayerProfile {
    pub id: Uuid,
    pub name: String,
}

/// Error types for profile construction
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Invalid player name: {0}")]
    InvalidName(String),

    #[error("Uuid error: {0}")]
    Uuid(#[from] uuid::Error),
}

impl PlayerProfile {
    /// Creates a profile after validating the account name.
    pub fn new(id: Uuid, name: impl Into<String>) -> Result<Self, ProfileError> {
        let name = name.into();
        if !is_valid_player_name(&name) {
            return Err(ProfileError::InvalidName(name));
        }
        Ok(Self { id, name })
    }

    /// Creates a profile for a server running in offline mode, deriving the
    /// uuid from the account name.
    pub fn offline(name: impl Into<String>) -> Result<Self, ProfileError> {
        let name = name.into();
        if !is_valid_player_name(&name) {
            return Err(ProfileError::InvalidName(name));
        }
        let id = offline_uuid(&name)?;
        Ok(Self { id, name })
    }
}

pub fn offline_uuid(username: &str) -> Result<Uuid, uuid::Error> {
    Uuid::from_slice(&Sha256::digest(username)[..16])
}

/// Account names are 1-16 bytes of printable ASCII, no spaces.
pub fn is_valid_player_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 16
        && name.chars().all(|c| c > 32u8 as char && c < 127u8 as char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_names() {
        assert!(is_valid_player_name("Steve"));
        assert!(is_valid_player_name("x"));
        assert!(is_valid_player_name("Notch_123"));
        assert!(is_valid_player_name("exactly_16_chars"));
    }

    #[test]
    fn rejects_bad_names() {
        assert!(!is_valid_player_name(""));
        assert!(!is_valid_player_name("seventeen_letters"));
        assert!(!is_valid_player_name("has space"));
        assert!(!is_valid_player_name("§7colored"));
    }

    #[test]
    fn new_validates_name() {
        let err = PlayerProfile::new(Uuid::new_v4(), "not valid").unwrap_err();
        assert!(matches!(err, ProfileError::InvalidName(_)));

        let profile = PlayerProfile::new(Uuid::new_v4(), "Herobrine").unwrap();
        assert_eq!(profile.name, "Herobrine");
    }

    #[test]
    fn offline_uuid_is_deterministic() {
        let first = offline_uuid("Steve").unwrap();
        let second = offline_uuid("Steve").unwrap();
        assert_eq!(first, second);
        assert_ne!(first, offline_uuid("Alex").unwrap());
    }

    #[test]
    fn offline_profile_uses_derived_uuid() {
        let profile = PlayerProfile::offline("Steve").unwrap();
        assert_eq!(profile.id, offline_uuid("Steve").unwrap());
    }

    #[test]
    fn deserializes_session_service_json() {
        let profile: PlayerProfile = serde_json::from_str(
            r#"{"id": "069a79f4-44e9-4726-a5be-fca90e38aaf5", "name": "Notch"}"#,
        )
        .unwrap();
        assert_eq!(profile.name, "Notch");
        assert_eq!(
            profile.id,
            Uuid::parse_str("069a79f4-44e9-4726-a5be-fca90e38aaf5").unwrap()
        );
    }
}
