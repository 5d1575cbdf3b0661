/// Longest name tag the client will accept, counted in characters.
///
/// Tags may carry `§` formatting codes, which are multi-byte in UTF-8, so the
/// limit is chars rather than bytes. Account names have a separate, stricter
/// ASCII rule (see [`crate::profile::is_valid_player_name`]).
pub const MAX_TAG_LEN: usize = 16;

#[must_use]
pub fn exceeds_limit(tag: &str) -> bool {
    tag.chars().count() > MAX_TAG_LEN
}

/// The longest prefix of `tag` within [`MAX_TAG_LEN`], cut on a char boundary.
#[must_use]
pub fn truncate(tag: &str) -> &str {
    match tag.char_indices().nth(MAX_TAG_LEN) {
        Some((idx, _)) => &tag[..idx],
        None => tag,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_tags_pass_through() {
        assert!(!exceeds_limit("Steve"));
        assert_eq!(truncate("Steve"), "Steve");
        assert_eq!(truncate(""), "");
    }

    #[test]
    fn exact_limit_is_not_truncated() {
        let tag = "0123456789abcdef";
        assert!(!exceeds_limit(tag));
        assert_eq!(truncate(tag), tag);
    }

    #[test]
    fn long_tags_are_cut_to_sixteen() {
        let tag = "0123456789abcdefgh";
        assert!(exceeds_limit(tag));
        assert_eq!(truncate(tag), "0123456789abcdef");
    }

    #[test]
    fn formatting_codes_count_as_single_chars() {
        // `§` is two bytes in UTF-8; the cut has to land on a char boundary.
        let tag = "§c§l0123456789abcdef";
        assert!(exceeds_limit(tag));
        assert_eq!(truncate(tag), "§c§l0123456789ab");
        assert_eq!(truncate(tag).chars().count(), MAX_TAG_LEN);
    }
}
