//! Conversation-id issuance.

use chrono::Utc;
use rand::Rng;

/// Generate a fresh conversation id: three random hex groups (8, 4, 4 chars)
/// followed by the current milliseconds-since-epoch in lowercase hex. The id
/// is never persisted; it only round-trips through the page and the
/// `/chat/<conversation_id>` URL.
pub fn new_conversation_id() -> String {
    let mut rng = rand::thread_rng();
    let a: [u8; 4] = rng.gen();
    let b: [u8; 2] = rng.gen();
    let c: [u8; 2] = rng.gen();
    format!(
        "{}-{}-{}-{:x}",
        hex::encode(a),
        hex::encode(b),
        hex::encode(c),
        Utc::now().timestamp_millis()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn matches_expected_shape() {
        let re = Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]+$").unwrap();
        for _ in 0..32 {
            let id = new_conversation_id();
            assert!(re.is_match(&id), "unexpected id format: {id}");
        }
    }

    #[test]
    fn consecutive_ids_differ() {
        assert_ne!(new_conversation_id(), new_conversation_id());
    }

    #[test]
    fn always_contains_a_hyphen() {
        // The chat route accepts any id with a hyphen, so generated ids must
        // always route back to the chat page rather than the index redirect.
        assert!(new_conversation_id().contains('-'));
    }
}
