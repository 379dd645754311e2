//! Binary snapshots of in-progress games.
//!
//! Every engine state is a plain serde value, so saving a game is a single
//! `bincode` round trip.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::SnapshotError;

/// Encode a game state to bytes.
pub fn encode<T: Serialize>(state: &T) -> Result<Vec<u8>, SnapshotError> {
    bincode::serialize(state).map_err(SnapshotError::Encode)
}

/// Decode a game state previously produced by [`encode`].
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SnapshotError> {
    bincode::deserialize(bytes).map_err(SnapshotError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRngState;

    #[test]
    fn test_snapshot_round_trip() {
        let state = GameRngState { seed: 3, word_pos: 99 };
        let bytes = encode(&state).unwrap();
        let back: GameRngState = decode(&bytes).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_truncated_snapshot_fails() {
        let bytes = encode(&GameRngState { seed: 3, word_pos: 99 }).unwrap();
        let result: Result<GameRngState, _> = decode(&bytes[..4]);
        assert!(matches!(result, Err(SnapshotError::Decode(_))));
    }
}
