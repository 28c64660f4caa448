/// Attempt budget every round starts with.
pub const MAX_ATTEMPTS: i32 = 6;

/// Display marker for a character that hasn't been revealed yet.
pub const PLACEHOLDER: char = '_';

/// Catalog key used when a requested difficulty has no words.
pub const DEFAULT_DIFFICULTY: &str = "facile";

/// Player names longer than this are truncated.
pub const MAX_PLAYER_NAME_LENGTH: usize = 32;
