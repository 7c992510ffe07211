//! Shared constants

/// Used when no API base URL is configured at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Local storage key holding the bearer token
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Route every unauthenticated visit is sent back to
pub const ENTRY_ROUTE: &str = "/";

/// Quiet period before an autosuggest query fires
pub const SUGGEST_DEBOUNCE_MS: u32 = 500;

/// Shortest input that triggers an autosuggest query
pub const SUGGEST_MIN_LEN: usize = 2;

/// Longest trip (inclusive days) the AI generator accepts
pub const MAX_AI_TRIP_DAYS: i64 = 15;
