//! Persisted key names.
//!
//! These names are shared with existing installs; renaming one orphans the
//! stored value.

pub const USER_TOKEN: &str = "user_token";
pub const LAST_DATA_WINDOW: &str = "last_data_window";
/// Cached feature flag.
pub const DARK_THEME: &str = "dark_theme";
