//! Application-wide constants

pub const GROUPS_PATH: &str = "/groups";
pub const DEFAULT_SIGN_IN_PATH: &str = "/users/sign_in";
pub const DEFAULT_COOKIE_NAME: &str = "gather_session";
pub const DEFAULT_SESSION_EXPIRY: i64 = 86400;
pub const DEVELOPMENT_SESSION_SECRET: &str = "gather-development-secret";
pub const TOKEN_TYPE_SESSION: &str = "session";
pub const BLANK_MESSAGE: &str = "can't be blank";

/// Show path for a single group.
pub fn group_path(id: &uuid::Uuid) -> String {
    format!("{}/{}", GROUPS_PATH, id)
}
