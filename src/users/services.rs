use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{ApiError, ApiResult};

const MAX_USERNAME_LEN: usize = 64;

pub(crate) fn is_valid_username(username: &str) -> bool {
    lazy_static! {
        static ref USERNAME_RE: Regex = Regex::new(r"^[\x21-\x7E]+$").unwrap();
    }
    username.chars().count() <= MAX_USERNAME_LEN && USERNAME_RE.is_match(username)
}

/// Trims and checks the fields of a new user.
pub fn validate_new_user(name: &str, username: &str) -> ApiResult<(String, String)> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ApiError::Validation("name is required".into()));
    }
    let username = username.trim();
    if username.is_empty() {
        return Err(ApiError::Validation("username is required".into()));
    }
    if !is_valid_username(username) {
        return Err(ApiError::Validation(format!(
            "username must be at most {MAX_USERNAME_LEN} visible ASCII characters"
        )));
    }
    Ok((name.to_string(), username.to_string()))
}
