//! Session tokens in localStorage
//!
//! Tokens are written by the dashboard sign-in flow. This app only reads
//! them, stores a refreshed access token, and drops both once rejected.

use web_sys::{window, Storage};

const ACCESS_TOKEN_KEY: &str = "auth_access_token";
const REFRESH_TOKEN_KEY: &str = "auth_refresh_token";

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

fn read(key: &str) -> Option<String> {
    local_storage()?
        .get_item(key)
        .ok()?
        .filter(|value| !value.is_empty())
}

pub fn get_access_token() -> Option<String> {
    read(ACCESS_TOKEN_KEY)
}

pub fn get_refresh_token() -> Option<String> {
    read(REFRESH_TOKEN_KEY)
}

pub fn save_access_token(token: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(ACCESS_TOKEN_KEY, token).is_err() {
            log::warn!("could not persist refreshed access token");
        }
    }
}

pub fn clear_tokens() {
    if let Some(storage) = local_storage() {
        for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY] {
            let _ = storage.remove_item(key);
        }
    }
}
