//! `document.cookie` string helpers.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use crate::consts::{COOKIE_PATH, COOKIE_SAME_SITE};

/// Find `name` in a `document.cookie` style string (`a=1; b=2`).
pub fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').map(str::trim_start).find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| value.to_owned())
    })
}

/// Build an assignment for `document.cookie`. `expires` is a UTC date string.
pub fn format_cookie(name: &str, value: &str, expires: &str) -> String {
    format!("{name}={value}; expires={expires}; path={COOKIE_PATH}; SameSite={COOKIE_SAME_SITE}")
}

/// Milliseconds in `days` whole days.
pub fn days_to_ms(days: u32) -> f64 {
    f64::from(days) * 24.0 * 60.0 * 60.0 * 1000.0
}
