/// One-shot flash notices
///
/// A notice is set as a cookie on a redirect response and consumed (read and
/// cleared) by the next HTML render. No session store; the cookie is the only
/// cross-request state in the application.

use axum_extra::extract::cookie::{Cookie, CookieJar};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

const COOKIE_NAME: &str = "nv_flash";

/// Severity of a notice, selects the banner style in the layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

/// A pending user-visible notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub level: Level,
    pub message: String,
}

/// Queue a success notice for the next rendered page
pub fn success(jar: CookieJar, message: &str) -> CookieJar {
    set(jar, Level::Success, message)
}

/// Queue an error notice for the next rendered page
pub fn error(jar: CookieJar, message: &str) -> CookieJar {
    set(jar, Level::Error, message)
}

fn set(jar: CookieJar, level: Level, message: &str) -> CookieJar {
    let tag = match level {
        Level::Success => "success",
        Level::Error => "error",
    };
    // Notices contain spaces, commas, and quotes, which are outside RFC 6265's
    // cookie-octet set; the message travels base64-encoded.
    let encoded = URL_SAFE_NO_PAD.encode(message);
    let mut cookie = Cookie::new(COOKIE_NAME, format!("{tag}:{encoded}"));
    cookie.set_path("/");
    cookie.set_http_only(true);
    jar.add(cookie)
}

/// Consume the pending notice, if any
///
/// Returns the jar with the cookie cleared; the caller must include the jar in
/// its response for the clear to reach the browser.
pub fn take(jar: CookieJar) -> (CookieJar, Option<Flash>) {
    let flash = jar.get(COOKIE_NAME).and_then(|cookie| parse(cookie.value()));
    let jar = jar.remove(Cookie::build(COOKIE_NAME).path("/"));
    (jar, flash)
}

fn parse(value: &str) -> Option<Flash> {
    let (tag, encoded) = value.split_once(':')?;
    let level = match tag {
        "success" => Level::Success,
        "error" => Level::Error,
        _ => return None,
    };
    let message = String::from_utf8(URL_SAFE_NO_PAD.decode(encoded).ok()?).ok()?;
    Some(Flash { level, message })
}
