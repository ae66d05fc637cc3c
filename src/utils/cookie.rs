//! Minimal document.cookie access for the auth token

/// Find a cookie value in a `document.cookie` style string
pub fn find_cookie(cookie_header: &str, name: &str) -> Option<String> {
    cookie_header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
        .filter(|v| !v.is_empty())
}

/// Build a `Set-Cookie`-style assignment string for document.cookie
pub fn build_cookie(name: &str, value: &str, max_age_secs: Option<i64>) -> String {
    let mut cookie = format!("{}={}; path=/; SameSite=Lax", name, urlencoding::encode(value));
    if let Some(age) = max_age_secs {
        cookie.push_str(&format!("; max-age={}", age));
    }
    cookie
}

#[cfg(target_family = "wasm")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;
    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

/// Read a cookie from the current document
pub fn get_cookie(name: &str) -> Option<String> {
    #[cfg(target_family = "wasm")]
    {
        let header = html_document()?.cookie().ok()?;
        find_cookie(&header, name)
    }
    #[cfg(not(target_family = "wasm"))]
    {
        let _ = name;
        None
    }
}

/// Write a cookie on the current document
pub fn set_cookie(name: &str, value: &str, max_age_secs: Option<i64>) {
    #[cfg(target_family = "wasm")]
    {
        if let Some(doc) = html_document() {
            if let Err(e) = doc.set_cookie(&build_cookie(name, value, max_age_secs)) {
                log::warn!("Failed to set cookie {}: {:?}", name, e);
            }
        }
    }
    #[cfg(not(target_family = "wasm"))]
    {
        let _ = (name, value, max_age_secs);
    }
}

/// Expire a cookie immediately
pub fn remove_cookie(name: &str) {
    set_cookie(name, "", Some(0));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_cookie() {
        let header = "theme=dark; auth_token=abc.def.ghi; other=1";
        assert_eq!(find_cookie(header, "auth_token").as_deref(), Some("abc.def.ghi"));
        assert_eq!(find_cookie(header, "theme").as_deref(), Some("dark"));
        assert!(find_cookie(header, "missing").is_none());
    }

    #[test]
    fn test_find_cookie_ignores_empty_and_prefix_matches() {
        assert!(find_cookie("auth_token=", "auth_token").is_none());
        assert!(find_cookie("my_auth_token=x", "auth_token").is_none());
        assert!(find_cookie("", "auth_token").is_none());
    }

    #[test]
    fn test_cookie_value_is_encoded() {
        let cookie = build_cookie("auth_token", "a b;c", Some(60));
        assert_eq!(cookie, "auth_token=a%20b%3Bc; path=/; SameSite=Lax; max-age=60");
        let header = "auth_token=a%20b%3Bc";
        assert_eq!(find_cookie(header, "auth_token").as_deref(), Some("a b;c"));
    }
}
