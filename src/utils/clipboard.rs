//! Clipboard access for copying addresses and transaction hashes

/// Copy `text` with the async Clipboard API
#[cfg(target_family = "wasm")]
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window")?;
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("Copy failed: {:?}", e))
}

#[cfg(not(target_family = "wasm"))]
pub async fn copy_to_clipboard(_text: &str) -> Result<(), String> {
    Err("Clipboard is only available in the browser".to_string())
}
