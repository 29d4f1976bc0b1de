/// Best guess of the user's IANA timezone, resolved once at startup.
///
/// In the browser this asks `Intl.DateTimeFormat`; elsewhere it reads `TZ`
/// and falls back to `UTC`.
#[cfg(target_arch = "wasm32")]
pub fn resolve_timezone() -> String {
    use wasm_bindgen::JsValue;

    let options = js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new())
        .resolved_options();

    js_sys::Reflect::get(&options, &JsValue::from_str("timeZone"))
        .ok()
        .and_then(|tz| tz.as_string())
        .filter(|tz| !tz.is_empty())
        .unwrap_or_else(|| "UTC".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn resolve_timezone() -> String {
    std::env::var("TZ")
        .ok()
        .map(|tz| tz.trim().trim_start_matches(':').to_string())
        .filter(|tz| !tz.is_empty())
        .unwrap_or_else(|| "UTC".to_string())
}
