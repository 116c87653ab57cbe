// Inline style strings written by the DOM layer. No web-sys here so the host
// tests can `include!` this file.

/// Cursor element transform: centred on the point, then scaled.
pub fn cursor_transform(x: f32, y: f32, scale: f32) -> String {
    format!("translate({x:.2}px, {y:.2}px) translate(-50%, -50%) scale({scale:.3})")
}

#[inline]
pub fn percent(p: u8) -> String {
    format!("{p}%")
}

#[inline]
pub fn translate_y(px: f64) -> String {
    format!("translateY({px}px)")
}

#[inline]
pub fn ms(millis: i32) -> String {
    format!("{millis}ms")
}

/// Fragment of an in-page link (`#about`), or `None` for plain links and a
/// bare `#`.
pub fn link_hash(href: &str) -> Option<&str> {
    let at = href.find('#')?;
    let hash = &href[at..];
    if hash.len() > 1 {
        Some(hash)
    } else {
        None
    }
}

/// `true` for page URLs that a dynamic import cannot serve the scene from.
#[inline]
pub fn is_file_protocol(protocol: &str) -> bool {
    protocol.eq_ignore_ascii_case("file:")
}
