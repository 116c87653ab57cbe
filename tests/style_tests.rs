// Host-side tests for the inline style strings.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use style::*;

#[test]
fn cursor_transform_centres_then_scales() {
    assert_eq!(
        cursor_transform(10.0, 20.5, 1.65),
        "translate(10.00px, 20.50px) translate(-50%, -50%) scale(1.650)"
    );
}

#[test]
fn small_units_format_without_padding() {
    assert_eq!(percent(0), "0%");
    assert_eq!(percent(100), "100%");
    assert_eq!(translate_y(-50.0), "translateY(-50px)");
    assert_eq!(translate_y(12.5), "translateY(12.5px)");
    assert_eq!(ms(600), "600ms");
}

#[test]
fn link_hash_only_for_in_page_targets() {
    assert_eq!(link_hash("#about"), Some("#about"));
    assert_eq!(link_hash("/index.html#contact"), Some("#contact"));
    assert_eq!(link_hash("#"), None);
    assert_eq!(link_hash("/resume.pdf"), None);
}

#[test]
fn file_protocol_is_case_insensitive() {
    assert!(is_file_protocol("file:"));
    assert!(is_file_protocol("FILE:"));
    assert!(!is_file_protocol("https:"));
}
