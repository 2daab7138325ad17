//! Generated SVG favicon served as a `data:` URI.

#[cfg(test)]
#[path = "favicon_test.rs"]
mod favicon_test;

/// Brand colour of the favicon tile (Tailwind `sky-600`).
pub const FAVICON_FILL: &str = "#0284c7";

/// 32x32 rounded tile with a white "S".
pub const FAVICON_SVG: &str = concat!(
    r##"<svg width="32" height="32" viewBox="0 0 32 32" fill="none" xmlns="http://www.w3.org/2000/svg">"##,
    r##"<rect width="32" height="32" rx="6" fill="#0284c7"/>"##,
    r##"<text x="50%" y="50%" dominant-baseline="middle" text-anchor="middle" font-family="sans-serif" "##,
    r##"font-size="20px" dy=".1em" fill="white" font-weight="600">S</text>"##,
    "</svg>",
);

/// `data:image/svg+xml,...` href for the favicon link element.
pub fn data_uri() -> String {
    format!("data:image/svg+xml,{}", encode_uri_component(FAVICON_SVG))
}

/// Percent-encode `input` the way browsers' `encodeURIComponent` does.
///
/// Every UTF-8 byte outside `A-Z a-z 0-9 - _ . ! ~ * ' ( )` becomes `%XX`
/// with uppercase hex digits.
pub fn encode_uri_component(input: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut out = String::with_capacity(input.len() * 3);
    for &byte in input.as_bytes() {
        if is_unreserved(byte) {
            out.push(char::from(byte));
        } else {
            out.push('%');
            out.push(char::from(HEX[usize::from(byte >> 4)]));
            out.push(char::from(HEX[usize::from(byte & 0x0f)]));
        }
    }
    out
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}
