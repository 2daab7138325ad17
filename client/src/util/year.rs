//! Current calendar year for the footer copyright line.

/// Year of the current UTC date.
///
/// Uses the JS clock in the browser (`time`'s `wasm-bindgen` feature) and the
/// system clock on the server.
pub fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_year_is_plausible() {
        let year = current_year();
        assert!((2024..3000).contains(&year), "unexpected year {year}");
    }
}
