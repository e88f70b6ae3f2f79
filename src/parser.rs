/// Split raw input text on the `,` separator into trimmed candidate tokens.
///
/// Empty pieces are dropped and order is preserved. Pure; never consults the
/// store, so the same raw text always yields the same tokens.
pub fn parse(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
