//! Best-effort removal of segmentation fillers from decoded text

use crate::consts::FILLER;

/// Strip fillers from a raw Playfair decode.
///
/// Any interior `X` whose neighbours are equal is dropped (`HELXLO` →
/// `HELLO`), then a trailing `X` is dropped. Neighbours are compared in the
/// input, not the partially cleaned output.
///
/// This is lossy: a genuine `X` between two equal letters, or at the very
/// end, is removed too (`AXA` → `AA`).
pub fn clean_playfair_output(decoded: &str) -> String {
    let filler = char::from(FILLER);
    let chars: Vec<char> = decoded.chars().collect();

    let mut out: String = chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            let interior = i > 0 && i + 1 < chars.len();
            !(interior && c == filler && chars[i - 1] == chars[i + 1])
        })
        .map(|(_, &c)| c)
        .collect();

    if out.ends_with(filler) {
        out.pop();
    }
    out
}
