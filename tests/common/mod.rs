use cowsay_rs::RenderRequest;
use rand::{rngs::StdRng, SeedableRng};
use unicode_width::UnicodeWidthStr;

/// Deterministic random source for renders.
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x6d6f6f)
}

pub fn render_ok(request: &RenderRequest) -> String {
    cowsay_rs::render(request, &mut seeded_rng()).expect("render should succeed")
}

/// Rows of the balloon, top and bottom borders included.
#[allow(dead_code)]
pub fn balloon_rows(output: &str) -> Vec<&str> {
    let mut rows = Vec::new();
    for row in output.lines() {
        rows.push(row);
        if row.starts_with(" -") {
            break;
        }
    }
    rows
}

/// Text inside each interior row, without border glyphs or padding spaces.
#[allow(dead_code)]
pub fn balloon_text(output: &str) -> Vec<String> {
    let rows = balloon_rows(output);
    rows[1..rows.len() - 1]
        .iter()
        .map(|row| {
            let inner: String = row.chars().skip(2).collect();
            let inner: String = inner.chars().take(inner.chars().count() - 2).collect();
            inner.trim_end().to_string()
        })
        .collect()
}

/// Opening and closing glyph of each interior row.
#[allow(dead_code)]
pub fn row_borders(output: &str) -> Vec<(char, char)> {
    let rows = balloon_rows(output);
    rows[1..rows.len() - 1]
        .iter()
        .map(|row| {
            let first = row.chars().next().unwrap();
            let last = row.chars().last().unwrap();
            (first, last)
        })
        .collect()
}

#[allow(dead_code)]
pub fn display_width(s: &str) -> usize {
    s.width()
}
