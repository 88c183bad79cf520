/// Score used when the model reply carries no parseable SCORE line
pub const DEFAULT_SCORE: u8 = 50;

/// Reasoning used when the model reply carries no REASONING line
pub const DEFAULT_REASONING: &str = "AI analysis completed with fallback parsing.";

/// Parse a free-form model reply into a (score, reasoning) pair
///
/// Total function: malformed input degrades to the documented defaults,
/// independently per field. The score is taken from the first line starting
/// with `SCORE:` and clamped to 1-100; the reasoning is the remainder of the
/// first `REASONING:` line joined with all following lines.
pub fn parse_ai_response(text: &str) -> (u8, String) {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();

    let score = lines
        .iter()
        .find_map(|line| line.strip_prefix("SCORE:"))
        .and_then(first_integer)
        .map(clamp_score)
        .unwrap_or(DEFAULT_SCORE);

    let reasoning = lines
        .iter()
        .position(|line| line.starts_with("REASONING:"))
        .map(|idx| {
            let first = lines[idx]["REASONING:".len()..].trim();
            let mut parts: Vec<&str> = Vec::new();
            if !first.is_empty() {
                parts.push(first);
            }
            parts.extend(lines[idx + 1..].iter().copied().filter(|l| !l.is_empty()));
            parts.join(" ")
        })
        .filter(|joined| !joined.is_empty())
        .unwrap_or_else(|| DEFAULT_REASONING.to_string());

    (score, reasoning)
}

/// First optionally-signed integer token in the text, if any
fn first_integer(text: &str) -> Option<i64> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let negative = bytes[i] == b'-'
            && bytes.get(i + 1).is_some_and(|c| c.is_ascii_digit());
        if bytes[i].is_ascii_digit() || negative {
            let start = i;
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if let Ok(value) = text[start..i].parse() {
                return Some(value);
            }
        } else {
            i += 1;
        }
    }
    None
}

fn clamp_score(value: i64) -> u8 {
    value.clamp(1, 100) as u8
}
