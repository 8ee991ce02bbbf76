//! User-indicated syllable breaks, e.g. "над.живея"

/// Marks a mandatory syllable boundary; never part of the output
pub const MARKER: char = '.';

/// First marker at or after `range_start` that lies strictly before `range_end`.
pub fn find_forced_break(word: &[char], range_start: usize, range_end: usize) -> Option<usize> {
    if range_start >= range_end {
        return None;
    }

    let end = range_end.min(word.len());
    word.get(range_start..end)?
        .iter()
        .position(|&ch| ch == MARKER)
        .map(|offset| range_start + offset)
}

/// Remove every marker from `segment`
pub fn strip_markers(segment: &str) -> String {
    segment.chars().filter(|&ch| ch != MARKER).collect()
}
