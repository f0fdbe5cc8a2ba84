use crate::report::Violations;
use srcguard_types::{RepoPath, RuleId, Violation};

/// Unicode blocks the charset mandate rejects. Emoji and symbol blocks stay
/// allowed; CJK script text does not.
const RESTRICTED_BLOCKS: &[(char, char)] = &[
    ('\u{4e00}', '\u{9fff}'), // CJK Unified Ideographs
    ('\u{3040}', '\u{309f}'), // Hiragana
    ('\u{30a0}', '\u{30ff}'), // Katakana
    ('\u{ac00}', '\u{d7af}'), // Hangul Syllables
    ('\u{3000}', '\u{303f}'), // CJK Symbols and Punctuation
    ('\u{ff00}', '\u{ffef}'), // Fullwidth Forms
];

const PREVIEW_CHARS: usize = 30;

fn is_restricted(c: char) -> bool {
    RESTRICTED_BLOCKS.iter().any(|&(lo, hi)| c >= lo && c <= hi)
}

/// Scan content line by line (1-indexed); the first line containing a
/// restricted character yields exactly one violation for the whole file.
pub fn run(path: &RepoPath, content: &str, out: &mut Violations) {
    for (idx, line) in content.lines().enumerate() {
        if line.chars().any(is_restricted) {
            let preview: String = line.trim().chars().take(PREVIEW_CHARS).collect();
            out.add(Violation {
                rule: RuleId::CharsetMandate,
                path: path.clone(),
                detail: format!("restricted text at line {}: {}...", idx + 1, preview),
            });
            return;
        }
    }
}
