use crate::convention::Convention;

const COMMENT_MARKER: &str = "// TEST";
const SIGNATURE_MARKER: &str = "__test";

/// Scanner state for the comment-marker convention.
enum ScanState {
    Idle,
    /// The previous line was a marker; the current line is inspected for a
    /// test declaration.
    Armed,
}

/// Collects the names of marked test functions from a source file.
pub struct TestCollector {
    convention: Convention,
}

impl TestCollector {
    pub fn new(convention: Convention) -> Self {
        Self { convention }
    }

    /// Returns all discovered test names, in the order their markers appear
    /// scanning top to bottom. Duplicates are kept.
    pub fn collect<'a>(&self, lines: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        match self.convention {
            Convention::CommentMarker => collect_comment_marked(lines),
            Convention::SignatureMarker => {
                lines.into_iter().filter_map(signature_test_name).collect()
            }
        }
    }
}

fn collect_comment_marked<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut tests = Vec::new();
    let mut state = ScanState::Idle;

    for line in lines {
        state = match state {
            // A marker arms the scanner for exactly one line; if that line
            // holds no declaration the marker is dropped silently.
            ScanState::Armed => {
                tests.extend(function_name(line));
                ScanState::Idle
            }
            ScanState::Idle if line.starts_with(COMMENT_MARKER) => ScanState::Armed,
            ScanState::Idle => ScanState::Idle,
        };
    }

    tests
}

/// A line declares a test if it contains `__test` followed by whitespace.
/// The name is extracted from whatever follows the marker, so parentheses
/// earlier in the line never confuse the scan.
fn signature_test_name(line: &str) -> Option<String> {
    let marker = line.find(SIGNATURE_MARKER)?;
    let declaration = &line[marker + SIGNATURE_MARKER.len()..];

    if !declaration.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }

    function_name(declaration)
}

/// Extracts the callable name from a declaration line, tolerating any amount
/// of whitespace between the name and its parameter list.
fn function_name(line: &str) -> Option<String> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    for (i, part) in parts.iter().enumerate() {
        if part.starts_with('(') {
            // The parenthesis is its own token; the name is the token before it.
            let name = parts[..i].last()?.replace(['(', ')'], "");
            return (!name.is_empty()).then_some(name);
        }

        if let Some(paren) = part.find('(') {
            return Some(part[..paren].to_string());
        }
    }

    None
}
