/// How a test file flags its test functions.
///
/// Two generations of test files exist side by side: older files put a
/// `// TEST` comment on the line before each test, newer ones embed a
/// `__test` token in the signature itself. Each convention comes with its
/// own runner skeleton, so the caller has to say which one the file uses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Convention {
    /// `// TEST` on the line immediately before the test's signature
    CommentMarker,
    /// `__test` embedded in the signature, before the function name
    SignatureMarker,
}
