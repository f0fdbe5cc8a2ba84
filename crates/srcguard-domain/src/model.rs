use srcguard_types::RepoPath;

/// A candidate file discovered by the walker (or supplied by a targeted
/// list), with its content already loaded and decoded.
///
/// `text` is `None` when the file could not be decoded as UTF-8 text; the
/// classifier treats such files as binary/vendor assets and skips them.
#[derive(Clone, Debug)]
pub struct CandidateFile {
    pub path: RepoPath,
    pub text: Option<String>,
}

impl CandidateFile {
    pub fn new(path: RepoPath, text: Option<String>) -> Self {
        Self { path, text }
    }

    pub fn basename(&self) -> &str {
        self.path.file_name()
    }

    /// Extension including the leading dot, or `""`.
    pub fn extension(&self) -> &str {
        self.path.extension()
    }
}
