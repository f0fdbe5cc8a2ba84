use anyhow::Context;
use camino::Utf8Path;
use srcguard_domain::model::CandidateFile;
use srcguard_types::RepoPath;

/// Bytes inspected by the text/binary probe before committing to a full
/// decode.
const PROBE_LEN: usize = 1024;

/// Load one candidate, decoding its content when it looks like text.
///
/// A file that fails the probe or the full decode gets `text: None` and is
/// later skipped by the classifier; that is a skip, not an error. Read
/// failures (permissions, races) propagate so the caller can warn and move
/// on.
pub fn load_candidate(root: &Utf8Path, rel: &RepoPath) -> anyhow::Result<CandidateFile> {
    let abs = root.join(rel.as_str());
    let bytes = std::fs::read(&abs).with_context(|| format!("read {abs}"))?;
    Ok(CandidateFile::new(rel.clone(), decode_text(bytes)))
}

/// Resolve an explicit targeted path list against the filesystem.
///
/// Paths that exist are kept in caller order; each missing path becomes a
/// warning, never a violation.
pub fn resolve_targets(
    root: &Utf8Path,
    targets: &[RepoPath],
    warnings: &mut Vec<String>,
) -> Vec<RepoPath> {
    let mut out = Vec::with_capacity(targets.len());
    for rel in targets {
        if root.join(rel.as_str()).is_file() {
            out.push(rel.clone());
        } else {
            warnings.push(format!("targeted path not found, skipping: {rel}"));
        }
    }
    out
}

fn decode_text(bytes: Vec<u8>) -> Option<String> {
    let probe = &bytes[..bytes.len().min(PROBE_LEN)];
    if !probe_is_textual(probe) {
        return None;
    }
    String::from_utf8(bytes).ok()
}

/// Valid UTF-8, modulo a multi-byte sequence cut at the probe boundary.
fn probe_is_textual(prefix: &[u8]) -> bool {
    if prefix.contains(&0) {
        return false;
    }
    match std::str::from_utf8(prefix) {
        Ok(_) => true,
        Err(e) => e.error_len().is_none(),
    }
}
