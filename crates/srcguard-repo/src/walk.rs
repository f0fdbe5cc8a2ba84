use camino::{Utf8Path, Utf8PathBuf};
use srcguard_domain::policy::ScanPolicy;
use srcguard_types::RepoPath;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Enumerate candidate file paths under `root`, repo-relative.
///
/// Directories whose basename is in `ignored_dirs` are pruned before
/// descent, so their contents are never visited. Order is traversal order;
/// callers must not depend on it. A missing root is a fatal run-level error.
pub fn walk_tree(root: &Utf8Path, policy: &ScanPolicy) -> anyhow::Result<Vec<RepoPath>> {
    if !root.is_dir() {
        anyhow::bail!("scan root does not exist or is not a directory: {root}");
    }

    let mut out = Vec::new();

    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        if !entry.file_type().is_dir() {
            return true;
        }
        let Some(name) = entry.file_name().to_str() else {
            return false;
        };
        // Never prune the root itself, even if its basename is ignored.
        entry.depth() == 0 || !policy.is_ignored_dir(name)
    });

    // Unreadable entries degrade to skips; only the missing root is fatal.
    for entry in walker.filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(abs) = pathbuf_to_utf8(entry.path().to_path_buf()) else {
            continue;
        };
        let rel = abs.strip_prefix(root).unwrap_or(&abs).as_str();
        out.push(RepoPath::new(rel));
    }

    Ok(out)
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
