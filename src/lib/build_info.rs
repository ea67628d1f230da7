use super::GIT_COMMIT_HASH;

/// Short commit hash for footers and version strings.
pub fn git_commit_hash() -> &'static str {
    GIT_COMMIT_HASH.get(..7).unwrap_or(GIT_COMMIT_HASH)
}

/// `0.1.0 - abc1234` style version label.
pub fn version_label() -> String {
    format!("{} - {}", env!("CARGO_PKG_VERSION"), git_commit_hash())
}
