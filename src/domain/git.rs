use anyhow::{Context, Result};
use git2::Repository;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// libgit2 handle used to vet the repository before `git log` is spawned:
/// a path outside any repository, or one with an unborn HEAD, has no
/// history to report and is answered without running git at all.
pub struct RepoExt(pub Repository);

impl RepoExt {
    pub fn open(path: &Path) -> Result<Self> {
        Repository::discover(path)
            .with_context(|| format!("cannot open repo at {}", path.display()))
            .map(Self)
    }

    /// Top of the working tree, or the git dir for bare repositories.
    pub fn root(&self) -> PathBuf {
        self.0
            .workdir()
            .unwrap_or_else(|| self.0.path())
            .to_path_buf()
    }

    /// False until HEAD points at a commit.
    pub fn has_commits(&self) -> bool {
        !self.0.is_empty().unwrap_or(false)
    }
}

/// Which slice of history `git log` should report on.
#[derive(Debug, Clone, Default)]
pub struct LogQuery {
    pub repo: PathBuf,
    /// Newest N commits; 0 means no limit.
    pub count: usize,
    /// Any date expression git understands (`2023-01-05`, `2 weeks ago`).
    pub since: Option<String>,
    pub author: Option<String>,
}

impl LogQuery {
    /// Restriction flags, one argv element each, present only when set.
    pub fn restrictions(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.count > 0 {
            args.push(format!("-{}", self.count));
        }
        if let Some(since) = &self.since {
            args.push("--since".to_string());
            args.push(since.clone());
        }
        if let Some(author) = &self.author {
            args.push(format!("--author={author}"));
        }
        args
    }

    /// Full argument vector for `git`, starting after the program name.
    pub fn git_args(&self, repo: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["-C".into(), repo.into(), "log".into()];
        args.extend(self.restrictions().into_iter().map(OsString::from));
        args.push("--stat".into());
        args.push("--date=short".into());
        // the parser expects plain text regardless of color.ui
        args.push("--no-color".into());
        args
    }

    /// Run `git log` and return its stdout.
    ///
    /// `None` when there is no history to read (no repository, no commits)
    /// or git cannot be spawned; a non-zero exit still hands back whatever
    /// was printed. The C locale keeps the stat summary in English.
    pub fn run(&self) -> Option<String> {
        let repo = match RepoExt::open(&self.repo) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("{e:#}");
                return None;
            }
        };
        if !repo.has_commits() {
            tracing::info!(repo = %self.repo.display(), "repository has no commits yet");
            return None;
        }

        let args = self.git_args(&repo.root());
        tracing::debug!(?args, "running git");

        let output = match Command::new("git").args(&args).env("LC_ALL", "C").output() {
            Ok(o) => o,
            Err(e) => {
                tracing::warn!("failed to run `git log`: {e}");
                return None;
            }
        };
        if !output.status.success() {
            tracing::warn!(
                status = %output.status,
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "`git log` exited unsuccessfully"
            );
        }
        Some(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
