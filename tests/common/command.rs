use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::{Path, PathBuf};

/// Environment applied to every git invocation (the tool's own and the test
/// harness's) so runs are hermetic: no host gitconfig, a fixed identity.
const GIT_ENV: [(&str, &str); 6] = [
    ("GIT_CONFIG_GLOBAL", "/dev/null"),
    ("GIT_CONFIG_SYSTEM", "/dev/null"),
    ("GIT_AUTHOR_NAME", "Test Operator"),
    ("GIT_AUTHOR_EMAIL", "operator@example.com"),
    ("GIT_COMMITTER_NAME", "Test Operator"),
    ("GIT_COMMITTER_EMAIL", "operator@example.com"),
];

pub fn run_grit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("grit-sync").expect("Failed to find grit-sync binary");
    cmd.envs(GIT_ENV);
    cmd.current_dir(dir);
    cmd.args(args);
    cmd
}

pub fn git(dir: &Path, args: &[&str]) {
    let status = std::process::Command::new("git")
        .envs(GIT_ENV)
        .arg("-C")
        .arg(dir)
        .args(args)
        .status()
        .unwrap_or_else(|e| panic!("Failed to run git {:?}: {}", args, e));

    assert!(status.success(), "git {:?} failed in {:?}", args, dir);
}

pub fn git_capture(dir: &Path, args: &[&str]) -> String {
    let output = std::process::Command::new("git")
        .envs(GIT_ENV)
        .arg("-C")
        .arg(dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run git {:?}: {}", args, e));

    assert!(output.status.success(), "git {:?} failed in {:?}", args, dir);
    String::from_utf8(output.stdout)
        .expect("git output was not utf-8")
        .trim()
        .to_string()
}

/// A working tree wired to a local bare remote, with one pushed commit.
pub struct SyncWorld {
    pub root: TempDir,
    pub remote: PathBuf,
    pub work: PathBuf,
    pub branch: String,
}

impl SyncWorld {
    pub fn commit_count(&self) -> usize {
        git_capture(&self.work, &["rev-list", "--count", "HEAD"])
            .parse()
            .expect("rev-list count was not a number")
    }

    pub fn stash_count(&self) -> usize {
        let list = git_capture(&self.work, &["stash", "list"]);
        if list.is_empty() { 0 } else { list.lines().count() }
    }

    pub fn head(&self) -> String {
        git_capture(&self.work, &["rev-parse", "HEAD"])
    }

    pub fn remote_head(&self) -> String {
        git_capture(&self.remote, &["rev-parse", &self.branch])
    }

    pub fn status(&self) -> String {
        git_capture(&self.work, &["status", "--porcelain"])
    }

    pub fn last_commit_subject(&self) -> String {
        git_capture(&self.work, &["log", "-1", "--format=%s"])
    }

    /// Commit and push a change through a second clone, making the remote
    /// diverge from (or run ahead of) the working tree.
    pub fn push_remote_change(&self, file: &str, content: &str, message: &str) {
        let other = self.root.path().join("other");
        if !other.exists() {
            git(
                self.root.path(),
                &["clone", self.remote.to_str().expect("utf-8 path"), "other"],
            );
        } else {
            git(&other, &["pull", "--rebase", "origin", &self.branch]);
        }

        write_file(FileSpec::new(other.join(file), content.to_string()));
        git(&other, &["add", "."]);
        git(&other, &["commit", "-m", message]);
        git(&other, &["push", "origin", &self.branch]);
    }
}

#[fixture]
pub fn sync_world() -> SyncWorld {
    let root = TempDir::new().expect("Failed to create temp dir");

    let remote = root.path().join("origin.git");
    git(root.path(), &["init", "--bare", "origin.git"]);

    let work = root.path().join("work");
    std::fs::create_dir_all(&work).expect("Failed to create working tree");
    git(&work, &["init"]);
    write_file(FileSpec::new(work.join("README.md"), "hello\n".to_string()));
    git(&work, &["add", "."]);
    git(&work, &["commit", "-m", "Initial commit"]);
    git(
        &work,
        &["remote", "add", "origin", remote.to_str().expect("utf-8 path")],
    );

    let branch = git_capture(&work, &["symbolic-ref", "--short", "HEAD"]);
    git(&work, &["push", "origin", &branch]);

    SyncWorld {
        root,
        remote,
        work,
        branch,
    }
}
