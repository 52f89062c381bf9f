// tests/common/fixtures.rs
use std::{
    fs::{self, FileTimes},
    path::Path,
    time::{Duration, SystemTime},
};

use assert_cmd::Command;
use tempfile::TempDir;

/// Temporary directory populated with files of known sizes.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().expect("create temp dir") }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates `name` holding exactly `size` bytes.
    pub fn file(self, name: &str, size: usize) -> Self {
        fs::write(self.dir.path().join(name), vec![b'x'; size]).expect("write fixture file");
        self
    }

    pub fn subdir(self, name: &str) -> Self {
        fs::create_dir(self.dir.path().join(name)).expect("create fixture dir");
        self
    }

    /// Sets the modification time of `name` to `secs_ago` seconds in the past.
    pub fn aged(self, name: &str, secs_ago: u64) -> Self {
        self.set_times(name, FileTimes::new().set_modified(ago(secs_ago)))
    }

    /// Sets the access time of `name` to `secs_ago` seconds in the past (`touch -a`).
    pub fn read_at(self, name: &str, secs_ago: u64) -> Self {
        self.set_times(name, FileTimes::new().set_accessed(ago(secs_ago)))
    }

    fn set_times(self, name: &str, times: FileTimes) -> Self {
        fs::File::options()
            .write(true)
            .open(self.dir.path().join(name))
            .expect("open fixture file")
            .set_times(times)
            .expect("set file times");
        self
    }
}

fn ago(secs: u64) -> SystemTime {
    SystemTime::now() - Duration::from_secs(secs)
}

/// `simple_ls` with `args` followed by the fixture directory.
pub fn ls_in(fixture: &Fixture, args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_simple_ls"));
    cmd.env_remove("SIMPLE_LS_LOG").args(args).arg(fixture.path());
    cmd
}

/// Stdout of a successful run, split into lines.
pub fn stdout_lines(cmd: &mut Command) -> Vec<String> {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output)
        .expect("utf-8 stdout")
        .lines()
        .map(str::to_owned)
        .collect()
}
