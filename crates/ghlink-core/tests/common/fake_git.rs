//! Scripted stand-in for the git executable.
//!
//! Writes a POSIX shell script that matches on its full argument list and
//! prints, fails, or hangs as configured. Unmatched commands exit 1.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

enum Behavior {
    Print(String),
    Exit { code: i32, stderr: String },
    Hang,
}

#[derive(Default)]
pub struct FakeGit {
    rules: Vec<(String, Behavior)>,
}

impl FakeGit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prints(mut self, args: &str, stdout: &str) -> Self {
        self.rules
            .push((args.to_string(), Behavior::Print(stdout.to_string())));
        self
    }

    pub fn exits(mut self, args: &str, code: i32, stderr: &str) -> Self {
        self.rules.push((
            args.to_string(),
            Behavior::Exit {
                code,
                stderr: stderr.to_string(),
            },
        ));
        self
    }

    pub fn hangs(mut self, args: &str) -> Self {
        self.rules.push((args.to_string(), Behavior::Hang));
        self
    }

    /// Writes the script as `dir/git` and returns its path.
    pub fn install(&self, dir: &Path) -> PathBuf {
        let mut script = String::from("#!/bin/sh\ncase \"$*\" in\n");
        for (args, behavior) in &self.rules {
            let body = match behavior {
                Behavior::Print(stdout) => {
                    format!("printf '%s\\n' {}; exit 0", shell_quote(stdout))
                }
                Behavior::Exit { code, stderr } => {
                    format!("printf '%s\\n' {} >&2; exit {code}", shell_quote(stderr))
                }
                Behavior::Hang => "exec sleep 30".to_string(),
            };
            script.push_str(&format!("  {}) {body} ;;\n", shell_quote(args)));
        }
        script.push_str("  *) echo \"fake git: unexpected args: $*\" >&2; exit 1 ;;\nesac\n");

        let path = dir.join("git");
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }
}

/// Single-quotes `value` for sh, closing and reopening around embedded quotes.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}
