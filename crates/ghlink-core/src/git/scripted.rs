//! In-memory `GitRunner` with canned responses, keyed by the joined argument list.

use std::collections::HashMap;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::{GitError, GitRunner};

#[derive(Debug, Clone, Default)]
pub(crate) struct ScriptedGit {
    responses: HashMap<String, Result<String, i32>>,
    calls: Arc<Mutex<Vec<(PathBuf, String)>>>,
}

impl ScriptedGit {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(mut self, args: &str, stdout: &str) -> Self {
        self.responses
            .insert(args.to_string(), Ok(stdout.to_string()));
        self
    }

    pub(crate) fn fail(mut self, args: &str, code: i32) -> Self {
        self.responses.insert(args.to_string(), Err(code));
        self
    }

    pub(crate) fn calls(&self) -> Vec<(PathBuf, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl GitRunner for ScriptedGit {
    fn run(
        &self,
        cwd: &Path,
        args: &[&str],
    ) -> impl Future<Output = Result<String, GitError>> + Send {
        let key = args.join(" ");
        self.calls
            .lock()
            .unwrap()
            .push((cwd.to_path_buf(), key.clone()));

        // Unscripted commands behave like a missing git binary.
        let result = match self.responses.get(&key) {
            Some(Ok(stdout)) => Ok(stdout.clone()),
            Some(Err(code)) => Err(GitError::Failed {
                args: key,
                code: Some(*code),
                stderr: "fatal: scripted failure".to_string(),
            }),
            None => Err(GitError::Spawn {
                program: "git".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, format!("unscripted: {key}")),
            }),
        };
        async move { result }
    }
}
