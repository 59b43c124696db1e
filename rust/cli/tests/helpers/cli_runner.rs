use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Environment variables the binary reads its configuration from.
const CONFIG_VARS: [&str; 5] = [
    "ANTE_CONFIG",
    "ANTE_SEED",
    "ANTE_LEVEL",
    "ANTE_HANDS",
    "ANTE_DISCARDS",
];

/// Runs the compiled `ante` binary in a child process, so each test controls
/// the configuration environment without touching the test process's own.
#[derive(Debug)]
pub struct CliRunner {
    binary_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CliRunner {
    pub fn new() -> Self {
        Self {
            binary_path: PathBuf::from(env!("CARGO_BIN_EXE_ante")),
        }
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliResult {
        self.run_inner(args, env, None)
    }

    pub fn run_with_input(&self, args: &[&str], env: &[(&str, &str)], input: &str) -> CliResult {
        self.run_inner(args, env, Some(input))
    }

    fn run_inner(&self, args: &[&str], env: &[(&str, &str)], input: Option<&str>) -> CliResult {
        let mut cmd = Command::new(&self.binary_path);
        cmd.args(args)
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        for key in CONFIG_VARS {
            cmd.env_remove(key);
        }
        cmd.env_remove("RUST_LOG");
        for (key, value) in env.iter() {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("failed to spawn CLI binary");

        if let Some(payload) = input {
            use std::io::Write as _;
            if let Some(mut stdin) = child.stdin.take() {
                let _ = stdin.write_all(payload.as_bytes());
            }
        }

        let output = child.wait_with_output().expect("failed to read output");
        CliResult {
            exit_code: output.status.code().unwrap_or(1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
