#![allow(dead_code)]

pub mod fake_service;

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

pub use fake_service::{FakeTicketService, ticket_json};

/// Path of the compiled `turnstile` binary
pub fn turnstile_binary() -> &'static str {
    env!("CARGO_BIN_EXE_turnstile")
}

/// Helper struct to run turnstile commands against an isolated config file
pub struct TurnstileTest {
    pub temp_dir: TempDir,
    api_url: Option<String>,
}

impl TurnstileTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        TurnstileTest {
            temp_dir,
            api_url: None,
        }
    }

    /// Point every command at `api_url` through `TURNSTILE_API_URL`
    pub fn with_api_url(api_url: &str) -> Self {
        TurnstileTest {
            api_url: Some(api_url.to_string()),
            ..Self::new()
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.yaml")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        let mut command = Command::new(turnstile_binary());
        command
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("TURNSTILE_CONFIG", self.config_path())
            .env("TURNSTILE_LOG", "off")
            .env_remove("TURNSTILE_API_URL")
            .env_remove("TURNSTILE_API_TOKEN");
        if let Some(url) = &self.api_url {
            command.env("TURNSTILE_API_URL", url);
        }
        command.output().expect("Failed to execute turnstile command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        assert_eq!(output.status.code(), Some(1));
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).expect("Failed to read config file")
    }
}
