use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;


const BIN_NAME: &str = "addrx";
const INPUT: &str = "input.txt";
const OUTPUT: &str = "output.txt";

pub struct CliTest {
    _temp_dir: TempDir,
    work_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let work_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            work_dir,
        })
    }

    /// Creates a test directory with `input.txt` holding `content`.
    pub fn with_input(content: &str) -> Result<Self> {
        Self::with_input_bytes(content.as_bytes())
    }

    pub fn with_input_bytes(content: &[u8]) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(INPUT, content)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: impl AsRef<[u8]>) -> Result<()> {
        let file_path = self.work_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.work_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.work_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    /// `addrx input.txt output.txt`
    pub fn extract_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.args([INPUT, OUTPUT]);
        cmd
    }

    pub fn run_extract(&self) -> Result<Output> {
        self.extract_command()
            .output()
            .context("Failed to run addrx")
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.work_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    pub fn read_output(&self) -> Result<String> {
        self.read_file(OUTPUT)
    }

    pub fn output_exists(&self) -> bool {
        self.work_dir.join(OUTPUT).exists()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
