use anyhow::{bail, Context, Result};
use std::{
    env,
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
    process,
    time::{SystemTime, UNIX_EPOCH},
};

const GITHUB_OUTPUT: &str = "GITHUB_OUTPUT";

/// Where named step outputs and the terminal failure are reported.
pub trait ActionOutput {
    /// Publishes every output or none of them.
    fn set_outputs(&mut self, outputs: &[(&str, String)]) -> Result<()>;
    fn set_failed(&mut self, message: &str);
}

/// Workflow commands understood by the Actions runner.
pub struct WorkflowCommands {
    output_file: Option<PathBuf>,
}

impl WorkflowCommands {
    pub fn new(output_file: Option<PathBuf>) -> Self {
        WorkflowCommands { output_file }
    }

    pub fn from_env() -> Self {
        let output_file = env::var_os(GITHUB_OUTPUT)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        WorkflowCommands::new(output_file)
    }
}

impl ActionOutput for WorkflowCommands {
    fn set_outputs(&mut self, outputs: &[(&str, String)]) -> Result<()> {
        log::debug!("setting {} outputs", outputs.len());

        match &self.output_file {
            Some(path) => append_to_file(path, outputs, &delimiter()),
            None => {
                let commands: Vec<String> = outputs
                    .iter()
                    .map(|(name, value)| set_output_command(name, value))
                    .collect();
                println!("{}", commands.join("\n"));
                Ok(())
            }
        }
    }

    fn set_failed(&mut self, message: &str) {
        println!("{}", error_command(message));
    }
}

/// Every entry is rendered before the file is touched, so a rejected value
/// leaves the file as it was.
fn append_to_file(path: &Path, outputs: &[(&str, String)], delimiter: &str) -> Result<()> {
    let entries = outputs
        .iter()
        .map(|(name, value)| file_command_entry(name, value, delimiter))
        .collect::<Result<String>>()?;

    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    file.write_all(entries.as_bytes())
        .context("failed to write GITHUB_OUTPUT entries")?;

    Ok(())
}

fn set_output_command(name: &str, value: &str) -> String {
    format!(
        "::set-output name={}::{}",
        escape_property(name),
        escape_data(value)
    )
}

fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

fn delimiter() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default();

    format!("ghadelimiter_{}_{}", process::id(), nanos)
}

fn file_command_entry(name: &str, value: &str, delimiter: &str) -> Result<String> {
    if name.contains(delimiter) {
        bail!("Unexpected input: name should not contain the delimiter \"{delimiter}\"");
    }

    if value.contains(delimiter) {
        bail!("Unexpected input: value should not contain the delimiter \"{delimiter}\"");
    }

    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
