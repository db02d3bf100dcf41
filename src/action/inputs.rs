use crate::config::ConfigError;
use std::env;

/// Named, string-valued workflow inputs.
///
/// Implementors only expose the raw lookup; trimming and the required check
/// are shared by every source.
pub trait Inputs {
    fn raw(&self, name: &str) -> Option<String>;

    /// Returns the trimmed value, or an empty string when the input was not
    /// supplied.
    fn get_input(&self, name: &str) -> Result<String, ConfigError> {
        Ok(self
            .raw(name)
            .map(|value| value.trim().to_owned())
            .unwrap_or_default())
    }

    fn get_required(&self, name: &str) -> Result<String, ConfigError> {
        let value = self.get_input(name)?;

        if value.is_empty() {
            return Err(ConfigError::MissingInput(name.to_owned()));
        }

        Ok(value)
    }
}

/// Reads inputs the way the Actions runner exposes them: `INPUT_<NAME>`.
pub struct EnvInputs;

impl Inputs for EnvInputs {
    fn raw(&self, name: &str) -> Option<String> {
        env::var(env_key(name)).ok()
    }
}

fn env_key(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

#[cfg(test)]
impl Inputs for std::collections::HashMap<&str, &str> {
    fn raw(&self, name: &str) -> Option<String> {
        self.get(name).map(|value| value.to_string())
    }
}
