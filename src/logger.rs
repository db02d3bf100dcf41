use anyhow::Result;
use simple_logger::init_with_level;
use std::env;

const RUNNER_DEBUG: &str = "RUNNER_DEBUG";

pub fn init() -> Result<()> {
    init_with_level(level(env::var(RUNNER_DEBUG).ok().as_deref()))?;

    Ok(())
}

/// Debug logging is switched on by the runner when a workflow is re-run with
/// "enable debug logging".
fn level(runner_debug: Option<&str>) -> log::Level {
    match runner_debug {
        Some("1") => log::Level::Debug,
        _ => log::Level::Info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_info() {
        assert_eq!(level(None), log::Level::Info);
        assert_eq!(level(Some("0")), log::Level::Info);
        assert_eq!(level(Some("true")), log::Level::Info);
    }

    #[test]
    fn should_enable_debug_when_runner_debug_is_set() {
        assert_eq!(level(Some("1")), log::Level::Debug);
    }
}
