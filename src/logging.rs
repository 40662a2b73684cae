//! Logging setup
//!
//! Library code logs through the `log` facade only. Binaries call
//! [`init`] once to route records to stderr via `env_logger`; `RUST_LOG`
//! overrides the default level.
//!
//! - Default level: `info`
//! - `--verbose` on the command line raises it to `debug`

/// Install the global logger.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env = env_logger::Env::default().default_filter_or(default_level);

    if env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init()
        .is_err()
    {
        log::debug!("Logger already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init(false);
        init(true);
        log::info!("logger ready");
    }
}
