use crate::error::{CliError, Result};
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

fn console_level(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact();

    let registry = tracing_subscriber::registry()
        .with(console_level(verbosity, quiet))
        .with(stderr_layer);

    match log_file {
        Some(path) => {
            let file = File::create(&path).map_err(CliError::Io)?;
            let file_layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true);
            registry.with(file_layer).init();
        }
        None => registry.init(),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::sync::Once;
    use tracing::{debug, info, warn};

    static INIT: Once = Once::new();

    fn init_once() {
        INIT.call_once(|| {
            setup_logging(3, false, None).expect("global logger for tests");
        });
    }

    #[test]
    fn console_level_maps_verbosity_flags() {
        assert_eq!(console_level(0, false), LevelFilter::WARN);
        assert_eq!(console_level(1, false), LevelFilter::INFO);
        assert_eq!(console_level(2, false), LevelFilter::DEBUG);
        assert_eq!(console_level(9, false), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_wins_over_any_verbosity() {
        assert_eq!(console_level(0, true), LevelFilter::OFF);
        assert_eq!(console_level(3, true), LevelFilter::OFF);
    }

    #[test]
    #[serial]
    fn logging_macros_work_after_setup() {
        init_once();
        warn!("warning after setup");
        info!("info after setup");
        debug!("debug after setup");
    }

    #[test]
    #[serial]
    fn file_layer_writes_messages_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");

        let file = File::create(&path).unwrap();
        let file_layer = fmt::layer().with_writer(file).with_ansi(false);
        let subscriber = tracing_subscriber::registry().with(file_layer);

        tracing::subscriber::with_default(subscriber, || {
            info!("message bound for the log file");
        });

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("message bound for the log file"));
    }

    #[test]
    #[serial]
    fn unwritable_log_file_path_propagates_io_error() {
        let directory_as_file = PathBuf::from("/");
        if cfg!(unix) && directory_as_file.is_dir() {
            let result = setup_logging(0, false, Some(directory_as_file));
            assert!(matches!(result, Err(CliError::Io(_))));
        }
    }
}
