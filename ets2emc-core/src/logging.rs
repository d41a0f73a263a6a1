//! File logging for conversion runs.

use anyhow::Result;
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use std::path::Path;

/// Routes the `log` facade to `log_file`, creating its parent directory.
///
/// Fails if a global logger has already been installed.
pub fn setup_file_logging(log_file: &Path, log_level: LevelFilter) -> Result<()> {
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let config = file_logging_config(log_file, log_level)?;
    log4rs::init_config(config)?;
    Ok(())
}

fn file_logging_config(log_file: &Path, log_level: LevelFilter) -> Result<Config> {
    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}",
        )))
        .append(false)
        .build(log_file)?;

    Ok(Config::builder()
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .build(Root::builder().appender("file").build(log_level))?)
}
