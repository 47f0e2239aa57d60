use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use mestri::{init_logging, Reply, SettingsPersistence, Shell};

fn config_path() -> anyhow::Result<PathBuf> {
    match std::env::var_os("MESTRI_CONFIG") {
        Some(path) => Ok(PathBuf::from(path)),
        None => Ok(SettingsPersistence::default_config_path()?),
    }
}

fn main() -> anyhow::Result<()> {
    let path = config_path()?;
    let settings = SettingsPersistence::load_or_default(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;

    init_logging(&settings.config().logging.level)?;
    tracing::info!("Modern Mestri {} starting", mestri::VERSION);

    let mut shell = Shell::new(settings.config());
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "Modern Mestri designer. Type 'help' for commands.")?;
    for line in stdin.lock().lines() {
        let line = line?;
        match shell.execute(&line) {
            Ok(Reply::Quit) => break,
            Ok(Reply::Output(text)) => {
                if !text.is_empty() {
                    writeln!(stdout, "{}", text.trim_end())?;
                }
            }
            Err(e) => writeln!(stdout, "error: {:#}", e)?,
        }
        stdout.flush()?;
    }

    Ok(())
}
