use std::io::{self, Write};
use std::path::Path;

use quran_count::{AllahMode, AnalysisConfig, CORPUS_PATH, Result, run};

const CONFIG: AnalysisConfig = AnalysisConfig {
    strip_diacritics: true,
    remove_non_arabic: true,
    allah_mode: AllahMode::Both,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(Path::new(CORPUS_PATH), &CONFIG, &mut out)?;
    out.flush()?;
    Ok(())
}
