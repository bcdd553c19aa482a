use std::io::{self, Write};

use texture_faces::ReportConfig;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cfg = ReportConfig::default();
    log::debug!("report config: {cfg:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cfg.run(&mut out)?;
    out.flush()?;

    Ok(())
}
