use anyhow::Result;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;
    info!("structgen starting");

    structgen::session::run()?;

    info!("Done");
    Ok(())
}
