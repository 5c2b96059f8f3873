use vaultarc::{init_logging, load_config, run, BUILD_DATE, VERSION};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;
    tracing::info!(version = VERSION, built = BUILD_DATE, "vaultarc starting");

    let config = load_config()?;
    let stdout = std::io::stdout();
    run(&config, &mut stdout.lock())?;

    Ok(())
}
