use std::path::Path;

use crate::{
    CleanArgs,
    config::{Config, ConfigOverrides},
};

/// What `clean` did with the output directory.
#[derive(Debug, PartialEq, Eq)]
enum CleanOutcome {
    Missing,
    WouldDelete,
    Deleted,
}

pub async fn run(args: &CleanArgs) -> Result<(), anyhow::Error> {
    let overrides = ConfigOverrides {
        output: args.output.clone(),
        ..Default::default()
    };
    let config = Config::load_from_arg(args.config_file.as_deref(), &overrides)?;

    let output_dir = &config.output.dir;
    match clean_output(output_dir, args.dry_run).await? {
        CleanOutcome::Missing => println!("Nothing to delete at {}", output_dir.display()),
        CleanOutcome::WouldDelete => println!("Would delete {}", output_dir.display()),
        CleanOutcome::Deleted => println!("Deleted {}", output_dir.display()),
    }

    Ok(())
}

/// Delete the generated pages folder, unless this is a dry run.
async fn clean_output(output_dir: &Path, dry_run: bool) -> Result<CleanOutcome, std::io::Error> {
    if !output_dir.exists() {
        return Ok(CleanOutcome::Missing);
    }

    if dry_run {
        return Ok(CleanOutcome::WouldDelete);
    }

    tokio::fs::remove_dir_all(output_dir).await?;
    Ok(CleanOutcome::Deleted)
}
