use std::path::{Path, PathBuf};

use crate::{
    InitArgs,
    config::{Config, DEFAULT_CONFIG_FILE},
};

const SAMPLE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>%%2%% (%%3%%)</title>
</head>
<body>
  <h1>%%2%%</h1>
  <dl>
    <dt>Year</dt><dd>%%3%%</dd>
    <dt>Director</dt><dd>%%4%%</dd>
    <dt>Genre</dt><dd>%%5%%</dd>
  </dl>
  <footer>Movie #%%1%%</footer>
</body>
</html>
"#;

const SAMPLE_CSV: &str = "\
1,The Matrix,1999,Lana Wachowski,Science Fiction
2,Spirited Away,2001,Hayao Miyazaki,Animation
3,Pan's Labyrinth,2006,Guillermo del Toro,Fantasy
";

pub async fn run(args: &InitArgs) -> Result<(), anyhow::Error> {
    let path = if args.path.is_relative() {
        std::env::current_dir()?.join(&args.path)
    } else {
        args.path.clone()
    };

    if !path.exists() {
        if args.create {
            tokio::fs::create_dir_all(&path).await?;
            println!("Created directory {path}", path = path.display());
        } else {
            return Err(anyhow::anyhow!(
                "Directory does not exist: {path}",
                path = path.display()
            ));
        }
    }

    println!("Initializing project in {}", path.display());

    for file in scaffold(&path).await? {
        println!("Created {}", file.display());
    }

    Ok(())
}

/// Write the config file, a starter template and a sample CSV into `path`.
///
/// Fails without writing anything if any of the files already exists.
async fn scaffold(path: &Path) -> Result<Vec<PathBuf>, anyhow::Error> {
    // Paths stay relative so the project can be moved around
    let config = Config::default();
    let config_text = serde_yaml::to_string(&config)?;

    let files = [
        (path.join(DEFAULT_CONFIG_FILE), config_text.as_str()),
        (path.join(&config.input.template), SAMPLE_TEMPLATE),
        (path.join(&config.input.csv), SAMPLE_CSV),
    ];

    if let Some((existing, _)) = files.iter().find(|(file, _)| file.exists()) {
        return Err(anyhow::anyhow!(
            "Refusing to overwrite existing file: {}",
            existing.display()
        ));
    }

    let mut created = Vec::with_capacity(files.len());
    for (file, content) in files {
        tokio::fs::write(&file, content).await?;
        created.push(file);
    }

    Ok(created)
}
