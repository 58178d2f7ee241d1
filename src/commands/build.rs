use crate::{
    BuildArgs,
    build::Builder,
    config::{Config, ConfigOverrides},
};

pub async fn run(args: &BuildArgs) -> Result<(), anyhow::Error> {
    let overrides = ConfigOverrides {
        csv: args.csv.clone(),
        template: args.template.clone(),
        output: args.output.clone(),
        // The flag can only switch escaping on; leave file/env values alone otherwise
        escape_html: args.escape_html.then_some(true),
    };
    let config = Config::load_from_arg(args.config_file.as_deref(), &overrides)?;

    let result = Builder::new(config).build()?;

    println!(
        "Generated {} page(s) in {}",
        result.pages,
        result.output_dir.display()
    );
    if result.removed > 0 {
        println!("Removed {} stale output entries", result.removed);
    }
    if !result.skipped.is_empty() {
        println!("Skipped {} malformed line(s):", result.skipped.len());
        for line in &result.skipped {
            println!(
                "  line {} ({} fields): {}",
                line.line_number, line.field_count, line.text
            );
        }
    }

    Ok(())
}
