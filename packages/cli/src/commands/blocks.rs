use anyhow::Result;
use clap::Args;
use colored::Colorize;
use lander_blocks::BlockRegistry;

#[derive(Debug, Args)]
pub struct BlocksArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// List block types available to the palette
pub fn blocks(args: BlocksArgs) -> Result<()> {
    let registry = BlockRegistry::new();

    if args.json {
        let types = registry.list_available_types();
        println!("{}", serde_json::to_string_pretty(&types)?);
        return Ok(());
    }

    println!("{}", "🧱 Available blocks".bright_blue().bold());
    for definition in registry.definitions() {
        let schema = if definition.schema.is_some() {
            " (schema)".dimmed().to_string()
        } else {
            String::new()
        };
        println!(
            "  {} {}{}",
            definition.block_type.bright_white(),
            definition.label,
            schema
        );
    }

    Ok(())
}
