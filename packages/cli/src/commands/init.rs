use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use lander_editor::{CampaignStore, FileStore};
use lander_model::{BlockIdGenerator, CampaignDocument};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Campaign id (letters, digits, '-' and '_')
    pub campaign_id: String,

    /// Display name of the campaign
    #[arg(short, long)]
    pub name: Option<String>,

    /// Acting user (defaults to defaultOwner from config)
    #[arg(short, long)]
    pub owner: Option<String>,

    /// Overwrite an existing campaign with the starter page
    #[arg(short, long)]
    pub force: bool,
}

pub async fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);
    let mut config = Config::load(cwd)?;
    let owner = config.resolve_owner(args.owner.as_deref())?;

    println!("{}", "📝 Creating campaign...".bright_blue().bold());

    // Write config file on first use
    if !config_path.exists() {
        config.default_owner = Some(owner.clone());
        let config_json = serde_json::to_string_pretty(&config)?;
        fs::write(&config_path, config_json)
            .with_context(|| format!("writing {}", config_path.display()))?;
        println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    }

    let store = FileStore::new(config.get_campaigns_dir(cwd));
    let campaign_path = store
        .campaign_path(&args.campaign_id)
        .with_context(|| format!("invalid campaign id: {:?}", args.campaign_id))?;

    if campaign_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            campaign_path.display().to_string().bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let name = args.name.unwrap_or_else(|| args.campaign_id.clone());
    let mut ids = BlockIdGenerator::new();
    let document = CampaignDocument::starter(args.campaign_id.clone(), name, &mut ids);

    store
        .save_campaign(&args.campaign_id, &owner, &document)
        .await?;
    println!("  {} Created {}", "✓".green(), campaign_path.display());

    println!();
    println!("{}", "✅ Campaign initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Write an edit script (JSON list of steps)");
    println!("  2. Run: lander edit {} --script steps.json", args.campaign_id);
    println!("  3. Run: lander render {} --out index.html", args.campaign_id);

    Ok(())
}
