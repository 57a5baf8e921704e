use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use lander_blocks::BlockRegistry;
use lander_editor::{EditSession, FileStore};
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Campaign to inspect
    pub campaign_id: String,

    /// Block whose settings to show; lists blocks when omitted
    pub block_id: Option<String>,

    /// Acting user (defaults to defaultOwner from config)
    #[arg(short, long)]
    pub owner: Option<String>,
}

pub async fn inspect(args: InspectArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let owner = config.resolve_owner(args.owner.as_deref())?;
    let store = FileStore::new(config.get_campaigns_dir(cwd));

    let mut session =
        EditSession::load(&store, &args.campaign_id, &owner, Arc::new(BlockRegistry::new()))
            .await
            .with_context(|| format!("opening campaign {}", args.campaign_id))?;

    let Some(block_id) = args.block_id else {
        let doc = session.document();
        println!("{} {}", "📄".bright_blue(), doc.name.bold());
        for (index, block) in doc.blocks.iter().enumerate() {
            let known = session.registry().contains(&block.block_type);
            let block_type = if known {
                block.block_type.normal()
            } else {
                block.block_type.red()
            };
            println!("  {:>2}. {} {}", index, block.id.bright_white(), block_type);
        }
        return Ok(());
    };

    session.select(Some(&block_id));
    let settings = session.settings();
    if settings.is_empty() {
        return Err(anyhow!("Block not found: {}", block_id));
    }
    println!("{}", serde_json::to_string_pretty(&settings)?);

    Ok(())
}
