use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use lander_blocks::{page_to_html, BlockRegistry, HtmlOptions};
use lander_editor::{EditSession, FileStore};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Campaign to render
    pub campaign_id: String,

    /// Acting user (defaults to defaultOwner from config)
    #[arg(short, long)]
    pub owner: Option<String>,

    /// Write to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Skip indentation (overrides prettyHtml)
    #[arg(long)]
    pub compact: bool,
}

pub async fn render(args: RenderArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let owner = config.resolve_owner(args.owner.as_deref())?;
    let store = FileStore::new(config.get_campaigns_dir(cwd));

    let session = EditSession::load(&store, &args.campaign_id, &owner, Arc::new(BlockRegistry::new()))
        .await
        .with_context(|| format!("opening campaign {}", args.campaign_id))?;

    let options = HtmlOptions {
        pretty: config.pretty_html && !args.compact,
        title: session.document().name.clone(),
        ..Default::default()
    };
    let html = page_to_html(&session.render(), options);

    match args.out {
        Some(path) => {
            let path = PathBuf::from(cwd).join(path);
            fs::write(&path, html).with_context(|| format!("writing {}", path.display()))?;
            println!("  {} {} → {}", "✓".green(), args.campaign_id, path.display());
        }
        None => print!("{}", html),
    }

    Ok(())
}
