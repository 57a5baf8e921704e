use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use lander_blocks::BlockRegistry;
use lander_editor::{DragPayload, DropTarget, EditSession, FileStore, Mutation};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Campaign to edit
    pub campaign_id: String,

    /// JSON file with a list of edit steps
    #[arg(short, long)]
    pub script: PathBuf,

    /// Acting user (defaults to defaultOwner from config)
    #[arg(short, long)]
    pub owner: Option<String>,

    /// Run the script without saving
    #[arg(long)]
    pub dry_run: bool,
}

/// One step of an edit script
///
/// ```json
/// [
///   { "op": "setBlockProp", "blockId": "hero1-x-2", "key": "title", "value": "Sale" },
///   { "op": "drag", "payload": { "origin": "palette", "blockType": "Footer1" }, "dropAt": 3 },
///   { "op": "undo" }
/// ]
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScriptStep {
    Control(Control),
    Edit(Mutation),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Control {
    Undo,
    Redo,

    /// A full drag gesture; no `dropAt` means it ended outside the canvas
    Drag {
        payload: DragPayload,
        #[serde(default)]
        drop_at: Option<usize>,
    },
}

/// Outcome counts for a script run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScriptReport {
    pub changed: usize,
    pub unchanged: usize,
}

/// Run every step against the session; steps that change nothing are counted, not failed
pub fn run_script(session: &mut EditSession, steps: &[ScriptStep]) -> ScriptReport {
    let mut report = ScriptReport::default();

    for step in steps {
        let changed = match step {
            ScriptStep::Edit(mutation) => session.apply(mutation),
            ScriptStep::Control(Control::Undo) => session.undo(),
            ScriptStep::Control(Control::Redo) => session.redo(),
            ScriptStep::Control(Control::Drag { payload, drop_at }) => {
                session.start_drag(payload.clone());
                let target = match drop_at {
                    Some(index) => DropTarget::Canvas { index: *index },
                    None => DropTarget::Outside,
                };
                session.drop_on(target)
            }
        };

        if changed {
            report.changed += 1;
        } else {
            report.unchanged += 1;
        }
    }

    report
}

pub fn parse_script(source: &str) -> Result<Vec<ScriptStep>> {
    serde_json::from_str(source).context("edit script must be a JSON list of steps")
}

pub async fn edit(args: EditArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let owner = config.resolve_owner(args.owner.as_deref())?;
    let store = FileStore::new(config.get_campaigns_dir(cwd));

    let script_path = PathBuf::from(cwd).join(&args.script);
    let source = fs::read_to_string(&script_path)
        .with_context(|| format!("reading {}", script_path.display()))?;
    let steps = parse_script(&source)?;
    debug!(script = %script_path.display(), steps = steps.len(), "Parsed edit script");

    let mut session =
        EditSession::load(&store, &args.campaign_id, &owner, Arc::new(BlockRegistry::new()))
            .await
            .with_context(|| format!("opening campaign {}", args.campaign_id))?
            .with_history_limit(config.history_limit);

    println!("{}", "✏️  Applying edit script...".bright_blue().bold());
    let report = run_script(&mut session, &steps);
    println!(
        "  {} {} steps changed the page, {} changed nothing",
        "✓".green(),
        report.changed,
        report.unchanged
    );

    if !session.is_dirty() {
        println!("{}", "No changes to save".yellow());
        return Ok(());
    }

    if args.dry_run {
        println!("{}", "Dry run, not saving".yellow());
        return Ok(());
    }

    session.save(&store, &owner).await?;
    println!("{}", "✅ Campaign saved".green().bold());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lander_model::{BlockIdGenerator, CampaignDocument, PageBlock};

    fn session() -> EditSession {
        let mut doc = CampaignDocument::new("c1", "Launch");
        doc.blocks.push(Arc::new(PageBlock::new("a", "Header1")));
        doc.blocks.push(Arc::new(PageBlock::new("b", "Hero1")));
        EditSession::new(Arc::new(BlockRegistry::new()), doc)
            .unwrap()
            .with_id_generator(BlockIdGenerator::from_seed("t"))
    }

    #[test]
    fn test_parse_mixed_script() {
        let steps = parse_script(
            r#"[
                { "op": "setBlockProp", "blockId": "b", "key": "title", "value": "Sale" },
                { "op": "drag", "payload": { "origin": "palette", "blockType": "Footer1" }, "dropAt": 2 },
                { "op": "drag", "payload": { "origin": "canvas", "blockId": "a" } },
                { "op": "undo" },
                { "op": "redo" }
            ]"#,
        )
        .unwrap();

        assert_eq!(steps.len(), 5);
        assert!(matches!(steps[0], ScriptStep::Edit(Mutation::SetBlockProp { .. })));
        assert!(matches!(
            steps[1],
            ScriptStep::Control(Control::Drag { drop_at: Some(2), .. })
        ));
        assert!(matches!(
            steps[2],
            ScriptStep::Control(Control::Drag { drop_at: None, .. })
        ));
        assert!(matches!(steps[3], ScriptStep::Control(Control::Undo)));
    }

    #[test]
    fn test_parse_rejects_unknown_op() {
        assert!(parse_script(r#"[{ "op": "explode" }]"#).is_err());
        assert!(parse_script(r#"{ "op": "undo" }"#).is_err());
    }

    #[test]
    fn test_run_script() {
        let mut session = session();
        let steps = parse_script(
            r#"[
                { "op": "drag", "payload": { "origin": "palette", "blockType": "Footer1" }, "dropAt": 9 },
                { "op": "drag", "payload": { "origin": "canvas", "blockId": "b" }, "dropAt": 0 },
                { "op": "drag", "payload": { "origin": "canvas", "blockId": "a" } },
                { "op": "removeBlock", "blockId": "missing" },
                { "op": "undo" },
                { "op": "redo" }
            ]"#,
        )
        .unwrap();

        let report = run_script(&mut session, &steps);
        assert_eq!(report, ScriptReport { changed: 4, unchanged: 2 });
        assert_eq!(session.document().block_ids()[0], "b");
        assert_eq!(session.document().blocks[2].block_type, "Footer1");
    }
}
