//! Tests for the pure mutation functions

use lander_blocks::BlockRegistry;
use lander_editor::{
    duplicate_block, insert_block, move_block, remove_block, replace_document, set_block_prop,
    set_block_style, set_campaign_name, set_theme_color, set_theme_font, Mutation,
    MutationContext,
};
use lander_model::{BlockIdGenerator, CampaignDocument, PageBlock, PropMap, PropValue};
use std::sync::Arc;

fn doc0() -> Arc<CampaignDocument> {
    let mut doc = CampaignDocument::new("c1", "Launch");
    doc.blocks.push(Arc::new(
        PageBlock::new("a", "Header1").with_prop("logoText", "Acme"),
    ));
    doc.blocks.push(Arc::new(
        PageBlock::new("b", "Hero1").with_prop("title", "Hello"),
    ));
    doc.blocks.push(Arc::new(PageBlock::new("c", "Cta1")));
    Arc::new(doc)
}

fn props(entries: &[(&str, PropValue)]) -> PropMap {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn test_insert_merges_registry_defaults() {
    let registry = BlockRegistry::new();
    let mut ids = BlockIdGenerator::from_seed("t");
    let mut ctx = MutationContext::new(&registry, &mut ids);

    let d = doc0();
    let next = insert_block(&d, &mut ctx, "Hero1", 1, &props(&[("title", "X".into())]));

    assert_eq!(next.len(), 4);
    let inserted = &next.blocks[1];
    assert_eq!(inserted.block_type, "Hero1");
    assert_eq!(inserted.prop("title"), Some(&PropValue::from("X")));
    // Defaults the caller did not override survive
    assert!(inserted.prop("subtitle").is_some());
    assert!(inserted.styles.is_empty());
}

#[test]
fn test_insert_clamps_index() {
    let registry = BlockRegistry::new();
    let mut ids = BlockIdGenerator::from_seed("t");
    let mut ctx = MutationContext::new(&registry, &mut ids);

    let d = doc0();
    let next = insert_block(&d, &mut ctx, "Footer1", 99, &PropMap::new());
    assert_eq!(next.blocks[3].block_type, "Footer1");
}

#[test]
fn test_insert_unknown_type_is_noop() {
    let registry = BlockRegistry::new();
    let mut ids = BlockIdGenerator::from_seed("t");
    let mut ctx = MutationContext::new(&registry, &mut ids);

    let d = doc0();
    let next = insert_block(&d, &mut ctx, "Countdown2", 0, &PropMap::new());
    assert!(Arc::ptr_eq(&d, &next));
}

#[test]
fn test_insert_then_remove_restores_sequence() {
    let registry = BlockRegistry::new();
    let mut ids = BlockIdGenerator::from_seed("t");
    let mut ctx = MutationContext::new(&registry, &mut ids);

    let d = doc0();
    let inserted = insert_block(&d, &mut ctx, "Cta1", 2, &PropMap::new());
    let new_id = inserted.blocks[2].id.clone();
    let removed = remove_block(&inserted, &new_id);

    assert_eq!(removed.block_ids(), d.block_ids());
    for (before, after) in d.blocks.iter().zip(removed.blocks.iter()) {
        assert!(Arc::ptr_eq(before, after));
    }
}

#[test]
fn test_move_clamps_and_detects_same_index() {
    let d = doc0();

    let moved = move_block(&d, "a", 100);
    assert_eq!(moved.block_ids(), vec!["b", "c", "a"]);

    let moved = move_block(&d, "c", 0);
    assert_eq!(moved.block_ids(), vec!["c", "a", "b"]);

    let same = move_block(&d, "b", 1);
    assert!(Arc::ptr_eq(&d, &same));

    // Past the end resolves to the last slot, where "c" already is
    let same = move_block(&d, "c", 7);
    assert!(Arc::ptr_eq(&d, &same));
}

#[test]
fn test_missing_block_is_noop_everywhere() {
    let registry = BlockRegistry::new();
    let mut ids = BlockIdGenerator::from_seed("t");
    let mut ctx = MutationContext::new(&registry, &mut ids);
    let d = doc0();

    assert!(Arc::ptr_eq(&d, &set_block_prop(&d, "zz", "k", "v".into())));
    assert!(Arc::ptr_eq(&d, &set_block_style(&d, "zz", "k", "v".into())));
    assert!(Arc::ptr_eq(&d, &move_block(&d, "zz", 0)));
    assert!(Arc::ptr_eq(&d, &remove_block(&d, "zz")));
    assert!(Arc::ptr_eq(&d, &duplicate_block(&d, &mut ctx, "zz", 0)));
}

#[test]
fn test_set_prop_shares_untouched_blocks() {
    let d = doc0();
    let next = set_block_prop(&d, "b", "title", "Bye".into());

    assert!(!Arc::ptr_eq(&d, &next));
    assert!(Arc::ptr_eq(&d.blocks[0], &next.blocks[0]));
    assert!(!Arc::ptr_eq(&d.blocks[1], &next.blocks[1]));
    assert!(Arc::ptr_eq(&d.blocks[2], &next.blocks[2]));

    // The input is untouched
    assert_eq!(d.blocks[1].prop("title"), Some(&PropValue::from("Hello")));
    assert_eq!(next.blocks[1].prop("title"), Some(&PropValue::from("Bye")));
}

#[test]
fn test_set_same_value_is_noop() {
    let d = doc0();
    let next = set_block_prop(&d, "a", "logoText", "Acme".into());
    assert!(Arc::ptr_eq(&d, &next));
}

#[test]
fn test_props_and_styles_stay_apart() {
    let d = doc0();
    let next = set_block_style(&d, "a", "logoText", "red".into());

    let block = next.find_block("a").unwrap();
    assert_eq!(block.prop("logoText"), Some(&PropValue::from("Acme")));
    assert_eq!(block.style("logoText"), Some(&PropValue::from("red")));
}

#[test]
fn test_duplicate_gets_fresh_id() {
    let registry = BlockRegistry::new();
    let mut ids = BlockIdGenerator::from_seed("t");
    let mut ctx = MutationContext::new(&registry, &mut ids);

    let d = set_block_style(&doc0(), "b", "paddingTop", 40.into());
    let next = duplicate_block(&d, &mut ctx, "b", 2);

    let copy = &next.blocks[2];
    assert_ne!(copy.id, "b");
    assert_eq!(copy.block_type, "Hero1");
    assert_eq!(copy.props, d.blocks[1].props);
    assert_eq!(copy.styles, d.blocks[1].styles);
    assert!(next.validate().is_ok());
}

#[test]
fn test_campaign_level_setters() {
    let d = doc0();

    let renamed = set_campaign_name(&d, "Relaunch");
    assert_eq!(renamed.name, "Relaunch");
    assert!(Arc::ptr_eq(&renamed, &set_campaign_name(&renamed, "Relaunch")));

    let fonted = set_theme_font(&d, "Georgia, serif");
    assert_eq!(fonted.theme.global_font, "Georgia, serif");

    let colored = set_theme_color(&d, "primary", "#ff0000");
    assert_eq!(
        colored.theme.global_colors.get("primary").map(String::as_str),
        Some("#ff0000")
    );
    let again = set_theme_color(&colored, "primary", "#ff0000");
    assert!(Arc::ptr_eq(&colored, &again));
}

#[test]
fn test_replace_document() {
    let d = doc0();
    let other = Arc::new(CampaignDocument::new("c1", "Fresh"));
    let next = replace_document(&d, Arc::clone(&other));
    assert!(Arc::ptr_eq(&next, &other));
}

#[test]
fn test_mutation_json_shape() {
    let json = r#"{"op":"setBlockProp","blockId":"a","key":"showNav","value":false}"#;
    let mutation: Mutation = serde_json::from_str(json).unwrap();

    assert_eq!(
        mutation,
        Mutation::SetBlockProp {
            block_id: "a".to_string(),
            key: "showNav".to_string(),
            value: PropValue::Bool(false),
        }
    );

    let insert: Mutation =
        serde_json::from_str(r#"{"op":"insertBlock","blockType":"Hero1","index":0}"#).unwrap();
    assert!(matches!(insert, Mutation::InsertBlock { ref default_props, .. } if default_props.is_empty()));
}
