use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lander_blocks::BlockRegistry;
use lander_editor::{History, Mutation, MutationContext};
use lander_model::{BlockIdGenerator, CampaignDocument};
use std::sync::Arc;

fn large_document(ids: &mut BlockIdGenerator, registry: &BlockRegistry) -> Arc<CampaignDocument> {
    let mut doc = Arc::new(CampaignDocument::new("bench", "Bench"));
    let types = registry.list_available_types();
    for i in 0..200 {
        let mut ctx = MutationContext::new(registry, ids);
        let block_type = types[i % types.len()];
        doc = lander_editor::insert_block(&doc, &mut ctx, block_type, i, &Default::default());
    }
    doc
}

fn set_prop_on_large_document(c: &mut Criterion) {
    let registry = BlockRegistry::new();
    let mut ids = BlockIdGenerator::from_seed("bench");
    let doc = large_document(&mut ids, &registry);
    let target = doc.blocks[100].id.clone();

    c.bench_function("set_prop_200_blocks", |b| {
        b.iter(|| {
            lander_editor::set_block_prop(black_box(&doc), &target, "title", "Updated".into())
        })
    });
}

fn edit_and_undo_cycle(c: &mut Criterion) {
    let registry = BlockRegistry::new();
    let mut ids = BlockIdGenerator::from_seed("bench");
    let doc = large_document(&mut ids, &registry);
    let first = doc.blocks[0].id.clone();

    c.bench_function("edit_undo_redo_50", |b| {
        b.iter(|| {
            let mut history = History::new(Arc::clone(&doc));
            for n in 0..50 {
                let mutation = Mutation::SetBlockProp {
                    block_id: first.clone(),
                    key: "n".to_string(),
                    value: (n as f64).into(),
                };
                let mut ctx = MutationContext::new(&registry, &mut ids);
                history.apply_mutation(&mutation, &mut ctx);
            }
            while history.undo() {}
            while history.redo() {}
            black_box(history.present().len())
        })
    });
}

criterion_group!(benches, set_prop_on_large_document, edit_and_undo_cycle);
criterion_main!(benches);
