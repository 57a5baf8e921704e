use super::text;
use crate::registry::{BlockDefinition, BlockRenderer};
use crate::schema::{EditSchema, EditorKind};
use crate::vnode::VNode;
use lander_model::PropMap;

/// Grid of feature cards, one per line of `items` (`Title: description`)
pub struct Features1;

impl Features1 {
    pub fn definition() -> BlockDefinition {
        BlockDefinition::new("Features1", "Features", Features1)
            .with_default_prop("heading", "Why people choose us")
            .with_default_prop(
                "items",
                "Fast: Set up in minutes\nSimple: No technical skills required\nTrusted: Used by thousands of customers",
            )
            .with_default_prop("columns", 3)
            .with_schema(
                EditSchema::new()
                    .prop("items", EditorKind::MultiLineText)
                    .prop("columns", EditorKind::Number),
            )
    }
}

impl BlockRenderer for Features1 {
    fn render(&self, props: &PropMap, styles: &PropMap) -> VNode {
        let columns = props
            .get("columns")
            .and_then(|v| v.as_f64())
            .map(|n| n.clamp(1.0, 6.0) as u32)
            .unwrap_or(3);

        let cards = text(props, "items", "")
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                let (title, body) = line.split_once(':').unwrap_or((line, ""));
                VNode::element("div")
                    .with_attr("class", "feature")
                    .with_child(VNode::element("h3").with_child(VNode::text(title.trim())))
                    .with_child(VNode::element("p").with_child(VNode::text(body.trim())))
            })
            .collect();

        VNode::element("section")
            .with_attr("class", "features")
            .with_style("padding", "48px 32px")
            .with_child(VNode::element("h2").with_child(VNode::text(text(props, "heading", ""))))
            .with_child(
                VNode::element("div")
                    .with_style("display", "grid")
                    .with_style("grid-template-columns", format!("repeat({}, 1fr)", columns))
                    .with_children(cards),
            )
            .with_block_styles(styles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_card_per_line() {
        let def = Features1::definition();
        let node = def.render(&def.default_props, &PropMap::new());

        let grid = &node.children()[1];
        assert_eq!(grid.children().len(), 3);
        assert!(node.text_content().contains("Set up in minutes"));
    }
}
