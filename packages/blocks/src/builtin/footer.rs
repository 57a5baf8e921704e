use super::{flag, text};
use crate::registry::{BlockDefinition, BlockRenderer};
use crate::vnode::VNode;
use lander_model::PropMap;

const DEFAULT_DISCLOSURE: &str = "This page contains affiliate links. We may earn a commission when you buy through them, at no extra cost to you.";

/// Footer with copyright line and affiliate disclosure
pub struct Footer1;

impl Footer1 {
    pub fn definition() -> BlockDefinition {
        BlockDefinition::new("Footer1", "Footer", Footer1)
            .with_default_prop("copyright", "© Your Company")
            .with_default_prop("showDisclosure", true)
            .with_default_prop("disclosure", DEFAULT_DISCLOSURE)
    }
}

impl BlockRenderer for Footer1 {
    fn render(&self, props: &PropMap, styles: &PropMap) -> VNode {
        let mut footer = VNode::element("footer")
            .with_style("padding", "24px 32px")
            .with_style("font-size", "12px")
            .with_child(VNode::element("p").with_child(VNode::text(text(props, "copyright", ""))));

        if flag(props, "showDisclosure", true) {
            footer = footer.with_child(
                VNode::element("small")
                    .with_attr("class", "disclosure")
                    .with_child(VNode::text(text(props, "disclosure", DEFAULT_DISCLOSURE))),
            );
        }

        footer.with_block_styles(styles)
    }
}
