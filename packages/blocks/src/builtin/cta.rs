use super::{flag, text, url};
use crate::registry::{BlockDefinition, BlockRenderer};
use crate::vnode::VNode;
use lander_model::PropMap;

/// Call-to-action band
pub struct Cta1;

impl Cta1 {
    pub fn definition() -> BlockDefinition {
        BlockDefinition::new("Cta1", "Call to action", Cta1)
            .with_default_prop("headline", "Ready to get started?")
            .with_default_prop("buttonText", "Get started")
            .with_default_prop("buttonUrl", "#")
            .with_default_prop("showUrgency", false)
    }
}

impl BlockRenderer for Cta1 {
    fn render(&self, props: &PropMap, styles: &PropMap) -> VNode {
        let mut section = VNode::element("section")
            .with_attr("class", "cta")
            .with_style("text-align", "center")
            .with_style("padding", "48px 32px")
            .with_style("background", "var(--color-secondary)")
            .with_child(VNode::element("h2").with_child(VNode::text(text(
                props,
                "headline",
                "Ready to get started?",
            ))));

        if flag(props, "showUrgency", false) {
            section = section.with_child(
                VNode::element("p")
                    .with_attr("class", "urgency")
                    .with_style("color", "var(--color-accent)")
                    .with_child(VNode::text("Limited time offer")),
            );
        }

        section
            .with_child(
                VNode::element("a")
                    .with_attr("class", "button")
                    .with_attr("href", url(props, "buttonUrl", "#"))
                    .with_child(VNode::text(text(props, "buttonText", "Get started"))),
            )
            .with_block_styles(styles)
    }
}
