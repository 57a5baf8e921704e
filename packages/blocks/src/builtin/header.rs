use super::{flag, text};
use crate::registry::{BlockDefinition, BlockRenderer};
use crate::vnode::VNode;
use lander_model::PropMap;

/// Top bar with logo, navigation links and a call-to-action button
pub struct Header1;

impl Header1 {
    pub fn definition() -> BlockDefinition {
        BlockDefinition::new("Header1", "Header", Header1)
            .with_default_prop("logoText", "Brand")
            .with_default_prop("showNav", true)
            .with_default_prop("navItems", "Features, Reviews, Pricing")
            .with_default_prop("ctaText", "Sign up")
    }
}

impl BlockRenderer for Header1 {
    fn render(&self, props: &PropMap, styles: &PropMap) -> VNode {
        let logo = VNode::element("div")
            .with_attr("class", "logo")
            .with_child(VNode::text(text(props, "logoText", "Brand")));

        let mut header = VNode::element("header")
            .with_style("display", "flex")
            .with_style("justify-content", "space-between")
            .with_style("padding", "16px 32px")
            .with_child(logo);

        if flag(props, "showNav", true) {
            let links = text(props, "navItems", "")
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(|item| {
                    VNode::element("a")
                        .with_attr("href", format!("#{}", item.to_lowercase()))
                        .with_child(VNode::text(item))
                })
                .collect();
            header = header.with_child(VNode::element("nav").with_children(links));
        }

        let cta = VNode::element("a")
            .with_attr("class", "button")
            .with_style("background", "var(--color-primary)")
            .with_child(VNode::text(text(props, "ctaText", "Sign up")));

        header.with_child(cta).with_block_styles(styles)
    }
}
