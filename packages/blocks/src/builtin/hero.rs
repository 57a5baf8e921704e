use super::{flag, text, url};
use crate::registry::{BlockDefinition, BlockRenderer};
use crate::schema::{EditSchema, EditorKind};
use crate::vnode::VNode;
use lander_model::PropMap;

/// Headline section with subtitle, optional image and button
pub struct Hero1;

impl Hero1 {
    pub fn definition() -> BlockDefinition {
        BlockDefinition::new("Hero1", "Hero", Hero1)
            .with_default_prop("title", "Your headline goes here")
            .with_default_prop("subtitle", "Explain the offer in one sentence.")
            .with_default_prop("showButton", true)
            .with_default_prop("buttonText", "Claim offer")
            .with_default_prop("buttonUrl", "#")
            .with_default_prop("imageUrl", "")
            .with_schema(
                EditSchema::new()
                    .prop("subtitle", EditorKind::MultiLineText)
                    .prop("buttonUrl", EditorKind::SingleLineText)
                    .style("paddingTop", EditorKind::Number)
                    .style("paddingBottom", EditorKind::Number),
            )
    }
}

impl BlockRenderer for Hero1 {
    fn render(&self, props: &PropMap, styles: &PropMap) -> VNode {
        let mut section = VNode::element("section")
            .with_attr("class", "hero")
            .with_style("text-align", "center")
            .with_style("padding", "64px 32px")
            .with_child(VNode::element("h1").with_child(VNode::text(text(
                props,
                "title",
                "Your headline goes here",
            ))))
            .with_child(VNode::element("p").with_child(VNode::text(text(props, "subtitle", ""))));

        let image_url = url(props, "imageUrl", "");
        if !image_url.is_empty() {
            section = section.with_child(
                VNode::element("img")
                    .with_attr("src", image_url)
                    .with_attr("alt", text(props, "title", "")),
            );
        }

        if flag(props, "showButton", true) {
            section = section.with_child(
                VNode::element("a")
                    .with_attr("class", "button")
                    .with_attr("href", url(props, "buttonUrl", "#"))
                    .with_style("background", "var(--color-primary)")
                    .with_child(VNode::text(text(props, "buttonText", "Claim offer"))),
            );
        }

        section.with_block_styles(styles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lander_model::PropValue;

    #[test]
    fn test_renders_title_and_button() {
        let def = Hero1::definition();
        let node = def.render(&def.default_props, &PropMap::new());

        let text = node.text_content();
        assert!(text.contains("Your headline goes here"));
        assert!(text.contains("Claim offer"));
    }

    #[test]
    fn test_image_only_when_url_set() {
        let mut props = Hero1::definition().default_props;
        let has_img = |node: &VNode| {
            node.children()
                .iter()
                .any(|c| matches!(c, VNode::Element { tag, .. } if tag == "img"))
        };

        assert!(!has_img(&Hero1.render(&props, &PropMap::new())));

        props.insert("imageUrl".to_string(), PropValue::from("/hero.png"));
        assert!(has_img(&Hero1.render(&props, &PropMap::new())));
    }

    #[test]
    fn test_missing_props_fall_back() {
        let node = Hero1.render(&PropMap::new(), &PropMap::new());
        assert!(node.text_content().contains("Your headline goes here"));
    }

    #[test]
    fn test_unsafe_image_url_is_omitted() {
        let mut props = Hero1::definition().default_props;
        props.insert("imageUrl".to_string(), PropValue::from("data:image/svg+xml,<svg/>"));
        let node = Hero1.render(&props, &PropMap::new());

        assert!(!node
            .children()
            .iter()
            .any(|c| matches!(c, VNode::Element { tag, .. } if tag == "img")));
    }
}
