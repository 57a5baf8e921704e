//! Serialize rendered pages to static HTML.

use crate::vnode::VNode;
use indexmap::IndexMap;

/// Options for HTML output
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Page `<title>`
    pub title: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            title: "Campaign".to_string(),
        }
    }
}

const VOID_TAGS: &[&str] = &["img", "br", "hr", "input", "meta", "link"];

struct Context {
    options: HtmlOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: HtmlOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Wrap a rendered page root in a full HTML document
pub fn page_to_html(root: &VNode, options: HtmlOptions) -> String {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html>");
    ctx.indent();

    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    let title = format!("<title>{}</title>", escape_text(&ctx.options.title));
    ctx.add_line(&title);
    ctx.dedent();
    ctx.add_line("</head>");

    ctx.add_line("<body>");
    ctx.indent();
    write_node(root, &mut ctx);
    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    ctx.get_output()
}

/// Serialize a node tree without the document wrapper
pub fn to_html(node: &VNode, options: HtmlOptions) -> String {
    let mut ctx = Context::new(options);
    write_node(node, &mut ctx);
    ctx.get_output()
}

fn write_node(node: &VNode, ctx: &mut Context) {
    match node {
        VNode::Element {
            tag,
            attributes,
            styles,
            children,
        } => {
            let open = format!("<{}{}>", tag, render_attributes(attributes, styles));

            if VOID_TAGS.contains(&tag.as_str()) {
                ctx.add_line(&open);
                return;
            }

            ctx.add_line(&open);
            ctx.indent();
            for child in children {
                write_node(child, ctx);
            }
            ctx.dedent();
            ctx.add_line(&format!("</{}>", tag));
        }

        VNode::Text { content } => {
            if !content.is_empty() {
                ctx.add_line(&escape_text(content));
            }
        }

        VNode::Error {
            message,
            block_id,
            block_type,
        } => {
            ctx.add_line(&format!(
                "<div class=\"block-error\" data-block-id=\"{}\" data-block-type=\"{}\" style=\"border: 2px dashed #dc2626; color: #dc2626; padding: 16px\">",
                escape_attr(block_id),
                escape_attr(block_type)
            ));
            ctx.indent();
            ctx.add_line(&escape_text(message));
            ctx.dedent();
            ctx.add_line("</div>");
        }
    }
}

fn render_attributes(attributes: &IndexMap<String, String>, styles: &IndexMap<String, String>) -> String {
    let mut out = String::new();

    for (name, value) in attributes {
        out.push_str(&format!(" {}=\"{}\"", name, escape_attr(value)));
    }

    if !styles.is_empty() {
        let css: Vec<String> = styles
            .iter()
            .map(|(property, value)| format!("{}: {}", property, value))
            .collect();
        out.push_str(&format!(" style=\"{}\"", escape_attr(&css.join("; "))));
    }

    out
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(text: &str) -> String {
    escape_text(text).replace('"', "&quot;")
}
