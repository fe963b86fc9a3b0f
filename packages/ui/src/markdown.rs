//! Markdown rendering for rich-text fields.
//!
//! Rich text in this panel is authored as Markdown and converted to HTML
//! with `pulldown-cmark`. Content written before the rewrite is stored as
//! HTML; [`render_rich`] passes anything that already looks like markup
//! through untouched.

use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Convert Markdown to an HTML fragment.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(source, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Render a stored rich-text value: legacy HTML verbatim, Markdown
/// otherwise.
pub fn render_rich(source: &str) -> String {
    if source.trim_start().starts_with('<') {
        source.to_string()
    } else {
        render_markdown(source)
    }
}

/// Read-only rich-text block.
#[component]
pub fn RichText(#[props(default = String::new())] class: String, source: String) -> Element {
    rsx! {
        div {
            class: "rich-text {class}",
            dangerous_inner_html: render_rich(&source),
        }
    }
}

/// Textarea with a write/preview toggle, used wherever the original
/// panel embedded a WYSIWYG editor.
#[component]
pub fn MarkdownEditor(
    value: String,
    oninput: EventHandler<String>,
    #[props(default = String::new())] placeholder: String,
    #[props(default = 6)] rows: i64,
) -> Element {
    let mut preview = use_signal(|| false);

    rsx! {
        div {
            class: "markdown-editor",
            div {
                class: "markdown-editor-tabs",
                button {
                    r#type: "button",
                    class: if !preview() { "tab active" } else { "tab" },
                    onclick: move |_| preview.set(false),
                    "Write"
                }
                button {
                    r#type: "button",
                    class: if preview() { "tab active" } else { "tab" },
                    onclick: move |_| preview.set(true),
                    "Preview"
                }
            }
            if preview() {
                div {
                    class: "markdown-editor-preview rich-text",
                    dangerous_inner_html: render_rich(&value),
                }
            } else {
                textarea {
                    class: "markdown-editor-input",
                    rows: "{rows}",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |evt: FormEvent| oninput.call(evt.value()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_becomes_html() {
        let html = render_markdown("## Heading\n\nSome **bold** text");
        assert!(html.contains("<h2>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn legacy_html_passes_through() {
        let stored = "<p>already <em>formatted</em></p>";
        assert_eq!(render_rich(stored), stored);
    }

    #[test]
    fn plain_text_is_wrapped() {
        assert!(render_rich("plain words").contains("<p>plain words</p>"));
    }
}
