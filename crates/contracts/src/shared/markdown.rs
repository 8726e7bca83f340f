//! Minimal markdown-to-HTML conversion for assistant replies.
//!
//! Supported: `#`/`##`/`###` headings, bold, italic, links, flat `- ` and
//! `1. ` lists, line breaks. Nothing else (no tables, nested lists or code
//! blocks). The converter is an ordered pipeline of independent rules; each
//! rule operates on the output of the previous one, so the order is part of
//! the contract (bold must run before italic, list items before wrapping).

use once_cell::sync::Lazy;
use regex::Regex;

static H3: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^### (.*)$").unwrap());
static H2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^## (.*)$").unwrap());
static H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# (.*)$").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());
static UNORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[ \t]*- (.*)$").unwrap());
static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[ \t]*\d+\. (.*)$").unwrap());

type Rule = fn(&str) -> String;

/// The fixed transformation pipeline, applied first to last.
const RULES: [Rule; 7] = [
    replace_headings,
    replace_bold,
    replace_italic,
    replace_links,
    replace_list_items,
    wrap_list_runs,
    replace_line_breaks,
];

/// Convert a markdown fragment to an HTML fragment. Pure and deterministic;
/// empty input yields empty output.
pub fn render(markdown: &str) -> String {
    RULES
        .iter()
        .fold(markdown.to_string(), |text, rule| rule(&text))
}

/// Whole lines starting with `#`, `##` or `###` become headings.
fn replace_headings(text: &str) -> String {
    let text = H3.replace_all(text, "<h3>$1</h3>");
    let text = H2.replace_all(&text, "<h2>$1</h2>");
    H1.replace_all(&text, "<h1>$1</h1>").into_owned()
}

/// `**text**` → `<strong>`. Must run before the italic rule so a single-`*`
/// match cannot consume half of a `**` pair.
fn replace_bold(text: &str) -> String {
    BOLD.replace_all(text, "<strong>$1</strong>").into_owned()
}

/// `*text*` → `<em>`.
fn replace_italic(text: &str) -> String {
    ITALIC.replace_all(text, "<em>$1</em>").into_owned()
}

/// `[text](url)` → anchor opening a new browsing context. An unmatched
/// `[text](` has no closing paren, so the pattern does not match and the
/// text stays literal.
fn replace_links(text: &str) -> String {
    LINK.replace_all(text, "<a href=\"$2\" target=\"_blank\">$1</a>")
        .into_owned()
}

/// Lines starting with `- ` or `<digit>. ` become `<li>` items.
fn replace_list_items(text: &str) -> String {
    let text = UNORDERED_ITEM.replace_all(text, "<li>$1</li>");
    ORDERED_ITEM.replace_all(&text, "<li>$1</li>").into_owned()
}

/// Each run of consecutive `<li>` lines is wrapped in a single `<ul>`;
/// adjacent list lines collapse into one list, never one list per line.
/// The newlines inside a run are consumed by the wrap.
fn wrap_list_runs(text: &str) -> String {
    fn flush(out: &mut Vec<String>, run: &mut Vec<String>) {
        if !run.is_empty() {
            out.push(format!("<ul>{}</ul>", run.join("")));
            run.clear();
        }
    }

    let mut out: Vec<String> = Vec::new();
    let mut run: Vec<String> = Vec::new();
    for line in text.split('\n') {
        if line.starts_with("<li>") && line.ends_with("</li>") {
            run.push(line.to_string());
        } else {
            flush(&mut out, &mut run);
            out.push(line.to_string());
        }
    }
    flush(&mut out, &mut run);
    out.join("\n")
}

/// Remaining newlines become explicit line breaks.
fn replace_line_breaks(text: &str) -> String {
    text.replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_take_the_whole_line() {
        assert_eq!(replace_headings("# Title"), "<h1>Title</h1>");
        assert_eq!(replace_headings("## Sub"), "<h2>Sub</h2>");
        assert_eq!(replace_headings("### Deep"), "<h3>Deep</h3>");
        // only at line start
        assert_eq!(replace_headings("a # b"), "a # b");
    }

    #[test]
    fn heading_levels_do_not_collide() {
        assert_eq!(
            replace_headings("# a\n## b\n### c"),
            "<h1>a</h1>\n<h2>b</h2>\n<h3>c</h3>"
        );
    }

    #[test]
    fn bold_resolves_before_italic() {
        assert_eq!(render("**hi**"), "<strong>hi</strong>");
        assert_eq!(render("*hi*"), "<em>hi</em>");
        assert_eq!(
            render("**bold** and *italic*"),
            "<strong>bold</strong> and <em>italic</em>"
        );
    }

    #[test]
    fn links_open_a_new_browsing_context() {
        assert_eq!(
            replace_links("[site](http://x)"),
            "<a href=\"http://x\" target=\"_blank\">site</a>"
        );
    }

    #[test]
    fn unmatched_link_stays_literal() {
        assert_eq!(render("[text]("), "[text](");
        assert_eq!(render("[text] (url)"), "[text] (url)");
    }

    #[test]
    fn list_lines_become_items() {
        assert_eq!(replace_list_items("- a"), "<li>a</li>");
        assert_eq!(replace_list_items("  - a"), "<li>a</li>");
        assert_eq!(replace_list_items("1. a\n2. b"), "<li>a</li>\n<li>b</li>");
        // `-` without trailing space is not a list marker
        assert_eq!(replace_list_items("-a"), "-a");
    }

    #[test]
    fn adjacent_list_lines_collapse_into_one_container() {
        let html = render("- a\n- b");
        assert_eq!(html, "<ul><li>a</li><li>b</li></ul>");
        assert_eq!(html.matches("<ul>").count(), 1);
    }

    #[test]
    fn separated_runs_get_separate_containers() {
        let html = render("- a\ntext\n- b");
        assert_eq!(
            html,
            "<ul><li>a</li></ul><br>text<br><ul><li>b</li></ul>"
        );
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn plain_text_passes_through_with_line_breaks() {
        assert_eq!(render("just text"), "just text");
        assert_eq!(render("line one\nline two"), "line one<br>line two");
    }

    #[test]
    fn no_trailing_break_unless_the_input_had_one() {
        assert_eq!(render("**hi**"), "<strong>hi</strong>");
        assert_eq!(render("hi\n"), "hi<br>");
    }

    #[test]
    fn full_reply_renders_all_rule_kinds_in_order() {
        let markdown = "## Routine\n**Morning:**\n- Use [cleanser](http://c)\n- Apply cream\nEnjoy!";
        assert_eq!(
            render(markdown),
            "<h2>Routine</h2><br><strong>Morning:</strong><br>\
             <ul><li>Use <a href=\"http://c\" target=\"_blank\">cleanser</a></li>\
             <li>Apply cream</li></ul><br>Enjoy!"
        );
    }
}
