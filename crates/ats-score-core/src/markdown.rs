//! Markdown processing utilities.
//!
//! Uses pulldown-cmark for proper CommonMark parsing rather than regex-based
//! stripping. Resumes kept in markdown lean on headings for their section
//! names, so unlike a prose extractor this keeps heading text.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Render markdown as plain text, one block per line.
///
/// Removes:
/// - YAML frontmatter
/// - Emphasis, heading, list, and link markup
/// - Raw HTML
/// - Image alt text
///
/// Preserves:
/// - Heading text (section names feed the formatting checks)
/// - Paragraph, list item, and blockquote text
/// - Link text and autolinked email addresses
/// - Code span and code block text
/// - Table cells, space-separated, one row per line
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn to_plain_text(text: &str) -> String {
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(&text, options);

    let mut result = String::with_capacity(text.len());
    let mut in_image = false;

    for event in parser {
        match event {
            Event::Start(Tag::Image { .. }) => in_image = true,
            Event::End(TagEnd::Image) => in_image = false,

            Event::Text(t) | Event::Code(t) if !in_image => result.push_str(&t),
            Event::SoftBreak | Event::HardBreak => result.push('\n'),

            Event::End(
                TagEnd::Heading(_)
                | TagEnd::Paragraph
                | TagEnd::Item
                | TagEnd::CodeBlock
                | TagEnd::TableHead
                | TagEnd::TableRow,
            ) => end_line(&mut result),
            Event::End(TagEnd::TableCell) => result.push(' '),

            _ => {}
        }
    }

    result.trim_end().to_string()
}

/// Terminate the current line without stacking blank lines.
fn end_line(buf: &mut String) {
    if !buf.is_empty() && !buf.ends_with('\n') {
        buf.push('\n');
    }
}

/// Strip YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> String {
    let trimmed = text.trim_start();
    if !trimmed.starts_with("---") {
        return text.to_string();
    }

    let after_opening = &trimmed[3..];
    let Some(close_pos) = after_opening.find("\n---") else {
        return text.to_string();
    };

    let remainder = &after_opening[close_pos + 4..];
    remainder
        .strip_prefix('\n')
        .unwrap_or(remainder)
        .to_string()
}
