//! Markdown section and table primitives
//!
//! Line-based lookups for heading-delimited sections, the first
//! GitHub-style table inside a section, and numbered list items.

use crate::models::Table;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Level and text of an ATX heading line (`## Text`)
fn heading(line: &str) -> Option<(usize, &str)> {
    let trimmed = line.trim_start();
    let level = trimmed.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }

    let rest = &trimmed[level..];
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some((level, strip_closing_hashes(rest.trim())))
}

/// Drop a closing `#` run only when whitespace precedes it (`## C#` keeps its `#`)
fn strip_closing_hashes(text: &str) -> &str {
    let stripped = text.trim_end_matches('#');
    if stripped.is_empty() {
        stripped
    } else if stripped.len() < text.len() && stripped.ends_with(char::is_whitespace) {
        stripped.trim_end()
    } else {
        text
    }
}

fn is_fence(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}

/// Body of the first heading at `level` accepted by `matches`.
///
/// The body runs until the next heading at `level` or above, ignoring
/// heading-like lines inside fenced code blocks.
fn heading_block(md: &str, level: usize, matches: impl Fn(&str) -> bool) -> Option<String> {
    let mut in_fence = false;
    let mut body: Option<Vec<&str>> = None;

    for line in md.lines() {
        if is_fence(line) {
            in_fence = !in_fence;
        }

        let head = if in_fence || is_fence(line) { None } else { heading(line) };
        if let Some(lines) = body.as_mut() {
            if matches!(head, Some((lvl, _)) if lvl <= level) {
                break;
            }
            lines.push(line);
        } else if let Some((lvl, text)) = head {
            if lvl == level && matches(text) {
                body = Some(Vec::new());
            }
        }
    }

    body.map(|lines| lines.join("\n").trim().to_string())
}

/// Find a second-level section (`## Name`), compared case-insensitively.
///
/// # Example
/// ```
/// use cotizador::parser::find_section;
/// let md = "## Intro\nhello\n## Tasks\n| a |\n### Detail\nx\n## Next";
/// assert_eq!(find_section(md, "tasks").as_deref(), Some("| a |\n### Detail\nx"));
/// ```
pub fn find_section(md: &str, name: &str) -> Option<String> {
    let wanted = name.trim().to_lowercase();
    heading_block(md, 2, |text| text.to_lowercase() == wanted)
}

/// Find a third-level subsection whose heading starts with `name`.
///
/// Headings often carry a suffix (`### Sprint 1 (Weeks 1-2)`), so only the
/// prefix has to match. The body ends at the next `###` or `##` heading.
pub fn find_subsection(md: &str, name: &str) -> Option<String> {
    let wanted = name.trim().to_lowercase();
    heading_block(md, 3, |text| text.to_lowercase().starts_with(&wanted))
}

fn is_table_row(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 2 && trimmed.starts_with('|') && trimmed.ends_with('|')
}

fn split_cells(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(|cell| cell.trim().to_string()).collect()
}

/// `|---|:--:|` style line: every cell only colons and dashes
fn is_separator_row(line: &str) -> bool {
    if !line.contains('-') {
        return false;
    }
    split_cells(line)
        .iter()
        .all(|cell| cell.contains('-') && cell.chars().all(|c| c == '-' || c == ':'))
}

/// Parse the first GitHub-style table in a markdown fragment.
///
/// The header is the pipe row directly above the first separator row. Data
/// rows follow until a line that is neither a pipe row nor blank. Rows are
/// padded with empty cells or truncated to the header width.
pub fn parse_first_table(section: &str) -> Option<Table> {
    let lines: Vec<&str> = section.lines().collect();
    let header_idx = lines
        .windows(2)
        .position(|pair| is_table_row(pair[0]) && is_separator_row(pair[1]))?;

    let headers = split_cells(lines[header_idx]);
    let width = headers.len();

    let mut rows = Vec::new();
    for line in &lines[header_idx + 2..] {
        if is_table_row(line) {
            let mut cells = split_cells(line);
            cells.resize(width, String::new());
            rows.push(cells);
        } else if line.trim().is_empty() {
            continue;
        } else {
            break;
        }
    }

    Some(Table { headers, rows })
}

/// Items of the ordered lists in a markdown fragment, in document order.
///
/// Bullet list items are skipped; nested numbered items are included.
pub fn parse_numbered_list(section: &str) -> Vec<String> {
    let parser = Parser::new_ext(section, Options::empty());

    let mut list_kinds: Vec<bool> = Vec::new();
    let mut open_items: Vec<Option<usize>> = Vec::new();
    let mut items: Vec<String> = Vec::new();

    for event in parser {
        match event {
            Event::Start(Tag::List(start)) => list_kinds.push(start.is_some()),
            Event::End(TagEnd::List(_)) => {
                list_kinds.pop();
            }
            Event::Start(Tag::Item) => {
                if list_kinds.last() == Some(&true) {
                    items.push(String::new());
                    open_items.push(Some(items.len() - 1));
                } else {
                    open_items.push(None);
                }
            }
            Event::End(TagEnd::Item) => {
                open_items.pop();
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(Some(idx)) = open_items.last() {
                    items[*idx].push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(Some(idx)) = open_items.last() {
                    items[*idx].push(' ');
                }
            }
            _ => {}
        }
    }

    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
