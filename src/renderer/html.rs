//! Minimal HTML page wrapping a rendered PNG

use std::fs;
use std::io;
use std::path::Path;

/// Page body referencing `image` by relative file name
pub fn wrapper(image: &str) -> String {
    format!(
        r#"<html><body><img src="{}" alt="Flowchart"></body></html>"#,
        escape_attr(&encode_reference(image))
    )
}

/// Percent-encode the characters that would stop a file name from being
/// read as a relative path reference
fn encode_reference(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '%' => out.push_str("%25"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            ' ' => out.push_str("%20"),
            _ => out.push(c),
        }
    }
    out
}

/// Write the wrapper page to `page`, pointing at the sibling file `image`
pub fn write_wrapper(page: &Path, image: &str) -> io::Result<()> {
    fs::write(page, wrapper(image))
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
