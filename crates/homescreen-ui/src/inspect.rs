//! Plain-text dumps of view trees and semantics, for tests and logging.

use std::fmt::Write;

use homescreen_core::{Role, SemNode, View, ViewKind};

/// One line per node: role, then the quoted label.
///
/// ```text
/// Text "Recently saved"
/// Button "Show all saved bookmarks"
/// ```
pub fn dump_semantics(nodes: &[SemNode]) -> String {
    let mut out = String::new();
    for n in nodes {
        let role = match n.role {
            Role::Text => "Text",
            Role::Button => "Button",
            Role::Container => "Container",
        };
        let _ = write!(out, "{role}");
        if let Some(label) = &n.label {
            let _ = write!(out, " {label:?}");
        }
        if !n.enabled {
            out.push_str(" [disabled]");
        }
        out.push('\n');
    }
    out
}

pub fn dump_tree(root: &View) -> String {
    let mut out = String::new();
    dump_view(root, 0, &mut out);
    out
}

fn dump_view(v: &View, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let _ = match &v.kind {
        ViewKind::Box => write!(out, "{indent}Box"),
        ViewKind::Row => write!(out, "{indent}Row"),
        ViewKind::Column => write!(out, "{indent}Column"),
        ViewKind::Text {
            text, max_lines, ..
        } => match max_lines {
            Some(n) => write!(out, "{indent}Text {text:?} max_lines={n}"),
            None => write!(out, "{indent}Text {text:?}"),
        },
    };
    if v.modifier.is_clickable() {
        out.push_str(" [clickable]");
    }
    if let Some(label) = v.modifier.semantics.as_ref().and_then(|s| s.label.as_ref()) {
        let _ = write!(out, " desc={label:?}");
    }
    out.push('\n');
    for c in &v.children {
        dump_view(c, depth + 1, out);
    }
}
