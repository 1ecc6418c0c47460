//! Text dump of the splitter tree for logs and tests.
//!
//! ```text
//! H
//! ├─ V
//! │  ├─ w3
//! │  └─ w1
//! └─ w2
//! ```

use std::fmt;

use crate::tree::{DockTree, SplitterId, TreeChild};

impl fmt::Display for DockTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.root_node().orientation().tag())?;
        write_children(self, self.root(), "", f)
    }
}

fn write_children(
    tree: &DockTree,
    splitter: SplitterId,
    prefix: &str,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let Some(node) = tree.splitter(splitter) else {
        return writeln!(f, "{prefix}└─ <stale {splitter}>");
    };

    let count = node.len();
    for (i, child) in node.children().iter().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { "└─ " } else { "├─ " };
        match child {
            TreeChild::Window(id) => writeln!(f, "{prefix}{connector}{id}")?,
            TreeChild::Splitter(id) => {
                let tag = tree
                    .splitter(*id)
                    .map_or("?", |n| n.orientation().tag());
                writeln!(f, "{prefix}{connector}{tag}")?;
                let child_prefix = format!("{prefix}{}", if is_last { "   " } else { "│  " });
                write_children(tree, *id, &child_prefix, f)?;
            }
        }
    }
    Ok(())
}
