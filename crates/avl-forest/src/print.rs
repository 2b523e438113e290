use std::fmt::{self, Display, Write};

use crate::types::KvNode;

/// Indentation added per tree level by [`print_sideways`].
pub const INDENT: usize = 6;

/// Renders a tree rotated a quarter turn: the right subtree first, then the
/// node as `key:info` padded to its depth, then the left subtree.
///
/// The pad is a single space field `INDENT * depth` wide, so the root line
/// still starts with one space.
pub fn print_sideways<N, W>(arena: &[N], node: Option<u32>, depth: usize, out: &mut W) -> fmt::Result
where
    N: KvNode,
    N::Key: Display,
    N::Value: Display,
    W: Write,
{
    let Some(i) = node else {
        return Ok(());
    };
    let n = &arena[i as usize];
    print_sideways(arena, n.r(), depth + 1, out)?;
    writeln!(out, "{:width$}{}:{}", ' ', n.key(), n.value(), width = depth * INDENT)?;
    print_sideways(arena, n.l(), depth + 1, out)
}
