use crate::types::KvNode;

/// Swaps the entries (key and value) of two nodes, keeping both in place.
///
/// Links are not touched, so the tree shape stays the same.
pub fn swap_entries<N: KvNode>(arena: &mut [N], x: u32, y: u32) {
    if x == y {
        return;
    }

    let (lo, hi) = if x < y { (x, y) } else { (y, x) };
    let (head, tail) = arena.split_at_mut(hi as usize);
    head[lo as usize].swap_entry(&mut tail[0]);
}
