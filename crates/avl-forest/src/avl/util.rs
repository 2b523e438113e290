use std::fmt::Debug;

use crate::types::{Comparison, Rotate};
use crate::util::{self, get_l, get_r, set_l, set_r, Inserted};

use super::types::AvlNodeLike;

#[inline]
fn height_of<N: AvlNodeLike>(arena: &[N], node: Option<u32>) -> u32 {
    node.map_or(0, |i| arena[i as usize].height())
}

/// Recomputes the cached height and balance factor of `n` from its children.
pub fn update<N: AvlNodeLike>(arena: &mut [N], n: u32) {
    let lh = height_of(arena, get_l(arena, n));
    let rh = height_of(arena, get_r(arena, n));
    let node = &mut arena[n as usize];
    node.set_height(1 + lh.max(rh));
    node.set_bf(lh as i32 - rh as i32);
}

/// Single rotation at `n`; returns the pivot, which is the new subtree root.
///
/// Rotating left promotes `n.r`; its old left subtree becomes `n.r`.
/// Rotating right is the mirror image. The old root is recomputed before
/// the pivot, since it is now the pivot's child.
pub fn rotate<N: AvlNodeLike>(arena: &mut [N], n: u32, direction: Rotate) -> u32 {
    let pivot = match direction {
        Rotate::Left => {
            let Some(pivot) = get_r(arena, n) else {
                return n;
            };
            let inner = get_l(arena, pivot);
            set_r(arena, n, inner);
            set_l(arena, pivot, Some(n));
            pivot
        }
        Rotate::Right => {
            let Some(pivot) = get_l(arena, n) else {
                return n;
            };
            let inner = get_r(arena, pivot);
            set_l(arena, n, inner);
            set_r(arena, pivot, Some(n));
            pivot
        }
    };

    update(arena, n);
    update(arena, pivot);
    log::trace!("rotate {direction:?} at node {n}, pivot {pivot}");
    pivot
}

/// Restores the AVL property at `n`, deciding the case by the child's
/// balance factor. Returns the subtree root after at most two rotations.
pub fn rebalance<N: AvlNodeLike>(arena: &mut [N], n: u32) -> u32 {
    let bf = arena[n as usize].bf();

    if bf > 1 {
        if let Some(l) = get_l(arena, n) {
            if arena[l as usize].bf() < 0 {
                let l = rotate(arena, l, Rotate::Left);
                set_l(arena, n, Some(l));
            }
        }
        return rotate(arena, n, Rotate::Right);
    }

    if bf < -1 {
        if let Some(r) = get_r(arena, n) {
            if arena[r as usize].bf() > 0 {
                let r = rotate(arena, r, Rotate::Right);
                set_r(arena, n, Some(r));
            }
        }
        return rotate(arena, n, Rotate::Left);
    }

    n
}

/// Retrace step for AVL trees: recompute `n`, then rebalance it.
pub fn retrace<N: AvlNodeLike>(arena: &mut [N], n: u32) -> u32 {
    update(arena, n);
    rebalance(arena, n)
}

/// Links the detached node `n` into the tree and rebalances every ancestor.
pub fn insert<N, C>(arena: &mut [N], root: Option<u32>, n: u32, comparator: &C) -> Inserted
where
    N: AvlNodeLike,
    C: Fn(&N::Key, &N::Key) -> Comparison,
{
    util::insert(arena, root, n, comparator, &retrace::<N>)
}

/// Unlinks the entry with `key` and rebalances every ancestor.
///
/// See [`util::remove`] for the returned pair.
pub fn remove<N, C>(
    arena: &mut [N],
    root: Option<u32>,
    key: &N::Key,
    comparator: &C,
) -> Option<(Option<u32>, u32)>
where
    N: AvlNodeLike,
    C: Fn(&N::Key, &N::Key) -> Comparison,
{
    util::remove(arena, root, key, comparator, &retrace::<N>)
}

/// Checks that every cached balance factor is within `-1..=1`.
pub fn balanced<N: AvlNodeLike>(arena: &[N], node: Option<u32>) -> bool {
    let Some(i) = node else {
        return true;
    };
    let bf = arena[i as usize].bf();
    (-1..=1).contains(&bf) && balanced(arena, get_l(arena, i)) && balanced(arena, get_r(arena, i))
}

pub fn assert_avl_tree<N, C>(arena: &[N], root: Option<u32>, comparator: &C) -> Result<(), String>
where
    N: AvlNodeLike,
    C: Fn(&N::Key, &N::Key) -> Comparison,
{
    fn validate_shape<N: AvlNodeLike>(
        arena: &[N],
        node: u32,
        inorder: &mut Vec<u32>,
    ) -> Result<u32, String> {
        let l = get_l(arena, node);
        let r = get_r(arena, node);

        let lh = match l {
            Some(l) => validate_shape(arena, l, inorder)?,
            None => 0,
        };
        inorder.push(node);
        let rh = match r {
            Some(r) => validate_shape(arena, r, inorder)?,
            None => 0,
        };

        let n = &arena[node as usize];
        let expected_height = 1 + lh.max(rh);
        if n.height() != expected_height {
            return Err(format!(
                "Height mismatch at node {node}: expected {expected_height}, got {}",
                n.height()
            ));
        }
        let expected_bf = lh as i32 - rh as i32;
        if n.bf() != expected_bf {
            return Err(format!(
                "Balance factor mismatch at node {node}: expected {expected_bf}, got {}",
                n.bf()
            ));
        }
        if !(-1..=1).contains(&expected_bf) {
            return Err(format!("AVL balance violated at node {node}"));
        }

        Ok(expected_height)
    }

    let Some(root) = root else {
        return Ok(());
    };

    let mut inorder = Vec::new();
    validate_shape(arena, root, &mut inorder)?;

    for pair in inorder.windows(2) {
        let prev = arena[pair[0] as usize].key();
        let curr = arena[pair[1] as usize].key();
        if comparator(prev, curr) != Comparison::Less {
            return Err("Node order violated".to_string());
        }
    }

    Ok(())
}

/// Debug printer for AVL trees.
pub fn print<N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    N: AvlNodeLike,
    N::Key: Debug,
    N::Value: Debug,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print(arena, n.l(), &format!("{tab}  "));
            let right = print(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] [h={} bf={}] {{ {:?} = {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.height(),
                n.bf(),
                n.key(),
                n.value()
            )
        }
    }
}
