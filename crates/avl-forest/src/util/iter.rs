use crate::types::Node;

/// Stack-based inorder iterator over an arena tree.
///
/// Walks from both ends; `len` bounds the total number of yielded nodes so
/// the two cursors never cross.
pub struct Iter<'a, N> {
    arena: &'a [N],
    front: Vec<u32>,
    back: Vec<u32>,
    remaining: usize,
}

impl<'a, N: Node> Iter<'a, N> {
    pub fn new(arena: &'a [N], root: Option<u32>, len: usize) -> Self {
        let mut iter = Self {
            arena,
            front: Vec::new(),
            back: Vec::new(),
            remaining: len,
        };
        iter.push_left(root);
        iter.push_right(root);
        iter
    }

    fn push_left(&mut self, mut node: Option<u32>) {
        while let Some(i) = node {
            self.front.push(i);
            node = self.arena[i as usize].l();
        }
    }

    fn push_right(&mut self, mut node: Option<u32>) {
        while let Some(i) = node {
            self.back.push(i);
            node = self.arena[i as usize].r();
        }
    }
}

impl<'a, N: Node> Iterator for Iter<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<&'a N> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.front.pop()?;
        let arena: &'a [N] = self.arena;
        self.push_left(arena[i as usize].r());
        self.remaining -= 1;
        Some(&arena[i as usize])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<N: Node> DoubleEndedIterator for Iter<'_, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.back.pop()?;
        let arena = self.arena;
        self.push_right(arena[i as usize].l());
        self.remaining -= 1;
        Some(&arena[i as usize])
    }
}

impl<N: Node> ExactSizeIterator for Iter<'_, N> {}
