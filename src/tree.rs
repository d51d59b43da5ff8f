use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::stack::Stack;

/// Node values are drawn uniformly from `0..VALUE_RANGE`.
pub const VALUE_RANGE: i32 = 255;

/// Seed used by the benches so every run measures the same tree.
pub const DEFAULT_SEED: u64 = 42;

/// A binary tree node. Children are exclusively owned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub val: i32,
    pub left: Option<Box<Node>>,
    pub right: Option<Box<Node>>,
}

impl Node {
    pub const fn new(val: i32) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }

    pub fn with_children(val: i32, left: Option<Node>, right: Option<Node>) -> Self {
        Self {
            val,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of nodes reachable from `self`, itself included.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut work = Stack::new();
        work.push(self);
        while let Some(node) = work.pop() {
            count += 1;
            work.extend(node.left.as_deref());
            work.extend(node.right.as_deref());
        }
        count
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut work = Stack::new();
        work.push((self, 1));
        while let Some((node, depth)) = work.pop() {
            height = height.max(depth);
            work.extend(node.left.as_deref().map(|child| (child, depth + 1)));
            work.extend(node.right.as_deref().map(|child| (child, depth + 1)));
        }
        height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Growth {
    Both,
    Left,
    Right,
}

impl Growth {
    fn draw(rng: &mut StdRng) -> Self {
        match rng.gen_range(0..3) {
            0 => Growth::Both,
            1 => Growth::Left,
            _ => Growth::Right,
        }
    }
}

// arena form used while growing; children always sit at higher indices
struct Pending {
    val: i32,
    left: Option<usize>,
    right: Option<usize>,
}

fn spawn(arena: &mut Vec<Pending>, rng: &mut StdRng) -> usize {
    arena.push(Pending {
        val: rng.gen_range(0..VALUE_RANGE),
        left: None,
        right: None,
    });
    arena.len() - 1
}

/// Builds a random tree of exactly `n` nodes, or `None` when `n == 0`.
///
/// A work stack holds the nodes still eligible for children. Each popped
/// node draws uniformly between growing both children, only the left, or
/// only the right; growing both needs two remaining slots, otherwise the
/// node goes back on the stack and draws again. The same `seed` always
/// yields the same shape and values.
pub fn generate(n: usize, seed: u64) -> Option<Box<Node>> {
    if n == 0 {
        tracing::debug!(n, seed, "empty tree generated");
        return None;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut arena = Vec::with_capacity(n);
    let root = spawn(&mut arena, &mut rng);

    let mut work = Stack::new();
    work.push(root);
    let mut remaining = n - 1;
    let mut redraws = 0usize;

    while remaining > 0 {
        // every pop either grows a child or pushes the node back
        let Some(parent) = work.pop() else {
            break;
        };

        match Growth::draw(&mut rng) {
            Growth::Both if remaining < 2 => {
                work.push(parent);
                redraws += 1;
            }
            Growth::Both => {
                let left = spawn(&mut arena, &mut rng);
                let right = spawn(&mut arena, &mut rng);
                arena[parent].left = Some(left);
                arena[parent].right = Some(right);
                work.push(left);
                work.push(right);
                remaining -= 2;
            }
            Growth::Left => {
                let left = spawn(&mut arena, &mut rng);
                arena[parent].left = Some(left);
                work.push(left);
                remaining -= 1;
            }
            Growth::Right => {
                let right = spawn(&mut arena, &mut rng);
                arena[parent].right = Some(right);
                work.push(right);
                remaining -= 1;
            }
        }
    }

    tracing::debug!(n, seed, redraws, "tree generated");
    assemble(arena)
}

/// Converts the arena into owned nodes, leaves first.
fn assemble(arena: Vec<Pending>) -> Option<Box<Node>> {
    let mut built: Vec<Option<Box<Node>>> = Vec::with_capacity(arena.len());
    built.resize_with(arena.len(), || None);

    for (index, pending) in arena.into_iter().enumerate().rev() {
        let left = pending.left.and_then(|child| built[child].take());
        let right = pending.right.and_then(|child| built[child].take());
        built[index] = Some(Box::new(Node {
            val: pending.val,
            left,
            right,
        }));
    }

    built.into_iter().next().flatten()
}
