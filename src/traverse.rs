//! Pre-order traversal streaming into a bounded channel.
//!
//! Both strategies take the [`Sender`] by value and drop it on return, which
//! closes the channel once the caller has handed over its last sender.
//! Sends block while the channel is full, so every traversal needs a
//! concurrently running reader; [`collect`] pairs the two.

use std::thread;

use crossbeam_channel::{Sender, bounded};
use thiserror::Error;

use crate::stack::Stack;
use crate::tree::Node;

/// A function able to stream a tree's values in pre-order.
pub type Traverser = fn(Option<&Node>, Sender<i32>) -> Result<(), TraverseError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TraverseError {
    #[error("receiver disconnected after {emitted} values")]
    Disconnected { emitted: usize },
}

#[inline]
fn emit(out: &Sender<i32>, val: i32, emitted: &mut usize) -> Result<(), TraverseError> {
    out.send(val)
        .map_err(|_| TraverseError::Disconnected { emitted: *emitted })?;
    *emitted += 1;
    Ok(())
}

fn finish(
    strategy: &'static str,
    emitted: usize,
    result: Result<(), TraverseError>,
) -> Result<(), TraverseError> {
    match &result {
        Ok(()) => tracing::trace!(strategy, emitted, "traversal finished"),
        Err(err) => tracing::warn!(strategy, %err, "traversal cut short"),
    }
    result
}

/// Pre-order traversal by direct recursion; stack depth equals tree height.
pub fn traverse_recursive(root: Option<&Node>, out: Sender<i32>) -> Result<(), TraverseError> {
    let mut emitted = 0;
    let result = descend(root, &out, &mut emitted);
    finish("recursive", emitted, result)
}

fn descend(
    node: Option<&Node>,
    out: &Sender<i32>,
    emitted: &mut usize,
) -> Result<(), TraverseError> {
    let Some(node) = node else {
        return Ok(());
    };
    emit(out, node.val, emitted)?;
    descend(node.left.as_deref(), out, emitted)?;
    descend(node.right.as_deref(), out, emitted)
}

/// Pre-order traversal over an explicit work stack.
pub fn traverse_iterative(root: Option<&Node>, out: Sender<i32>) -> Result<(), TraverseError> {
    let mut emitted = 0;
    let mut work = Stack::new();
    work.extend(root);

    let mut result = Ok(());
    while let Some(node) = work.pop() {
        if let Err(err) = emit(&out, node.val, &mut emitted) {
            result = Err(err);
            break;
        }
        // right first so left pops first
        work.extend(node.right.as_deref());
        work.extend(node.left.as_deref());
    }

    finish("iterative", emitted, result)
}

/// Runs `traverse` on a scoped thread, draining a channel of capacity
/// `bound` on the calling thread, and returns everything it emitted.
pub fn collect(
    traverse: Traverser,
    root: Option<&Node>,
    bound: usize,
) -> Result<Vec<i32>, TraverseError> {
    let (tx, rx) = bounded(bound);
    thread::scope(|scope| {
        let producer = scope.spawn(move || traverse(root, tx));
        let values: Vec<i32> = rx.iter().collect();
        match producer.join() {
            Ok(result) => result.map(|()| values),
            Err(panic) => std::panic::resume_unwind(panic),
        }
    })
}
