#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub mod fifo;
pub mod stack;
pub mod style;
pub mod traverse;
pub mod tree;

pub use fifo::{
    ChanFifo, Fifo, FifoError, IntList, IntListFifo, ListFifo, ReallocFifo, ShiftFifo,
};
pub use stack::Stack;
pub use style::{IntSlice, increment};
pub use traverse::{TraverseError, Traverser, collect, traverse_iterative, traverse_recursive};
pub use tree::{Node, generate};
