use std::fmt::Debug;
use std::hash::Hash;

/// A symbol of the code alphabet, i.e. the label on one edge of an
/// encoding tree.
pub trait Symbol: Eq + Hash + Copy + Debug {}

impl Symbol for char {}

impl Symbol for u8 {}
