pub mod alphabet;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod hana;
pub mod tree;

pub use alphabet::Symbol;
pub use error::Error;
pub use hana::{Hana, Mode};
pub use tree::EncodingTree;
