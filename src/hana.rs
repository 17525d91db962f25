//! The hana codebook, and the string-level interface built on it.

use crate::decoder::DecodeError;
use crate::encoder::EncodeError;
use crate::error::Error;
use crate::tree::{EncodingTree, TreeError};
use log::debug;
use std::sync::LazyLock;

/// The symbols hana code is written in.
pub const SYMBOLS: [char; 11] = ['S', 'H', 'J', 'M', 'K', 'D', 'A', 'N', 'G', 'L', 'E'];

/// What sits at the end of a codebook path.
enum Entry {
    Node,
    Leaf(char),
}

use Entry::{Leaf, Node};

/// Every path of the tree, parents listed before their children.
const CODEBOOK: &[(&str, Entry)] = &[
    ("S", Node),
    ("SK", Leaf('a')),
    ("SH", Node),
    ("SHJ", Leaf('e')),
    ("SHM", Leaf('t')),
    ("SHK", Leaf(' ')),
    ("SJ", Node),
    ("SJJ", Leaf('o')),
    ("SJD", Leaf('i')),
    ("SJH", Leaf('n')),
    ("SM", Node),
    ("SMH", Leaf('s')),
    ("SMA", Leaf('r')),
    ("SMD", Leaf('h')),
    ("J", Node),
    ("JS", Leaf('d')),
    ("JD", Node),
    ("JDA", Leaf('l')),
    ("JDN", Leaf('u')),
    ("JDJ", Leaf('\'')),
    ("H", Node),
    ("HM", Leaf('c')),
    ("HH", Node),
    ("HHS", Leaf('m')),
    ("HHJ", Leaf('f')),
    ("HHK", Leaf('y')),
    ("K", Node),
    ("KS", Leaf('w')),
    ("KJ", Node),
    ("KJJ", Node),
    ("KJJK", Leaf('g')),
    ("KJJM", Leaf('p')),
    ("KJJS", Leaf('b')),
    ("D", Leaf('v')),
    ("A", Leaf('k')),
    ("M", Leaf('x')),
    ("G", Leaf('q')),
    ("L", Leaf('j')),
    ("E", Leaf('z')),
];

/// Assemble the hana tree and build its encoding tables.
pub fn build_tree() -> Result<EncodingTree<char>, TreeError<char>> {
    let mut root = EncodingTree::internal();

    for (path, entry) in CODEBOOK {
        let path: Vec<char> = path.chars().collect();
        let subtree = match entry {
            Node => EncodingTree::internal(),
            Leaf(c) => EncodingTree::leaf(*c),
        };
        root.set(&path, subtree)?;
    }

    root.build_encoding_table()?;
    debug!("Built hana tree with {} leaves", root.leaf_count());
    Ok(root)
}

/// Which way an input should be translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Plaintext to code.
    Hanafy,
    /// Code to plaintext.
    Dehana,
}

impl Mode {
    /// Plaintext is written in lower case and code in upper case, so an
    /// input with at least one cased character and no upper-case or
    /// titlecase ones is taken to be plaintext. Anything else is treated as
    /// code.
    pub fn detect(input: &str) -> Mode {
        let mut cased = false;
        for c in input.chars() {
            if c.is_uppercase() || is_titlecase(c) {
                return Mode::Dehana;
            }
            cased |= c.is_lowercase();
        }

        if cased { Mode::Hanafy } else { Mode::Dehana }
    }
}

/// Titlecase letters (such as `ǅ`) are cased but neither upper nor lower
/// case; they are the only such characters that change when lowered.
fn is_titlecase(c: char) -> bool {
    !c.is_lowercase() && !c.is_uppercase() && c.to_lowercase().ne([c])
}

static SHARED: LazyLock<Result<Hana, TreeError<char>>> = LazyLock::new(Hana::new);

/// A built hana tree. Read-only once constructed, so one value can be
/// shared freely between threads.
#[derive(Debug, Clone)]
pub struct Hana {
    tree: EncodingTree<char>,
}

impl Hana {
    /// Build a fresh copy of the hana tree.
    pub fn new() -> Result<Self, TreeError<char>> {
        Ok(Self { tree: build_tree()? })
    }

    /// The process-wide hana tree, built on first use.
    pub fn shared() -> Result<&'static Hana, TreeError<char>> {
        SHARED.as_ref().map_err(Clone::clone)
    }

    /// The underlying encoding tree, with its tables built.
    pub fn tree(&self) -> &EncodingTree<char> {
        &self.tree
    }

    /// Encode plaintext as hana code.
    pub fn hanafy(&self, text: &str) -> Result<String, EncodeError> {
        Ok(self.tree.encode(text.chars())?.into_iter().collect())
    }

    /// Decode hana code back into plaintext.
    pub fn dehana(&self, code: &str) -> Result<String, DecodeError<char>> {
        self.tree.decode(code.chars())
    }

    /// Encode or decode `input`, depending on what it looks like.
    pub fn translate(&self, input: &str) -> Result<String, Error> {
        let mode = Mode::detect(input);
        debug!("Translating {input:?} in {mode:?} mode");
        match mode {
            Mode::Hanafy => Ok(self.hanafy(input)?),
            Mode::Dehana => Ok(self.dehana(input)?),
        }
    }
}
