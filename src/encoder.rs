use crate::alphabet::Symbol;
use crate::tree::EncodingTree;
use log::trace;

/// Errors that can occur while encoding
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EncodeError {
    #[error("Unencodable character {character:?} at position {position}")]
    UnencodableCharacter { character: char, position: usize },
}

// Encoder Algorithm
//
// For each character c of the input, starting at the root:
//     s = encoding_table[c]       (first symbol of c's path from here)
//     emit s
//     descend into children[s]
//     stop once the node reached is the leaf bound to c
//
// The per-node tables only record the next symbol, so a code is rebuilt
// one level at a time instead of being stored whole.
impl<S: Symbol> EncodingTree<S> {
    /// The code for a single character, or `None` if the tree has no leaf
    /// for it (or its encoding tables have not been built).
    pub fn encode_char(&self, c: char) -> Option<Vec<S>> {
        let mut code = Vec::new();
        let mut node = self;

        loop {
            match node {
                EncodingTree::Leaf(leaf) => return (*leaf == c).then_some(code),
                EncodingTree::Internal(inner) => {
                    let &symbol = inner.encoding_table().get(&c)?;
                    code.push(symbol);
                    node = inner.children().get(&symbol)?;
                }
            }
        }
    }

    /// Encode a sequence of plaintext characters as the concatenation of
    /// their codes, in input order.
    ///
    /// Fails on the first character the tree cannot encode; no partial
    /// output is produced.
    pub fn encode<I>(&self, text: I) -> Result<Vec<S>, EncodeError>
    where
        I: IntoIterator<Item = char>,
    {
        let mut output = Vec::new();
        for (position, character) in text.into_iter().enumerate() {
            let code = self
                .encode_char(character)
                .ok_or(EncodeError::UnencodableCharacter {
                    character,
                    position,
                })?;
            trace!("Encoded {character:?} as {code:?}");
            output.extend(code);
        }
        Ok(output)
    }
}
