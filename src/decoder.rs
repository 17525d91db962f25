use crate::alphabet::Symbol;
use crate::tree::EncodingTree;
use log::trace;

/// Errors that can occur while decoding
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DecodeError<S: Symbol> {
    /// No child of the current node is labelled with this symbol.
    #[error("Invalid code sequence: unexpected symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: S, position: usize },
    /// The input ran out before reaching a leaf. `position` is where the
    /// unfinished code started.
    #[error("Invalid code sequence: input ends inside the code starting at position {position}")]
    Truncated { position: usize },
}

impl<S: Symbol> EncodingTree<S> {
    /// Decode a sequence of symbols back into plaintext.
    ///
    /// Each code is read by walking down from the root until a leaf is
    /// reached, then decoding resumes at the root. The input has to end
    /// exactly on a leaf.
    pub fn decode<I>(&self, code: I) -> Result<String, DecodeError<S>>
    where
        I: IntoIterator<Item = S>,
    {
        let mut symbols = code.into_iter().enumerate().peekable();
        let mut output = String::new();

        while let Some(&(start, _)) = symbols.peek() {
            let mut node = self;
            let character = loop {
                let (position, symbol) = symbols
                    .next()
                    .ok_or(DecodeError::Truncated { position: start })?;
                node = node
                    .child(symbol)
                    .ok_or(DecodeError::InvalidSymbol { symbol, position })?;
                if let Some(c) = node.leaf_value() {
                    break c;
                }
            };

            trace!("Decoded {character:?} from position {start}");
            output.push(character);
        }

        Ok(output)
    }
}
