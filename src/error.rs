use crate::decoder::DecodeError;
use crate::encoder::EncodeError;
use crate::tree::TreeError;

/// Everything that can go wrong while translating to or from hana.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error(transparent)]
    UnencodableCharacter(#[from] EncodeError),
    #[error(transparent)]
    InvalidCodeSequence(#[from] DecodeError<char>),
    #[error("Malformed tree construction: {0}")]
    MalformedTreeConstruction(#[from] TreeError<char>),
}

impl Error {
    /// The process exit code reported for this kind of error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::UnencodableCharacter(_) => 3,
            Error::InvalidCodeSequence(_) => 4,
            Error::MalformedTreeConstruction(_) => 5,
        }
    }
}
