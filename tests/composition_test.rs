use hana::decoder::DecodeError;
use hana::encoder::EncodeError;
use hana::{EncodingTree, Hana};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use rand::Rng;
use std::collections::HashSet;

/// Characters the hana codebook can encode.
fn hana_characters() -> Vec<char> {
    ('a'..='z').chain([' ', '\'']).collect()
}

/// A random message made only of characters the hana codebook covers.
fn random_hana_message(length: usize) -> String {
    let characters = hana_characters();
    (0..length)
        .map(|_| characters[rand::rng().random_range(0..characters.len())])
        .collect()
}

/// A set of distinct plaintext characters together with an arity, from
/// which a balanced prefix tree over the symbols `0..arity` is built.
#[derive(Debug, Clone)]
struct Codebook {
    characters: Vec<char>,
    arity: u8,
}

impl Codebook {
    fn new(characters: Vec<char>, arity: u8) -> Self {
        assert!(!characters.is_empty(), "Codebook must have a character");
        assert!(arity >= 2, "Arity must be at least 2");
        Self { characters, arity }
    }

    /// Split the characters into at most `arity` groups per level until
    /// every group holds a single character.
    fn subtree(characters: &[char], arity: usize) -> EncodingTree<u8> {
        if let [c] = characters {
            return EncodingTree::leaf(*c);
        }

        let mut node = EncodingTree::internal();
        let group_size = characters.len().div_ceil(arity);
        for (symbol, group) in characters.chunks(group_size).enumerate() {
            node.set(&[symbol as u8], Self::subtree(group, arity))
                .expect("Inserting a direct child cannot fail");
        }
        node
    }

    fn build_tree(&self) -> EncodingTree<u8> {
        let mut tree = EncodingTree::internal();
        let root = Self::subtree(&self.characters, self.arity as usize);
        // Keep the root internal even for a single character.
        tree.set(&[0], root).expect("Inserting a direct child cannot fail");
        tree.build_encoding_table().expect("Generated tree is well formed");
        tree
    }

    /// A random message using the codebook's characters.
    fn random_message(&self, length: usize) -> Vec<char> {
        (0..length)
            .map(|_| self.characters[rand::rng().random_range(0..self.characters.len())])
            .collect()
    }
}

impl Arbitrary for Codebook {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut seen = HashSet::new();
        let mut characters: Vec<char> = Vec::arbitrary(g);
        characters.retain(|c| seen.insert(*c));

        // Ensure that at least one character is present
        if characters.is_empty() {
            characters.push('a');
        }

        let arity = u8::arbitrary(g) % 10 + 2;
        Codebook::new(characters, arity)
    }
}

/// Property test verifying that decoding encoded hana plaintext gives back
/// the plaintext.
#[quickcheck]
fn hanafy_and_dehana_cancel(length: u8) -> bool {
    let hana = Hana::new().expect("Codebook should build");
    let message = random_hana_message(length as usize);

    let code = hana.hanafy(&message).expect("Encoding failed");
    hana.dehana(&code) == Ok(message)
}

/// Arbitrary strings either round-trip or are rejected for a character the
/// codebook lacks.
#[quickcheck]
fn hanafy_accepts_exactly_the_codebook(text: String) -> bool {
    let hana = Hana::new().expect("Codebook should build");
    let characters = hana_characters();

    match hana.hanafy(&text) {
        Ok(code) => text.chars().all(|c| characters.contains(&c)) && hana.dehana(&code) == Ok(text),
        Err(EncodeError::UnencodableCharacter {
            character,
            position,
        }) => {
            !characters.contains(&character)
                && text.chars().nth(position) == Some(character)
                && text.chars().take(position).all(|c| characters.contains(&c))
        }
    }
}

/// Decoding hana code never fails silently: either it decodes to text that
/// encodes back to the same code, or it reports an error.
#[quickcheck]
fn dehana_is_exact_or_fails(code: String) -> bool {
    let hana = Hana::new().expect("Codebook should build");

    match hana.dehana(&code) {
        Ok(text) => hana.hanafy(&text) == Ok(code),
        Err(DecodeError::InvalidSymbol { symbol, position }) => {
            code.chars().nth(position) == Some(symbol)
        }
        Err(DecodeError::Truncated { position }) => position < code.chars().count(),
    }
}

/// Property test verifying the round trip on arbitrary prefix trees.
#[quickcheck]
fn encoder_and_decoder_cancel(codebook: Codebook, length: u8) -> bool {
    let tree = codebook.build_tree();
    let message = codebook.random_message(length as usize);

    let code = tree.encode(message.iter().copied()).expect("Encoding failed");
    tree.decode(code) == Ok(message.into_iter().collect::<String>())
}

/// The encoding table of an arbitrary tree covers every leaf, and the codes
/// it yields are prefix free.
#[quickcheck]
fn encoding_table_is_complete_and_prefix_free(codebook: Codebook) -> bool {
    let tree = codebook.build_tree();
    let table_size = tree.encoding_table().map_or(0, |table| table.len());

    let codes: Vec<Vec<u8>> = codebook
        .characters
        .iter()
        .map(|&c| tree.encode_char(c).expect("Every character has a code"))
        .collect();

    let prefix_free = codes.iter().enumerate().all(|(i, a)| {
        codes
            .iter()
            .enumerate()
            .all(|(j, b)| i == j || !b.starts_with(a))
    });

    table_size == codebook.characters.len()
        && tree.leaf_count() == codebook.characters.len()
        && prefix_free
}
