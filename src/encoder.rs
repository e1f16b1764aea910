use log::debug;

use crate::error::{Error, Result};
use crate::huffman::{
    CodeTable, HuffmanTree, build_code_table, build_huffman_tree, count_frequencies,
    entropy_from_freq,
};

/// Output of a full encode run. The tree is the contract between the encode
/// and decode sides: decoding needs it and nothing else. The code table is
/// only needed while encoding and may be dropped afterwards.
#[derive(Debug, PartialEq, Eq)]
pub struct Encoded {
    pub bits: String,
    pub table: CodeTable,
    pub tree: HuffmanTree,
}

/// Runs the whole pipeline over `input`: count frequencies, build the tree,
/// derive the code table, and concatenate each symbol's code in input order.
pub fn encode(input: &str) -> Result<Encoded> {
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }

    let frequencies = count_frequencies(input);
    let tree = build_huffman_tree(&frequencies)?;
    let table = build_code_table(&tree);
    let bits = encode_with_table(input, &table)?;

    debug!(
        "Original size: {} bits, encoded size: {} bits",
        input.len() * 8,
        bits.len()
    );
    debug!(
        "Entropy: {:.4} bits/symbol (Total samples: {})",
        entropy_from_freq(&frequencies),
        input.chars().count()
    );

    Ok(Encoded { bits, table, tree })
}

/// Encodes `input` against an already-built table. The table covering every
/// input symbol is a checked precondition, not an assumed invariant: it only
/// holds for free when the table came from the same text.
pub fn encode_with_table(input: &str, table: &CodeTable) -> Result<String> {
    let mut bits = String::new();
    for symbol in input.chars() {
        match table.get(&symbol) {
            Some(code) => bits.push_str(code),
            None => return Err(Error::MissingCode { symbol }),
        }
    }
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::Node;

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(encode(""), Err(Error::EmptyInput));
    }

    #[test]
    fn known_example_encodes_to_eleven_bits() {
        let encoded = encode("aabbbcc").unwrap();
        assert_eq!(encoded.bits.len(), 11);
        assert_eq!(encoded.bits, "10100001111");
    }

    #[test]
    fn single_symbol_input_emits_one_sentinel_code_per_occurrence() {
        let encoded = encode("aaaa").unwrap();
        assert_eq!(encoded.bits, "0000");
        assert_eq!(encoded.tree, Node::Leaf { symbol: 'a', freq: 4 });
    }

    #[test]
    fn encoding_is_deterministic() {
        let first = encode("abracadabra").unwrap();
        let second = encode("abracadabra").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn symbol_missing_from_a_foreign_table_is_an_error() {
        let table = encode("aabb").unwrap().table;
        assert_eq!(
            encode_with_table("abc", &table),
            Err(Error::MissingCode { symbol: 'c' })
        );
    }
}
