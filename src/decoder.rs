use log::{debug, trace};

use crate::error::{Result, StreamError};
use crate::huffman::Node;

/// Walks the tree bit by bit, restarting at the root each time a leaf is
/// reached. The stream must exhaust exactly on a symbol boundary; a trailing
/// partial code means corruption or a mismatched tree and fails the whole
/// decode rather than returning a truncated string.
pub fn decode(bits: &str, tree: &Node) -> Result<String> {
    debug!("Starting bitstream decoding ({} bits)...", bits.len());

    // A lone-leaf tree has no branch decisions; every occurrence of the
    // sentinel code "0" stands for its sole symbol.
    if let Node::Leaf { symbol, .. } = tree {
        let mut decoded = String::new();
        for (position, bit) in bits.chars().enumerate() {
            match bit {
                '0' => decoded.push(*symbol),
                '1' => return Err(StreamError::NoBranch { position }.into()),
                bit => return Err(StreamError::InvalidBit { position, bit }.into()),
            }
        }
        return Ok(decoded);
    }

    let mut decoded = String::new();
    let mut current = tree;
    let mut pending = 0usize;

    for (position, bit) in bits.chars().enumerate() {
        current = match current {
            Node::Internal { left, right, .. } => match bit {
                '0' => left,
                '1' => right,
                bit => return Err(StreamError::InvalidBit { position, bit }.into()),
            },
            Node::Leaf { .. } => return Err(StreamError::NoBranch { position }.into()),
        };
        pending += 1;

        if let Node::Leaf { symbol, .. } = current {
            decoded.push(*symbol);
            current = tree;
            pending = 0;
        }
    }

    if pending > 0 {
        return Err(StreamError::DanglingCode { pending }.into());
    }

    trace!("Final decoded length: {} symbols.", decoded.chars().count());
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;
    use crate::error::Error;

    #[test]
    fn round_trips_arbitrary_text() {
        let input = "this is a quick string to demonstrate huffman encoding";
        let encoded = encode(input).unwrap();
        assert_eq!(decode(&encoded.bits, &encoded.tree).unwrap(), input);
    }

    #[test]
    fn round_trips_the_known_example() {
        let encoded = encode("aabbbcc").unwrap();
        assert_eq!(decode(&encoded.bits, &encoded.tree).unwrap(), "aabbbcc");
    }

    #[test]
    fn round_trips_multibyte_symbols() {
        let input = "żółć żółć abc";
        let encoded = encode(input).unwrap();
        assert_eq!(decode(&encoded.bits, &encoded.tree).unwrap(), input);
    }

    #[test]
    fn decodes_sentinel_stream_against_a_lone_leaf() {
        let tree = Node::Leaf { symbol: 'a', freq: 4 };
        assert_eq!(decode("0000", &tree).unwrap(), "aaaa");
    }

    #[test]
    fn empty_stream_decodes_to_empty_text() {
        let encoded = encode("ab").unwrap();
        assert_eq!(decode("", &encoded.tree).unwrap(), "");
    }

    #[test]
    fn trailing_partial_code_is_an_error() {
        // b -> "0", a -> "10", c -> "11"; a lone '1' never reaches a leaf.
        let encoded = encode("aabbbcc").unwrap();
        let mut bits = encoded.bits.clone();
        bits.push('1');
        assert_eq!(
            decode(&bits, &encoded.tree),
            Err(Error::MalformedStream(StreamError::DanglingCode {
                pending: 1
            }))
        );
    }

    #[test]
    fn branch_bit_against_a_lone_leaf_is_an_error() {
        let tree = Node::Leaf { symbol: 'a', freq: 4 };
        assert_eq!(
            decode("001", &tree),
            Err(Error::MalformedStream(StreamError::NoBranch {
                position: 2
            }))
        );
    }

    #[test]
    fn non_bit_character_is_an_error() {
        let encoded = encode("aabbbcc").unwrap();
        assert_eq!(
            decode("10x", &encoded.tree),
            Err(Error::MalformedStream(StreamError::InvalidBit {
                position: 2,
                bit: 'x'
            }))
        );
    }
}
