//! A Huffman codec over character symbols.
//!
//! Assigns variable-length prefix-free bit codes to symbols by frequency,
//! minimizing the expected encoded length, and decodes the resulting stream
//! with the same tree. The encoded stream is a `String` of '0'/'1'
//! characters; packing it into bytes, serializing the tree, or wrapping the
//! codec in a CLI are outer layers a caller builds on top of these
//! operations.
//!
//! Pipeline: [`count_frequencies`] -> [`build_huffman_tree`] ->
//! [`build_code_table`] -> [`encode`], then [`decode`] with the stream and
//! the tree. Trees are never mutated after construction, so sharing one
//! across concurrent decode calls is safe.
//!
//! ```
//! let encoded = huffman_codec::encode("aabbbcc").unwrap();
//! let decoded = huffman_codec::decode(&encoded.bits, &encoded.tree).unwrap();
//! assert_eq!(decoded, "aabbbcc");
//! ```

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod huffman;

pub use decoder::decode;
pub use encoder::{Encoded, encode, encode_with_table};
pub use error::{Error, Result, StreamError};
pub use huffman::{
    CodeTable, FreqTable, HuffmanTree, Node, build_code_table, build_huffman_tree,
    count_frequencies, entropy_from_freq,
};
