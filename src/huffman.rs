use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use log::{debug, trace};

use crate::error::{Error, Result};

pub type CodeTable = HashMap<char, String>;
pub type FreqTable = HashMap<char, u64>;

#[derive(Debug, Eq, PartialEq)]
pub enum Node {
    Leaf {
        symbol: char,
        freq: u64,
    },
    Internal {
        freq: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    pub fn symbol(&self) -> Option<char> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }
}

pub type HuffmanTree = Node;

#[derive(Eq, PartialEq)]
struct HeapNode {
    freq: u64,
    seq: u64,
    node: Box<Node>,
}

impl Ord for HeapNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for Min-Heap behavior in BinaryHeap (which is max-heap
        // by default); equal weights resolve in insertion order via seq.
        other.freq.cmp(&self.freq).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub fn count_frequencies(input: &str) -> FreqTable {
    let mut freq = FreqTable::new();
    for symbol in input.chars() {
        *freq.entry(symbol).or_insert(0) += 1;
    }
    freq
}

pub fn entropy_from_freq(freq: &FreqTable) -> f64 {
    let total: u64 = freq.values().sum();
    let total_f = total as f64;

    freq.values()
        .map(|&count| {
            let p = count as f64 / total_f;
            -p * p.log2()
        })
        .sum()
}

/// Builds the merge tree by repeatedly combining the two lowest-weight
/// candidates. Tie-break rule: leaves are seeded in (weight, symbol) order
/// and every heap entry carries an insertion sequence number, so among equal
/// weights the earliest-inserted candidate pops first and becomes `left`.
pub fn build_huffman_tree(frequencies: &FreqTable) -> Result<HuffmanTree> {
    if frequencies.is_empty() {
        return Err(Error::EmptyInput);
    }

    debug!(
        "Building Huffman Tree from {} unique symbols",
        frequencies.len()
    );

    let mut freq_vec: Vec<(char, u64)> = frequencies.iter().map(|(&s, &f)| (s, f)).collect();
    freq_vec.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));

    let mut heap = BinaryHeap::new();
    let mut seq = 0u64;

    for (symbol, freq) in freq_vec {
        heap.push(HeapNode {
            freq,
            seq,
            node: Box::new(Node::Leaf { symbol, freq }),
        });
        seq += 1;
    }
    trace!("Initial heap size: {}", heap.len());

    while heap.len() > 1 {
        let left = heap.pop().ok_or(Error::EmptyInput)?;
        let right = heap.pop().ok_or(Error::EmptyInput)?;

        let freq = left.freq + right.freq;
        let new_node = Node::Internal {
            freq,
            left: left.node,
            right: right.node,
        };
        heap.push(HeapNode {
            freq,
            seq,
            node: Box::new(new_node),
        });
        seq += 1;
    }

    debug!("Tree construction complete.");
    heap.pop().map(|n| *n.node).ok_or(Error::EmptyInput)
}

/// Maps every leaf symbol to its root-to-leaf path, '0' per left step and
/// '1' per right step. A tree that is a single leaf has no branch decisions,
/// so its sole symbol gets the sentinel code "0" instead of an empty string.
pub fn build_code_table(root: &Node) -> CodeTable {
    let mut table = CodeTable::new();
    match root {
        Node::Leaf { symbol, .. } => {
            table.insert(*symbol, "0".to_string());
        }
        Node::Internal { .. } => {
            assign_codes(root, String::new(), &mut table);
        }
    }
    table
}

fn assign_codes(node: &Node, prefix: String, table: &mut CodeTable) {
    match node {
        Node::Leaf { symbol, .. } => {
            trace!("Assigning code to symbol {:?} : '{}'", symbol, prefix);
            table.insert(*symbol, prefix);
        }
        Node::Internal { left, right, .. } => {
            assign_codes(left, format!("{}0", prefix), table);
            assign_codes(right, format!("{}1", prefix), table);
        }
    }
}
