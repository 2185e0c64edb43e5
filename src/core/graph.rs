/// Bounded word-transition graph — corpus ingestion and storage.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Capacity limits for a [`TransitionGraph`].
///
/// All three bounds are hard: ingestion never allocates past them, it
/// drops the overflowing word or transition instead. Defaults are sized
/// for a small device holding the builtin fortune corpus.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GraphLimits {
    /// Maximum number of distinct words.
    pub max_nodes: usize,
    /// Maximum outgoing transitions per node.
    pub max_transitions: usize,
    /// Maximum word length in characters; longer words are truncated
    /// during tokenization (see [`crate::corpus::tokenize`]).
    pub max_word_len: usize,
}

impl Default for GraphLimits {
    fn default() -> Self {
        GraphLimits {
            max_nodes: 256,
            max_transitions: 8,
            max_word_len: 15,
        }
    }
}

/// Index of a node in the graph's arena. Only the graph hands these out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn from_index(index: usize) -> Self {
        NodeId(index as u32)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A directed weighted edge; weight = observed adjacency count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub target: NodeId,
    pub count: u32,
}

/// One graph vertex per distinct word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub word: String,
    pub transitions: Vec<Transition>,
    /// Observed as the first word of some corpus sentence.
    pub can_start: bool,
    /// Observed as the last word of some corpus sentence.
    pub can_end: bool,
}

/// The word-transition graph: an arena of nodes plus an exact-equality
/// word index. Built once from a corpus, then read-only while serving.
#[derive(Debug, Clone)]
pub struct TransitionGraph {
    limits: GraphLimits,
    nodes: Vec<Node>,
    index: FxHashMap<String, NodeId>,
}

impl TransitionGraph {
    pub fn new(limits: GraphLimits) -> Self {
        TransitionGraph {
            limits,
            nodes: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Build a graph by ingesting every sentence in corpus order.
    ///
    /// Deterministic: the same corpus and limits always produce a
    /// structurally identical graph.
    pub fn build_from_corpus(sentences: &[Vec<&str>], limits: GraphLimits) -> TransitionGraph {
        let mut graph = TransitionGraph::new(limits);
        for sentence in sentences {
            graph.ingest(sentence);
        }
        graph
    }

    /// Ingest one already-tokenized sentence.
    ///
    /// For each adjacent word pair, resolves or creates both nodes and
    /// records the transition. When the node table is full, unknown
    /// words drop silently: the pair's transition is skipped but later
    /// pairs in the sentence still process, and updates to words
    /// already present proceed normally. Boundary flags are set on
    /// whichever boundary nodes resolved. Sentences with fewer than
    /// two words have no pairs and ingest nothing.
    pub fn ingest(&mut self, words: &[&str]) {
        if words.len() < 2 {
            return;
        }
        for i in 0..words.len() - 1 {
            let from = self.intern(words[i]);
            let to = self.intern(words[i + 1]);

            if i == 0 {
                if let Some(id) = from {
                    self.nodes[id.index()].can_start = true;
                }
            }
            if i + 2 == words.len() {
                if let Some(id) = to {
                    self.nodes[id.index()].can_end = true;
                }
            }

            if let (Some(from), Some(to)) = (from, to) {
                self.record_transition(from, to);
            }
        }
    }

    /// Look up the node for an existing word, or create one if the
    /// arena has a free slot. Returns `None` when the word is unknown
    /// and the table is full.
    fn intern(&mut self, word: &str) -> Option<NodeId> {
        if let Some(&id) = self.index.get(word) {
            return Some(id);
        }
        if self.nodes.len() >= self.limits.max_nodes {
            return None;
        }
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(Node {
            word: word.to_string(),
            transitions: Vec::new(),
            can_start: false,
            can_end: false,
        });
        self.index.insert(word.to_string(), id);
        Some(id)
    }

    /// Increment the existing transition `from → to`, or append a new
    /// one with count 1 if the node still has transition capacity.
    /// A full transition list drops the observation.
    fn record_transition(&mut self, from: NodeId, to: NodeId) {
        let max_transitions = self.limits.max_transitions;
        let node = &mut self.nodes[from.index()];
        if let Some(t) = node.transitions.iter_mut().find(|t| t.target == to) {
            t.count = t.count.saturating_add(1);
        } else if node.transitions.len() < max_transitions {
            node.transitions.push(Transition { target: to, count: 1 });
        }
    }

    pub fn limits(&self) -> GraphLimits {
        self.limits
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Resolve a word to its node id, by exact string equality.
    pub fn node_id(&self, word: &str) -> Option<NodeId> {
        self.index.get(word).copied()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Total transition count across all nodes.
    pub fn transition_count(&self) -> usize {
        self.nodes.iter().map(|n| n.transitions.len()).sum()
    }
}
