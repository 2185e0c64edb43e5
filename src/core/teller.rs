/// The fortune teller — one-time corpus build, then repeated serving.
///
/// Wires the corpus tokenizer, the transition graph, and the generator
/// together behind a single value, the way the device firmware split
/// its work into a build phase at boot and a serve phase per trigger.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::core::generator::{self, GenerateError, Sentence};
use crate::core::graph::{GraphLimits, TransitionGraph};
use crate::corpus;

#[derive(Debug, Error)]
pub enum TellerError {
    #[error("generation error: {0}")]
    Generate(#[from] GenerateError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Tuning knobs for a [`FortuneTeller`]. RON-loadable; omitted fields
/// take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FortuneConfig {
    pub limits: GraphLimits,
    /// Soft floor on fortune length; dead ends may still cut below it.
    pub min_words: usize,
    /// Hard ceiling on fortune length.
    pub max_words: usize,
    /// RNG seed. A fixed seed reproduces the same fortune stream.
    pub seed: u64,
}

impl Default for FortuneConfig {
    fn default() -> Self {
        FortuneConfig {
            limits: GraphLimits::default(),
            min_words: 4,
            max_words: 12,
            seed: 0,
        }
    }
}

impl FortuneConfig {
    /// Load a config from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<FortuneConfig, TellerError> {
        let contents = std::fs::read_to_string(path)?;
        let config: FortuneConfig = ron::from_str(&contents)?;
        Ok(config)
    }
}

/// Owns a built transition graph and a seeded rng; hands out fortunes.
/// The graph is built once in the constructor and read-only afterward.
pub struct FortuneTeller {
    graph: TransitionGraph,
    rng: StdRng,
    config: FortuneConfig,
}

impl FortuneTeller {
    /// Build from the builtin fortune corpus.
    pub fn new(config: FortuneConfig) -> Self {
        Self::from_corpus(corpus::BUILTIN, config)
    }

    /// Build from caller-supplied corpus lines, one sentence per line.
    pub fn from_corpus(lines: &[&str], config: FortuneConfig) -> Self {
        let mut graph = TransitionGraph::new(config.limits);
        for line in lines {
            let words = corpus::tokenize(line, config.limits.max_word_len);
            graph.ingest(&words);
        }
        let rng = StdRng::seed_from_u64(config.seed);
        FortuneTeller { graph, rng, config }
    }

    /// Generate one fortune, rendered as space-joined words.
    pub fn next_fortune(&mut self) -> Result<String, TellerError> {
        Ok(self.next_sentence()?.to_string())
    }

    /// Generate one fortune as its raw word sequence.
    pub fn next_sentence(&mut self) -> Result<Sentence, TellerError> {
        let sentence = generator::generate(
            &self.graph,
            &mut self.rng,
            self.config.min_words,
            self.config.max_words,
        )?;
        Ok(sentence)
    }

    pub fn graph(&self) -> &TransitionGraph {
        &self.graph
    }

    pub fn config(&self) -> &FortuneConfig {
        &self.config
    }
}
