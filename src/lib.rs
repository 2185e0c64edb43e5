//! Fortune Chain — bounded Markov-chain sentence generation.
//!
//! Learns a word-transition graph from a small fixed corpus and samples
//! short, plausible sentences from it under hard memory and length
//! bounds, the way a fortune-cookie printer would. The graph never
//! grows past its configured capacity; overflow degrades gracefully
//! instead of growing.

pub mod core;
pub mod corpus;
