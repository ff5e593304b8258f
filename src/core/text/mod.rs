pub mod splitter;

pub use splitter::split_sentences;
