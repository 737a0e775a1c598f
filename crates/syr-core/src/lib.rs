//! Corpus preparation and word-list analysis for Syriac texts.
//!
//! The pipeline is: [`text::process`] a document, build a
//! [`frequency::word_frequencies`] index from it, then optionally
//! [`frequency::sort`] it and derive secondary maps with [`filters`].
//! [`inventory::char_frequencies`] runs over any text snapshot.

pub mod export;
pub mod filters;
pub mod frequency;
pub mod inventory;
pub mod settings;
pub mod text;
pub mod translit;
pub mod unicode;
