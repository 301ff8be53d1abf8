//! Reference rule sets built on the kernel.

pub mod deckbuilder;
