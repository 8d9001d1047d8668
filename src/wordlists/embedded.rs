//! Word lists baked into the binary by `build.rs`
//!
//! Provides `ANSWERS`/`ANSWERS_COUNT` (the secret pool) and
//! `ALLOWED`/`ALLOWED_COUNT` (extra accepted guesses). Entries are lowercase,
//! five letters long and unique within each list.

include!(concat!(env!("OUT_DIR"), "/word_lists.rs"));
