//! Build script that embeds the word lists
//!
//! Both lists land in a single generated `word_lists.rs` under `OUT_DIR`.
//! A malformed entry fails the build instead of surfacing at runtime.

use std::collections::HashSet;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const WORD_LENGTH: usize = 5;

struct ListSpec {
    path: &'static str,
    const_name: &'static str,
    doc: &'static str,
}

const LISTS: [ListSpec; 2] = [
    ListSpec {
        path: "data/answers.txt",
        const_name: "ANSWERS",
        doc: "Words eligible to be chosen as the secret",
    },
    ListSpec {
        path: "data/allowed.txt",
        const_name: "ALLOWED",
        doc: "Additional words accepted as guesses",
    },
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");

    let mut source = String::from("// Generated by build.rs from data/*.txt\n");
    for list in &LISTS {
        println!("cargo:rerun-if-changed={}", list.path);
        let words = read_words(list.path);
        render_list(&mut source, list, &words);
    }

    let output_path = Path::new(&out_dir).join("word_lists.rs");
    fs::write(&output_path, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));
}

/// Lowercased words, deduplicated in file order
fn read_words(path: &str) -> Vec<String> {
    let content =
        fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path}: {e}"));

    let mut seen = HashSet::new();
    let mut words = Vec::new();
    for (number, line) in content.lines().enumerate() {
        let word = line.trim().to_ascii_lowercase();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        assert!(
            word.len() == WORD_LENGTH && word.bytes().all(|b| b.is_ascii_lowercase()),
            "{path}:{}: '{word}' is not a {WORD_LENGTH}-letter word",
            number + 1
        );
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }
    words
}

fn render_list(source: &mut String, list: &ListSpec, words: &[String]) {
    let ListSpec {
        const_name, doc, ..
    } = list;

    let _ = writeln!(source, "\n/// {doc}");
    let _ = writeln!(source, "pub const {const_name}: &[&str] = &[");
    for word in words {
        let _ = writeln!(source, "    \"{word}\",");
    }
    let _ = writeln!(source, "];");
    let _ = writeln!(source, "\n/// Number of words in [`{const_name}`]");
    let _ = writeln!(source, "pub const {const_name}_COUNT: usize = {};", words.len());
}
