//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of ClaimEDA.
//! The ClaimEDA project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! Penn Treebank-style word tokenizer.
//!
//! Text is first cut into sentences at `.`, `?` or `!` followed by whitespace
//! and a word that does not start lowercase. A period after a known
//! abbreviation (`Dr.`, `etc.`), a single-letter initial or a dotted acronym
//! (`U.S.`) does not end a sentence.
//!
//! Each sentence then goes through a fixed sequence of regex rewrites that pad
//! punctuation, quotes and clitics with spaces, followed by a whitespace split:
//!
//! - opening `"` becomes ` `` ` and closing `"` becomes `''`
//! - `, ; : @ # $ % & ? !`, brackets, `--` and `...` are separate tokens
//! - the sentence-final period is split off, inner periods (`U.S.`) are not
//! - `'s 'm 'd 'll 're 've n't` are split from their host word
//! - `cannot`, `gonna`, `gotta`, `lemme`, `gimme`, `wanna` are split in two

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

#[derive(Debug)]
struct RewriteRule {
    pattern: Regex,
    replacement: &'static str,
}

impl RewriteRule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("tokenizer pattern must compile"),
            replacement,
        }
    }

    fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement)
            .into_owned()
    }
}

const ABBREVIATIONS: &[&str] = &[
    "approx", "co", "corp", "dept", "dr", "e.g", "est", "etc", "fig", "gen", "gov", "i.e",
    "inc", "jr", "ltd", "mr", "mrs", "ms", "mt", "no", "prof", "rep", "sen", "sr", "st", "vs",
];

/// Treebank tokenizer with precompiled rewrite rules.
#[derive(Debug)]
pub struct TreebankTokenizer {
    sentence_end: Regex,
    abbreviations: HashSet<&'static str>,
    starting_quotes: Vec<RewriteRule>,
    punctuation: Vec<RewriteRule>,
    ending_quotes: Vec<RewriteRule>,
    contractions: Vec<RewriteRule>,
}

impl Default for TreebankTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TreebankTokenizer {
    pub fn new() -> Self {
        let starting_quotes = vec![
            RewriteRule::new(r#"^""#, "``"),
            RewriteRule::new(r"(``)", " $1 "),
            RewriteRule::new(r#"([ (\[{<])("|'')"#, "$1 `` "),
        ];
        let punctuation = vec![
            RewriteRule::new(r#"([^.])(\.)([\])}>"']*)\s*$"#, "$1 $2$3 "),
            RewriteRule::new(r"([:,])([^\d])", " $1 $2"),
            RewriteRule::new(r"([:,])$", " $1 "),
            RewriteRule::new(r"\.\.\.", " ... "),
            RewriteRule::new(r"[;@#$%&]", " $0 "),
            RewriteRule::new(r"[?!]", " $0 "),
            RewriteRule::new(r"([^'])' ", "$1 ' "),
            RewriteRule::new(r"[\]\[(){}<>]", " $0 "),
            RewriteRule::new(r"--", " -- "),
        ];
        let ending_quotes = vec![
            RewriteRule::new(r#"""#, " '' "),
            RewriteRule::new(r"(\S)('')", "$1 $2 "),
            RewriteRule::new(r"([^' ])('[sS]|'[mM]|'[dD]|') ", "$1 $2 "),
            RewriteRule::new(r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "$1 $2 "),
        ];
        let contractions = vec![
            RewriteRule::new(r"(?i)\b(can)(not)\b", " $1 $2 "),
            RewriteRule::new(r"(?i)\b(d)('ye)\b", " $1 $2 "),
            RewriteRule::new(r"(?i)\b(gim)(me)\b", " $1 $2 "),
            RewriteRule::new(r"(?i)\b(gon)(na)\b", " $1 $2 "),
            RewriteRule::new(r"(?i)\b(got)(ta)\b", " $1 $2 "),
            RewriteRule::new(r"(?i)\b(lem)(me)\b", " $1 $2 "),
            RewriteRule::new(r"(?i)\b(more)('n)\b", " $1 $2 "),
            RewriteRule::new(r"(?i)\b(wan)(na)\s", " $1 $2 "),
        ];
        Self {
            sentence_end: Regex::new(r#"[.?!]+["')\]}]*\s+"#).expect("sentence pattern must compile"),
            abbreviations: ABBREVIATIONS.iter().copied().collect(),
            starting_quotes,
            punctuation,
            ending_quotes,
            contractions,
        }
    }

    /// Sentences of `text`, each keeping its terminal punctuation.
    pub fn sentences<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut sentences = Vec::new();
        let mut start = 0;
        for boundary in self.sentence_end.find_iter(text) {
            let starts_lowercase = text[boundary.end()..]
                .chars()
                .next()
                .map_or(true, char::is_lowercase);
            if starts_lowercase || self.ends_with_abbreviation(&text[start..boundary.end()]) {
                continue;
            }
            sentences.push(text[start..boundary.end()].trim());
            start = boundary.end();
        }
        sentences.push(text[start..].trim());
        sentences.retain(|sentence| !sentence.is_empty());
        sentences
    }

    fn ends_with_abbreviation(&self, sentence: &str) -> bool {
        let Some(word) = sentence.split_whitespace().last() else {
            return false;
        };
        let Some(stem) = word.strip_suffix('.') else {
            return false;
        };
        if stem.is_empty() || stem.ends_with('.') {
            return false;
        }
        let mut chars = stem.chars();
        let initial = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic());
        let acronym = stem.contains('.') && stem.split('.').all(|part| part.chars().count() == 1);
        initial || acronym || self.abbreviations.contains(stem.to_lowercase().as_str())
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.sentences(text)
            .into_iter()
            .flat_map(|sentence| self.tokenize_sentence(sentence))
            .collect()
    }

    fn tokenize_sentence(&self, sentence: &str) -> Vec<String> {
        let mut text = sentence.to_string();
        for rule in self.starting_quotes.iter().chain(&self.punctuation) {
            text = rule.apply(&text);
        }

        // Clitic rules anchor on a trailing space.
        text = format!(" {text} ");
        for rule in self.ending_quotes.iter().chain(&self.contractions) {
            text = rule.apply(&text);
        }

        text.split_whitespace().map(str::to_string).collect()
    }
}

/// Tokenizes with a process-wide [`TreebankTokenizer`].
pub fn treebank_tokenize(text: &str) -> Vec<String> {
    static TOKENIZER: OnceLock<TreebankTokenizer> = OnceLock::new();
    TOKENIZER.get_or_init(TreebankTokenizer::new).tokenize(text)
}
