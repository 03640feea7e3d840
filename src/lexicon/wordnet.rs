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

//! # WordNet Reader
//!
//! Loads the synsets of a WordNet 3.0 `dict` directory into memory and answers
//! lemma lookups with WordNet's own morphological reduction.
//!
//! ## Files
//!
//! - `data.noun`, `data.verb`, `data.adj`, `data.adv` (required): one synset per
//!   line, `offset lex_filenum ss_type w_cnt word lex_id [word lex_id ...] ...`
//!   with `w_cnt` in hexadecimal. Lines starting with a space are the license
//!   header.
//! - `noun.exc`, `verb.exc`, `adj.exc`, `adv.exc` (optional): irregular forms,
//!   `inflected base [base ...]`.
//!
//! ## Lookup
//!
//! A query is lowercased and spaces become `_`. For each part of speech the
//! candidate base forms are the query plus either its exception-list bases or
//! every suffix substitution that applies (`dogs` -> `dog`, `boxes` -> `box`,
//! `running` -> `runn`, `run`). Candidates that are not lemmas of that part of
//! speech are discarded, and every synset of the survivors contributes all of
//! its lemma names.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::errors::{EdaError, Result};
use crate::lexicon::Lexicon;

/// The four WordNet parts of speech. Satellite adjectives are folded into
/// [`PartOfSpeech::Adjective`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    /// Lookup order for [`WordNet::lemmas_of`].
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    /// File name stem, as in `data.<stem>` and `<stem>.exc`.
    pub fn file_stem(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adj",
            PartOfSpeech::Adverb => "adv",
        }
    }

    /// Parses the `ss_type` column of a data file.
    pub fn from_synset_type(code: &str) -> Option<Self> {
        match code {
            "n" => Some(PartOfSpeech::Noun),
            "v" => Some(PartOfSpeech::Verb),
            "a" | "s" => Some(PartOfSpeech::Adjective),
            "r" => Some(PartOfSpeech::Adverb),
            _ => None,
        }
    }

    /// Detachment rules `(suffix, replacement)` for regular inflections.
    /// One pass of suffix substitutions over `forms`, without duplicates.
    fn reduce(&self, forms: &[String]) -> Vec<String> {
        let mut seen = HashSet::new();
        forms
            .iter()
            .flat_map(|form| {
                self.substitutions().iter().filter_map(move |(suffix, replacement)| {
                    form.strip_suffix(suffix).map(|stem| format!("{stem}{replacement}"))
                })
            })
            .filter(|reduced| !reduced.is_empty() && seen.insert(reduced.clone()))
            .collect()
    }

    fn substitutions(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            PartOfSpeech::Noun => &[
                ("s", ""),
                ("ses", "s"),
                ("ves", "f"),
                ("xes", "x"),
                ("zes", "z"),
                ("ches", "ch"),
                ("shes", "sh"),
                ("men", "man"),
                ("ies", "y"),
            ],
            PartOfSpeech::Verb => &[
                ("s", ""),
                ("ies", "y"),
                ("es", "e"),
                ("es", ""),
                ("ed", "e"),
                ("ed", ""),
                ("ing", "e"),
                ("ing", ""),
            ],
            PartOfSpeech::Adjective => &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")],
            PartOfSpeech::Adverb => &[],
        }
    }
}

/// In-memory WordNet database.
#[derive(Debug, Default)]
pub struct WordNet {
    synsets: Vec<Vec<String>>,
    index: HashMap<PartOfSpeech, HashMap<String, Vec<usize>>>,
    exceptions: HashMap<PartOfSpeech, HashMap<String, Vec<String>>>,
}

impl WordNet {
    /// Loads every data file (and exception list, when present) under `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut wordnet = WordNet::default();

        for pos in PartOfSpeech::ALL {
            let data_path = dir.join(format!("data.{}", pos.file_stem()));
            let file = File::open(&data_path).map_err(|err| {
                EdaError::lexicon(data_path.display().to_string(), err.to_string())
            })?;
            let name = data_path.display().to_string();
            wordnet.load_data(&name, BufReader::new(file))?;

            let exc_path = dir.join(format!("{}.exc", pos.file_stem()));
            if exc_path.is_file() {
                let file = File::open(&exc_path)?;
                wordnet.load_exceptions(pos, BufReader::new(file))?;
            } else {
                debug!("no exception list at {}", exc_path.display());
            }
        }

        info!(
            "loaded WordNet from {} ({} synsets)",
            dir.display(),
            wordnet.synset_count()
        );
        Ok(wordnet)
    }

    /// Parses one `data.*` file. `name` is only used in error messages.
    pub fn load_data<R: BufRead>(&mut self, name: &str, reader: R) -> Result<()> {
        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            if line.is_empty() || line.starts_with(' ') {
                continue;
            }
            let (pos, lemmas) = parse_synset_line(&line)
                .map_err(|message| EdaError::lexicon(name, format!("line {}: {message}", line_no + 1)))?;
            self.add_synset(pos, lemmas);
        }
        Ok(())
    }

    /// Parses one `*.exc` file for `pos`.
    pub fn load_exceptions<R: BufRead>(&mut self, pos: PartOfSpeech, reader: R) -> Result<()> {
        let table = self.exceptions.entry(pos).or_default();
        for line in reader.lines() {
            let line = line?;
            let mut fields = line.split_whitespace();
            let Some(inflected) = fields.next() else {
                continue;
            };
            let bases: Vec<String> = fields.map(str::to_string).collect();
            if !bases.is_empty() {
                table.entry(inflected.to_string()).or_default().extend(bases);
            }
        }
        Ok(())
    }

    pub fn add_synset(&mut self, pos: PartOfSpeech, lemmas: Vec<String>) {
        let idx = self.synsets.len();
        let by_lemma = self.index.entry(pos).or_default();
        for lemma in &lemmas {
            let slots = by_lemma.entry(lemma.to_lowercase()).or_default();
            if !slots.contains(&idx) {
                slots.push(idx);
            }
        }
        self.synsets.push(lemmas);
    }

    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    fn is_lemma(&self, form: &str, pos: PartOfSpeech) -> bool {
        self.index
            .get(&pos)
            .is_some_and(|by_lemma| by_lemma.contains_key(form))
    }

    /// Base forms of `form` that are lemmas of `pos`, query first.
    ///
    /// An exception list entry is final. Otherwise the suffix rules are applied
    /// to the previous pass's forms until some pass yields a known lemma or no
    /// rule applies any more.
    pub fn morphy(&self, form: &str, pos: PartOfSpeech) -> Vec<String> {
        if let Some(bases) = self.exceptions.get(&pos).and_then(|table| table.get(form)) {
            let candidates = std::iter::once(form.to_string()).chain(bases.iter().cloned());
            return self.known_lemmas(candidates, pos);
        }

        let mut forms = pos.reduce(&[form.to_string()]);
        let found = self.known_lemmas(std::iter::once(form.to_string()).chain(forms.iter().cloned()), pos);
        if !found.is_empty() {
            return found;
        }
        while !forms.is_empty() {
            forms = pos.reduce(&forms);
            let found = self.known_lemmas(forms.iter().cloned(), pos);
            if !found.is_empty() {
                return found;
            }
        }
        Vec::new()
    }

    fn known_lemmas(&self, candidates: impl Iterator<Item = String>, pos: PartOfSpeech) -> Vec<String> {
        let mut seen = HashSet::new();
        candidates
            .filter(|candidate| self.is_lemma(candidate, pos))
            .filter(|candidate| seen.insert(candidate.clone()))
            .collect()
    }
}

impl Lexicon for WordNet {
    fn lemmas_of(&self, word: &str) -> Vec<String> {
        let form = word.trim().to_lowercase().replace(' ', "_");
        if form.is_empty() {
            return Vec::new();
        }

        let mut seen = HashSet::new();
        let mut lemmas = Vec::new();
        for pos in PartOfSpeech::ALL {
            let Some(by_lemma) = self.index.get(&pos) else {
                continue;
            };
            for base in self.morphy(&form, pos) {
                for &idx in by_lemma.get(&base).into_iter().flatten() {
                    if seen.insert(idx) {
                        lemmas.extend(self.synsets[idx].iter().cloned());
                    }
                }
            }
        }
        lemmas
    }
}

fn parse_synset_line(line: &str) -> std::result::Result<(PartOfSpeech, Vec<String>), String> {
    let mut fields = line.split_whitespace();
    let _offset = fields.next().ok_or("missing synset offset")?;
    let _lex_filenum = fields.next().ok_or("missing lexicographer file number")?;
    let ss_type = fields.next().ok_or("missing synset type")?;
    let pos = PartOfSpeech::from_synset_type(ss_type)
        .ok_or_else(|| format!("unknown synset type '{ss_type}'"))?;
    let w_cnt = fields.next().ok_or("missing word count")?;
    let w_cnt = usize::from_str_radix(w_cnt, 16)
        .map_err(|_| format!("word count '{w_cnt}' is not hexadecimal"))?;

    let mut lemmas = Vec::with_capacity(w_cnt);
    for _ in 0..w_cnt {
        let word = fields.next().ok_or("word list shorter than word count")?;
        let _lex_id = fields.next().ok_or("word without lex_id")?;
        lemmas.push(strip_adjective_marker(word).to_string());
    }
    Ok((pos, lemmas))
}

/// Drops the syntactic marker WordNet appends to some adjectives.
fn strip_adjective_marker(word: &str) -> &str {
    for marker in ["(a)", "(p)", "(ip)"] {
        if let Some(stripped) = word.strip_suffix(marker) {
            return stripped;
        }
    }
    word
}
