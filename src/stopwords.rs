// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Process-wide Portuguese stopword set.
//!
//! The set is built once per process into a `OnceLock` and shared by every
//! normalization call. `stopword_set()` is idempotent: calling it again (from
//! any thread, in any order) returns the same set; a racing second build
//! produces an identical value and is discarded, so no locking is needed.
//!
//! All entries are stored in **folded** form - lowercase, diacritics stripped -
//! because `normalize` folds tokens before the stopword check. "não" is listed
//! as "nao", "até" as "ate", and so on. A word that folds onto an existing
//! entry ("à" → "a", "têm" → "tem") appears only once.
//!
//! Two layers:
//! - the base Portuguese function-word list (articles, prepositions, pronouns,
//!   and the high-frequency forms of ser/estar/haver/ter);
//! - a small supplemental set of domain filler words that carry no signal in
//!   project descriptions, most importantly "projeto" itself.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Base Portuguese stopword list, folded and deduplicated.
const BASE: &[&str] = &[
    "a", "ao", "aos", "aquela", "aquelas", "aquele", "aqueles", "aquilo", "as", "ate", "com",
    "como", "da", "das", "de", "dela", "delas", "dele", "deles", "depois", "do", "dos", "e", "ela",
    "elas", "ele", "eles", "em", "entre", "era", "eram", "eramos", "essa", "essas", "esse",
    "esses", "esta", "estamos", "estao", "estar", "estas", "estava", "estavam", "estavamos",
    "este", "esteja", "estejam", "estejamos", "estes", "esteve", "estive", "estivemos", "estiver",
    "estivera", "estiveram", "estiveramos", "estiverem", "estivermos", "estivesse", "estivessem",
    "estivessemos", "estou", "eu", "foi", "fomos", "for", "fora", "foram", "foramos", "forem",
    "formos", "fosse", "fossem", "fossemos", "fui", "ha", "haja", "hajam", "hajamos", "hao",
    "havemos", "hei", "houve", "houvemos", "houver", "houvera", "houveram", "houveramos",
    "houverao", "houverei", "houverem", "houveremos", "houveria", "houveriam", "houveriamos",
    "houvermos", "houvesse", "houvessem", "houvessemos", "isso", "isto", "ja", "lhe", "lhes",
    "mais", "mas", "me", "mesmo", "meu", "meus", "minha", "minhas", "muito", "na", "nao", "nas",
    "nem", "no", "nos", "nossa", "nossas", "nosso", "nossos", "num", "numa", "o", "os", "ou",
    "para", "pela", "pelas", "pelo", "pelos", "por", "qual", "quando", "que", "quem", "sao", "se",
    "seja", "sejam", "sejamos", "sem", "sera", "serao", "serei", "seremos", "seria", "seriam",
    "seriamos", "seu", "seus", "so", "somos", "sou", "sua", "suas", "tambem", "te", "tem",
    "temos", "tenha", "tenham", "tenhamos", "tenho", "tera", "terao", "terei", "teremos", "teria",
    "teriam", "teriamos", "teu", "teus", "teve", "tinha", "tinham", "tinhamos", "tive", "tivemos",
    "tiver", "tivera", "tiveram", "tiveramos", "tiverem", "tivermos", "tivesse", "tivessem",
    "tivessemos", "tu", "tua", "tuas", "um", "uma", "voce", "voces", "vos",
];

/// Domain filler words: generic in project descriptions, so they only add
/// noise to token-set overlap. "projeto" matching "projeto" tells you nothing.
const SUPPLEMENTAL: &[&str] = &["projeto", "projetos", "sobre"];

static STOPWORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// The process-wide stopword set (base + supplemental), built on first use.
///
/// Idempotent: safe to call repeatedly and from multiple threads.
pub fn stopword_set() -> &'static HashSet<&'static str> {
    STOPWORDS.get_or_init(|| BASE.iter().chain(SUPPLEMENTAL).copied().collect())
}

/// Is this (already folded, lowercase) token a stopword?
#[inline]
pub fn is_stopword(token: &str) -> bool {
    stopword_set().contains(token)
}
