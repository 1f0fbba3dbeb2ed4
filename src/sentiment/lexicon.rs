//! Fixed valence lexicon for sentiment scoring.
//!
//! Word valences follow the usual lexicon convention of roughly -4 (most
//! negative) to +4 (most positive). The table is small and fixed: it covers
//! the emotional vocabulary that shows up in journal writing, not general
//! English. Lookups are case-normalized by the tokenizer before they reach
//! this module.

/// Increment contributed by an intensifying booster ("very", "extremely").
const B_INCR: f64 = 0.293;
/// Decrement contributed by a dampening booster ("slightly", "somewhat").
const B_DECR: f64 = -0.293;

/// Word valences, sorted by word for binary search.
static VALENCES: &[(&str, f64)] = &[
    ("abandoned", -2.0),
    ("accomplished", 1.9),
    ("adore", 2.6),
    ("afraid", -2.0),
    ("alone", -1.0),
    ("amazing", 2.8),
    ("angry", -2.3),
    ("annoyed", -1.8),
    ("anxious", -1.9),
    ("appreciate", 1.9),
    ("ashamed", -2.1),
    ("awesome", 3.1),
    ("awful", -2.0),
    ("bad", -2.5),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("bitter", -1.8),
    ("blessed", 2.9),
    ("bored", -1.3),
    ("brave", 2.2),
    ("bright", 1.9),
    ("broken", -1.6),
    ("burden", -1.5),
    ("calm", 1.3),
    ("celebrate", 2.7),
    ("cheerful", 2.5),
    ("comfort", 1.5),
    ("confident", 2.2),
    ("content", 1.6),
    ("cry", -2.0),
    ("crying", -2.2),
    ("delighted", 2.9),
    ("depressed", -2.6),
    ("despair", -2.9),
    ("devastated", -3.1),
    ("disappointed", -2.1),
    ("disaster", -3.1),
    ("dread", -2.4),
    ("eager", 1.5),
    ("empty", -1.4),
    ("encouraged", 1.9),
    ("energized", 1.9),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("excellent", 3.2),
    ("excited", 2.4),
    ("exhausted", -1.9),
    ("fail", -2.3),
    ("failed", -2.3),
    ("failure", -2.6),
    ("fantastic", 2.6),
    ("fear", -2.2),
    ("free", 1.4),
    ("friend", 2.2),
    ("frustrated", -2.1),
    ("fun", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("gorgeous", 2.7),
    ("grateful", 2.3),
    ("gratitude", 2.2),
    ("great", 3.1),
    ("grief", -2.5),
    ("guilty", -2.2),
    ("happiness", 2.7),
    ("happy", 2.7),
    ("hate", -2.7),
    ("hated", -2.7),
    ("healthy", 1.7),
    ("heartbroken", -3.0),
    ("helpless", -2.2),
    ("hope", 1.9),
    ("hopeful", 2.3),
    ("hopeless", -2.8),
    ("horrible", -2.5),
    ("hurt", -2.0),
    ("insecure", -1.8),
    ("inspired", 2.3),
    ("joy", 2.8),
    ("joyful", 2.9),
    ("kind", 2.4),
    ("laugh", 2.6),
    ("laughed", 2.5),
    ("lonely", -2.2),
    ("lost", -1.3),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("lucky", 2.4),
    ("mad", -1.9),
    ("miserable", -2.8),
    ("motivated", 2.0),
    ("nervous", -1.6),
    ("optimistic", 2.4),
    ("overwhelmed", -1.7),
    ("pain", -2.3),
    ("painful", -2.4),
    ("panic", -2.4),
    ("pathetic", -2.4),
    ("peace", 2.5),
    ("peaceful", 2.4),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("pleased", 2.1),
    ("proud", 2.1),
    ("regret", -1.9),
    ("relaxed", 2.2),
    ("relief", 2.1),
    ("relieved", 2.1),
    ("rested", 1.5),
    ("sad", -2.1),
    ("safe", 1.8),
    ("satisfied", 2.0),
    ("scared", -2.2),
    ("sick", -1.7),
    ("smile", 2.0),
    ("smiled", 2.1),
    ("sorrow", -2.4),
    ("stress", -1.9),
    ("stressed", -2.0),
    ("strong", 2.3),
    ("struggle", -1.9),
    ("struggling", -1.9),
    ("stupid", -2.4),
    ("succeeded", 2.4),
    ("success", 2.7),
    ("sweet", 2.1),
    ("terrible", -2.1),
    ("terrified", -2.7),
    ("thankful", 2.4),
    ("thrilled", 3.0),
    ("tired", -1.2),
    ("ugly", -2.1),
    ("unhappy", -2.3),
    ("upset", -1.9),
    ("useless", -1.9),
    ("warm", 1.5),
    ("wonderful", 2.7),
    ("worried", -1.9),
    ("worry", -1.8),
    ("worse", -2.1),
    ("worst", -3.1),
    ("worthless", -2.7),
    ("wrong", -1.4),
];

/// Words that flip the polarity of a following lexicon hit.
static NEGATIONS: &[&str] = &[
    "ain't",
    "aren't",
    "can't",
    "cannot",
    "couldn't",
    "didn't",
    "doesn't",
    "don't",
    "hardly",
    "hasn't",
    "haven't",
    "isn't",
    "neither",
    "never",
    "no",
    "nobody",
    "none",
    "nor",
    "not",
    "nothing",
    "rarely",
    "shouldn't",
    "wasn't",
    "weren't",
    "without",
    "won't",
    "wouldn't",
];

/// Modifier words and the increment they contribute to a following lexicon
/// hit, sorted by word for binary search.
static BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", B_INCR),
    ("almost", B_DECR),
    ("barely", B_DECR),
    ("completely", B_INCR),
    ("deeply", B_INCR),
    ("especially", B_INCR),
    ("extremely", B_INCR),
    ("hugely", B_INCR),
    ("incredibly", B_INCR),
    ("kinda", B_DECR),
    ("little", B_DECR),
    ("marginally", B_DECR),
    ("partly", B_DECR),
    ("really", B_INCR),
    ("remarkably", B_INCR),
    ("slightly", B_DECR),
    ("so", B_INCR),
    ("somewhat", B_DECR),
    ("totally", B_INCR),
    ("truly", B_INCR),
    ("utterly", B_INCR),
    ("very", B_INCR),
];

/// Looks up the valence of a lowercased token.
pub fn valence(word: &str) -> Option<f64> {
    VALENCES
        .binary_search_by_key(&word, |(w, _)| w)
        .ok()
        .map(|idx| VALENCES[idx].1)
}

/// Returns true if the lowercased token negates what follows it.
pub fn is_negation(word: &str) -> bool {
    NEGATIONS.binary_search(&word).is_ok()
}

/// Looks up the booster increment of a lowercased token.
pub fn booster(word: &str) -> Option<f64> {
    BOOSTERS
        .binary_search_by_key(&word, |(w, _)| w)
        .ok()
        .map(|idx| BOOSTERS[idx].1)
}
