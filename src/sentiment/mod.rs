//! Lexicon-based sentiment classification.
//!
//! This module maps free text to one of three sentiment labels via a compound
//! polarity score in [-1, 1]. Scoring is rule-based over a fixed valence
//! lexicon: negations flip a hit's polarity, booster words intensify or dampen
//! it, and trailing exclamation marks add emphasis. The classifier is a pure
//! function - no state, no learning, identical output for identical input.

pub mod lexicon;

use crate::constants::{
    BOOSTER_DECAY, BOOSTER_LOOKBACK, EXCLAMATION_EMPHASIS, MAX_EXCLAMATIONS, NEGATION_LOOKBACK,
    NEGATION_SCALAR, SCORE_NORMALIZATION_ALPHA, SENTIMENT_NEGATIVE_THRESHOLD,
    SENTIMENT_POSITIVE_THRESHOLD,
};

/// Sentiment label derived from entry text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }

    /// Parse from database string representation.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Positive" => Some(Sentiment::Positive),
            "Neutral" => Some(Sentiment::Neutral),
            "Negative" => Some(Sentiment::Negative),
            _ => None,
        }
    }

    /// Numeric score used by the trend aggregator.
    pub fn score(&self) -> i32 {
        match self {
            Sentiment::Positive => 1,
            Sentiment::Neutral => 0,
            Sentiment::Negative => -1,
        }
    }
}

/// Classifies text into a sentiment label.
///
/// Thresholds: compound score >= 0.05 is Positive, <= -0.05 is Negative,
/// anything in between is Neutral. Empty or blank text scores 0 and is
/// therefore Neutral.
///
/// # Examples
///
/// ```
/// use reverie::sentiment::{classify, Sentiment};
///
/// assert_eq!(classify("Today was amazing"), Sentiment::Positive);
/// assert_eq!(classify("I am terrible"), Sentiment::Negative);
/// assert_eq!(classify("The bus arrived at nine"), Sentiment::Neutral);
/// ```
pub fn classify(text: &str) -> Sentiment {
    let score = compound_score(text);
    if score >= SENTIMENT_POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else if score <= SENTIMENT_NEGATIVE_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Computes the compound polarity score of a text, in [-1, 1].
///
/// Each lexicon hit contributes its valence, adjusted by nearby modifiers:
/// boosters within two preceding words intensify or dampen it (decaying with
/// distance), and a negation within three preceding words flips and scales
/// it. The raw sum is emphasized by trailing exclamation marks and then
/// squashed into [-1, 1].
pub fn compound_score(text: &str) -> f64 {
    let tokens = tokenize(text);

    let mut sum = 0.0;
    for (i, token) in tokens.iter().enumerate() {
        let Some(mut valence) = lexicon::valence(token) else {
            continue;
        };

        // Boosters scale with the sign of the hit: "very sad" is sadder,
        // not less sad.
        for dist in 1..=BOOSTER_LOOKBACK {
            if dist > i {
                break;
            }
            if let Some(boost) = lexicon::booster(&tokens[i - dist]) {
                let mut adjustment = boost * valence.signum();
                if dist > 1 {
                    adjustment *= BOOSTER_DECAY;
                }
                valence += adjustment;
            }
        }

        let negated = (1..=NEGATION_LOOKBACK)
            .take_while(|dist| *dist <= i)
            .any(|dist| lexicon::is_negation(&tokens[i - dist]));
        if negated {
            valence *= NEGATION_SCALAR;
        }

        sum += valence;
    }

    if sum == 0.0 {
        return 0.0;
    }

    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    sum += exclamations as f64 * EXCLAMATION_EMPHASIS * sum.signum();

    normalize(sum)
}

/// Squashes a raw valence sum into [-1, 1].
fn normalize(sum: f64) -> f64 {
    let normalized = sum / (sum * sum + SCORE_NORMALIZATION_ALPHA).sqrt();
    normalized.clamp(-1.0, 1.0)
}

/// Lowercases and splits text into word tokens.
///
/// Apostrophes are kept so contractions like "don't" survive as single
/// tokens; all other punctuation becomes a word boundary.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|word| !word.is_empty())
        .map(|word| word.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_positive() {
        assert_eq!(classify("I am wonderful"), Sentiment::Positive);
        assert_eq!(
            classify("Today was amazing, I felt so grateful"),
            Sentiment::Positive
        );
    }

    #[test]
    fn test_classify_negative() {
        assert_eq!(classify("I am terrible"), Sentiment::Negative);
        assert_eq!(classify("Everything went wrong and I felt hopeless"), Sentiment::Negative);
    }

    #[test]
    fn test_classify_neutral_without_lexicon_hits() {
        assert_eq!(classify("The bus arrived at nine"), Sentiment::Neutral);
    }

    #[test]
    fn test_empty_text_is_neutral() {
        assert_eq!(compound_score(""), 0.0);
        assert_eq!(classify(""), Sentiment::Neutral);
        assert_eq!(classify("   \n\t"), Sentiment::Neutral);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let text = "Mixed feelings today, happy about work but worried about tomorrow";
        assert_eq!(classify(text), classify(text));
        assert_eq!(compound_score(text), compound_score(text));
    }

    #[test]
    fn test_negation_flips_polarity() {
        assert_eq!(classify("good"), Sentiment::Positive);
        assert_eq!(classify("not good"), Sentiment::Negative);
        assert_eq!(classify("I don't feel happy"), Sentiment::Negative);
    }

    #[test]
    fn test_negation_lookback_is_bounded() {
        // The negation sits four words before the hit, outside the window
        assert_eq!(
            classify("not that it matters, wonderful"),
            Sentiment::Positive
        );
    }

    #[test]
    fn test_booster_intensifies() {
        assert!(compound_score("very happy") > compound_score("happy"));
        assert!(compound_score("very sad") < compound_score("sad"));
    }

    #[test]
    fn test_dampener_softens() {
        assert!(compound_score("slightly happy") < compound_score("happy"));
        assert!(compound_score("slightly happy") > 0.0);
    }

    #[test]
    fn test_exclamation_adds_emphasis() {
        assert!(compound_score("great!") > compound_score("great"));
        // Emphasis saturates after three marks
        assert_eq!(
            compound_score("great!!!"),
            compound_score("great!!!!!!")
        );
    }

    #[test]
    fn test_exclamations_alone_do_not_create_sentiment() {
        assert_eq!(compound_score("the meeting ran long!!!"), 0.0);
    }

    #[test]
    fn test_score_stays_in_range() {
        let gushing = "amazing wonderful great awesome fantastic excellent \
                       beautiful thrilled joyful delighted love best!!!";
        let score = compound_score(gushing);
        assert!(score > 0.9 && score <= 1.0);

        let bleak = "terrible horrible miserable hopeless devastated worst \
                     awful heartbroken despair disaster";
        let score = compound_score(bleak);
        assert!(score < -0.9 && score >= -1.0);
    }

    #[test]
    fn test_tokenize_strips_punctuation_keeps_contractions() {
        assert_eq!(
            tokenize("Don't worry, be happy."),
            vec!["don't", "worry", "be", "happy"]
        );
    }

    #[test]
    fn test_sentiment_label_round_trip() {
        for sentiment in [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative] {
            assert_eq!(Sentiment::from_str(sentiment.as_str()), Some(sentiment));
        }
        assert_eq!(Sentiment::from_str("Ecstatic"), None);
    }

    #[test]
    fn test_sentiment_scores() {
        assert_eq!(Sentiment::Positive.score(), 1);
        assert_eq!(Sentiment::Neutral.score(), 0);
        assert_eq!(Sentiment::Negative.score(), -1);
    }
}
