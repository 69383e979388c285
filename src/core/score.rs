// src/core/score.rs
use crate::config::consts::*;

/// Ordered keyword list used for relevance scoring.
/// Keywords are lowercased on construction so matching is case-insensitive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordSet {
    words: Vec<String>,
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().copied())
    }
}

impl KeywordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Total non-overlapping substring hits of every keyword in `lowered`.
    /// A keyword nested in a longer one ("ball" in "football") counts again.
    pub fn count_hits(&self, lowered: &str) -> usize {
        self.words.iter().map(|w| lowered.matches(w.as_str()).count()).sum()
    }
}

/// Relevance score in `[0, 10]`, one decimal.
///
/// Text shorter than the scorable minimum gets 0. Anything longer is floored
/// at 1 even with no keyword hits, then gets length bonuses at 50 and 100 words.
pub fn score(text: &str, keywords: &KeywordSet) -> f64 {
    if text.is_empty() || text.chars().count() < MIN_SCORABLE_CHARS {
        return 0.0;
    }

    let hits = keywords.count_hits(&text.to_lowercase());
    let word_count = text.split_whitespace().count();
    if word_count == 0 {
        return 0.0;
    }

    let density = hits as f64 / word_count as f64 * 100.0;
    let mut score = (density * DENSITY_WEIGHT).clamp(MIN_SCORE, MAX_SCORE);

    if word_count >= LONG_TEXT_WORDS {
        score = (score + LONG_TEXT_BONUS).min(MAX_SCORE);
    }
    if word_count >= VERY_LONG_TEXT_WORDS {
        score = (score + VERY_LONG_TEXT_BONUS).min(MAX_SCORE);
    }

    round1(score)
}

/// One decimal, exact ties to even (5.25 -> 5.2, 8.25 -> 8.2).
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw() -> KeywordSet {
        KeywordSet::new(["goal", "league"])
    }

    /// `n` filler words with `hits` of them replaced by "goal".
    fn text(n: usize, hits: usize) -> String {
        (0..n)
            .map(|i| if i < hits { "goal" } else { "word" })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn short_text_scores_zero() {
        assert_eq!(score("", &kw()), 0.0);
        assert_eq!(score("goal goal goal", &kw()), 0.0);
        assert_eq!(score(&"g".repeat(19), &kw()), 0.0);
    }

    #[test]
    fn whitespace_only_text_scores_zero() {
        assert_eq!(score(&" ".repeat(40), &kw()), 0.0);
    }

    #[test]
    fn no_hits_floor_is_one() {
        assert_eq!(score(&"x".repeat(25), &kw()), 1.0);
        assert_eq!(score(&text(20, 0), &kw()), 1.0);
    }

    #[test]
    fn twenty_words_two_hits_saturates() {
        // 20 words, "goal" once and the 6-char "league" once:
        // 2 / 20 * 100 = 10, * 3 = 30, clamped to 10, no bonus.
        let mut words = vec!["word"; 18];
        words.insert(3, "goal");
        words.insert(11, "league");
        let t = words.join(" ");
        assert_eq!(t.split_whitespace().count(), 20);
        assert_eq!(score(&t, &kw()), 10.0);
    }

    #[test]
    fn fifty_word_bonus() {
        // 1 / 60 * 100 * 3 = 5.0, + 1
        assert_eq!(score(&text(60, 1), &kw()), 6.0);
        // 1 / 70 * 100 * 3 = 4.2857.., + 1 -> 5.3
        assert_eq!(score(&text(70, 1), &kw()), 5.3);
    }

    #[test]
    fn bonuses_are_cumulative() {
        assert_eq!(score(&text(100, 0), &kw()), 2.5);
        // 1 / 200 * 100 * 3 = 1.5, + 1 + 0.5
        assert_eq!(score(&text(200, 1), &kw()), 3.0);
    }

    #[test]
    fn exact_ties_round_to_even() {
        // 2 / 160 * 100 * 3 = 3.75, + 1 + 0.5 = 5.25
        assert_eq!(score(&text(160, 2), &kw()), 5.2);
        // 9 / 400 * 100 * 3 = 6.75, + 1.5 = 8.25
        assert_eq!(score(&text(400, 9), &kw()), 8.2);
        assert_eq!(round1(0.25), 0.2);
        assert_eq!(round1(7.75), 7.8);
    }

    #[test]
    fn bonus_never_exceeds_max() {
        assert_eq!(score(&text(120, 60), &kw()), 10.0);
    }

    #[test]
    fn counts_every_occurrence_case_insensitively() {
        // 40 words, 1 hit: 7.5; 2 hits: 15 -> 10
        assert_eq!(score(&text(40, 1), &kw()), 7.5);
        let upper = text(40, 1).replacen("goal", "GOAL", 1);
        assert_eq!(score(&upper, &kw()), 7.5);
        assert_eq!(score(&text(40, 2), &kw()), 10.0);
    }

    #[test]
    fn substring_counting_overcounts_nested_keywords() {
        let k = KeywordSet::new(["ball", "football"]);
        assert_eq!(k.count_hits("football and handball"), 3);
    }

    #[test]
    fn arabic_keywords_match() {
        let k = KeywordSet::default();
        let t = "سجل اللاعب هدف الفوز في المباراة النهائية لكأس العالم لكرة القدم";
        // Prefixed forms still hit: "لكرة القدم" counts for both "كرة القدم" and "كرة".
        assert!(k.count_hits(t) >= 5);
        assert_eq!(score(t, &k), 10.0);
    }

    #[test]
    fn monotonic_in_hits_for_fixed_word_count() {
        let k = kw();
        let mut last = 0.0;
        for hits in 0..=60 {
            let s = score(&text(60, hits), &k);
            assert!(s >= last, "{hits} hits gave {s} < {last}");
            last = s;
        }
    }

    #[test]
    fn always_bounded_and_one_decimal() {
        let k = kw();
        let samples = [
            s!(),
            s!("goal"),
            text(20, 3),
            text(55, 0),
            text(333, 7),
            "goal".repeat(300),
            s!("\n\t goal league  \n"),
        ];
        for t in &samples {
            let v = score(t, &k);
            assert!((0.0..=10.0).contains(&v), "{v}");
            assert_eq!(round1(v), v);
        }
    }

    #[test]
    fn empty_keyword_entries_are_dropped() {
        let k = KeywordSet::new(["", "  ", "Goal"]);
        assert_eq!(k.as_slice(), ["goal"]);
        assert_eq!(k.len(), 1);
    }
}
