// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
pub const REQUEST_PAUSE_MS: u64 = 1_000;

// Paragraph filter, both bounds exclusive (chars)
pub const MIN_PARAGRAPH_CHARS: usize = 80;
pub const MAX_PARAGRAPH_CHARS: usize = 1_000;

// Scoring
pub const MIN_SCORABLE_CHARS: usize = 20;
pub const MAX_SCORE: f64 = 10.0;
pub const MIN_SCORE: f64 = 1.0;
pub const DENSITY_WEIGHT: f64 = 3.0;
pub const LONG_TEXT_WORDS: usize = 50;
pub const LONG_TEXT_BONUS: f64 = 1.0;
pub const VERY_LONG_TEXT_WORDS: usize = 100;
pub const VERY_LONG_TEXT_BONUS: f64 = 0.5;

/// Arabic sports vocabulary. Matched as substrings, so "كرة القدم" also
/// counts towards "كرة".
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "كرة القدم", "كرة", "فريق", "لاعب", "مباراة", "هدف", "رياضة", "دوري",
    "بطولة", "كأس", "نهائي", "فوز", "هزيمة", "تعادل", "ملعب", "مدرب",
    "لاعبين", "منتخب", "دولي", "عالمي", "محلي", "بطل", "بطالة", "رياضي",
];

// Report config
pub const PREVIEW_ROWS: usize = 10;
pub const PREVIEW_CHARS: usize = 250;

// Export config
pub const DEFAULT_OUT_DIR: &str = ".";
pub const DEFAULT_PREFIX: &str = "wikipedia_sports_dataset";
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
pub const HEADERS: [&str; 2] = ["Text", "Score"];
