/// Corpus data and tokenization.
///
/// The builtin corpus is the fortune-cookie source text compiled into
/// the crate; user corpora come in as plain text, one sentence per
/// line. Tokenization is whitespace splitting plus the word-length
/// truncation rule — everything downstream of it works on word slices.

/// The builtin fortune corpus, one sentence per entry.
pub const BUILTIN: &[&str] = &[
    // Life and wisdom
    "Life is a series of surprises waiting to be discovered",
    "The best way to predict the future is to create it",
    "A journey of a thousand miles begins with a single step",
    "Wisdom comes from experience, experience comes from mistakes",
    "Every cloud has a silver lining, patience reveals it",
    "The greatest adventure is the one that lies ahead",
    "Time is the wisest counselor of all",
    "Fortune favors the bold and the prepared mind",
    // Success and opportunity
    "Success is not final, failure is not fatal",
    "Opportunities multiply as they are seized",
    "Your potential is limited only by your imagination",
    "The harder you work, the luckier you get",
    "Small steps lead to big achievements",
    "Today's preparation determines tomorrow's success",
    "The best time to plant a tree was 20 years ago, the second best time is now",
    "Success comes to those who dare to begin",
    // Happiness and well-being
    "Happiness is found when you stop comparing yourself to other people",
    "The greatest happiness comes from the smallest acts of kindness",
    "Your smile will be your umbrella for life's rain",
    "Joy is not in things, it is in us",
    "The secret of happiness is not in doing what one likes, but in liking what one does",
    "A merry heart is better than a full purse",
    "Happiness is a choice that requires effort at times",
    // Relationships and love
    "Love all, trust a few, do wrong to none",
    "The heart that gives, gathers",
    "A kind word will keep someone warm for years",
    "True friendship is a plant of slow growth",
    "The greatest gift is the gift of understanding",
    "To have a friend, be a friend",
    "Love is not about possession, it's about appreciation",
    // Personal growth
    "Your mind is your greatest asset, invest in it daily",
    "Change is inevitable, growth is optional",
    "The only person you should try to be better than is who you were yesterday",
    "Learning is a treasure that will follow its owner everywhere",
    "The best teacher is experience, the worst teacher is regret",
    "Your future is created by what you do today, not tomorrow",
    // Courage and perseverance
    "Courage is not the absence of fear, but the triumph over it",
    "Fall seven times, stand up eight",
    "The greatest glory in living lies not in never falling, but in rising every time we fall",
    "Persistence guarantees that results are inevitable",
    "The difference between try and triumph is just a little umph",
    // Peace and balance
    "Peace comes from within, do not seek it without",
    "Balance is not something you find, it's something you create",
    "Tranquility is found in doing what is right",
    "Inner peace is the key to outer harmony",
    "Silence is a source of great strength",
    // Action and initiative
    "Actions speak louder than words, but not nearly as often",
    "The early bird gets the worm, but the second mouse gets the cheese",
    "Don't wait for opportunity, create it",
    "The best time to take action is now",
    "Tomorrow is often the busiest day of the week",
    // Dreams and aspirations
    "Your dreams are the blueprints of your destiny",
    "Shoot for the moon, even if you miss, you'll land among the stars",
    "Dream big and dare to fail",
    "Your aspirations are your possibilities",
    "The future belongs to those who believe in the beauty of their dreams",
    // Wisdom and knowledge
    "Knowledge speaks, but wisdom listens",
    "The only true wisdom is in knowing you know nothing",
    "Education is not preparation for life; education is life itself",
    "The more you know, the more you realize you don't know",
    "Wisdom is not a product of schooling but of the lifelong attempt to acquire it",
    // Change and adaptation
    "Change is the only constant in life",
    "Adapt or perish, now as ever, is nature's inexorable imperative",
    "The secret of change is to focus all of your energy not on fighting the old, but on building the new",
    "Life is change, growth is optional, choose wisely",
    // Patience and timing
    "Patience is bitter, but its fruit is sweet",
    "Good things come to those who wait, but better things come to those who work for it",
    "Time is the most valuable thing a man can spend",
    "The two most powerful warriors are patience and time",
    // Prosperity and abundance
    "Your prosperity will grow with your generosity",
    "Wealth is not about having a lot of money, it's about having a lot of options",
    "The greatest wealth is contentment with little",
    "True abundance is not about material possessions",
    // Direction and purpose
    "The journey is the reward",
    "Not all who wander are lost",
    "Life is not about finding yourself, it's about creating yourself",
    "Your path is not for others to understand",
    // Mindfulness and the present moment
    "Yesterday is history, tomorrow is a mystery, today is a gift",
    "The present moment is the only moment available to us",
    "Life is available only in the present moment",
    "Now is the only time we have",
    // Creativity and innovation
    "Creativity is intelligence having fun",
    "Innovation distinguishes between a leader and a follower",
    "The only limit to our realization of tomorrow will be our doubts of today",
    "Imagination is more important than knowledge",
];

/// Split a sentence into words on whitespace, truncating each word at
/// its `max_word_len`-th character.
///
/// Truncation is a plain prefix cut at a character boundary: the same
/// input always yields the same tokens, and a word cut short still
/// deduplicates consistently against other occurrences of itself.
pub fn tokenize(line: &str, max_word_len: usize) -> Vec<&str> {
    line.split_whitespace()
        .map(|word| truncate(word, max_word_len))
        .collect()
}

fn truncate(word: &str, max_chars: usize) -> &str {
    match word.char_indices().nth(max_chars) {
        Some((idx, _)) => &word[..idx],
        None => word,
    }
}

/// Parse a plain-text corpus: one sentence per line. Blank lines and
/// lines starting with `#` are skipped.
pub fn parse_text(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_on_whitespace() {
        let words = tokenize("Actions speak  louder\tthan words", 15);
        assert_eq!(words, vec!["Actions", "speak", "louder", "than", "words"]);
    }

    #[test]
    fn tokenize_truncates_long_words() {
        let words = tokenize("incomprehensibilities are rare", 12);
        assert_eq!(words, vec!["incomprehens", "are", "rare"]);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        // Multibyte characters: the cut lands on a boundary, never mid-byte.
        assert_eq!(truncate("déjà-vu", 4), "déjà");
        assert_eq!(truncate("日本語です", 2), "日本");
    }

    #[test]
    fn truncated_words_deduplicate_together() {
        let a = tokenize("understanding", 10);
        let b = tokenize("understandably", 10);
        assert_eq!(a, b);
    }

    #[test]
    fn parse_text_skips_blanks_and_comments() {
        let text = "# fortunes\n\nthe cat sat\n  \nthe cat ran\n";
        assert_eq!(parse_text(text), vec!["the cat sat", "the cat ran"]);
    }

    #[test]
    fn builtin_corpus_is_multi_word() {
        assert!(BUILTIN.len() > 50);
        for line in BUILTIN {
            assert!(tokenize(line, 15).len() >= 2, "too short: {}", line);
        }
    }
}
