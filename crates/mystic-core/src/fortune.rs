//! The fortune table.
//!
//! Twenty classic answers, ten affirmative, five non-committal, and five
//! negative, in that order.

use rand::Rng;

/// Every answer the orb can give, in table order.
pub const FORTUNES: [&str; 20] = [
    "It is certain",
    "It is decidedly so",
    "Without a doubt",
    "Yes definitely",
    "You may rely on it",
    "As I see it, yes",
    "Most likely",
    "Outlook good",
    "Yes",
    "Signs point to yes",
    "Reply hazy, try again",
    "Ask again later",
    "Better not tell you now",
    "Cannot predict now",
    "Concentrate and ask again",
    "Don't count on it",
    "My reply is no",
    "My sources say no",
    "Outlook not so good",
    "Very doubtful",
];

/// The general tone of a fortune.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    /// An affirmative answer.
    Positive,
    /// A non-committal answer.
    Neutral,
    /// A negative answer.
    Negative,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Neutral => write!(f, "neutral"),
            Self::Negative => write!(f, "negative"),
        }
    }
}

impl Sentiment {
    /// Sentiment of the fortune at `index` in [`FORTUNES`].
    pub fn of_index(index: usize) -> Sentiment {
        match index {
            0..=9 => Sentiment::Positive,
            10..=14 => Sentiment::Neutral,
            _ => Sentiment::Negative,
        }
    }

    /// Sentiment of a fortune by its text, if it is in the table.
    pub fn of(fortune: &str) -> Option<Sentiment> {
        index_of(fortune).map(Sentiment::of_index)
    }
}

/// Pick a fortune uniformly at random. Returns its index and text.
pub fn random_fortune<R: Rng + ?Sized>(rng: &mut R) -> (usize, &'static str) {
    let index = rng.random_range(0..FORTUNES.len());
    (index, FORTUNES[index])
}

/// Position of `text` in the table.
pub fn index_of(text: &str) -> Option<usize> {
    FORTUNES.iter().position(|f| *f == text)
}
