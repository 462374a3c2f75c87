//! Multilingual catalog of user-message phrasings.
//!
//! Every template carries exactly one `{letter}` and one `{word}` placeholder.
//! The catalog order is fixed; sampling indexes into it, so reordering or
//! inserting entries changes which phrasing a given seed produces.

use serde::{Deserialize, Serialize};

/// Natural language of a template
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    English,
    Spanish,
    Chinese,
    Korean,
    French,
    German,
    Japanese,
}

/// A parameterized user-message phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// Phrase with `{letter}` and `{word}` placeholders
    pub text: &'static str,
    /// Language of the phrase
    pub locale: Locale,
}

impl Template {
    const fn new(text: &'static str, locale: Locale) -> Self {
        Self { text, locale }
    }

    /// Substitute both placeholders
    #[must_use]
    pub fn fill(&self, letter: &str, word: &str) -> String {
        fill(self.text, letter, word)
    }
}

/// Substitute `{letter}` and `{word}` in an arbitrary phrase
pub(crate) fn fill(text: &str, letter: &str, word: &str) -> String {
    text.replace("{letter}", letter).replace("{word}", word)
}

use Locale::{Chinese, English, French, German, Japanese, Korean, Spanish};

/// The full template catalog
pub const TEMPLATES: &[Template] = &[
    Template::new("How many {letter} are in the word {word}", English),
    Template::new("How many {letter} are in {word}", English),
    Template::new("Count the number of {letter} in {word}", English),
    Template::new("How many times does {letter} appear in {word}", English),
    Template::new("What's the count of {letter} in {word}", English),
    Template::new("In the word {word}, how many {letter} are there", English),
    Template::new("How many letter {letter} are in the word {word}", English),
    Template::new("Count how many {letter} appear in {word}", English),
    Template::new("Tell me the number of {letter} in {word}", English),
    Template::new("How many occurrences of {letter} are in {word}", English),
    Template::new("Find the count of {letter} in {word}", English),
    Template::new("Can you count the {letter} letters in {word}", English),
    Template::new("What is the frequency of {letter} in {word}", English),
    Template::new("How many {letter}s are in {word}", English),
    Template::new("How many {letter}'s are in {word}", English),
    Template::new("Count all the {letter} in {word}", English),
    Template::new("How many times is {letter} in {word}", English),
    Template::new("Number of {letter} in {word}", English),
    Template::new("Total count of {letter} in {word}", English),
    Template::new("How many {letter} does {word} have", English),
    Template::new("How many {letter} does {word} contain", English),
    Template::new("What's the number of {letter} in {word}", English),
    Template::new("{word} has how many {letter}", English),
    Template::new("In {word}, count the {letter}", English),
    Template::new("How many {letter} appear in {word}", English),
    Template::new("Count the {letter} in {word}", English),
    Template::new("Give me the count of {letter} in {word}", English),
    Template::new("How many instances of {letter} in {word}", English),
    Template::new("Show me how many {letter} are in {word}", English),
    Template::new("Calculate the number of {letter} in {word}", English),
    Template::new("¿Cuántas {letter} hay en {word}?", Spanish),
    Template::new("¿Cuántas veces aparece {letter} en {word}?", Spanish),
    Template::new("Cuenta las {letter} en {word}", Spanish),
    Template::new("¿Cuántas letras {letter} tiene {word}?", Spanish),
    Template::new("{word}中有多少个{letter}", Chinese),
    Template::new("{word}里有几个{letter}", Chinese),
    Template::new("数一下{word}中的{letter}", Chinese),
    Template::new("{word}这个词里有多少{letter}", Chinese),
    Template::new("{word}에 {letter}가 몇 개 있나요", Korean),
    Template::new("{word}에서 {letter}의 개수는", Korean),
    Template::new("{word}에 {letter}가 몇 번 나오나요", Korean),
    Template::new("{word}라는 단어에 {letter}가 몇 개", Korean),
    Template::new("Combien de {letter} dans {word}", French),
    Template::new("Combien de fois {letter} apparaît dans {word}", French),
    Template::new("Compte les {letter} dans {word}", French),
    Template::new("Wie viele {letter} sind in {word}", German),
    Template::new("Wie oft kommt {letter} in {word} vor", German),
    Template::new("Zähle die {letter} in {word}", German),
    Template::new("{word}に{letter}は何個ありますか", Japanese),
    Template::new("{word}の中に{letter}がいくつ", Japanese),
    Template::new("{word}に{letter}が何回出てくる", Japanese),
];
