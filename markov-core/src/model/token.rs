use std::fmt;

/// Characters that close a sentence when they end a word.
pub const END_PUNCTUATION: [char; 3] = ['.', '?', '!'];

/// A single element of the tokenized corpus.
///
/// `End` marks the end of the corpus: it is appended once after the last
/// word and is never equal to any real word (the text `"END"` is a `Word`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
	Word(String),
	End,
}

impl Token {
	/// Returns the word, or `None` for the sentinel.
	pub fn as_word(&self) -> Option<&str> {
		match self {
			Token::Word(word) => Some(word),
			Token::End => None,
		}
	}

	/// Whether this token is a word starting with an uppercase letter.
	pub fn starts_uppercase(&self) -> bool {
		self.as_word()
			.and_then(|word| word.chars().next())
			.is_some_and(char::is_uppercase)
	}

	/// Whether this token is a word ending in `.`, `?` or `!`.
	pub fn ends_sentence(&self) -> bool {
		self.as_word()
			.and_then(|word| word.chars().last())
			.is_some_and(|c| END_PUNCTUATION.contains(&c))
	}
}

impl From<&str> for Token {
	fn from(word: &str) -> Self {
		Token::Word(word.to_owned())
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Token::Word(word) => f.write_str(word),
			Token::End => f.write_str("<END>"),
		}
	}
}

/// An ordered tuple of `size` consecutive tokens.
///
/// Keys stored in a `ChainModel` only hold words. While walking, sliding
/// the window may produce a key whose last element is `End`, which is a
/// terminal state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NGram(Vec<Token>);

impl NGram {
	pub fn new(tokens: Vec<Token>) -> Self {
		Self(tokens)
	}

	/// Builds a key made only of words.
	///
	/// Example: `NGram::from_words(&["hi", "there"])`
	pub fn from_words(words: &[&str]) -> Self {
		Self(words.iter().map(|w| Token::from(*w)).collect())
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn tokens(&self) -> &[Token] {
		&self.0
	}

	pub fn first(&self) -> Option<&Token> {
		self.0.first()
	}

	/// Whether the window has run past the last word of the corpus.
	pub fn is_terminal(&self) -> bool {
		self.0.last() == Some(&Token::End)
	}

	/// Whether the key is a legal sentence start (first word capitalized).
	pub fn is_sentence_start(&self) -> bool {
		self.first().is_some_and(Token::starts_uppercase)
	}

	/// Position of the last word closing a sentence, if any.
	pub fn sentence_end(&self) -> Option<usize> {
		self.0.iter().rposition(Token::ends_sentence)
	}

	/// Moves the window one token forward: drops the first element and
	/// appends `next`. The length is preserved.
	pub fn slide(&self, next: Token) -> Self {
		let mut tokens = Vec::with_capacity(self.0.len());
		tokens.extend(self.0.iter().skip(1).cloned());
		tokens.push(next);
		Self(tokens)
	}
}

impl fmt::Display for NGram {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "(")?;
		for (i, token) in self.0.iter().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{token}")?;
		}
		write!(f, ")")
	}
}

/// Splits a text on whitespace and appends the `End` sentinel.
///
/// An empty or blank text yields `[End]`.
pub fn tokenize(text: &str) -> Vec<Token> {
	let mut tokens: Vec<Token> = text.split_whitespace().map(Token::from).collect();
	tokens.push(Token::End);
	tokens
}
