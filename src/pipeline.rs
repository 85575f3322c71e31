use crate::{strip_internal_labels, to_bracket, tree_edit_distance, Depth, TreeNode};
use derive_more::{Display, Error};
use tracing::debug;

/// The external constituency parser this crate composes with.
///
/// Implementations typically wrap a heavyweight NLP model. Construct one
/// explicitly, hand it to a [TedCalculator], and drop it when done; the
/// crate never reaches for ambient global state.
pub trait ConstituencyParser {
    /// Parses `sentence` into its constituency tree.
    fn parse(&self, sentence: &str, language: &str) -> Result<TreeNode, ParserError>;
}

impl<P: ConstituencyParser + ?Sized> ConstituencyParser for &P {
    fn parse(&self, sentence: &str, language: &str) -> Result<TreeNode, ParserError> {
        (**self).parse(sentence, language)
    }
}

/// Failures surfaced unchanged from the parser collaborator.
#[derive(Debug, Display, Error, Clone, Eq, PartialEq)]
pub enum ParserError {
    /// No model exists for the requested language.
    #[display(fmt = "no parser model for language `{}`", _0)]
    UnsupportedLanguage(#[error(not(source))] String),
    /// The parser itself failed.
    #[display(fmt = "parser failure: {}", _0)]
    Failure(#[error(not(source))] String),
}

/// Scores pairs of sentences by the edit distance between their
/// constituency trees.
///
/// Holds nothing besides the injected parser and the language it was
/// configured for; every comparison allocates its own tables, so one
/// calculator may serve parallel batch scoring as long as the parser
/// itself is shareable.
#[derive(Debug, Clone)]
pub struct TedCalculator<P> {
    parser: P,
    language: String,
}

impl<P: ConstituencyParser> TedCalculator<P> {
    pub fn new(parser: P, language: impl Into<String>) -> Self {
        TedCalculator {
            parser,
            language: language.into(),
        }
    }

    /// Tree edit distance between the constituency trees of two sentences,
    /// optionally truncated to `depth` first.
    pub fn calculate_ted(&self, a: &str, b: &str, depth: Depth) -> Result<u64, ParserError> {
        self.distance(a, b, depth, false)
    }

    /// Like [TedCalculator::calculate_ted], but grammatical category
    /// labels are stripped first, so only bracket shape and tokens count.
    pub fn calculate_unlabeled_ted(&self, a: &str, b: &str, depth: Depth) -> Result<u64, ParserError> {
        self.distance(a, b, depth, true)
    }

    /// Canonical bracketed form of one sentence's tree, as compared by
    /// [TedCalculator::calculate_ted].
    pub fn bracket_of(&self, sentence: &str, depth: Depth) -> Result<String, ParserError> {
        Ok(to_bracket(&self.tree_of(sentence, depth, false)?))
    }

    /// Canonical bracketed form with category labels stripped, as compared
    /// by [TedCalculator::calculate_unlabeled_ted].
    pub fn unlabeled_bracket_of(&self, sentence: &str, depth: Depth) -> Result<String, ParserError> {
        Ok(to_bracket(&self.tree_of(sentence, depth, true)?))
    }

    fn distance(&self, a: &str, b: &str, depth: Depth, unlabeled: bool) -> Result<u64, ParserError> {
        let left = self.tree_of(a, depth, unlabeled)?;
        let right = self.tree_of(b, depth, unlabeled)?;
        debug!(left = %left, right = %right, "comparing constituency trees");
        Ok(tree_edit_distance(&left, &right))
    }

    fn tree_of(&self, sentence: &str, depth: Depth, unlabeled: bool) -> Result<TreeNode, ParserError> {
        let tree = self.parser.parse(sentence, &self.language)?;
        let tree = depth.apply(&tree);

        Ok(match unlabeled {
            true => strip_internal_labels(&tree),
            false => tree,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_bracket;
    use assert_matches::assert_matches;
    use std::collections::HashMap;

    /// Canned parser mapping sentences to fixed bracketed trees.
    struct Canned {
        trees: HashMap<&'static str, &'static str>,
    }

    impl Canned {
        fn new() -> Self {
            let trees = HashMap::from([
                (
                    "This is a test",
                    "(S (NP (DT This)) (VP (VBZ is) (NP (DT a) (NN test))))",
                ),
                (
                    "This is only a test",
                    "(S (NP (DT This)) (VP (VBZ is) (RB only) (NP (DT a) (NN test))))",
                ),
            ]);
            Canned { trees }
        }
    }

    impl ConstituencyParser for Canned {
        fn parse(&self, sentence: &str, language: &str) -> Result<TreeNode, ParserError> {
            if language != "en" {
                return Err(ParserError::UnsupportedLanguage(language.to_owned()));
            }

            match self.trees.get(sentence) {
                Some(bracket) => Ok(parse_bracket(bracket).unwrap()),
                None => Err(ParserError::Failure(format!("no parse for `{sentence}`"))),
            }
        }
    }

    fn calculator() -> TedCalculator<Canned> {
        TedCalculator::new(Canned::new(), "en")
    }

    #[test]
    fn identical_sentences_have_zero_distance() {
        let ted = calculator();
        assert_eq!(ted.calculate_ted("This is a test", "This is a test", Depth::Full), Ok(0));
    }

    #[test]
    fn an_extra_adverb_costs_two_labeled_edits_and_one_unlabeled() {
        let ted = calculator();
        let (a, b) = ("This is a test", "This is only a test");

        assert_eq!(ted.calculate_ted(a, b, Depth::Full), Ok(2));
        assert_eq!(ted.calculate_unlabeled_ted(a, b, Depth::Full), Ok(1));
    }

    #[test]
    fn sentences_agreeing_near_the_root_compare_equal_at_low_depth() {
        let ted = calculator();
        let (a, b) = ("This is a test", "This is only a test");

        assert_eq!(ted.calculate_ted(a, b, Depth::Limited(0)), Ok(0));
        assert_eq!(ted.calculate_ted(a, b, Depth::Limited(1)), Ok(0));
        assert_eq!(ted.calculate_ted(a, b, Depth::Limited(2)), Ok(1));
    }

    #[test]
    fn bracket_of_serializes_the_parsed_tree() {
        let ted = calculator();

        assert_eq!(
            ted.bracket_of("This is a test", Depth::Limited(1)),
            Ok("(S NP VP)".to_owned())
        );
        assert_eq!(
            ted.unlabeled_bracket_of("This is a test", Depth::Full),
            Ok("(· (· This) (· is (· a test)))".to_owned())
        );
    }

    #[test]
    fn unsupported_languages_surface_unchanged() {
        let ted = TedCalculator::new(Canned::new(), "xx");
        assert_matches!(
            ted.calculate_ted("This is a test", "This is a test", Depth::Full),
            Err(ParserError::UnsupportedLanguage(lang)) => assert_eq!(lang, "xx")
        );
    }

    #[test]
    fn parser_failures_surface_unchanged() {
        let ted = calculator();
        assert_matches!(
            ted.calculate_ted("This is a test", "unparseable", Depth::Full),
            Err(ParserError::Failure(_))
        );
    }
}
