//! End-to-end conversion cases: source text in, HTML out

use mdhtml::convert;
use mdhtml::lexer::Position;
use mdhtml::parser::{parse, parse_with_options, ParseError, ParserOptions};
use rstest::rstest;

fn to_html(source: &str) -> String {
    convert(source, &ParserOptions::default())
        .unwrap_or_else(|e| panic!("failed to convert {:?}: {}", source, e))
}

#[rstest]
#[case::h1("# Title\n", "<h1>Title</h1>\n")]
#[case::h2("## Sub\n", "<h2>Sub</h2>\n")]
#[case::italic_star("*x*", "<p><em>x</em></p>\n\n")]
#[case::italic_underscore("_x_", "<p><em>x</em></p>\n\n")]
#[case::bold_star("**b**", "<p><strong>b</strong></p>\n\n")]
#[case::bold_underscore("__b__", "<p><strong>b</strong></p>\n\n")]
#[case::inline_code("`c`", "<p><code>c</code></p>\n\n")]
#[case::link("[t](u)", "<p><a href=\"u\">t</a></p>\n\n")]
#[case::image("![a](u)", "<img src=\"u\" alt=\"a\" />\n\n")]
#[case::bold_in_italic("*a **b** c*", "<p><em>a <strong>b</strong> c</em></p>\n\n")]
#[case::italic_in_bold("**a _b_ c**", "<p><strong>a <em>b</em> c</strong></p>\n\n")]
#[case::mixed_closer("_mixed*", "<p><em>mixed</em></p>\n\n")]
#[case::no_escaping("a < b & c", "<p>a < b & c</p>\n\n")]
#[case::carriage_return_after_hash("#\r", "<h1></h1>\n")]
#[case::formatted_header("# *big* news\n", "<h1><em>big</em> news</h1>\n")]
#[case::code_block("```\nx = 1\n```\n", "<pre><code>\nx = 1\n</code></pre>\n\n")]
#[case::empty("", "")]
fn renders(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(to_html(source), expected);
}

#[test]
fn test_mixed_document() {
    let source = "# Notes\n\nSome *light* and **heavy** text.\n\n![logo](logo.png)\n\n```\nraw *stuff*\n```\nSee [home](index.html).\n";
    let expected = concat!(
        "<h1>Notes</h1>\n",
        "<p>Some <em>light</em> and <strong>heavy</strong> text.</p>\n\n",
        "<img src=\"logo.png\" alt=\"logo\" />\n\n",
        "<pre><code>\nraw *stuff*\n</code></pre>\n\n",
        "<p>See <a href=\"index.html\">home</a>.</p>\n\n",
    );
    assert_eq!(to_html(source), expected);
}

#[test]
fn test_interleaved_delimiters_never_overlap() {
    assert_eq!(to_html("*a _b* c_"), "<p><em>a </em>b<em> c</em></p>\n\n");
}

#[test]
fn test_conversion_is_deterministic() {
    let source = "## x\n*a **b** `c` * [d](e)\n";
    let first = to_html(source);
    assert_eq!(first, to_html(source));
    assert_eq!(
        first,
        "<h2>x</h2>\n<p><em>a <strong>b</strong> <code>c</code> </em> <a href=\"e\">d</a></p>\n\n"
    );
}

#[test]
fn test_code_closer_merges_with_following_delimiter() {
    // "`*" is a single delimiter token, so the span is never closed
    let error = parse("*a `c`* b").unwrap_err();
    assert!(matches!(
        error,
        ParseError::MissingDelimiter { expected: "`", .. }
    ));
}

#[rstest]
#[case::unterminated_italic("*unterminated", 1, 14, "`_`, got text")]
#[case::unterminated_bold("**bold", 1, 7, "`__`, got text")]
#[case::unterminated_code("`code", 1, 6, "```, got text")]
#[case::image_without_bracket("!a", 1, 2, "`[`, got text")]
#[case::link_without_url("[t] u", 1, 4, "`(`, got text")]
#[case::second_line("ok\n*open", 2, 6, "`_`, got text")]
fn reports_missing_delimiters(
    #[case] source: &str,
    #[case] line: usize,
    #[case] column: usize,
    #[case] tail: &str,
) {
    let error = parse(source).unwrap_err();
    assert_eq!(error.position(), Position::new(line, column));
    assert!(
        error.to_string().ends_with(tail),
        "unexpected message {:?}",
        error.to_string()
    );
}

#[test]
fn test_special_token_is_echoed_in_diagnostic() {
    let error = parse("![a)").unwrap_err();
    assert_eq!(error.to_string(), "1:4 expected `]`, got `)`");
}

#[test]
fn test_nesting_limit_is_configurable() {
    let source = "*a **b** c*";
    let strict = ParserOptions {
        max_nesting_depth: 1,
    };
    let error = parse_with_options(source, strict).unwrap_err();
    assert!(matches!(error, ParseError::TooDeeplyNested { limit: 1, .. }));

    assert!(parse_with_options(source, ParserOptions::default()).is_ok());
}
