use super::*;

#[test]
fn parse_article_id_reads_numeric_params() {
    assert_eq!(parse_article_id(Some("42".to_owned())), 42);
}

#[test]
fn parse_article_id_collapses_bad_input_to_zero() {
    assert_eq!(parse_article_id(None), 0);
    assert_eq!(parse_article_id(Some(String::new())), 0);
    assert_eq!(parse_article_id(Some("abc".to_owned())), 0);
}
