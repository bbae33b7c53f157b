//! Document-level tests for the parsing module.


use pretty_assertions::assert_eq;
use xi_rope::Rope;

use crate::parsing::{ConvertOptions, Parser, convert_document, markdown_to_html};

const SAMPLE: &str = "\
# Shopping

* Red
* Green
1. Blue
    let x = 1;
> quoted
[home](/) is here
---
done
";

#[test]
fn sample_document_default_options() {
    assert_eq!(
        markdown_to_html(SAMPLE),
        "<h1>Shopping</h1><hr/><ul><li>Red</li><li>Green</li></ul><ol><li>Blue</li></ol>\
         <pre><code>let x = 1;</code></pre><blockquote>quoted</blockquote>\
         <p><a href=\"/\">home</a> is here</p><hr/>done"
    );
}

#[test]
fn sample_document_skipping_blank_lines() {
    let options = ConvertOptions {
        skip_blank_lines: true,
    };
    assert_eq!(
        convert_document(&Rope::from(SAMPLE), &options),
        "<h1>Shopping</h1><ul><li>Red</li><li>Green</li></ul><ol><li>Blue</li></ol>\
         <pre><code>let x = 1;</code></pre><blockquote>quoted</blockquote>\
         <p><a href=\"/\">home</a> is here</p><hr/>done"
    );
}

#[test]
fn skipped_blank_lines_do_not_split_phrases() {
    let options = ConvertOptions {
        skip_blank_lines: true,
    };
    assert_eq!(
        convert_document(&Rope::from("* a\n\n   \n* b\n"), &options),
        "<ul><li>a</li><li>b</li></ul>"
    );
}

#[test]
fn consecutive_blank_lines_collapse_into_one_rule_phrase() {
    assert_eq!(markdown_to_html("a\n\n\nb"), "a<hr/><hr/>b");
}

#[test]
fn crlf_input() {
    assert_eq!(
        markdown_to_html("* a\r\n* b\r\n"),
        "<ul><li>a</li><li>b</li></ul>"
    );
}

#[test]
fn empty_document() {
    assert_eq!(markdown_to_html(""), "");
}

#[test]
fn plain_text_lines_concatenate() {
    assert_eq!(markdown_to_html("one\ntwo"), "onetwo");
}

#[test]
fn invariants_hold_for_sample() {
    let mut parser = Parser::new();
    for line in SAMPLE.lines() {
        parser.parse(line);
    }
    invariants::check(parser.phrases());
}

#[test]
fn invariants_hold_for_alternating_categories() {
    let mut parser = Parser::new();
    for i in 0..20 {
        parser.parse(if i % 3 == 0 { "* item" } else { "> quote" });
    }
    invariants::check(parser.phrases());
    assert_eq!(parser.phrase_count(), 14);
}
