use linemark_engine::{ConvertOptions, Parser, convert_document, markdown_to_html};
use pretty_assertions::assert_eq;

const SKIP_BLANKS: ConvertOptions = ConvertOptions {
    skip_blank_lines: true,
};

#[test]
fn fixture_headings_and_lists() {
    assert_fixture("headings_and_lists", &SKIP_BLANKS);
}

#[test]
fn fixture_code_and_quotes() {
    assert_fixture("code_and_quotes", &SKIP_BLANKS);
}

#[test]
fn fixture_links_and_rules() {
    assert_fixture("links_and_rules", &SKIP_BLANKS);
}

#[test]
fn fixture_blank_lines_as_rules() {
    assert_fixture("blank_lines_as_rules", &ConvertOptions::default());
}

fn assert_fixture(name: &str, options: &ConvertOptions) {
    let fixtures_dir = format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let rope = xi_rope::Rope::from(md.as_str());

    let html = convert_document(&rope, options);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, html);
    });
}

/// Line-at-a-time parsing and whole-text conversion agree.
#[test]
fn parser_matches_document_conversion() {
    let md = "# T\n* a\n* b\n    code\n> q\n[l](/x)\n---\nend";

    let mut parser = Parser::new();
    for line in md.lines() {
        parser.parse(line);
    }

    assert_eq!(parser.to_html(), markdown_to_html(md));
}

/// Unicode content survives every conversion path.
#[test]
fn non_ascii_content() {
    assert_eq!(
        markdown_to_html("# Café\n* naïve\n> «quote»\n[π](/pi) ≈ 3.14"),
        "<h1>Café</h1><ul><li>naïve</li></ul><blockquote>«quote»</blockquote>\
         <p><a href=\"/pi\">π</a> ≈ 3.14</p>"
    );
}
