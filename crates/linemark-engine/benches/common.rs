/// A document touching every line category, repeated `size` times.
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n## Section\nParagraph with some content.\n*   Bullet point\n*   Another item\n1.  First\n2.  Second\n    fn example() {\n        println!(\"Hello\");\n    }\n> Quoted line\n[A link](http://example.net/) with trailing text.\n* * *\n";
    base.repeat(size)
}
