// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_note(size: usize) -> String {
    let front_matter = "---\ntitle: Benchmark Note\ntags: [bench, \"#perf\"]\ndraft: false\n---\n";
    let base = "# Title\n\n## Section with **bold** and *italic*\n\nParagraph linking [[Some Page]] and [[Other|alias]] with #tag and `code`.\n\n- Bullet point with ~~strike~~\n- Another [link](https://example.com)\n\n1. first\n2. second\n\n> quoted line\n> continues here\n\n---\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    format!("{front_matter}{}", base.repeat(size))
}

#[allow(dead_code)]
pub fn generate_long_line(repeats: usize) -> String {
    "plain **bold** _it_ [[Wiki Link|shown]] `code` [a](b) ~~s~~ unmatched ** * "
        .repeat(repeats)
}
