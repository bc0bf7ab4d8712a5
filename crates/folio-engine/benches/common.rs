// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_flat_post(repeats: usize) -> String {
    let base = "Opening paragraph with a few sentences about the topic.\n\n## Section\n\nParagraph with some content.\n\n### Detail\n\n* First point\n* Second point\n\n1. Step one\nExplanation of the step.\n\n```rust\nfn example() {\n\n    println!(\"Hello\");\n}\n```\n\n> A quotation worth remembering.\n\n";
    base.repeat(repeats)
}

#[allow(dead_code)]
pub fn generate_story(chapters: usize, paragraphs: usize) -> String {
    let mut content = String::from("The Story\n\nA lead quotation.\n\nAn opening paragraph.\n\n");

    for chapter in 0..chapters {
        content.push_str(&format!("Chapter {}: Part {}\n", chapter + 1, chapter + 1));
        content.push_str("A Subheading Here\n\n");
        for _ in 0..paragraphs {
            content.push_str("Some paragraph content with multiple sentences. This keeps the sections realistic.\n\n");
        }
    }

    content
}
