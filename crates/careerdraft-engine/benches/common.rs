// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_resume_content(sections: usize) -> String {
    let mut content = String::from("# Jane Doe\nSystems engineer.\n\n");
    for section in 0..sections {
        content.push_str(&format!("## Section {section}\n"));
        content.push_str(&format!("### Project {section}\n"));
        content.push_str("Some paragraph content describing the project in a sentence or two.\n");
        for i in 0..5 {
            content.push_str(&format!("- Bullet point {i} with **literal** emphasis\n"));
        }
        content.push('\n');
    }
    content
}
