use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "careerdraft")]
#[command(author, version)]
#[command(about = "Build resume prompts and render generated text into print-ready HTML")]
#[command(after_help = "\
EXAMPLES:

    # Render generated markdown to HTML fragments
    careerdraft render resume.md

    # Render from stdin as a complete document
    cat letter.md | careerdraft render --section cover-letter --document

    # Print the three prompts for a profile
    careerdraft prompts profile.toml --tone enthusiastic

    # Export generated texts as HTML documents
    careerdraft export --resume resume.md --cover-letter letter.md --format html

CONFIGURATION:

careerdraft reads ~/.config/careerdraft/config.toml unless --config is given:

    output_dir = \"~/careerdraft\"
    template = \"modern\"
    tone = \"professional\"
    document_title = \"Career Portfolio\"
    stylesheet = \"print.css\"
")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render generated markdown into HTML
    Render {
        /// Input file (reads stdin when omitted)
        input: Option<PathBuf>,

        /// Wrap the output in a titled section (resume, cover-letter, portfolio)
        #[arg(long)]
        section: Option<String>,

        /// Emit a complete HTML document (defaults the section to resume)
        #[arg(long)]
        document: bool,
    },

    /// Print the completion prompts for a profile
    #[command(after_help = "\
PROFILE FORMAT:

    skills = \"Rust, SQL, Kubernetes\"
    projects = \"\"\"
    Log shipper
    Static site generator
    \"\"\"
    experience = \"Acme - Backend engineer\"

    [[portfolio]]
    title = \"careerdraft\"
    description = \"Prompt builder and renderer\"
    link = \"https://example.com\"
")]
    Prompts {
        /// Profile TOML file
        profile: PathBuf,

        /// Resume template (classic, modern, creative)
        #[arg(long)]
        template: Option<String>,

        /// Tone (professional, creative, enthusiastic)
        #[arg(long)]
        tone: Option<String>,

        /// Print only one prompt (resume, cover-letter, portfolio)
        #[arg(long)]
        only: Option<String>,
    },

    /// Write generated texts to the output directory
    Export {
        /// Generated resume text
        #[arg(long)]
        resume: Option<PathBuf>,

        /// Generated cover letter text
        #[arg(long)]
        cover_letter: Option<PathBuf>,

        /// Generated portfolio summary text
        #[arg(long)]
        portfolio: Option<PathBuf>,

        /// Output format (text, html)
        #[arg(long, default_value = "text")]
        format: String,

        /// Output directory (overrides config output_dir)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}
