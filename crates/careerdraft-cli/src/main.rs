use anyhow::{Context, Result, bail};
use careerdraft_config::Config;
use careerdraft_engine::{
    DocumentOptions, ExportFormat, PromptOptions, Profile, ResumeTemplate, SectionKind, Tone,
    build_prompts, compose_document, export_section, io, render_html, render_section,
};
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

mod cli;
use cli::{Cli, Commands};

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => io::read_file(p).with_context(|| format!("Failed to read {}", p.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn document_options(config: &Config) -> DocumentOptions {
    DocumentOptions {
        title: config.document_title.clone(),
        stylesheet: config.stylesheet.clone(),
    }
}

/// CLI flags win over config defaults, which win over built-in defaults.
fn prompt_options(
    config: &Config,
    template: Option<&str>,
    tone: Option<&str>,
) -> Result<PromptOptions> {
    let template = match template.or(config.template.as_deref()) {
        Some(name) => name.parse::<ResumeTemplate>()?,
        None => ResumeTemplate::default(),
    };
    let tone = match tone.or(config.tone.as_deref()) {
        Some(name) => name.parse::<Tone>()?,
        None => Tone::default(),
    };
    Ok(PromptOptions { template, tone })
}

fn run_render(
    config: &Config,
    input: Option<&Path>,
    section: Option<&str>,
    document: bool,
) -> Result<()> {
    let text = read_input(input)?;
    let section = section.map(str::parse::<SectionKind>).transpose()?;

    let html = match (section, document) {
        (section, true) => compose_document(
            &document_options(config),
            [(section.unwrap_or(SectionKind::Resume), text.as_str())],
        ),
        (Some(kind), false) => render_section(kind, &text),
        (None, false) => render_html(&text),
    };

    print!("{html}");
    Ok(())
}

fn run_prompts(
    config: &Config,
    profile_path: &Path,
    template: Option<&str>,
    tone: Option<&str>,
    only: Option<&str>,
) -> Result<()> {
    let content = io::read_file(profile_path)
        .with_context(|| format!("Failed to read profile {}", profile_path.display()))?;
    let profile: Profile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse profile {}", profile_path.display()))?;
    let options = prompt_options(config, template, tone)?;
    let only = only.map(str::parse::<SectionKind>).transpose()?;

    let prompts = build_prompts(&profile, options);
    let all = [
        (SectionKind::Resume, &prompts.resume),
        (SectionKind::CoverLetter, &prompts.cover_letter),
        (SectionKind::Portfolio, &prompts.portfolio),
    ];

    match only {
        Some(kind) => {
            for (k, prompt) in all {
                if k == kind {
                    print!("{prompt}");
                }
            }
        }
        None => {
            for (i, (kind, prompt)) in all.into_iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("=== {kind} ===");
                print!("{prompt}");
            }
        }
    }
    Ok(())
}

fn run_export(
    config: &Config,
    inputs: [(SectionKind, Option<PathBuf>); 3],
    format: &str,
    out: Option<PathBuf>,
) -> Result<()> {
    let format: ExportFormat = format.parse()?;
    let out_dir = out.unwrap_or_else(|| config.output_dir.clone());
    let options = document_options(config);

    // Read everything before writing so a bad input leaves no partial output.
    let mut texts = Vec::new();
    for (kind, path) in inputs {
        let Some(path) = path else { continue };
        let text = read_input(Some(&path))?;
        if text.trim().is_empty() {
            bail!(
                "Nothing to export for {kind}: {} is empty; no files were written",
                path.display()
            );
        }
        texts.push((kind, text));
    }

    if texts.is_empty() {
        bail!("Nothing to export: pass at least one of --resume, --cover-letter or --portfolio");
    }

    for (kind, text) in texts {
        let target = export_section(&out_dir, kind, format, &text, &options)
            .with_context(|| format!("Failed to export {kind}"))?;
        println!("{}", target.display());
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Render {
            input,
            section,
            document,
        } => run_render(&config, input.as_deref(), section.as_deref(), document),
        Commands::Prompts {
            profile,
            template,
            tone,
            only,
        } => run_prompts(
            &config,
            &profile,
            template.as_deref(),
            tone.as_deref(),
            only.as_deref(),
        ),
        Commands::Export {
            resume,
            cover_letter,
            portfolio,
            format,
            out,
        } => run_export(
            &config,
            [
                (SectionKind::Resume, resume),
                (SectionKind::CoverLetter, cover_letter),
                (SectionKind::Portfolio, portfolio),
            ],
            &format,
            out,
        ),
    }
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
