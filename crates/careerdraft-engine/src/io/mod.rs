use crate::document::{DocumentOptions, SectionKind, compose_document};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid output directory: {0}")]
    InvalidOutputDir(PathBuf),
    #[error("Nothing to export for {0}: generated text is empty")]
    EmptyContent(SectionKind),
    #[error("Unknown export format '{0}' (expected text or html)")]
    UnknownFormat(String),
}

/// File format for exported sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Generated text as-is.
    #[default]
    Text,
    /// Single-section HTML document.
    Html,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Html => "html",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Text => "text",
            ExportFormat::Html => "html",
        })
    }
}

impl FromStr for ExportFormat {
    type Err = IoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "html" => Ok(ExportFormat::Html),
            _ => Err(IoError::UnknownFormat(s.to_string())),
        }
    }
}

/// Read a generated text file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write one generated section to `out_dir/{stem}.{ext}` and return the path.
///
/// The directory is created if missing. Text exports are trimmed; HTML
/// exports are a full document holding only this section.
pub fn export_section(
    out_dir: &Path,
    kind: SectionKind,
    format: ExportFormat,
    text: &str,
    options: &DocumentOptions,
) -> Result<PathBuf, IoError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(IoError::EmptyContent(kind));
    }

    prepare_output_dir(out_dir)?;

    let contents = match format {
        ExportFormat::Text => format!("{text}\n"),
        ExportFormat::Html => compose_document(options, [(kind, text)]),
    };

    let path = out_dir.join(format!("{}.{}", kind.file_stem(), format.extension()));
    fs::write(&path, contents).map_err(|source| IoError::Write {
        path: path.clone(),
        source,
    })?;
    log::info!("Exported {kind} to {}", path.display());
    Ok(path)
}

fn prepare_output_dir(out_dir: &Path) -> Result<(), IoError> {
    if out_dir.exists() && !out_dir.is_dir() {
        return Err(IoError::InvalidOutputDir(out_dir.to_path_buf()));
    }
    fs::create_dir_all(out_dir).map_err(|source| IoError::Write {
        path: out_dir.to_path_buf(),
        source,
    })
}
