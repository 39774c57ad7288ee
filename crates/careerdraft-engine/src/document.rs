use std::fmt;
use std::str::FromStr;

use crate::render::render_html;

/// One of the three generated texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Resume,
    CoverLetter,
    Portfolio,
}

impl SectionKind {
    pub const ALL: [SectionKind; 3] = [
        SectionKind::Resume,
        SectionKind::CoverLetter,
        SectionKind::Portfolio,
    ];

    pub fn heading(self) -> &'static str {
        match self {
            SectionKind::Resume => "Generated Resume",
            SectionKind::CoverLetter => "Generated Cover Letter",
            SectionKind::Portfolio => "Generated Portfolio Summary",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            SectionKind::Resume => "resume-section",
            SectionKind::CoverLetter => "cover-letter-section",
            SectionKind::Portfolio => "portfolio-section",
        }
    }

    /// Base file name used on export.
    pub fn file_stem(self) -> &'static str {
        match self {
            SectionKind::Resume => "resume",
            SectionKind::CoverLetter => "cover_letter",
            SectionKind::Portfolio => "portfolio",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SectionKind::Resume => "resume",
            SectionKind::CoverLetter => "cover-letter",
            SectionKind::Portfolio => "portfolio",
        })
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown section '{0}' (expected resume, cover-letter or portfolio)")]
pub struct UnknownSection(pub String);

impl FromStr for SectionKind {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "resume" => Ok(SectionKind::Resume),
            "cover-letter" => Ok(SectionKind::CoverLetter),
            "portfolio" => Ok(SectionKind::Portfolio),
            _ => Err(UnknownSection(s.to_string())),
        }
    }
}

/// Document-level settings for [`compose_document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    pub title: String,
    /// Linked with `<link rel="stylesheet">` when set. Never inlined.
    pub stylesheet: Option<String>,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            title: "Career Portfolio".to_string(),
            stylesheet: None,
        }
    }
}

/// Wraps rendered text in a titled `generated-content` container.
pub fn render_section(kind: SectionKind, text: &str) -> String {
    format!(
        "<div class=\"generated-content {}\">\n<h3>{}</h3>\n{}</div>\n",
        kind.css_class(),
        kind.heading(),
        render_html(text)
    )
}

/// Builds a complete HTML document from `(kind, text)` pairs, in order.
///
/// Sections whose text is blank are left out.
pub fn compose_document<'a>(
    options: &DocumentOptions,
    sections: impl IntoIterator<Item = (SectionKind, &'a str)>,
) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>");
    html_escape::encode_text_to_string(&options.title, &mut out);
    out.push_str("</title>\n");
    if let Some(href) = &options.stylesheet {
        out.push_str("<link rel=\"stylesheet\" href=\"");
        html_escape::encode_double_quoted_attribute_to_string(href, &mut out);
        out.push_str("\">\n");
    }
    out.push_str("</head>\n<body>\n");

    let mut count = 0usize;
    for (kind, text) in sections {
        if text.trim().is_empty() {
            log::debug!("skipping empty {kind} section");
            continue;
        }
        out.push_str(&render_section(kind, text));
        count += 1;
    }

    out.push_str("</body>\n</html>\n");
    log::debug!("composed document with {count} sections");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn section_wraps_rendered_fragments() {
        assert_eq!(
            render_section(SectionKind::CoverLetter, "Dear team,\n\nThanks."),
            "<div class=\"generated-content cover-letter-section\">\n\
             <h3>Generated Cover Letter</h3>\n\
             <p>Dear team,</p>\n\
             <p>Thanks.</p>\n\
             </div>\n"
        );
    }

    #[test]
    fn document_shell_with_stylesheet() {
        let options = DocumentOptions {
            title: "Jane & Co".to_string(),
            stylesheet: Some("print.css".to_string()),
        };
        let doc = compose_document(&options, [(SectionKind::Resume, "- Rust")]);
        insta::assert_snapshot!(doc, @r#"
        <!DOCTYPE html>
        <html>
        <head>
        <meta charset="utf-8">
        <title>Jane &amp; Co</title>
        <link rel="stylesheet" href="print.css">
        </head>
        <body>
        <div class="generated-content resume-section">
        <h3>Generated Resume</h3>
        <ul>
        <li>Rust</li>
        </ul>
        </div>
        </body>
        </html>
        "#);
    }

    #[test]
    fn blank_sections_are_skipped_and_order_kept() {
        let doc = compose_document(
            &DocumentOptions::default(),
            [
                (SectionKind::Portfolio, "### P"),
                (SectionKind::Resume, "  \n "),
                (SectionKind::CoverLetter, "Hi"),
            ],
        );
        assert!(!doc.contains("resume-section"));
        let portfolio = doc.find("portfolio-section").unwrap();
        let letter = doc.find("cover-letter-section").unwrap();
        assert!(portfolio < letter);
        assert!(!doc.contains("<link"));
    }

    #[test]
    fn parses_section_names() {
        assert_eq!("cover-letter".parse(), Ok(SectionKind::CoverLetter));
        assert_eq!("cover_letter".parse(), Ok(SectionKind::CoverLetter));
        assert_eq!("Resume".parse(), Ok(SectionKind::Resume));
        assert_eq!(
            "cv".parse::<SectionKind>(),
            Err(UnknownSection("cv".to_string()))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for kind in SectionKind::ALL {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
    }
}
