//! Completion prompts built from a user's profile.
//!
//! Three prompts are produced per profile: a resume summary, a cover letter
//! and a portfolio summary. Sending them anywhere is the caller's business.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseOptionError {
    #[error("Unknown resume template '{0}' (expected classic, modern or creative)")]
    Template(String),
    #[error("Unknown tone '{0}' (expected professional, creative or enthusiastic)")]
    Tone(String),
}

/// A structured portfolio project entered alongside the free-text list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioProject {
    pub title: String,
    pub description: String,
    pub link: String,
}

/// Raw user input, as typed.
///
/// `skills` is comma-separated; `projects` and `experience` hold one entry
/// per line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub skills: String,
    pub projects: String,
    pub experience: String,
    pub portfolio: Vec<PortfolioProject>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResumeTemplate {
    #[default]
    Classic,
    Modern,
    Creative,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Professional,
    Creative,
    Enthusiastic,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PromptOptions {
    pub template: ResumeTemplate,
    pub tone: Tone,
}

/// The three prompts sent for one profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSet {
    pub resume: String,
    pub cover_letter: String,
    pub portfolio: String,
}

impl fmt::Display for ResumeTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResumeTemplate::Classic => "Classic",
            ResumeTemplate::Modern => "Modern",
            ResumeTemplate::Creative => "Creative",
        })
    }
}

impl FromStr for ResumeTemplate {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(ResumeTemplate::Classic),
            "modern" => Ok(ResumeTemplate::Modern),
            "creative" => Ok(ResumeTemplate::Creative),
            _ => Err(ParseOptionError::Template(s.to_string())),
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tone::Professional => "Professional",
            Tone::Creative => "Creative",
            Tone::Enthusiastic => "Enthusiastic",
        })
    }
}

impl FromStr for Tone {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "professional" => Ok(Tone::Professional),
            "creative" => Ok(Tone::Creative),
            "enthusiastic" => Ok(Tone::Enthusiastic),
            _ => Err(ParseOptionError::Tone(s.to_string())),
        }
    }
}

impl Profile {
    /// Skills split on commas, trimmed, empties dropped.
    pub fn skill_list(&self) -> Vec<&str> {
        non_empty(self.skills.split(','))
    }

    pub fn experience_list(&self) -> Vec<&str> {
        non_empty(self.experience.lines())
    }

    /// Free-text projects followed by `"title: description"` for each
    /// structured project that has either field filled in.
    pub fn project_list(&self) -> Vec<String> {
        let free_text = non_empty(self.projects.lines())
            .into_iter()
            .map(str::to_string);
        let structured = self
            .portfolio
            .iter()
            .filter(|p| !p.title.is_empty() || !p.description.is_empty())
            .map(|p| format!("{}: {}", p.title, p.description));
        free_text.chain(structured).collect()
    }
}

fn non_empty<'a>(parts: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    parts.map(str::trim).filter(|p| !p.is_empty()).collect()
}

/// Builds the resume, cover letter and portfolio prompts.
pub fn build_prompts(profile: &Profile, options: PromptOptions) -> PromptSet {
    let skill_list = profile.skill_list();
    let project_list = profile.project_list();
    let skills = skill_list.join(", ");
    let projects = project_list.join("; ");
    let experience = profile.experience_list().join("; ");
    let PromptOptions { template, tone } = options;

    let resume = format!(
        "Generate a professional resume summary based on the following information:\n\
         Skills: {skills}\n\
         Projects: {projects}\n\
         Experience: {experience}\n\
         Resume Template Style: {template}\n\
         Tone: {tone}\n\
         Format the output using markdown or basic HTML for structure (e.g., headings, bullet points).\n"
    );

    let cover_letter = format!(
        "Write a compelling cover letter introduction and body based on the following information:\n\
         Skills: {skills}\n\
         Projects: {projects}\n\
         Experience: {experience}\n\
         Desired Tone: {tone}\n\
         Format the output using markdown or basic HTML for structure (e.g., paragraphs).\n"
    );

    let portfolio = format!(
        "Create a concise portfolio summary highlighting key projects and skills based on the following information:\n\
         Skills: {skills}\n\
         Experience: {experience}\n\
         Projects:\n\
         {projects}\n\
         Desired Tone: {tone}\n\
         Format the output using markdown or basic HTML for structure (e.g., headings, lists).\n"
    );

    log::debug!(
        "built prompts ({} skills, {} projects): {} / {} / {} bytes",
        skill_list.len(),
        project_list.len(),
        resume.len(),
        cover_letter.len(),
        portfolio.len()
    );

    PromptSet {
        resume,
        cover_letter,
        portfolio,
    }
}
