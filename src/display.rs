// src/display.rs
use std::fmt;
use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::models::{Language, RequestOutcome, RequestParams, Solution};

/// A solution with every optional field resolved against the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSolution<'a> {
    pub slug: &'a str,
    pub platform: &'a str,
    pub language: &'a str,
    pub code: &'a str,
    pub complexity: Option<&'a str>,
}

impl<'a> ResolvedSolution<'a> {
    pub fn resolve(solution: &'a Solution, params: &'a RequestParams) -> Self {
        Self {
            slug: solution.slug.as_deref().unwrap_or(&params.slug),
            platform: solution
                .platform
                .as_deref()
                .unwrap_or(params.platform.as_str()),
            language: solution
                .language
                .as_deref()
                .unwrap_or(params.language.as_str()),
            code: &solution.code,
            complexity: solution.complexity.as_deref(),
        }
    }

    /// `solution.<ext>`; unknown languages get a `.py` frame.
    pub fn file_name(&self) -> String {
        let ext = self
            .language
            .parse::<Language>()
            .map(|l| l.extension())
            .unwrap_or("py");
        format!("solution.{}", ext)
    }
}

/// Terminal rendering of an outcome. A failure renders only the error.
pub struct OutcomeView<'a> {
    pub outcome: &'a RequestOutcome,
    pub params: &'a RequestParams,
    pub mock: bool,
}

impl fmt::Display for OutcomeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            RequestOutcome::Success(solution) => {
                let resolved = ResolvedSolution::resolve(solution, self.params);
                let rule = "─".repeat(60);

                write!(f, "🌐 {} | {}", resolved.platform, resolved.language)?;
                if let Some(complexity) = resolved.complexity {
                    write!(f, " | {}", complexity)?;
                }
                writeln!(f)?;
                writeln!(f, "📄 {}", resolved.file_name())?;
                writeln!(f, "{}", rule)?;
                writeln!(f, "{}", resolved.code.trim_end())?;
                writeln!(f, "{}", rule)?;
                if self.mock {
                    writeln!(
                        f,
                        "⚠️  Preview Mode: Using simulated data for {}",
                        self.params.platform
                    )?;
                }
                Ok(())
            }
            RequestOutcome::Failure(error) => {
                writeln!(f, "❌ Request Failed")?;
                writeln!(f, "   {}", error.message)
            }
        }
    }
}

pub fn render_outcome(outcome: &RequestOutcome, params: &RequestParams, mock: bool) -> String {
    OutcomeView {
        outcome,
        params,
        mock,
    }
    .to_string()
}

/// Just the source, newline-terminated, for piping into a clipboard tool.
pub fn code_only(solution: &Solution) -> String {
    format!("{}\n", solution.code.trim_end())
}

/// Writes the source to `path`. A directory gets `solution.<ext>` inside it.
pub fn save_code(solution: &Solution, params: &RequestParams, path: &Path) -> Result<PathBuf> {
    let target = if path.is_dir() {
        path.join(ResolvedSolution::resolve(solution, params).file_name())
    } else {
        path.to_path_buf()
    };
    std::fs::write(&target, code_only(solution))?;
    log::info!("💾 Saved solution to {}", target.display());
    Ok(target)
}
