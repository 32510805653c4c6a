// src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SolveError;

/// The coding judge a problem belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Platform {
    Leetcode,
    Codeforces,
    Hackerrank,
    Atcoder,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Leetcode,
        Platform::Codeforces,
        Platform::Hackerrank,
        Platform::Atcoder,
    ];

    /// Wire value, as sent to the solver endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Leetcode => "leetcode",
            Platform::Codeforces => "codeforces",
            Platform::Hackerrank => "hackerrank",
            Platform::Atcoder => "atcoder",
        }
    }

    /// Human-readable name of the judge.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Leetcode => "LeetCode",
            Platform::Codeforces => "Codeforces",
            Platform::Hackerrank => "HackerRank",
            Platform::Atcoder => "AtCoder",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SolveError::Config(format!("unknown platform '{}'", s)))
    }
}

// Every input surface (CLI, env, TOML, JSON) goes through `FromStr`.
impl TryFrom<String> for Platform {
    type Error = SolveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Target language of the generated solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Language {
    #[default]
    Python,
    Java,
    Cpp,
    Javascript,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Python,
        Language::Java,
        Language::Cpp,
        Language::Javascript,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::Javascript => "javascript",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Language::Python => "py",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::Javascript => "js",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SolveError::Config(format!("unknown language '{}'", s)))
    }
}

impl TryFrom<String> for Language {
    type Error = SolveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum HttpMethod {
    Get,
    #[default]
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

impl FromStr for HttpMethod {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            other => Err(SolveError::Config(format!(
                "unsupported HTTP method '{}' (expected GET or POST)",
                other
            ))),
        }
    }
}

impl TryFrom<String> for HttpMethod {
    type Error = SolveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// What the user asked for: a problem on a judge, in a language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestParams {
    pub slug: String,
    pub platform: Platform,
    #[serde(default)]
    pub language: Language,
}

impl RequestParams {
    pub fn new(slug: impl Into<String>, platform: Platform, language: Language) -> Self {
        Self {
            slug: slug.into(),
            platform,
            language,
        }
    }
}

/// A solution as returned by the solver service or the mock generator.
///
/// Only `code` is required. Everything else may be absent upstream and is
/// resolved against the request at display time (see `display`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Http,
    MalformedResponse,
    Transport,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub message: String,
}

impl From<&SolveError> for ErrorInfo {
    fn from(err: &SolveError) -> Self {
        let (kind, status) = match err {
            SolveError::Http { status, .. } => (ErrorKind::Http, Some(*status)),
            SolveError::MalformedResponse(_) => (ErrorKind::MalformedResponse, None),
            SolveError::Transport(_) => (ErrorKind::Transport, None),
            SolveError::Validation(_)
            | SolveError::Config(_)
            | SolveError::TomlParse(_)
            | SolveError::FileRead(_) => (ErrorKind::Validation, None),
        };
        ErrorInfo {
            kind,
            status,
            message: err.to_string(),
        }
    }
}

impl From<SolveError> for ErrorInfo {
    fn from(err: SolveError) -> Self {
        ErrorInfo::from(&err)
    }
}

/// Terminal result of one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestOutcome {
    Success(Solution),
    Failure(ErrorInfo),
}

impl RequestOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RequestOutcome::Success(_))
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            RequestOutcome::Success(s) => Some(s),
            RequestOutcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        match self {
            RequestOutcome::Success(_) => None,
            RequestOutcome::Failure(e) => Some(e),
        }
    }
}
