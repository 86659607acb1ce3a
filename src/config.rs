//! Project configuration: which chronology a project records positions in,
//! and how records are delimited in text.

use serde::{Deserialize, Serialize};

use crate::model::COMPONENT_DELIMITER;
use crate::{Error, Result};

// ============================================================================
// Chronology
// ============================================================================

/// The kind of position a project records features against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chronology {
    /// page/line (a single book as corpus)
    Page,
    /// year/month/day/hour/minute/second (a discourse over time)
    Date,
    /// hour/minute/second (a speech recording)
    Time,
}

impl Chronology {
    pub const ALL: [Chronology; 3] = [Chronology::Page, Chronology::Date, Chronology::Time];

    /// Name used in project directory suffixes and axis labels.
    pub fn name(self) -> &'static str {
        match self {
            Chronology::Page => "page",
            Chronology::Date => "date",
            Chronology::Time => "time",
        }
    }

    /// Project directory suffix, e.g. `_page`.
    pub fn suffix(self) -> String {
        format!("_{}", self.name())
    }

    /// Detect the chronology from a project directory name (`corpus_date`).
    pub fn from_project_name(project: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| project.ends_with(&c.suffix()))
    }

    /// Names of the position components, coarsest first.
    pub fn components(self) -> &'static [&'static str] {
        match self {
            Chronology::Page => &["page", "line"],
            Chronology::Date => &["year", "month", "day", "hour", "minute", "second"],
            Chronology::Time => &["hour", "minute", "second"],
        }
    }

    /// Deepest meaningful position for this chronology.
    pub fn max_arity(self) -> usize {
        self.components().len()
    }

    /// How a user is expected to type a position.
    pub fn entry_hint(self) -> &'static str {
        match self {
            Chronology::Page => "page/line (e.g. \"134/12\")",
            Chronology::Date => "year/month/day/hour/minute/second, as specific as needed (e.g. \"2018/11/27\")",
            Chronology::Time => "hour/minute/second, as specific as needed (e.g. \"13/47\")",
        }
    }

    pub fn axis_label(self) -> String {
        format!("Position of addition of a feature ({} of occurrence)", self.name())
    }
}

// ============================================================================
// Delimiters
// ============================================================================

/// Field and component delimiters of the record text form (`label;134/12`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delimiters {
    /// Separates the label from the position.
    pub field: char,
    /// Separates position components.
    pub component: char,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self { field: ';', component: COMPONENT_DELIMITER }
    }
}

impl Delimiters {
    pub fn validate(&self) -> Result<()> {
        if self.field == self.component {
            return Err(Error::Config(format!(
                "field and component delimiter are both '{}'",
                self.field
            )));
        }
        for c in [self.field, self.component] {
            if c.is_ascii_digit() || c.is_whitespace() {
                return Err(Error::Config(format!("'{c}' cannot be used as a delimiter")));
            }
        }
        Ok(())
    }
}

// ============================================================================
// ProjectConfig
// ============================================================================

/// Settings for one project (a directory of wortverbund files).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    pub chronology: Chronology,
    #[serde(default)]
    pub delimiters: Delimiters,
}

impl ProjectConfig {
    pub fn new(name: impl Into<String>, chronology: Chronology) -> Self {
        Self { name: name.into(), chronology, delimiters: Delimiters::default() }
    }

    /// Derive the configuration from a project directory name such as
    /// `faust_page`; the suffix is stripped from the name.
    pub fn from_project_name(project: &str) -> Result<Self> {
        let chronology = Chronology::from_project_name(project).ok_or_else(|| {
            Error::Config(format!(
                "project '{project}' has no _page, _date or _time suffix"
            ))
        })?;
        let name = &project[..project.len() - chronology.suffix().len()];
        if name.is_empty() {
            return Err(Error::Config(format!("project '{project}' has an empty name")));
        }
        Ok(Self::new(name, chronology))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Directory name the project is stored under (`faust_page`).
    pub fn directory_name(&self) -> String {
        format!("{}{}", self.name, self.chronology.suffix())
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::Config("project name is empty".into()));
        }
        self.delimiters.validate()
    }
}
