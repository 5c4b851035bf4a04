use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    Name,
    ModifiedTime,
    Size,
}
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfiguration {
    pub location: Option<PathBuf>,
    pub show_hidden: bool,
    pub long_form: bool,
    pub recurse: bool,
    pub color: bool,
    pub icons: bool,
    pub one_entry_per_line: bool,
    pub human_readable_sizes: bool,
    pub directory_only: bool,
    pub classify_indicator: bool,
    pub sort_key: SortKey,
}
impl DisplayConfiguration {
    /// The directory this configuration lists; the working directory when unset.
    pub fn resolved_location(&self) -> &Path {
        self.location.as_deref().unwrap_or(Path::new("."))
    }
    /// A copy of this configuration pointing at another location.
    pub fn with_location(&self, location: impl Into<PathBuf>) -> Self {
        Self {
            location: Some(location.into()),
            ..self.clone()
        }
    }
    /// Whether every rendered entry ends its own line.
    pub fn line_per_entry(&self) -> bool {
        self.long_form || self.one_entry_per_line
    }
}
#[derive(Debug, Default)]
pub struct DisplayBuilder {
    options: DisplayConfiguration,
}
impl DisplayBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn location(mut self, location: impl Into<PathBuf>) -> Self {
        self.options.location = Some(location.into());
        self
    }
    pub fn show_hidden(mut self, yes: bool) -> Self {
        self.options.show_hidden = yes;
        self
    }
    pub fn long_form(mut self, yes: bool) -> Self {
        self.options.long_form = yes;
        self
    }
    pub fn recurse(mut self, yes: bool) -> Self {
        self.options.recurse = yes;
        self
    }
    pub fn color(mut self, yes: bool) -> Self {
        self.options.color = yes;
        self
    }
    pub fn icons(mut self, yes: bool) -> Self {
        self.options.icons = yes;
        self
    }
    pub fn one_entry_per_line(mut self, yes: bool) -> Self {
        self.options.one_entry_per_line = yes;
        self
    }
    pub fn human_readable_sizes(mut self, yes: bool) -> Self {
        self.options.human_readable_sizes = yes;
        self
    }
    pub fn directory_only(mut self, yes: bool) -> Self {
        self.options.directory_only = yes;
        self
    }
    pub fn classify_indicator(mut self, yes: bool) -> Self {
        self.options.classify_indicator = yes;
        self
    }
    pub fn sort_key(mut self, key: SortKey) -> Self {
        self.options.sort_key = key;
        self
    }
    pub fn build(self) -> DisplayConfiguration {
        self.options
    }
}
