//! Minimal CMake file model.
//!
//! Generated fragments are described as a list of [`CMakeElement`] values and
//! rendered in one pass, so the text only depends on the elements added and
//! their order.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PackError, Result};

const INDENT: &str = "    ";

/// Statements the packer knows how to emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CMakeElement {
    /// `# text`
    Comment(String),
    /// `add_custom_command(OUTPUT ...)`
    CustomCommand(CustomCommand),
    /// `add_custom_target(...)`
    CustomTarget(CustomTarget),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomCommand {
    pub output: String,
    pub byproducts: Vec<String>,
    pub command: String,
    pub depends: Vec<String>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomTarget {
    pub name: String,
    pub depends: Vec<String>,
    /// Adds the target to the default `all` build.
    pub all: bool,
}

impl fmt::Display for CMakeElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CMakeElement::Comment(text) => writeln!(f, "# {text}"),
            CMakeElement::CustomCommand(command) => write!(f, "{command}"),
            CMakeElement::CustomTarget(target) => write!(f, "{target}"),
        }
    }
}

impl fmt::Display for CustomCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "add_custom_command(")?;
        writeln!(f, "{INDENT}OUTPUT {}", self.output)?;
        if !self.byproducts.is_empty() {
            writeln!(f, "{INDENT}BYPRODUCTS {}", self.byproducts.join(" "))?;
        }
        writeln!(f, "{INDENT}COMMAND {}", self.command)?;
        if !self.depends.is_empty() {
            writeln!(f, "{INDENT}DEPENDS {}", self.depends.join(" "))?;
        }
        if let Some(comment) = &self.comment {
            writeln!(f, "{INDENT}COMMENT \"{}\"", comment.replace('"', "\\\""))?;
        }
        writeln!(f, ")")
    }
}

impl fmt::Display for CustomTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "add_custom_target({}", self.name)?;
        if self.all {
            write!(f, " ALL")?;
        }
        if !self.depends.is_empty() {
            write!(f, " DEPENDS {}", self.depends.join(" "))?;
        }
        writeln!(f, ")")
    }
}

/// A CMake file under construction.
#[derive(Debug, Clone)]
pub struct CMakeFile {
    path: PathBuf,
    elements: Vec<CMakeElement>,
}

impl CMakeFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            elements: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn add_element(&mut self, element: CMakeElement) -> &mut Self {
        self.elements.push(element);
        self
    }

    pub fn render(&self) -> String {
        self.elements.iter().map(ToString::to_string).collect()
    }

    /// Write the rendered file, creating parent directories as needed.
    pub fn to_file(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| PackError::io(parent, e))?;
        }
        fs::write(&self.path, self.render()).map_err(|e| PackError::io(&self.path, e))
    }
}
