use crate::ast;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaInputError>;

/// A schema document as handed to the override resolver: literal SDL, a path
/// to an SDL file, or an already-parsed document.
#[derive(Clone, Debug, PartialEq)]
pub enum SchemaInput {
    Document(ast::schema::Document),
    Path(PathBuf),
    Sdl(String),
}
impl SchemaInput {
    /// Treats `text` as a path if it names an existing file, and as literal
    /// SDL otherwise.
    pub fn infer(text: impl Into<String>) -> Self {
        let text = text.into();
        let trimmed = text.trim();
        if !trimmed.is_empty()
            && !trimmed.contains('\n')
            && Path::new(trimmed).is_file() {
            Self::Path(PathBuf::from(trimmed))
        } else {
            Self::Sdl(text)
        }
    }

    /// Reads (if needed) and parses the input into an owned document.
    /// `label` names the input in errors (e.g. `"schema"`, `"overrides"`).
    pub fn resolve(self, label: &str) -> Result<ast::schema::Document> {
        match self {
            Self::Document(doc) => Ok(doc),

            Self::Path(file_path) => {
                let content = read_content(file_path.as_path())?;
                parse(file_path.display().to_string().as_str(), content.as_str())
            },

            Self::Sdl(sdl) => {
                if sdl.trim().is_empty() {
                    return Err(SchemaInputError::InvalidInput {
                        label: label.to_string(),
                    });
                }
                parse(label, sdl.as_str())
            },
        }
    }
}
impl From<ast::schema::Document> for SchemaInput {
    fn from(doc: ast::schema::Document) -> Self {
        Self::Document(doc)
    }
}
impl From<PathBuf> for SchemaInput {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}
impl From<&Path> for SchemaInput {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}
impl From<String> for SchemaInput {
    fn from(sdl: String) -> Self {
        Self::Sdl(sdl)
    }
}
impl From<&str> for SchemaInput {
    fn from(sdl: &str) -> Self {
        Self::Sdl(sdl.to_string())
    }
}

fn parse(source: &str, content: &str) -> Result<ast::schema::Document> {
    ast::schema::parse(content).map_err(|err| SchemaInputError::ParseError {
        source_name: source.to_string(),
        err: err.to_string(),
    })
}

fn read_content(file_path: &Path) -> Result<String> {
    if !file_path.is_file() {
        return Err(SchemaInputError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)
        .map_err(|err| SchemaInputError::FileReadError {
            file_path: file_path.to_path_buf(),
            err,
        })?;

    String::from_utf8(bytes)
        .map_err(|err| SchemaInputError::FileDecodeError {
            file_path: file_path.to_path_buf(),
            err,
        })
}

#[derive(Debug, Error)]
pub enum SchemaInputError {
    #[error("Failed to decode `{}` as UTF-8: {err}", file_path.display())]
    FileDecodeError {
        file_path: PathBuf,
        #[source]
        err: std::string::FromUtf8Error,
    },

    #[error("Failed to read `{}`: {err}", file_path.display())]
    FileReadError {
        file_path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    #[error("The {label} input is neither SDL text, a file path, nor a parsed document")]
    InvalidInput {
        label: String,
    },

    #[error("Error parsing {source_name}: {err}")]
    ParseError {
        source_name: String,
        err: String,
    },

    #[error("`{}` is not a file", .0.display())]
    PathIsNotAFile(PathBuf),
}
impl std::cmp::PartialEq for SchemaInputError {
    fn eq(&self, other: &Self) -> bool {
        use SchemaInputError::*;
        match (self, other) {
            (FileDecodeError {
                file_path: self_file_path,
                err: self_err,
            }, FileDecodeError {
                file_path: other_file_path,
                err: other_err,
            }) => {
                self_file_path == other_file_path
                && self_err == other_err
            },

            (FileReadError {
                file_path: self_file_path,
                err: self_err,
            }, FileReadError {
                file_path: other_file_path,
                err: other_err,
            }) => {
                self_file_path == other_file_path
                && self_err.kind() == other_err.kind()
            },

            (InvalidInput { label: self_label }, InvalidInput { label: other_label }) =>
                self_label == other_label,

            (ParseError {
                source_name: self_source_name,
                err: self_err,
            }, ParseError {
                source_name: other_source_name,
                err: other_err,
            }) => {
                self_source_name == other_source_name
                && self_err == other_err
            },

            (PathIsNotAFile(self_path), PathIsNotAFile(other_path)) =>
                self_path == other_path,

            _ => false,
        }
    }
}
