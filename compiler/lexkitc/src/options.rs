//! Options of the `lex` command.

use lexkit_brace::BraceOptions;

/// Parsed `lexkit lex` arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexOptions {
    pub path: String,
    /// Print byte ranges next to line and column.
    pub offsets: bool,
    pub comments: bool,
    pub quotes: bool,
    /// Report every lexical error instead of stopping at the first one.
    pub keep_going: bool,
}

impl LexOptions {
    pub fn new(path: impl Into<String>) -> Self {
        LexOptions {
            path: path.into(),
            offsets: false,
            comments: true,
            quotes: true,
            keep_going: false,
        }
    }

    pub fn grammar_options(&self) -> BraceOptions {
        BraceOptions {
            line_comments: self.comments,
            quoted_strings: self.quotes,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("missing file path")]
    MissingPath,
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

/// Parse the arguments following `lex`. Flags may appear before or after the
/// path.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, UsageError> {
    let mut path: Option<&str> = None;
    let mut options = LexOptions::new(String::new());

    for arg in args {
        match arg.as_str() {
            "--offsets" => options.offsets = true,
            "--no-comments" => options.comments = false,
            "--no-quotes" => options.quotes = false,
            "--keep-going" | "-k" => options.keep_going = true,
            flag if flag.starts_with('-') && flag != "-" => {
                return Err(UsageError::UnknownOption(flag.to_owned()));
            }
            file if path.is_none() => path = Some(file),
            extra => return Err(UsageError::UnexpectedArgument(extra.to_owned())),
        }
    }

    let Some(path) = path else {
        return Err(UsageError::MissingPath);
    };
    options.path = path.to_owned();
    Ok(options)
}
