
use thiserror::Error;

/// Everything a store command can fail with. The `Display` text of each
/// variant is exactly what the output sink shows the user.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{command} requires {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("key does not exist")]
    UnknownKey,
    #[error("member does not exist on key")]
    UnknownMember,
    #[error("member already exists for the key")]
    DuplicateMember,
    #[error("only JSON files are supported")]
    UnsupportedImportPath,
    #[error("invalid file path. The file must have a '.json' extension")]
    UnsupportedExportPath,
    #[error("file not found")]
    FileNotFound,
    #[error("directory not found")]
    DirectoryNotFound,
    #[error("there is nothing to export")]
    NothingToExport,
    #[error("invalid JSON syntax")]
    InvalidJson { detail: String },
    #[error("import failed")]
    ImportFailed { detail: String },
    #[error("export failed")]
    ExportFailed { detail: String },
    #[error("Unknown command")]
    UnknownCommand,
}

impl StoreError {
    pub(crate) fn missing(command: &'static str, expected: &'static str) -> Self {
        Self::MissingArgument { command, expected }
    }

    /// The underlying failure text, where one exists.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::InvalidJson { detail }
            | Self::ImportFailed { detail }
            | Self::ExportFailed { detail } => Some(detail),
            _ => None,
        }
    }

    /// Recovered errors are absorbed at the store layer: shown and logged,
    /// but the command yields no reply and the store state is untouched.
    /// Everything else is a raised user error.
    pub fn recovered(&self) -> bool {
        matches!(
            self,
            Self::InvalidJson { .. } | Self::ImportFailed { .. } | Self::ExportFailed { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
