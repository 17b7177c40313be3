#![forbid(unsafe_code)]

use rolodex_contracts::save::{WriteRecord, WriteTarget};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchError {
    EditorUnavailable,
    Rejected(String),
}

impl std::fmt::Display for LaunchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EditorUnavailable => write!(f, "contact editor unavailable"),
            Self::Rejected(reason) => write!(f, "contact editor rejected launch: {reason}"),
        }
    }
}

impl std::error::Error for LaunchError {}

/// The device's compose/edit surface. A successful launch means the request
/// was handed to the editor, not that the user confirmed the save.
pub trait EditorLauncher {
    fn launch(&mut self, target: &WriteTarget, records: &[WriteRecord]) -> Result<(), LaunchError>;
}

/// Launcher that records what it was asked to open. Useful for host
/// integration tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct RecordingEditorLauncher {
    pub launches: Vec<(WriteTarget, Vec<WriteRecord>)>,
}

impl EditorLauncher for RecordingEditorLauncher {
    fn launch(&mut self, target: &WriteTarget, records: &[WriteRecord]) -> Result<(), LaunchError> {
        self.launches.push((target.clone(), records.to_vec()));
        Ok(())
    }
}
