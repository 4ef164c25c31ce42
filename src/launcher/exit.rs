use std::process::ExitCode;

use anyhow::Error;

use crate::lib::errors::LaunchError;

/// Bundles a runtime error message with the exit code to report.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    /// Propagate the failing child's exit code where one was reported.
    pub fn from_launch_error(err: LaunchError) -> Self {
        let exit_code = err
            .exit_code()
            .and_then(|code| u8::try_from(code).ok())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::FAILURE);
        Self {
            message: err.to_string(),
            exit_code,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}
