use std::{fmt::Display, io::Error, process::Command};

pub enum CommandOutputError {
    OutputErrorRaw(Vec<u8>),
    OutputError(String),
    CommandError(Error),
}

impl Display for CommandOutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandOutputError::OutputErrorRaw(output) => {
                write!(f, "Output could not be decoded: {:?}", output)
            }
            CommandOutputError::OutputError(output) => write!(f, "{}", output),
            CommandOutputError::CommandError(e) => write!(f, "{}", e),
        }
    }
}

/// Runs `command` and returns its stdout. A non-zero exit status yields the stderr as error.
pub fn execute_command(mut command: Command) -> Result<String, CommandOutputError> {
    log::debug!("Executing command: {:?}", command);

    let output_raw = command.output().map_err(CommandOutputError::CommandError)?;
    if !output_raw.status.success() {
        let output = output_raw.stderr;
        return Err(String::from_utf8(output.clone())
            .map(CommandOutputError::OutputError)
            .unwrap_or(CommandOutputError::OutputErrorRaw(output)));
    }

    String::from_utf8(output_raw.stdout)
        .map_err(|e| CommandOutputError::OutputErrorRaw(e.into_bytes()))
}
