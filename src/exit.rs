/// Process exit codes, following the BSD `sysexits.h` conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    /// Bad command-line arguments.
    Usage = 64,
    /// The script has lexical errors.
    DataError = 65,
    /// The script file does not exist.
    NoInput = 66,
    /// Unhandled failure.
    Software = 70,
    IoError = 74,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        std::process::ExitCode::from(status.code())
    }
}
