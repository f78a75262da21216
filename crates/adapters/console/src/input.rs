//! Line-oriented [`InputReader`].

use std::future::Future;
use std::io::{self, BufRead};
use std::sync::Mutex;

use parkit_app::ports::InputReader;
use parkit_domain::error::{ParkitError, ValidationError};

/// Selection reported when a line is not a number.
pub const INVALID_SELECTION: i32 = -1;

/// Reads one answer per line. Reads block the calling thread.
pub struct LineInputReader<R> {
    reader: Mutex<R>,
}

impl LineInputReader<io::BufReader<io::Stdin>> {
    /// Reader over the process's standard input.
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(io::BufReader::new(io::stdin()))
    }
}

impl<R: BufRead> LineInputReader<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader: Mutex::new(reader),
        }
    }

    fn read_line(&self) -> Result<String, ParkitError> {
        let mut reader = self
            .reader
            .lock()
            .map_err(|_| io::Error::other("input reader poisoned"))?;
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
        }
        Ok(line)
    }

    fn selection(&self) -> Result<i32, ParkitError> {
        let line = self.read_line()?;
        Ok(line.trim().parse().unwrap_or_else(|err| {
            tracing::error!(input = line.trim(), error = %err, "error while reading user input from shell");
            INVALID_SELECTION
        }))
    }

    fn registration_number(&self) -> Result<String, ParkitError> {
        let line = self.read_line()?;
        let vehicle_reg_number = line.trim();
        if vehicle_reg_number.is_empty() {
            tracing::error!("error while reading user input from shell");
            return Err(ValidationError::EmptyRegistrationNumber.into());
        }
        Ok(vehicle_reg_number.to_string())
    }
}

impl<R: BufRead + Send> InputReader for LineInputReader<R> {
    fn read_selection(&self) -> impl Future<Output = Result<i32, ParkitError>> + Send {
        let result = self.selection();
        async move { result }
    }

    fn read_vehicle_registration_number(
        &self,
    ) -> impl Future<Output = Result<String, ParkitError>> + Send {
        let result = self.registration_number();
        async move { result }
    }
}
