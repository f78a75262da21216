//! Text rendering of [`Notice`]s.

use std::io::{self, Write};
use std::sync::Mutex;

use parkit_app::ports::{Notice, Notifier};
use parkit_domain::time::Timestamp;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

fn format_time(ts: Timestamp) -> String {
    ts.format(TIME_FORMAT).to_string()
}

/// Lines shown to the attendant for `notice`.
#[must_use]
pub fn render(notice: &Notice) -> Vec<String> {
    match notice {
        Notice::VehicleTypePrompt => vec![
            "Please select vehicle type from menu".to_string(),
            "1 CAR".to_string(),
            "2 BIKE".to_string(),
        ],
        Notice::RegistrationNumberPrompt => {
            vec!["Please type the vehicle registration number and press enter key".to_string()]
        }
        Notice::TicketIssued {
            spot_id,
            vehicle_reg_number,
            in_time,
            recurring,
        } => {
            let welcome = if *recurring {
                "Welcome back! As a recurring user, you are eligible for discounts."
            } else {
                "Welcome! If you visit again, you may be eligible for discounts."
            };
            vec![
                "Generated Ticket and saved in DB".to_string(),
                format!("Please park your vehicle in spot number:{spot_id}"),
                format!(
                    "Recorded in-time for vehicle number:{vehicle_reg_number} is:{}",
                    format_time(*in_time)
                ),
                welcome.to_string(),
            ]
        }
        Notice::FareDue {
            vehicle_reg_number,
            price,
            discount,
            out_time,
        } => {
            let mut lines = vec![format!("Please pay the parking fare: {price:.2}")];
            if *discount {
                lines.push("You received a 5% discount!".to_string());
            }
            lines.push(format!(
                "Recorded out-time for vehicle number: {vehicle_reg_number} is: {}",
                format_time(*out_time)
            ));
            lines
        }
        Notice::TicketSaveFailed => {
            vec!["Unable to save ticket information. Error occurred".to_string()]
        }
        Notice::TicketUpdateFailed => {
            vec!["Unable to update ticket information. Error occurred".to_string()]
        }
        Notice::SpotUpdateFailed => {
            vec!["Unable to update parking spot availability. Error occurred".to_string()]
        }
    }
}

/// Prints notices, one message per line.
pub struct ConsoleNotifier<W> {
    writer: Mutex<W>,
}

impl ConsoleNotifier<io::Stdout> {
    /// Notifier writing to the process's standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleNotifier<W> {
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Print free-form lines, such as the shell's menu.
    pub fn say<S: AsRef<str>>(&self, lines: &[S]) {
        let Ok(mut writer) = self.writer.lock() else {
            tracing::warn!("console writer poisoned");
            return;
        };
        let result = lines
            .iter()
            .try_for_each(|line| writeln!(writer, "{}", line.as_ref()))
            .and_then(|()| writer.flush());
        if let Err(err) = result {
            tracing::warn!(error = %err, "failed to write to console");
        }
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn notify(&self, notice: &Notice) {
        self.say(&render(notice));
    }
}
