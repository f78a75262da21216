//! Interactive attendant shell — the main menu loop.

use std::io::Write;

use parkit_adapter_console::ConsoleNotifier;
use parkit_app::ports::{InputReader, Notifier, ParkingSpotRepository, TicketRepository};
use parkit_app::services::parking_service::ParkingService;

const MENU: [&str; 4] = [
    "Please select an option. Simply enter the number to choose an action",
    "1 New Vehicle Entering - Allocate Parking Space",
    "2 Vehicle Exiting - Generate Ticket Price",
    "3 Shutdown System",
];

/// Serve menu choices until the attendant shuts the system down or input ends.
pub async fn run<S, T, I, N, M, W>(
    service: &ParkingService<S, T, I, N>,
    menu: &M,
    console: &ConsoleNotifier<W>,
) where
    S: ParkingSpotRepository,
    T: TicketRepository,
    I: InputReader,
    N: Notifier,
    M: InputReader,
    W: Write,
{
    console.say(&["Welcome to Parking System!"]);
    loop {
        console.say(&MENU);
        let option = match menu.read_selection().await {
            Ok(option) => option,
            Err(err) => {
                tracing::warn!(error = ?err, "stopped reading menu selections");
                break;
            }
        };
        match option {
            1 => {
                service.process_incoming_vehicle().await;
            }
            2 => {
                service.process_exiting_vehicle().await;
            }
            3 => {
                console.say(&["Exiting from the system!"]);
                break;
            }
            _ => console.say(&[
                "Unsupported option. Please enter a number corresponding to the provided menu",
            ]),
        }
    }
}
