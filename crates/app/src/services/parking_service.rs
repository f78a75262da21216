//! Parking service — use-cases for vehicles entering and leaving the facility.
//!
//! Entry and exit are sequences of independent store calls. Nothing is rolled
//! back when a later step fails: a spot can stay occupied without a ticket, or a
//! closed ticket can point at a spot still marked occupied.

use parkit_domain::error::{NotFoundError, ParkitError, PersistenceError, ValidationError};
use parkit_domain::fare::FareCalculator;
use parkit_domain::parking_spot::ParkingSpot;
use parkit_domain::parking_type::ParkingType;
use parkit_domain::ticket::Ticket;
use parkit_domain::time::now;

use crate::ports::{InputReader, Notice, Notifier, ParkingSpotRepository, TicketRepository};

/// Application service orchestrating spot allocation, tickets, and fares.
pub struct ParkingService<S, T, I, N> {
    spots: S,
    tickets: T,
    input: I,
    notifier: N,
    fare_calculator: FareCalculator,
}

impl<S, T, I, N> ParkingService<S, T, I, N>
where
    S: ParkingSpotRepository,
    T: TicketRepository,
    I: InputReader,
    N: Notifier,
{
    /// Create a new service from its collaborators.
    pub fn new(spots: S, tickets: T, input: I, notifier: N) -> Self {
        Self {
            spots,
            tickets,
            input,
            notifier,
            fare_calculator: FareCalculator::new(),
        }
    }

    /// Park an incoming vehicle.
    ///
    /// Failures are logged and end the operation; the issued ticket is
    /// returned on success.
    pub async fn process_incoming_vehicle(&self) -> Option<Ticket> {
        match self.try_process_incoming_vehicle().await {
            Ok(ticket) => Some(ticket),
            Err(err) => {
                tracing::error!(error = ?err, "unable to process incoming vehicle");
                None
            }
        }
    }

    /// Release an exiting vehicle and charge its fare.
    ///
    /// Failures are logged and end the operation; the closed ticket is
    /// returned on success.
    pub async fn process_exiting_vehicle(&self) -> Option<Ticket> {
        match self.try_process_exiting_vehicle().await {
            Ok(ticket) => Some(ticket),
            Err(err) => {
                tracing::error!(error = ?err, "unable to process exiting vehicle");
                None
            }
        }
    }

    /// Allocate a spot, issue a ticket, and welcome the driver.
    ///
    /// Visitors with any earlier ticket are flagged as recurring.
    ///
    /// # Errors
    ///
    /// Returns [`ParkitError::Validation`] for a bad selection or empty
    /// registration number, [`ParkitError::NoSpotAvailable`] when the
    /// facility is full for that type, [`ParkitError::Persistence`] when the
    /// store refuses a write, or a storage/input error from the adapters.
    #[tracing::instrument(skip(self))]
    pub async fn try_process_incoming_vehicle(&self) -> Result<Ticket, ParkitError> {
        let mut spot = self.next_parking_spot_if_available().await?;
        let vehicle_reg_number = self.read_vehicle_reg_number().await?;
        let recurring = self.tickets.count_by_vehicle(&vehicle_reg_number).await? > 0;

        spot.occupy();
        if let Err(err) = persisted(self.spots.update(&spot).await, "ParkingSpot", &spot.id) {
            self.notifier.notify(&Notice::SpotUpdateFailed);
            return Err(err);
        }

        let in_time = now();
        let ticket = Ticket::builder()
            .parking_spot(spot)
            .vehicle_reg_number(vehicle_reg_number)
            .in_time(in_time)
            .discount(recurring)
            .build()?;
        if let Err(err) = persisted(
            self.tickets.create(&ticket).await,
            "Ticket",
            &ticket.vehicle_reg_number,
        ) {
            self.notifier.notify(&Notice::TicketSaveFailed);
            return Err(err);
        }

        tracing::info!(
            spot = %ticket.parking_spot.id,
            vehicle = %ticket.vehicle_reg_number,
            recurring,
            "ticket issued"
        );
        self.notifier.notify(&Notice::TicketIssued {
            spot_id: ticket.parking_spot.id,
            vehicle_reg_number: ticket.vehicle_reg_number.clone(),
            in_time,
            recurring,
        });
        Ok(ticket)
    }

    /// Close the vehicle's open ticket, price it, and free its spot.
    ///
    /// The discount applies when more than one ticket exists for the vehicle,
    /// the one being closed included.
    ///
    /// # Errors
    ///
    /// Returns [`ParkitError::NotFound`] when the vehicle has no open ticket,
    /// [`ParkitError::Validation`] for unusable ticket times,
    /// [`ParkitError::Persistence`] when the store refuses a write, or a
    /// storage/input error from the adapters.
    #[tracing::instrument(skip(self))]
    pub async fn try_process_exiting_vehicle(&self) -> Result<Ticket, ParkitError> {
        let vehicle_reg_number = self.read_vehicle_reg_number().await?;
        let mut ticket = self
            .tickets
            .find_open_by_vehicle(&vehicle_reg_number)
            .await?
            .ok_or_else(|| NotFoundError {
                entity: "Ticket",
                id: vehicle_reg_number.clone(),
            })?;

        let out_time = now();
        ticket.close(out_time)?;
        tracing::info!(%out_time, "setting out time");

        let recurring = self.tickets.count_by_vehicle(&vehicle_reg_number).await? > 1;
        self.fare_calculator.calculate_fare(&mut ticket, recurring)?;
        ticket.discount = recurring;

        if let Err(err) = persisted(
            self.tickets.update(&ticket).await,
            "Ticket",
            &vehicle_reg_number,
        ) {
            self.notifier.notify(&Notice::TicketUpdateFailed);
            return Err(err);
        }

        ticket.parking_spot.release();
        if let Err(err) = persisted(
            self.spots.update(&ticket.parking_spot).await,
            "ParkingSpot",
            &ticket.parking_spot.id,
        ) {
            self.notifier.notify(&Notice::SpotUpdateFailed);
            return Err(err);
        }

        self.notifier.notify(&Notice::FareDue {
            vehicle_reg_number,
            price: ticket.price,
            discount: recurring,
            out_time,
        });
        Ok(ticket)
    }

    /// Ask for the vehicle type and find a free spot for it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSelection`] for a selection outside
    /// the menu, [`ParkitError::NoSpotAvailable`] when every spot of the type
    /// is taken, or a storage/input error from the adapters.
    pub async fn next_parking_spot_if_available(&self) -> Result<ParkingSpot, ParkitError> {
        let parking_type = self.read_vehicle_type().await?;
        let id = self
            .spots
            .next_available(parking_type)
            .await?
            .ok_or(ParkitError::NoSpotAvailable)?;
        tracing::info!(spot = %id, %parking_type, "spot allocated");
        Ok(ParkingSpot::new(id, parking_type, true))
    }

    async fn read_vehicle_type(&self) -> Result<ParkingType, ParkitError> {
        self.notifier.notify(&Notice::VehicleTypePrompt);
        let selection = self.input.read_selection().await?;
        ParkingType::from_selection(selection)
    }

    async fn read_vehicle_reg_number(&self) -> Result<String, ParkitError> {
        self.notifier.notify(&Notice::RegistrationNumberPrompt);
        let raw = self.input.read_vehicle_registration_number().await?;
        let vehicle_reg_number = raw.trim();
        if vehicle_reg_number.is_empty() {
            return Err(ValidationError::EmptyRegistrationNumber.into());
        }
        Ok(vehicle_reg_number.to_string())
    }
}

/// Turn a store's `Ok(false)` into a [`PersistenceError`].
fn persisted(
    written: Result<bool, ParkitError>,
    entity: &'static str,
    id: &impl ToString,
) -> Result<(), ParkitError> {
    if written? {
        Ok(())
    } else {
        Err(PersistenceError {
            entity,
            id: id.to_string(),
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use parkit_domain::fare::{CAR_RATE_PER_HOUR, DISCOUNT_RATE};
    use parkit_domain::id::SpotId;
    use std::collections::{HashMap, VecDeque};
    use std::future::Future;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct SpotState {
        spots: HashMap<SpotId, ParkingSpot>,
        update_calls: usize,
        fail_updates: bool,
    }

    #[derive(Clone, Default)]
    struct InMemorySpotRepo {
        state: Arc<Mutex<SpotState>>,
    }

    impl InMemorySpotRepo {
        fn with_spots(spots: &[(u32, ParkingType)]) -> Self {
            let repo = Self::default();
            {
                let mut state = repo.state.lock().unwrap();
                for (number, parking_type) in spots {
                    let id = SpotId::new(*number).unwrap();
                    state
                        .spots
                        .insert(id, ParkingSpot::new(id, *parking_type, true));
                }
            }
            repo
        }

        fn spot(&self, number: u32) -> ParkingSpot {
            let state = self.state.lock().unwrap();
            state.spots[&SpotId::new(number).unwrap()].clone()
        }

        fn update_calls(&self) -> usize {
            self.state.lock().unwrap().update_calls
        }

        fn fail_updates(&self) {
            self.state.lock().unwrap().fail_updates = true;
        }
    }

    impl ParkingSpotRepository for InMemorySpotRepo {
        fn next_available(
            &self,
            parking_type: ParkingType,
        ) -> impl Future<Output = Result<Option<SpotId>, ParkitError>> + Send {
            let state = self.state.lock().unwrap();
            let result = state
                .spots
                .values()
                .filter(|spot| spot.available && spot.parking_type == parking_type)
                .map(|spot| spot.id)
                .min();
            async move { Ok(result) }
        }

        fn get_by_id(
            &self,
            id: SpotId,
        ) -> impl Future<Output = Result<Option<ParkingSpot>, ParkitError>> + Send {
            let state = self.state.lock().unwrap();
            let result = state.spots.get(&id).cloned();
            async move { Ok(result) }
        }

        fn update(
            &self,
            spot: &ParkingSpot,
        ) -> impl Future<Output = Result<bool, ParkitError>> + Send {
            let mut state = self.state.lock().unwrap();
            state.update_calls += 1;
            let written = !state.fail_updates;
            if written {
                state.spots.insert(spot.id, spot.clone());
            }
            async move { Ok(written) }
        }
    }

    #[derive(Default)]
    struct TicketState {
        tickets: Vec<Ticket>,
        update_calls: usize,
        count_calls: usize,
        fail_creates: bool,
        fail_updates: bool,
    }

    #[derive(Clone, Default)]
    struct InMemoryTicketRepo {
        state: Arc<Mutex<TicketState>>,
    }

    impl InMemoryTicketRepo {
        fn seed(&self, ticket: Ticket) {
            self.state.lock().unwrap().tickets.push(ticket);
        }

        fn tickets(&self) -> Vec<Ticket> {
            self.state.lock().unwrap().tickets.clone()
        }

        fn update_calls(&self) -> usize {
            self.state.lock().unwrap().update_calls
        }

        fn count_calls(&self) -> usize {
            self.state.lock().unwrap().count_calls
        }

        fn fail_updates(&self) {
            self.state.lock().unwrap().fail_updates = true;
        }

        fn fail_creates(&self) {
            self.state.lock().unwrap().fail_creates = true;
        }
    }

    impl TicketRepository for InMemoryTicketRepo {
        fn create(&self, ticket: &Ticket) -> impl Future<Output = Result<bool, ParkitError>> + Send {
            let mut state = self.state.lock().unwrap();
            let written = !state.fail_creates;
            if written {
                state.tickets.push(ticket.clone());
            }
            async move { Ok(written) }
        }

        fn find_open_by_vehicle(
            &self,
            vehicle_reg_number: &str,
        ) -> impl Future<Output = Result<Option<Ticket>, ParkitError>> + Send {
            let state = self.state.lock().unwrap();
            let result = state
                .tickets
                .iter()
                .filter(|t| t.vehicle_reg_number == vehicle_reg_number && t.is_open())
                .max_by_key(|t| t.in_time)
                .cloned();
            async move { Ok(result) }
        }

        fn update(&self, ticket: &Ticket) -> impl Future<Output = Result<bool, ParkitError>> + Send {
            let mut state = self.state.lock().unwrap();
            state.update_calls += 1;
            let written = !state.fail_updates;
            if written
                && let Some(stored) = state.tickets.iter_mut().find(|t| t.id == ticket.id)
            {
                *stored = ticket.clone();
            }
            async move { Ok(written) }
        }

        fn count_by_vehicle(
            &self,
            vehicle_reg_number: &str,
        ) -> impl Future<Output = Result<u32, ParkitError>> + Send {
            let mut state = self.state.lock().unwrap();
            state.count_calls += 1;
            let count = state
                .tickets
                .iter()
                .filter(|t| t.vehicle_reg_number == vehicle_reg_number)
                .count();
            let count = u32::try_from(count).unwrap();
            async move { Ok(count) }
        }
    }

    #[derive(Default)]
    struct ScriptedInput {
        selections: Mutex<VecDeque<i32>>,
        plates: Mutex<VecDeque<String>>,
    }

    impl ScriptedInput {
        fn new(selections: &[i32], plates: &[&str]) -> Self {
            Self {
                selections: Mutex::new(selections.iter().copied().collect()),
                plates: Mutex::new(plates.iter().map(ToString::to_string).collect()),
            }
        }
    }

    fn exhausted() -> ParkitError {
        std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into()
    }

    impl InputReader for ScriptedInput {
        fn read_selection(&self) -> impl Future<Output = Result<i32, ParkitError>> + Send {
            let next = self.selections.lock().unwrap().pop_front();
            async move { next.ok_or_else(exhausted) }
        }

        fn read_vehicle_registration_number(
            &self,
        ) -> impl Future<Output = Result<String, ParkitError>> + Send {
            let next = self.plates.lock().unwrap().pop_front();
            async move { next.ok_or_else(exhausted) }
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        notices: Arc<Mutex<Vec<Notice>>>,
    }

    impl RecordingNotifier {
        fn notices(&self) -> Vec<Notice> {
            self.notices.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: &Notice) {
            self.notices.lock().unwrap().push(notice.clone());
        }
    }

    type TestService =
        ParkingService<InMemorySpotRepo, InMemoryTicketRepo, ScriptedInput, RecordingNotifier>;

    struct Harness {
        spots: InMemorySpotRepo,
        tickets: InMemoryTicketRepo,
        notifier: RecordingNotifier,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                spots: InMemorySpotRepo::with_spots(&[
                    (1, ParkingType::Car),
                    (2, ParkingType::Car),
                    (4, ParkingType::Bike),
                ]),
                tickets: InMemoryTicketRepo::default(),
                notifier: RecordingNotifier::default(),
            }
        }

        fn service(&self, selections: &[i32], plates: &[&str]) -> TestService {
            ParkingService::new(
                self.spots.clone(),
                self.tickets.clone(),
                ScriptedInput::new(selections, plates),
                self.notifier.clone(),
            )
        }

        /// Park `plate` in car spot 1 as if it had entered `minutes` ago.
        fn parked_car(&self, plate: &str, minutes: i64) -> Ticket {
            let mut spot = self.spots.spot(1);
            spot.occupy();
            self.spots.state.lock().unwrap().spots.insert(spot.id, spot.clone());
            let ticket = Ticket::builder()
                .parking_spot(spot)
                .vehicle_reg_number(plate)
                .in_time(now() - Duration::minutes(minutes))
                .build()
                .unwrap();
            self.tickets.seed(ticket.clone());
            ticket
        }

        /// Record an earlier, already closed visit for `plate`.
        fn past_visit(&self, plate: &str) {
            let in_time = now() - Duration::days(3);
            let ticket = Ticket::builder()
                .parking_spot(self.spots.spot(2))
                .vehicle_reg_number(plate)
                .in_time(in_time)
                .out_time(in_time + Duration::hours(2))
                .price(3.0)
                .build()
                .unwrap();
            self.tickets.seed(ticket);
        }
    }

    #[tokio::test]
    async fn should_issue_ticket_and_occupy_spot_when_car_enters() {
        let h = Harness::new();
        let svc = h.service(&[1], &["ABCDEF"]);

        let ticket = svc.process_incoming_vehicle().await.unwrap();

        assert_eq!(ticket.parking_spot.id.get(), 1);
        assert_eq!(ticket.parking_spot.parking_type, ParkingType::Car);
        assert!(ticket.is_open());
        assert!(ticket.price.abs() < f64::EPSILON);
        assert!(!ticket.discount);
        assert!(!h.spots.spot(1).available);
        assert_eq!(h.spots.update_calls(), 1);
        assert_eq!(h.tickets.tickets().len(), 1);
        assert!(matches!(
            h.notifier.notices().last(),
            Some(Notice::TicketIssued {
                recurring: false,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn should_prompt_for_type_then_registration_when_vehicle_enters() {
        let h = Harness::new();
        let svc = h.service(&[2], &["BIKE-1"]);

        svc.process_incoming_vehicle().await.unwrap();

        let notices = h.notifier.notices();
        assert_eq!(notices[0], Notice::VehicleTypePrompt);
        assert_eq!(notices[1], Notice::RegistrationNumberPrompt);
        assert!(!h.spots.spot(4).available);
    }

    #[tokio::test]
    async fn should_flag_recurring_visitor_when_any_prior_ticket_exists() {
        let h = Harness::new();
        h.past_visit("ABCDEF");
        let svc = h.service(&[1], &["ABCDEF"]);

        let ticket = svc.process_incoming_vehicle().await.unwrap();

        assert!(ticket.discount);
        assert!(matches!(
            h.notifier.notices().last(),
            Some(Notice::TicketIssued {
                recurring: true,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn should_trim_registration_number_when_vehicle_enters() {
        let h = Harness::new();
        let svc = h.service(&[1], &["  ABCDEF \n"]);

        let ticket = svc.process_incoming_vehicle().await.unwrap();
        assert_eq!(ticket.vehicle_reg_number, "ABCDEF");
    }

    #[tokio::test]
    async fn should_create_nothing_when_no_spot_available() {
        let h = Harness::new();
        h.spots.state.lock().unwrap().spots.clear();
        let svc = h.service(&[1], &["ABCDEF"]);

        let result = svc.process_incoming_vehicle().await;

        assert!(result.is_none());
        assert!(h.tickets.tickets().is_empty());
        assert_eq!(h.spots.update_calls(), 0);
    }

    #[tokio::test]
    async fn should_report_full_facility_as_no_spot_available() {
        let h = Harness::new();
        let svc = h.service(&[2, 2], &["B1", "B2"]);

        svc.try_process_incoming_vehicle().await.unwrap();
        let result = svc.try_process_incoming_vehicle().await;

        assert!(matches!(result, Err(ParkitError::NoSpotAvailable)));
        assert_eq!(h.tickets.tickets().len(), 1);
    }

    #[tokio::test]
    async fn should_reject_selection_outside_menu() {
        let h = Harness::new();
        let svc = h.service(&[3], &["ABCDEF"]);

        let result = svc.try_process_incoming_vehicle().await;

        assert!(matches!(
            result,
            Err(ParkitError::Validation(ValidationError::InvalidSelection(3)))
        ));
        assert_eq!(h.spots.update_calls(), 0);
        assert_eq!(h.tickets.count_calls(), 0);
    }

    #[tokio::test]
    async fn should_reject_empty_registration_before_touching_spot() {
        let h = Harness::new();
        let svc = h.service(&[1], &["   "]);

        let result = svc.try_process_incoming_vehicle().await;

        assert!(matches!(
            result,
            Err(ParkitError::Validation(
                ValidationError::EmptyRegistrationNumber
            ))
        ));
        assert!(h.spots.spot(1).available);
        assert_eq!(h.spots.update_calls(), 0);
    }

    #[tokio::test]
    async fn should_not_issue_ticket_when_spot_update_fails() {
        let h = Harness::new();
        h.spots.fail_updates();
        let svc = h.service(&[1], &["ABCDEF"]);

        let result = svc.try_process_incoming_vehicle().await;

        assert!(matches!(result, Err(ParkitError::Persistence(_))));
        assert!(h.tickets.tickets().is_empty());
        assert_eq!(h.notifier.notices().last(), Some(&Notice::SpotUpdateFailed));
    }

    #[tokio::test]
    async fn should_keep_spot_occupied_when_ticket_save_fails() {
        let h = Harness::new();
        h.tickets.fail_creates();
        let svc = h.service(&[1], &["ABCDEF"]);

        let result = svc.try_process_incoming_vehicle().await;

        assert!(matches!(result, Err(ParkitError::Persistence(_))));
        assert!(!h.spots.spot(1).available);
        assert_eq!(h.spots.update_calls(), 1);
        assert!(h.tickets.tickets().is_empty());
        let notices = h.notifier.notices();
        assert!(
            !notices
                .iter()
                .any(|notice| matches!(notice, Notice::TicketIssued { .. }))
        );
        assert_eq!(notices.last(), Some(&Notice::TicketSaveFailed));
    }

    #[tokio::test]
    async fn should_report_entry_failure_to_attendant_when_store_refuses_write() {
        let h = Harness::new();
        h.spots.fail_updates();
        let svc = h.service(&[1], &["ABCDEF"]);

        let result = svc.process_incoming_vehicle().await;

        assert!(result.is_none());
        assert_eq!(
            h.notifier.notices(),
            vec![
                Notice::VehicleTypePrompt,
                Notice::RegistrationNumberPrompt,
                Notice::SpotUpdateFailed,
            ]
        );
    }

    #[tokio::test]
    async fn should_charge_fare_and_free_spot_when_vehicle_exits() {
        let h = Harness::new();
        h.parked_car("ABCDEF", 60);
        let svc = h.service(&[], &["ABCDEF"]);

        let ticket = svc.process_exiting_vehicle().await.unwrap();

        assert!(!ticket.is_open());
        assert!(!ticket.discount);
        assert!((ticket.price - CAR_RATE_PER_HOUR).abs() < 0.01);
        assert!(h.spots.spot(1).available);
        assert_eq!(h.spots.update_calls(), 1);
        assert_eq!(h.tickets.update_calls(), 1);
        assert_eq!(h.tickets.count_calls(), 1);

        let stored = &h.tickets.tickets()[0];
        assert_eq!(stored.out_time, ticket.out_time);
        assert!(matches!(
            h.notifier.notices().last(),
            Some(Notice::FareDue {
                discount: false,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn should_not_discount_first_visit_on_exit() {
        let h = Harness::new();
        h.parked_car("ABCDEF", 90);
        let svc = h.service(&[], &["ABCDEF"]);

        let ticket = svc.try_process_exiting_vehicle().await.unwrap();

        assert!(!ticket.discount);
        assert!((ticket.price - 1.5 * CAR_RATE_PER_HOUR).abs() < 0.01);
    }

    #[tokio::test]
    async fn should_discount_when_more_than_one_ticket_on_exit() {
        let h = Harness::new();
        h.past_visit("ABCDEF");
        h.parked_car("ABCDEF", 60);
        let svc = h.service(&[], &["ABCDEF"]);

        let ticket = svc.try_process_exiting_vehicle().await.unwrap();

        assert!(ticket.discount);
        assert!((ticket.price - CAR_RATE_PER_HOUR * DISCOUNT_RATE).abs() < 0.01);
        assert!(matches!(
            h.notifier.notices().last(),
            Some(Notice::FareDue { discount: true, .. })
        ));
    }

    #[tokio::test]
    async fn should_charge_nothing_within_grace_period() {
        let h = Harness::new();
        h.parked_car("ABCDEF", 20);
        let svc = h.service(&[], &["ABCDEF"]);

        let ticket = svc.try_process_exiting_vehicle().await.unwrap();
        assert!(ticket.price.abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn should_abort_exit_when_ticket_not_found() {
        let h = Harness::new();
        let svc = h.service(&[], &["UNKNOWN"]);

        let result = svc.try_process_exiting_vehicle().await;

        assert!(matches!(result, Err(ParkitError::NotFound(_))));
        assert_eq!(h.tickets.update_calls(), 0);
        assert_eq!(h.spots.update_calls(), 0);
    }

    #[tokio::test]
    async fn should_ignore_closed_tickets_when_vehicle_exits() {
        let h = Harness::new();
        h.past_visit("ABCDEF");
        let svc = h.service(&[], &["ABCDEF"]);

        assert!(svc.process_exiting_vehicle().await.is_none());
        assert_eq!(h.tickets.update_calls(), 0);
    }

    #[tokio::test]
    async fn should_leave_spot_untouched_when_ticket_update_fails() {
        let h = Harness::new();
        h.parked_car("ABCDEF", 60);
        h.tickets.fail_updates();
        let svc = h.service(&[], &["ABCDEF"]);

        let result = svc.process_exiting_vehicle().await;

        assert!(result.is_none());
        assert_eq!(h.tickets.update_calls(), 1);
        assert_eq!(h.spots.update_calls(), 0);
        assert!(!h.spots.spot(1).available);
        assert_eq!(
            h.notifier.notices().last(),
            Some(&Notice::TicketUpdateFailed)
        );
    }

    #[tokio::test]
    async fn should_keep_ticket_closed_when_spot_update_fails() {
        let h = Harness::new();
        h.parked_car("ABCDEF", 60);
        h.spots.fail_updates();
        let svc = h.service(&[], &["ABCDEF"]);

        let result = svc.try_process_exiting_vehicle().await;

        assert!(matches!(result, Err(ParkitError::Persistence(_))));
        assert!(!h.tickets.tickets()[0].is_open());
        assert_eq!(h.notifier.notices().last(), Some(&Notice::SpotUpdateFailed));
    }

    #[tokio::test]
    async fn should_swallow_input_errors_at_operation_boundary() {
        let h = Harness::new();
        let svc = h.service(&[], &[]);

        assert!(svc.process_incoming_vehicle().await.is_none());
        assert!(svc.process_exiting_vehicle().await.is_none());
        assert!(h.tickets.tickets().is_empty());
    }
}
