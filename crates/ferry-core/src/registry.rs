//! # Traveler Registry
//!
//! In-memory store of the travelers registered in the current session.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Registry Operations                                  │
//! │                                                                         │
//! │  Caller Action            Registry                 Side Effect          │
//! │  ─────────────            ────────                 ───────────          │
//! │                                                                         │
//! │  Submit form ───────────► register() ────────────► render ticket       │
//! │                           (id = next_id++)          (Not Paid)          │
//! │                                                                         │
//! │  Admin "Mark as Paid" ──► mark_paid() ───────────► re-render ticket    │
//! │                           (Unpaid → Paid)           (✓ PAID, time)      │
//! │                                                                         │
//! │  Admin table ───────────► list_all() / find()       (read only)         │
//! │                                                                         │
//! │  NOTE: Nothing is ever deleted and nothing survives the process.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rendering Failures
//! A failed render never undoes a registration or a payment. The failure is
//! logged and kept on the record (`ticket_error`) so the desk can show it
//! next to the traveler.

use chrono::{Local, NaiveDateTime};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::departure::DepartureTime;
use crate::fare::{compute_breakdown, FareBreakdown};
use crate::money::Money;
use crate::ticket::{TicketPayload, TicketRenderer, TicketRequest};
use crate::types::{PassengerStatus, PaymentStatus, Traveler, TravelerId, TravelerSnapshot};
use crate::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_TICKET_TITLE, FIRST_TRAVELER_ID};

/// Settings the registry needs to describe tickets.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryConfig {
    /// Directory that receives `traveler_<id>_ticket.png` files.
    pub ticket_dir: PathBuf,
    pub ticket_title: String,
    pub currency_symbol: String,
    /// Summer mode: 10% off the base fare for new registrations.
    pub summer_season: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            ticket_dir: PathBuf::from("qr_codes"),
            ticket_title: DEFAULT_TICKET_TITLE.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            summer_season: false,
        }
    }
}

/// The traveler collection plus the id counter.
///
/// ## Invariants
/// - Ids start at 101 and are handed out in registration order, never reused
/// - `fare` is fixed at registration
/// - Payment only moves `Unpaid → Paid`
pub struct TravelerRegistry<R: TicketRenderer> {
    renderer: R,
    config: RegistryConfig,
    travelers: Vec<Traveler>,
    next_id: TravelerId,
    clock: fn() -> NaiveDateTime,
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl<R: TicketRenderer> TravelerRegistry<R> {
    /// Creates an empty registry.
    pub fn new(renderer: R, config: RegistryConfig) -> Self {
        TravelerRegistry {
            renderer,
            config,
            travelers: Vec::new(),
            next_id: FIRST_TRAVELER_ID,
            clock: local_now,
        }
    }

    /// Replaces the clock used for the ticket's issue date.
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn is_summer_season(&self) -> bool {
        self.config.summer_season
    }

    /// Toggles summer mode. Only affects travelers registered afterwards.
    pub fn set_summer_season(&mut self, enabled: bool) {
        info!(enabled, "Summer season toggled");
        self.config.summer_season = enabled;
    }

    /// Image path of a traveler's ticket: `<ticket_dir>/traveler_<id>_ticket.png`.
    pub fn ticket_path(&self, id: TravelerId) -> PathBuf {
        self.config
            .ticket_dir
            .join(format!("traveler_{}_ticket.png", id))
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Registers a traveler and renders the first version of the ticket.
    ///
    /// ## Flow
    /// ```text
    /// next id ──► compute fare ──► store record ──► render ticket
    ///                                                   │
    ///                                    failure kept on record, not fatal
    /// ```
    ///
    /// No duplicate detection: the same name may register any number of
    /// times as distinct travelers.
    pub fn register(
        &mut self,
        name: &str,
        status: PassengerStatus,
        is_local: bool,
        destination: &str,
        is_pwd: bool,
        departure: Option<DepartureTime>,
    ) -> (TravelerId, PathBuf) {
        let id = self.next_id;
        self.next_id += 1;

        let summer_fare = self.config.summer_season;
        let fare = compute_breakdown(status, is_local, is_pwd, summer_fare);
        let ticket_image_path = self.ticket_path(id);

        let mut traveler = Traveler {
            id,
            name: name.to_string(),
            status,
            is_local,
            destination: destination.to_string(),
            is_pwd,
            summer_fare,
            fare: fare.total,
            payment: PaymentStatus::Unpaid,
            ticket_image_path: ticket_image_path.clone(),
            ticket_error: None,
        };

        let ticket_error = self.render_ticket(&traveler, fare, departure);
        traveler.ticket_error = ticket_error;
        info!(
            traveler_id = id,
            status = %status,
            fare = %fare.total,
            "Traveler registered"
        );

        self.travelers.push(traveler);
        (id, ticket_image_path)
    }

    /// Marks a traveler as paid and re-renders the ticket.
    ///
    /// ## Returns
    /// - `true` if the traveler exists (also when it was already paid)
    /// - `false` for an unknown id; nothing is touched
    ///
    /// The fare figures are recomputed from the stored inputs, including the
    /// season flag that was in effect at registration, so the ticket shows
    /// the same total as before.
    pub fn mark_paid(&mut self, id: TravelerId, departure: Option<DepartureTime>) -> bool {
        let Some(index) = self.travelers.iter().position(|t| t.id == id) else {
            debug!(traveler_id = id, "mark_paid: unknown traveler");
            return false;
        };

        self.travelers[index].payment = PaymentStatus::Paid;

        let traveler = &self.travelers[index];
        let fare = compute_breakdown(
            traveler.status,
            traveler.is_local,
            traveler.is_pwd,
            traveler.summer_fare,
        );
        debug_assert_eq!(fare.total, traveler.fare, "recomputed fare drifted");

        let ticket_error = self.render_ticket(traveler, fare, departure);
        self.travelers[index].ticket_error = ticket_error;

        info!(traveler_id = id, "Traveler marked as paid");
        true
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All travelers in registration order, as value copies.
    pub fn list_all(&self) -> Vec<TravelerSnapshot> {
        self.travelers.iter().map(Traveler::snapshot).collect()
    }

    pub fn find(&self, id: TravelerId) -> Option<TravelerSnapshot> {
        self.travelers
            .iter()
            .find(|t| t.id == id)
            .map(Traveler::snapshot)
    }

    pub fn len(&self) -> usize {
        self.travelers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.travelers.is_empty()
    }

    pub fn paid_count(&self) -> usize {
        self.travelers.iter().filter(|t| t.is_paid()).count()
    }

    /// Sum of all stored fares, paid or not.
    pub fn total_fares(&self) -> Money {
        self.travelers.iter().map(Traveler::fare).sum()
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    fn render_ticket(
        &self,
        traveler: &Traveler,
        fare: FareBreakdown,
        departure: Option<DepartureTime>,
    ) -> Option<String> {
        let request = TicketRequest {
            traveler_id: traveler.id,
            path: traveler.ticket_image_path.clone(),
            payload: TicketPayload {
                title: self.config.ticket_title.clone(),
                currency_symbol: self.config.currency_symbol.clone(),
                traveler_id: traveler.id,
                name: traveler.name.clone(),
                status: traveler.status,
                is_local: traveler.is_local,
                is_pwd: traveler.is_pwd,
                destination: traveler.destination.clone(),
                departure,
                fare: FareBreakdown {
                    total: traveler.fare,
                    ..fare
                },
                payment: traveler.payment,
                issued_at: (self.clock)(),
            },
        };

        match self.renderer.render(&request) {
            Ok(()) => {
                debug!(traveler_id = traveler.id, path = ?request.path, "Ticket rendered");
                None
            }
            Err(e) => {
                warn!(traveler_id = traveler.id, error = %e, "Ticket rendering failed");
                Some(e.to_string())
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
