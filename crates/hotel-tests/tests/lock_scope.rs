//! The service must not hold its lock while a response is being sent.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use hotel_core::{Booking, Config, RawRequest, Request, RequestHandler, RequestKind, RoomNo};
use hotel_service::Service;
use uuid::Uuid;

/// Raw request whose response signals the test and then stalls until released,
/// standing in for a slow client connection.
struct StallingRaw {
    guest: Option<String>,
    responding: mpsc::Sender<()>,
    release: mpsc::Receiver<()>,
}

impl RawRequest for StallingRaw {
    fn read_string(&mut self) -> std::io::Result<String> {
        Ok(self.guest.take().unwrap_or_default())
    }

    fn respond_with_booked(
        self: Box<Self>,
        _room: RoomNo,
        _guest: String,
        _client: Uuid,
        _service: Option<Uuid>,
    ) {
        self.responding.send(()).unwrap();
        self.release.recv().unwrap();
    }

    fn respond_with_err(self: Box<Self>, err: String, _client: Uuid, _service: Option<Uuid>) {
        panic!("unexpected error response: {err}")
    }
    fn respond_with_no_rooms(self: Box<Self>, _client: Uuid, _service: Option<Uuid>) {
        panic!("unexpected response")
    }
    fn respond_with_cancelled(self: Box<Self>, _guest: String, _client: Uuid, _service: Option<Uuid>) {
        panic!("unexpected response")
    }
    fn respond_with_not_found(self: Box<Self>, _guest: String, _client: Uuid, _service: Option<Uuid>) {
        panic!("unexpected response")
    }
    fn respond_with_bookings(
        self: Box<Self>,
        _bookings: &[Booking],
        _client: Uuid,
        _service: Option<Uuid>,
    ) {
        panic!("unexpected response")
    }
}

/// Raw request reporting the assigned room back to the test.
struct RecordingRaw {
    guest: Option<String>,
    booked: mpsc::Sender<RoomNo>,
}

impl RawRequest for RecordingRaw {
    fn read_string(&mut self) -> std::io::Result<String> {
        Ok(self.guest.take().unwrap_or_default())
    }

    fn respond_with_booked(
        self: Box<Self>,
        room: RoomNo,
        _guest: String,
        _client: Uuid,
        _service: Option<Uuid>,
    ) {
        self.booked.send(room).unwrap();
    }

    fn respond_with_err(self: Box<Self>, err: String, _client: Uuid, _service: Option<Uuid>) {
        panic!("unexpected error response: {err}")
    }
    fn respond_with_no_rooms(self: Box<Self>, _client: Uuid, _service: Option<Uuid>) {
        panic!("unexpected response")
    }
    fn respond_with_cancelled(self: Box<Self>, _guest: String, _client: Uuid, _service: Option<Uuid>) {
        panic!("unexpected response")
    }
    fn respond_with_not_found(self: Box<Self>, _guest: String, _client: Uuid, _service: Option<Uuid>) {
        panic!("unexpected response")
    }
    fn respond_with_bookings(
        self: Box<Self>,
        _bookings: &[Booking],
        _client: Uuid,
        _service: Option<Uuid>,
    ) {
        panic!("unexpected response")
    }
}

#[test]
#[ntest::timeout(20_000)]
fn slow_response_does_not_block_other_requests() {
    let service = Service::new(&Config { rooms: 2 });

    let (responding_tx, responding_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel();
    let (booked_tx, booked_rx) = mpsc::channel();

    thread::scope(|s| {
        let service = &service;

        s.spawn(move || {
            let raw = Box::new(StallingRaw {
                guest: Some("Alice".into()),
                responding: responding_tx,
                release: release_rx,
            });
            service.handle(Request::from_raw(
                RequestKind::BookRoom,
                Uuid::new_v4(),
                None,
                raw,
            ));
        });

        // The first booker is stuck mid-response; the ledger lock must
        // already be free again.
        responding_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("first booking never reached its response");

        let raw = Box::new(RecordingRaw {
            guest: Some("Bob".into()),
            booked: booked_tx,
        });
        service.handle(Request::from_raw(
            RequestKind::BookRoom,
            Uuid::new_v4(),
            None,
            raw,
        ));

        let room = booked_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("second booking must complete while the first response stalls");
        assert_eq!(room, 2);

        release_tx.send(()).unwrap();
    });
}
