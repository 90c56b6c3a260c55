//! HTTP request implementation
//!
//! Renders the typed booking outcomes into the human-readable message text
//! the client prints verbatim.

use std::io;
use std::io::{Read, Write};

use hotel_core::{messages, Booking, RequestKind, RoomNo};
use tiny_http::Response;
use uuid::Uuid;

/// Length of any hyphenated UUID
const UUID_LEN: usize = b"a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8".len();

struct HTTPRequest(tiny_http::Request);

impl hotel_core::RawRequest for HTTPRequest {
    fn read_string(&mut self) -> io::Result<String> {
        let mut s = String::with_capacity(self.0.body_length().unwrap_or(0));
        self.0.as_reader().read_to_string(&mut s)?;
        Ok(s)
    }

    fn respond_with_err(self: Box<Self>, err: String, client: Uuid, service: Option<Uuid>) {
        self.respond(
            Response::from_string(err).with_status_code(400),
            client,
            service,
        )
    }

    fn respond_with_booked(
        self: Box<Self>,
        room: RoomNo,
        guest: String,
        client: Uuid,
        service: Option<Uuid>,
    ) {
        self.respond(
            Response::from_string(messages::booked(room, &guest)).with_status_code(200),
            client,
            service,
        )
    }

    fn respond_with_no_rooms(self: Box<Self>, client: Uuid, service: Option<Uuid>) {
        self.respond(
            Response::from_string(messages::NO_ROOMS_AVAILABLE).with_status_code(200),
            client,
            service,
        )
    }

    fn respond_with_cancelled(self: Box<Self>, guest: String, client: Uuid, service: Option<Uuid>) {
        self.respond(
            Response::from_string(messages::cancelled(&guest)).with_status_code(200),
            client,
            service,
        )
    }

    fn respond_with_not_found(self: Box<Self>, guest: String, client: Uuid, service: Option<Uuid>) {
        self.respond(
            Response::from_string(messages::not_found(&guest)).with_status_code(200),
            client,
            service,
        )
    }

    fn respond_with_bookings(
        self: Box<Self>,
        bookings: &[Booking],
        client: Uuid,
        service: Option<Uuid>,
    ) {
        let mut s = Vec::<u8>::new();
        for booking in bookings {
            writeln!(&mut s, "{booking}").unwrap();
        }

        self.respond(Response::from_data(s).with_status_code(200), client, service)
    }
}

impl HTTPRequest {
    /// Add the X-Client-Id and X-Service-Id headers to `res` and send it
    fn respond<R: Read>(self, mut res: Response<R>, client: Uuid, service: Option<Uuid>) {
        let mut cid = Vec::<u8>::with_capacity(UUID_LEN);
        write!(&mut cid, "{}", client.hyphenated()).unwrap();
        res.add_header(tiny_http::Header::from_bytes(b"X-Client-Id", cid).unwrap());

        if let Some(service) = service {
            let mut sid = Vec::<u8>::with_capacity(UUID_LEN);
            write!(&mut sid, "{}", service.hyphenated()).unwrap();
            res.add_header(tiny_http::Header::from_bytes(b"X-Service-Id", sid).unwrap());
        }

        self.0.respond(res).expect("HTTP response failed");
    }
}

/// Parse the given HTTP request
///
/// If [`None`] is returned, the request was already answered with a
/// corresponding error message.
pub fn parse(rq: tiny_http::Request) -> Option<hotel_core::Request> {
    use tiny_http::Method::*;

    let kind = match (rq.method(), rq.url()) {
        (Post, "/api/book_room") => RequestKind::BookRoom,
        (Post, "/api/cancel_booking") => RequestKind::CancelBooking,
        (Get, "/api/bookings") => RequestKind::GetBookings,
        (Get, _) | (Post, _) => {
            let res = Response::from_string(
                "could not find the service you are looking for!

Valid requests are:
  POST /api/book_room
  POST /api/cancel_booking
  GET  /api/bookings",
            )
            .with_status_code(404);
            rq.respond(res).expect("HTTP response failed");
            return None;
        }
        _ => {
            rq.respond(Response::empty(405)).expect("HTTP response failed");
            return None;
        }
    };

    let mut cid = None;
    for hdr in rq.headers() {
        if hdr.field.equiv("x-client-id") {
            if let Ok(id) = Uuid::parse_str(hdr.value.as_str()) {
                cid = Some(id);
            }
        }
    }

    Some(hotel_core::Request::from_raw(
        kind,
        cid.unwrap_or_else(Uuid::new_v4),
        None,
        Box::new(HTTPRequest(rq)),
    ))
}
