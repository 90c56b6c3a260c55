use std::io;

use uuid::Uuid;

use crate::{Booking, RoomNo};

/// Kind of the request
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum RequestKind {
    /// Assign the first free room to a guest
    BookRoom,
    /// Free the first room held under a guest's name
    CancelBooking,
    /// Retrieve all current bookings in room order
    GetBookings,
}

/// Request sent from a client
///
/// Wraps the transport-specific [`RawRequest`] so the service never touches
/// HTTP directly.
pub struct Request {
    kind: RequestKind,
    client: Uuid,
    service: Option<Uuid>,
    raw: Box<dyn RawRequest + Send>,
}

impl std::fmt::Debug for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Request")
            .field("kind", &self.kind)
            .field("client", &self.client)
            .field("service", &self.service)
            .field("raw", &format_args!(".."))
            .finish()
    }
}

/// Interface for handling booking requests
pub trait RequestHandler {
    /// Handle a request from a client
    ///
    /// This method may be called concurrently from different threads.
    fn handle(&self, request: Request);

    /// Shut the booking service down
    fn shutdown(self);
}

/// A raw request, implemented by the transport (HTTP server or test mock)
pub trait RawRequest {
    /// Read the request body as a UTF-8 string
    fn read_string(&mut self) -> io::Result<String>;

    /// Respond with an error message
    fn respond_with_err(self: Box<Self>, err: String, client: Uuid, service: Option<Uuid>);
    /// Respond with a successful room assignment
    fn respond_with_booked(
        self: Box<Self>,
        room: RoomNo,
        guest: String,
        client: Uuid,
        service: Option<Uuid>,
    );
    /// Respond that every room is occupied
    fn respond_with_no_rooms(self: Box<Self>, client: Uuid, service: Option<Uuid>);
    /// Respond with a successful cancellation
    fn respond_with_cancelled(self: Box<Self>, guest: String, client: Uuid, service: Option<Uuid>);
    /// Respond that no booking exists under the given name
    fn respond_with_not_found(self: Box<Self>, guest: String, client: Uuid, service: Option<Uuid>);
    /// Respond with the list of current bookings
    fn respond_with_bookings(self: Box<Self>, bookings: &[Booking], client: Uuid, service: Option<Uuid>);
}

impl Request {
    /// Get the request's kind
    #[inline]
    pub fn kind(&self) -> &RequestKind {
        &self.kind
    }

    /// Get the client's id
    ///
    /// If the client did not send the corresponding HTTP header, it is
    /// randomly generated.
    #[inline]
    pub fn client_id(&self) -> Uuid {
        self.client
    }

    /// Set the service id for the response
    #[inline]
    pub fn set_service_id(&mut self, sid: Uuid) {
        self.service = Some(sid);
    }

    /// Read the guest name provided by the client
    ///
    /// Returns [`Err`] if the payload is invalid UTF-8 or in case of a
    /// communication error. This method has side effects and should be
    /// called only once per request.
    #[inline]
    pub fn read_guest_name(&mut self) -> io::Result<String> {
        self.raw.read_string()
    }

    /// Respond with an error indicating an invalid request.
    ///
    /// This method blocks until the response has been sent.
    #[inline]
    pub fn respond_with_err(self, err: impl Into<String>) {
        self.raw
            .respond_with_err(err.into(), self.client, self.service);
    }

    /// Respond with the room assigned to `guest`.
    ///
    /// This method blocks until the response has been sent.
    #[inline]
    pub fn respond_with_booked(self, room: RoomNo, guest: impl Into<String>) {
        self.raw
            .respond_with_booked(room, guest.into(), self.client, self.service);
    }

    /// Respond that no rooms are available.
    ///
    /// Use this method to answer a book request when every room is occupied.
    ///
    /// This method blocks until the response has been sent.
    #[inline]
    pub fn respond_with_no_rooms(self) {
        self.raw.respond_with_no_rooms(self.client, self.service);
    }

    /// Respond that the booking held by `guest` was cancelled.
    ///
    /// This method blocks until the response has been sent.
    #[inline]
    pub fn respond_with_cancelled(self, guest: impl Into<String>) {
        self.raw
            .respond_with_cancelled(guest.into(), self.client, self.service);
    }

    /// Respond that no booking exists under `guest`.
    ///
    /// This method blocks until the response has been sent.
    #[inline]
    pub fn respond_with_not_found(self, guest: impl Into<String>) {
        self.raw
            .respond_with_not_found(guest.into(), self.client, self.service);
    }

    /// Respond with the current bookings in ascending room order.
    #[inline]
    pub fn respond_with_bookings(self, bookings: &[Booking]) {
        self.raw
            .respond_with_bookings(bookings, self.client, self.service);
    }

    /// Create a new request from a [`RawRequest`]
    #[inline]
    pub fn from_raw(
        kind: RequestKind,
        client: Uuid,
        service: Option<Uuid>,
        raw: Box<dyn RawRequest + Send>,
    ) -> Self {
        Self {
            kind,
            client,
            service,
            raw,
        }
    }
}
