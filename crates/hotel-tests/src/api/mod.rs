use std::sync::Arc;

use eyre::Result;
use flume::Sender;
use hotel_core::{BookOutcome, Booking, CancelOutcome, RequestKind};
use nanorand::Rng;
use thiserror::Error;
use tokio::sync::oneshot;
use uuid::Uuid;

pub mod mock;

#[derive(Debug, Error)]
#[error("Error 400: {0}")]
pub struct ApiError(String);

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug)]
enum Response {
    Error {
        msg: String,
        service_id: Option<Uuid>,
        client_id: Uuid,
    },
    Booked {
        room: u32,
        service_id: Option<Uuid>,
        client_id: Uuid,
    },
    NoRooms {
        service_id: Option<Uuid>,
        client_id: Uuid,
    },
    Cancelled {
        service_id: Option<Uuid>,
        client_id: Uuid,
    },
    NotFound {
        service_id: Option<Uuid>,
        client_id: Uuid,
    },
    Bookings(Vec<Booking>),
}

struct RequestMsg {
    kind: RequestKind,
    guest: Option<String>,
    client_id: Uuid,
    response_channel: oneshot::Sender<Response>,
}

pub struct Api {
    /// One channel per mock transport worker thread
    channels: Arc<Vec<Sender<RequestMsg>>>,

    my_channel: Sender<RequestMsg>,
    my_index: usize,
}

impl Api {
    fn new(channels: Vec<Sender<RequestMsg>>) -> Self {
        let my_channel = channels[0].clone();
        Self {
            channels: Arc::new(channels),
            my_channel,
            my_index: 0,
        }
    }
}

impl Clone for Api {
    fn clone(&self) -> Self {
        let my_index = (self.my_index + 1) % self.channels.len();
        Self {
            channels: self.channels.clone(),
            my_channel: self.channels[my_index].clone(),
            my_index,
        }
    }
}

impl Api {
    async fn make_request(
        &self,
        kind: RequestKind,
        guest: Option<String>,
        client_id: Option<Uuid>,
    ) -> Result<Response> {
        let (sender, receiver) = oneshot::channel();
        let msg = RequestMsg {
            kind,
            guest,
            client_id: client_id.unwrap_or_default(),
            response_channel: sender,
        };
        self.my_channel.send_async(msg).await?;
        Ok(receiver.await?)
    }

    async fn book_room_as(
        &self,
        guest: &str,
        client_id: Option<Uuid>,
    ) -> Result<ApiResponse<BookOutcome>> {
        let kind = RequestKind::BookRoom;
        let response = self
            .make_request(kind, Some(guest.to_owned()), client_id)
            .await?;
        Ok(match response {
            Response::Error {
                msg,
                service_id,
                client_id,
            } => ApiResponse {
                service_id,
                client_id: Some(client_id),
                result: Err(ApiError(msg)),
            },
            Response::Booked {
                room,
                service_id,
                client_id,
            } => ApiResponse {
                service_id,
                client_id: Some(client_id),
                result: Ok(BookOutcome::Booked { room }),
            },
            Response::NoRooms {
                service_id,
                client_id,
            } => ApiResponse {
                service_id,
                client_id: Some(client_id),
                result: Ok(BookOutcome::NoRoomsAvailable),
            },
            resp => panic!("{kind:?} must not be answered by {resp:?}"),
        })
    }

    async fn cancel_booking_as(
        &self,
        guest: &str,
        client_id: Option<Uuid>,
    ) -> Result<ApiResponse<CancelOutcome>> {
        let kind = RequestKind::CancelBooking;
        let response = self
            .make_request(kind, Some(guest.to_owned()), client_id)
            .await?;
        Ok(match response {
            Response::Error {
                msg,
                service_id,
                client_id,
            } => ApiResponse {
                service_id,
                client_id: Some(client_id),
                result: Err(ApiError(msg)),
            },
            Response::Cancelled {
                service_id,
                client_id,
            } => ApiResponse {
                service_id,
                client_id: Some(client_id),
                result: Ok(CancelOutcome::Cancelled),
            },
            Response::NotFound {
                service_id,
                client_id,
            } => ApiResponse {
                service_id,
                client_id: Some(client_id),
                result: Ok(CancelOutcome::NotFound),
            },
            resp => panic!("{kind:?} must not be answered by {resp:?}"),
        })
    }

    /// Book a room for `guest`
    pub async fn book_room(&self, guest: &str) -> Result<ApiResponse<BookOutcome>> {
        self.book_room_as(guest, None).await
    }

    /// Cancel the booking held by `guest`
    pub async fn cancel_booking(&self, guest: &str) -> Result<ApiResponse<CancelOutcome>> {
        self.cancel_booking_as(guest, None).await
    }

    /// Get the current bookings in ascending room order
    pub async fn get_bookings(&self) -> Result<ApiResponse<Vec<Booking>>> {
        let kind = RequestKind::GetBookings;
        let response = self.make_request(kind, None, None).await?;
        Ok(match response {
            Response::Error {
                msg,
                service_id,
                client_id,
            } => ApiResponse {
                service_id,
                client_id: Some(client_id),
                result: Err(ApiError(msg)),
            },
            Response::Bookings(list) => ApiResponse {
                service_id: None,
                client_id: None,
                result: Ok(list),
            },
            resp => panic!("{kind:?} must not be answered by {resp:?}"),
        })
    }

    /// Create a session acting as one guest with its own client id
    pub fn create_guest_session(&self, guest: &str) -> GuestSession {
        let mut bytes = [0u8; 16];
        nanorand::tls_rng().fill(&mut bytes);
        GuestSession {
            api: self,
            client_id: uuid::Builder::from_random_bytes(bytes).into_uuid(),
            guest: guest.to_owned(),
        }
    }
}

pub struct ApiResponse<T> {
    pub service_id: Option<Uuid>,
    pub client_id: Option<Uuid>,
    pub result: ApiResult<T>,
}

/// One guest interacting with the service under a fixed name and client id
pub struct GuestSession<'a> {
    pub api: &'a Api,
    pub client_id: Uuid,
    pub guest: String,
}

impl GuestSession<'_> {
    pub async fn book(&self) -> Result<ApiResponse<BookOutcome>> {
        self.api
            .book_room_as(&self.guest, Some(self.client_id))
            .await
    }

    pub async fn cancel(&self) -> Result<ApiResponse<CancelOutcome>> {
        self.api
            .cancel_booking_as(&self.guest, Some(self.client_id))
            .await
    }
}
