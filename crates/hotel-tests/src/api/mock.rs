//! Mock transport driving the `hotel-service` crate in-process

use std::sync::Arc;

use hotel_core::{Booking, RawRequest, Request, RequestHandler, RoomNo};
use tokio::sync::oneshot;
use tokio::task::{self, JoinHandle};
use uuid::Uuid;

use super::{Api, RequestMsg, Response};

pub struct MockService {
    service: Arc<hotel_service::Service>,
    join_handles: Vec<JoinHandle<()>>,
}

struct MockRawRequest {
    guest: Option<String>,
    response_channel: oneshot::Sender<Response>,
}

pub async fn start(threads: u16, config: hotel_core::Config) -> (MockService, Api) {
    let service = Arc::new(hotel_service::Service::new(&config));

    let it = (0..threads).map(|_| {
        let (sender, receiver) = flume::bounded::<RequestMsg>(65536);
        let service = service.clone();
        let handle = task::spawn_blocking(move || {
            let service = &*service;
            for msg in receiver.into_iter() {
                let raw = Box::new(MockRawRequest {
                    guest: msg.guest,
                    response_channel: msg.response_channel,
                });
                service.handle(Request::from_raw(msg.kind, msg.client_id, None, raw))
            }
        });
        (sender, handle)
    });
    let (senders, join_handles) = it.unzip();

    let mock_service = MockService {
        service,
        join_handles,
    };
    (mock_service, Api::new(senders))
}

impl MockService {
    pub async fn shutdown(self) {
        for handle in self.join_handles {
            handle.await.unwrap()
        }
        task::spawn_blocking(move || Arc::into_inner(self.service).unwrap().shutdown())
            .await
            .unwrap();
    }
}

impl RawRequest for MockRawRequest {
    fn read_string(&mut self) -> std::io::Result<String> {
        Ok(self.guest.take().unwrap_or_default())
    }

    fn respond_with_err(self: Box<Self>, msg: String, client_id: Uuid, service_id: Option<Uuid>) {
        let response = Response::Error {
            msg,
            service_id,
            client_id,
        };
        self.response_channel.send(response).unwrap()
    }

    fn respond_with_booked(
        self: Box<Self>,
        room: RoomNo,
        _guest: String,
        client_id: Uuid,
        service_id: Option<Uuid>,
    ) {
        let response = Response::Booked {
            room,
            service_id,
            client_id,
        };
        self.response_channel.send(response).unwrap()
    }

    fn respond_with_no_rooms(self: Box<Self>, client_id: Uuid, service_id: Option<Uuid>) {
        let response = Response::NoRooms {
            service_id,
            client_id,
        };
        self.response_channel.send(response).unwrap()
    }

    fn respond_with_cancelled(
        self: Box<Self>,
        _guest: String,
        client_id: Uuid,
        service_id: Option<Uuid>,
    ) {
        let response = Response::Cancelled {
            service_id,
            client_id,
        };
        self.response_channel.send(response).unwrap()
    }

    fn respond_with_not_found(
        self: Box<Self>,
        _guest: String,
        client_id: Uuid,
        service_id: Option<Uuid>,
    ) {
        let response = Response::NotFound {
            service_id,
            client_id,
        };
        self.response_channel.send(response).unwrap()
    }

    fn respond_with_bookings(
        self: Box<Self>,
        bookings: &[Booking],
        _client_id: Uuid,
        _service_id: Option<Uuid>,
    ) {
        let response = Response::Bookings(bookings.to_vec());
        self.response_channel.send(response).unwrap()
    }
}
