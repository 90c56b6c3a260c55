//! HTTP server exposing the booking service

#![warn(missing_docs)]

mod http;

use std::str::FromStr;
use std::thread;

use hotel_core::{Config, RequestHandler};
use hotel_service::Service;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Command line options
#[derive(Debug)]
struct Opts {
    /// Configuration of the booking service
    config: Config,

    /// Port for the HTTP server to listen on
    port: u16,
    /// Host for the HTTP server to listen on
    host: String,
    /// Number of listener threads
    threads: u32,
}

impl Opts {
    fn from_args() -> Self {
        let mut opts = Opts {
            port: 1098,
            host: String::from("127.0.0.1"),
            config: Config { rooms: 5 },
            threads: 8,
        };

        let mut option: Option<String> = None;
        for arg in std::env::args().skip(1) {
            if let Some(opt) = option {
                match opt.as_str() {
                    "-port" => opts.port = arg.parse().expect("-port takes a decimal u16"),
                    "-host" => opts.host = arg,
                    "-rooms" => {
                        opts.config.rooms = arg.parse().expect("-rooms takes a decimal u32")
                    }
                    "-threads" => {
                        opts.threads = arg.parse().expect("-threads takes a decimal u32")
                    }
                    _ => {
                        eprintln!("Error: ignoring unknown option {opt}");
                        std::process::exit(1);
                    }
                }
                option = None;
            } else {
                option = Some(arg);
            }
        }
        if let Some(opt) = option {
            eprintln!("Error: ignoring leftover option {opt}");
            std::process::exit(1);
        }

        opts
    }
}

fn init_tracing() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(Directive::from_str("info").unwrap())
                .from_env_lossy(),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber).unwrap();
}

fn http_loop<H: RequestHandler>(server: &tiny_http::Server, handler: &H) {
    loop {
        let rq = server.recv().expect("HTTP receive failed");
        if let Some(rq) = http::parse(rq) {
            tracing::debug!(client = %rq.client_id(), kind = ?rq.kind(), "handling request");
            handler.handle(rq);
        }
    }
}

fn main() {
    init_tracing();
    let opts = Opts::from_args();

    let server = tiny_http::Server::http((opts.host.as_str(), opts.port)).unwrap();
    let service = Service::new(&opts.config);

    tracing::info!(
        host = %opts.host,
        port = opts.port,
        rooms = opts.config.rooms,
        service_id = %service.id(),
        "hotel server ready",
    );

    thread::scope(|s| {
        for i in 0..opts.threads {
            thread::Builder::new()
                .name(format!("listener_{i}"))
                .spawn_scoped(s, || http_loop(&server, &service))
                .unwrap();
        }
    });
}
