//! Interactive command-line client for the booking service

mod api;

use std::io::{self, BufRead, Write};

use api::HotelApi;
use eyre::Result;

/// Command line options
#[derive(Debug)]
struct Opts {
    /// Host the service listens on
    host: String,
    /// Port the service listens on
    port: u16,
}

impl Opts {
    fn from_args() -> Self {
        let mut opts = Opts {
            host: String::from("127.0.0.1"),
            port: 1098,
        };

        let mut option: Option<String> = None;
        for arg in std::env::args().skip(1) {
            if let Some(opt) = option {
                match opt.as_str() {
                    "-host" => opts.host = arg,
                    "-port" => opts.port = arg.parse().expect("-port takes a decimal u16"),
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

/// Read one line from stdin with the trailing newline stripped.
///
/// Returns [`None`] on end of input.
fn read_line(stdin: &io::Stdin) -> Result<Option<String>> {
    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

fn prompt(text: &str) -> Result<()> {
    print!("{text}");
    io::stdout().flush()?;
    Ok(())
}

fn run(opts: &Opts) -> Result<()> {
    let api = HotelApi::new(&opts.host, opts.port)?;
    let stdin = io::stdin();

    loop {
        println!("\n1. Book Room\n2. Cancel Booking\n3. Show Bookings\n4. Exit");
        prompt("Choice: ")?;
        let Some(choice) = read_line(&stdin)? else {
            break;
        };

        match choice.trim().parse::<u32>() {
            Ok(1) => {
                prompt("Enter Guest Name: ")?;
                let Some(guest) = read_line(&stdin)? else {
                    break;
                };
                println!("{}", api.book_room(&guest)?);
            }
            Ok(2) => {
                prompt("Enter Guest Name: ")?;
                let Some(guest) = read_line(&stdin)? else {
                    break;
                };
                println!("{}", api.cancel_booking(&guest)?);
            }
            Ok(3) => {
                let bookings = api.get_bookings()?;
                println!("\n--- Current Bookings ---");
                if bookings.is_empty() {
                    println!("No rooms are currently booked.");
                } else {
                    for booking in bookings {
                        println!("{booking}");
                    }
                }
            }
            Ok(4) => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }

    Ok(())
}

fn main() {
    let opts = Opts::from_args();

    // Fail fast: any transport failure ends the run, no retry
    if let Err(err) = run(&opts) {
        eprintln!("Client error: {err}");
        std::process::exit(1);
    }
}
