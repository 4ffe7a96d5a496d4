use std::io::{Read, Write};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use argh::FromArgs;
use chrono::Local;
use once_cell::sync::Lazy;

use linkspeed::constants::{common, link_speed};
use linkspeed::host;

/// Probe the serial link at the agreed speed: send the fixed byte sequence
/// and check the board echoes it back intact.
#[derive(FromArgs)]
struct Args {
    /// serial device to probe
    #[argh(option, short = 'p', default = "common::SERIAL_PORT.to_string()")]
    port: String,

    /// number of probe rounds, 0 to run until Ctrl+C
    #[argh(option, short = 'n', default = "4")]
    rounds: u64,

    /// verbose mode
    #[argh(switch, short = 'v')]
    verbose: bool,
}

// Global static variable for arguments
pub static ARGS: Lazy<Mutex<Args>> = Lazy::new(|| {
    let args: Args = argh::from_env();
    Mutex::new(args)
});

fn read_echo(port: &mut Box<dyn serialport::SerialPort>) -> Vec<u8> {
    let mut echo = Vec::with_capacity(common::PROBE_SEQUENCE.len());
    let mut read_buffer = [0u8; common::SERIAL_READ_SIZE];

    while echo.len() < common::PROBE_SEQUENCE.len() {
        match port.read(&mut read_buffer) {
            Ok(n) if n > 0 => {
                echo.extend_from_slice(&read_buffer[..n]);
            }
            Ok(_) => break,
            Err(ref e) if e.kind() == std::io::ErrorKind::TimedOut => break,
            Err(e) => {
                eprintln!("Serial read error: {}", e);
                break;
            }
        }
    }
    echo
}

fn main() {
    let args = ARGS.lock().unwrap();
    if args.verbose {
        println!("Verbose mode is enabled.");
    }

    // (ok, mismatched) round counters, shared with the Ctrl+C handler
    let counters = Arc::new(Mutex::new((0u64, 0u64)));
    let counters_clone = Arc::clone(&counters);

    ctrlc::set_handler(move || {
        let (ok, bad) = *counters_clone.lock().unwrap();
        println!("\nInterrupted: {} rounds ok, {} mismatched", ok, bad);
        std::process::exit(if bad > 0 { 1 } else { 0 });
    })
    .expect("Error setting Ctrl+C handler");

    let port = host::open_link(&args.port, Duration::from_secs(1));

    match port {
        Ok(mut port) => {
            println!(
                "Probing {} at {} baud...",
                args.port,
                link_speed::LINK_SPEED_INTEGER
            );

            let mut round: u64 = 0;
            loop {
                if args.rounds != 0 && round >= args.rounds {
                    break;
                }
                round += 1;

                if let Err(e) = port.write_all(&common::PROBE_SEQUENCE) {
                    eprintln!("Serial write error: {}", e);
                    break;
                }

                let echo = read_echo(&mut port);
                let now = Local::now();
                let mut counters = counters.lock().unwrap();
                if echo == common::PROBE_SEQUENCE {
                    counters.0 += 1;
                    println!("{} - round {}: echo ok", now.format("%Y-%m-%d %H:%M:%S%.3f"), round);
                } else {
                    counters.1 += 1;
                    println!(
                        "{} - round {}: echo mismatch, {} bytes back",
                        now.format("%Y-%m-%d %H:%M:%S%.3f"),
                        round,
                        echo.len()
                    );
                    if args.verbose {
                        println!("    sent: {:02X?}", common::PROBE_SEQUENCE);
                        println!("    got:  {:02X?}", echo);
                    }
                }
                drop(counters);

                thread::sleep(Duration::from_millis(100));
            }

            let (ok, bad) = *counters.lock().unwrap();
            println!("Done: {} rounds ok, {} mismatched", ok, bad);
            if bad > 0 {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Failed to open serial port: {}", e);
            std::process::exit(1);
        }
    }
}
