use std::io::{self, BufRead};

use log::LevelFilter;
use nmea0183_decoder::{LineEndingMode, NmeaSentence, Parser};

fn print(line: &str, parser: &Parser) {
    let message = parser.parse(line);

    match message.payload() {
        Some(NmeaSentence::RMC(rmc)) => {
            println!(
                "{:?} RMC at {:?}: {:?}",
                message.talker(),
                rmc.timestamp,
                rmc.location()
            );
        }
        Some(payload) => {
            println!(
                "{:?} {:?}: {payload:?}",
                message.talker(),
                message.message_type()
            );
        }
        None => match message.rejection() {
            Some(rejection) => println!("Rejected {line:?}: {rejection}"),
            None => println!("Rejected {line:?}"),
        },
    }
}

fn main() -> io::Result<()> {
    let _ = env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .try_init();

    let parser = Parser::builder()
        .line_ending_mode(LineEndingMode::Optional)
        .build();

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        print(&line, &parser);
    }

    Ok(())
}
