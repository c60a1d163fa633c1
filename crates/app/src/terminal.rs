use std::io::{self, BufRead};

use services::{ImageId, LineInput, PresentationSink};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Renders presentation intents on stdout with ANSI colors.
#[derive(Debug, Default)]
pub struct TerminalSink;

impl PresentationSink for TerminalSink {
    fn show_message(&mut self, text: &str) {
        println!("{text}");
    }

    fn show_image(&mut self, image: ImageId) {
        match image {
            ImageId::Trophy => println!("{YELLOW}   ___\n  |___|\n  |___|\n   \\_/  TROPHY!\n    |{RESET}"),
            ImageId::SadFace => println!("{RED}  :-({RESET}"),
        }
    }

    fn show_discount_won(&mut self) {
        println!("{GREEN}You win a 30% discount for your next online shop order!{RESET}");
    }
}

/// Blocking stdin reader for the controller's input boundary.
#[derive(Debug, Default)]
pub struct StdinInput;

impl LineInput for StdinInput {
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }
}
