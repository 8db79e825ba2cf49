//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = giftwise_cli::run() {
        eprintln!("giftwise: {err}");
        std::process::exit(1);
    }
}
