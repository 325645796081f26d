use crate::auth::SeedCredential;
use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ArgAction, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

pub fn validator_cost() -> ValueParser {
    ValueParser::from(move |cost: &str| -> std::result::Result<u32, String> {
        let parsed: u32 = cost.parse().map_err(|_| "invalid cost".to_string())?;

        // bcrypt accepts cost factors 4..=31
        if (4..=31).contains(&parsed) {
            Ok(parsed)
        } else {
            Err("cost must be between 4 and 31".to_string())
        }
    })
}

pub fn validator_credential() -> ValueParser {
    ValueParser::from(move |entry: &str| -> std::result::Result<SeedCredential, String> {
        SeedCredential::parse(entry)
    })
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("entrata")
        .about("Credential verification service")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("ENTRATA_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("cost")
                .short('c')
                .long("cost")
                .help("bcrypt cost factor applied when seeding credentials")
                .default_value("10")
                .env("ENTRATA_HASH_COST")
                .value_parser(validator_cost()),
        )
        .arg(
            Arg::new("credential")
                .long("credential")
                .help("Seed credential in user:password form, repeatable (comma separated in the environment)")
                .env("ENTRATA_CREDENTIALS")
                .value_delimiter(',')
                .action(ArgAction::Append)
                .value_parser(validator_credential()),
        )
        .arg(
            Arg::new("mask-unknown-user")
                .long("mask-unknown-user")
                .help("Answer unknown users and wrong passwords with the same message")
                .env("ENTRATA_MASK_UNKNOWN_USER")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("ENTRATA_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
}
