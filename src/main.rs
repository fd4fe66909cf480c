extern crate mystrom;

use std::{process, time::Duration};

use clap::{App, Arg, ArgMatches};
use log::debug;

use mystrom::{
    command::{self, Action, Format, ACTIONS},
    Result, Switch,
};

fn run(matches: &ArgMatches) -> Result<Option<String>> {
    let host = matches.value_of("device").unwrap_or("");
    let action = matches.value_of("action").unwrap_or("toggle");
    let format = if matches.is_present("json") {
        Format::Json
    } else {
        Format::Human
    };

    let switch = match matches.value_of("timeout").and_then(|t| t.parse::<u64>().ok()) {
        Some(secs) => Switch::with_timeout(host, Duration::from_secs(secs))?,
        None => Switch::new(host)?,
    };

    let action = action.parse::<Action>()?;
    debug!("running {} against {}", action, switch.base_address());
    command::execute(&switch, action, format)
}

fn is_seconds(value: String) -> std::result::Result<(), String> {
    value
        .parse::<u64>()
        .map(|_| ())
        .map_err(|_| format!("'{}' is not a number of seconds", value))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let action_help = format!("action to execute, can be [{}]", ACTIONS.join(", "));
    let matches = App::new("myStrom WiFi Switch CLI")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Control a myStrom WiFi Switch on the local network.")
        .arg(Arg::with_name("device")
            .short("d")
            .long("device")
            .takes_value(true)
            .help("IP or hostname of the myStrom Switch device")
        )
        .arg(Arg::with_name("action")
            .short("a")
            .long("action")
            .takes_value(true)
            .default_value("toggle")
            .help(&action_help)
        )
        .arg(Arg::with_name("timeout")
            .short("t")
            .long("timeout")
            .takes_value(true)
            .validator(is_seconds)
            .help("Request timeout in seconds, waits forever when omitted")
        )
        .arg(Arg::with_name("json")
            .long("json")
            .takes_value(false)
            .help("Respond with JSON.")
        )
        .get_matches();

    match run(&matches) {
        Ok(Some(output)) => println!("{}", output),
        Ok(None) => {}
        Err(err) => {
            println!("{}", err);
            process::exit(1);
        }
    }
}
