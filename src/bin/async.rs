use std::process;

use clap::{App, Arg};

use mystrom::{command::{render_report, Format}, tokio::AsyncSwitch};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = App::new("myStrom async report")
        .about("Print the report of a myStrom WiFi Switch using the async client.")
        .arg(Arg::with_name("device")
            .short("d")
            .long("device")
            .takes_value(true)
            .help("IP or hostname of the myStrom Switch device")
        )
        .get_matches();

    let report = match AsyncSwitch::new(matches.value_of("device").unwrap_or("")) {
        Ok(switch) => switch.report().await,
        Err(err) => Err(err),
    };

    match report {
        Ok(report) => println!("{}", render_report(&report, Format::Human)),
        Err(err) => {
            println!("{}", err);
            process::exit(1);
        }
    }
}
