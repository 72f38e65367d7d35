//! cargo run --example hello -- -n World -e -r 3
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() {
    let level = std::env::var("ARGSCHEMA_LOG")
        .ok()
        .and_then(|it| it.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .unwrap_or_else(|err| eprintln!("can't set up logging: {}", err));

    let flags = match argschema::Args::from_env("n*,e,r#") {
        Ok(it) => it,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1)
        }
    };

    let name = flags.get_string('n').unwrap_or_default();
    let name = if name.is_empty() { "stranger" } else { name };
    let bang = if flags.get_boolean('e').unwrap_or_default() { "❣️" } else { "!" };
    for _ in 0..flags.get_integer('r').unwrap_or_default().max(1) {
        println!("Hello {}{}", name, bang);
    }
}
