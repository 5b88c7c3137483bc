// SPDX-License-Identifier: MPL-2.0
use env_logger::{Builder, Target};
use log::LevelFilter;
use now_showing::app::{self, Flags};

const HELP: &str = "\
Now Showing

USAGE:
  now_showing [OPTIONS]

OPTIONS:
  -h, --help              Print this help
  --lang <LOCALE>         Interface language (e.g. en-US, fr)
  --config-dir <DIR>      Directory holding settings.toml
  --api-key <KEY>         Catalog API key
  --route <PATH>          Initial location, e.g. /movies/42

ENVIRONMENT:
  RUST_LOG                Log filter (default: now_showing=info)
  NOW_SHOWING_CONFIG_DIR  Directory holding settings.toml
  NOW_SHOWING_API_KEY     Catalog API key
";

fn init_logger() {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
    } else {
        Builder::new()
            .target(Target::Stderr)
            .filter_level(LevelFilter::Warn)
            .filter_module("now_showing", LevelFilter::Info)
            .init();
    }
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        api_key: args.opt_value_from_str("--api-key")?,
        route: args.opt_value_from_str("--route")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {rest:?}");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    init_logger();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
