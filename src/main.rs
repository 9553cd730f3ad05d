// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};
use iced_folio::logging;

const HELP: &str = "\
iced_folio - portfolio viewer

USAGE:
  iced_folio [OPTIONS]

OPTIONS:
  --projects <SOURCE>   Project collection: http(s) URL, JSON file path or `bundled`
  --route <ANCHOR>      Initial screen, e.g. #projects
  --config-dir <DIR>    Directory holding settings.toml
  --log-level <LEVEL>   trace, debug, info, warn or error (RUST_LOG wins)
  -h, --help            Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let log_level: Option<String> = args.opt_value_from_str("--log-level").unwrap_or_else(|err| {
        eprintln!("Invalid --log-level: {err}");
        None
    });
    logging::init(log_level.as_deref());

    let flags = Flags {
        projects: read_opt(&mut args, "--projects"),
        route: read_opt(&mut args, "--route"),
        config_dir: read_opt(&mut args, "--config-dir"),
    };

    for extra in args.finish() {
        tracing::warn!(argument = ?extra, "ignoring unknown argument");
    }

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}

fn read_opt(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring {key}");
        None
    })
}
