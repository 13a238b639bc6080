// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced-folio - portfolio project gallery

USAGE:
    iced-folio [OPTIONS] [CATALOG]

ARGS:
    <CATALOG>             Project catalog (TOML) to show instead of the built-in one

OPTIONS:
    --lang <TAG>          UI language (e.g. en-US, fr)
    --config-dir <DIR>    Directory holding settings.toml
    -h, --help            Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_folio=info")),
        )
        .init();

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring invalid --lang value");
        None
    });
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring invalid --config-dir value");
        None
    });
    let catalog = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    paths::init_cli_overrides(config_dir);

    app::run(Flags { lang, catalog })
}
