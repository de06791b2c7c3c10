// SPDX-License-Identifier: MPL-2.0
use iced_settings::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_settings

USAGE:
  iced_settings [OPTIONS]

OPTIONS:
  --lang <TAG>         Interface language (e.g. en-US, fr, zh-CN)
  --i18n-dir <DIR>     Directory with extra or overriding .ftl catalogs
  --config-dir <DIR>   Directory holding settings.toml
  --data-dir <DIR>     Default storage directory
  -h, --help           Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_arg(&mut args, "--lang"),
        i18n_dir: opt_arg(&mut args, "--i18n-dir"),
        config_dir: opt_arg(&mut args, "--config-dir"),
        data_dir: opt_arg(&mut args, "--data-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}

/// Reads an optional string flag, logging and ignoring malformed values.
fn opt_arg(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(%key, %error, "invalid command-line value");
            None
        }
    }
}
