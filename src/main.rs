// SPDX-License-Identifier: MPL-2.0
use sticker_lens::app::{self, paths, Flags};

const HELP: &str = "\
StickerLens

USAGE:
  sticker_lens [OPTIONS] [PHOTO]

OPTIONS:
  -h, --help             Print help information
  --lang <LOCALE>        Interface language (e.g. en-US, pt-BR)
  --config-dir <DIR>     Directory holding settings.toml

ENVIRONMENT:
  STICKER_LENS_CONFIG_DIR  Same as --config-dir (the flag wins)
  RUST_LOG                 Log filter (default: warn)
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        log::warn!("ignoring --lang: {err}");
        None
    });
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        log::warn!("ignoring --config-dir: {err}");
        None
    });
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    paths::init_cli_overrides(config_dir.clone());

    app::run(Flags {
        lang,
        file_path,
        config_dir,
    })
}
