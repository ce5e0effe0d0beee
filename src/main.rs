// SPDX-License-Identifier: MPL-2.0
use iced_snackbar::app::{self, paths, Flags};
use iced_snackbar::ui::theming::ThemeMode;

const HELP: &str = "\
Usage: iced_snackbar [OPTIONS]

Options:
  --config-dir <DIR>   Read and write settings.toml in DIR
  --theme <MODE>       light, dark, or system
  -h, --help           Print this help
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_dir: Option<String> = match args.opt_value_from_str("--config-dir") {
        Ok(value) => value,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };
    let theme: Option<ThemeMode> = match args.opt_value_from_str("--theme") {
        Ok(value) => value,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unexpected arguments: {remaining:?}");
    }

    paths::init_cli_override(config_dir);

    app::run(Flags { theme })
}
