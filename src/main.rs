use anyhow::Result;
use console::{Term, style};
use log::{info, warn};
use micro_sequence::config::Config;
use micro_sequence::init;
use micro_sequence::menu::show_main_menu;
use rust_i18n::t;

#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "zh-TW");

fn main() -> Result<()> {
    init::init();
    let term = Term::stdout();

    // Load config and set locale
    let mut config = Config::new()?;
    rust_i18n::set_locale(config.settings.language.as_str());

    loop {
        match show_main_menu(&term, &mut config) {
            Ok(true) => {}
            Ok(false) => {
                term.clear_screen()?;
                println!("\n{}", style(t!("main_menu.goodbye")).green().bold());
                info!("Program exited normally");
                break;
            }
            Err(e) => {
                warn!("Program error: {e}");
                eprintln!("{} {}", style(t!("common.error_prefix")).red().bold(), e);
                break;
            }
        }
    }

    Ok(())
}
