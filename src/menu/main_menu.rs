use crate::config::load::SETTINGS_FILE;
use crate::config::save::save_settings;
use crate::config::types::Config;
use crate::config::{AssemblyMode, Language};
use crate::menu::handlers::run_sequence_generator;
use anyhow::Result;
use console::{Term, style};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use rust_i18n::t;
use std::path::Path;

pub fn show_main_menu(term: &Term, config: &mut Config) -> Result<bool> {
    term.clear_screen()?;

    println!("{}", style(t!("main_menu.title")).cyan().bold());
    println!("{}", style(t!("common.esc_hint")).dim());

    let options = vec![
        t!("main_menu.opt_generate"),
        t!("main_menu.opt_settings"),
        t!("main_menu.exit"),
    ];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("main_menu.prompt"))
        .items(&options)
        .default(0)
        .interact_on_opt(term)?;

    match selection {
        Some(0) => {
            run_sequence_generator(term, config)?;
            Ok(true)
        }
        Some(1) => {
            show_settings_menu(term, config)?;
            Ok(true)
        }
        Some(2) | None => Ok(false), // ESC pressed - exit
        _ => unreachable!(),
    }
}

/// 設定選單
fn show_settings_menu(term: &Term, config: &mut Config) -> Result<()> {
    loop {
        term.clear_screen()?;

        let settings = &config.settings;
        let seed = settings
            .seed
            .map_or_else(|| t!("common.none").to_string(), |s| s.to_string());
        println!("{}", style(t!("settings.title")).cyan().bold());
        println!(
            "{}",
            style(t!(
                "settings.current",
                mode = settings.mode,
                target = settings.target_count,
                seed = seed,
                language = settings.language
            ))
            .dim()
        );

        let options = vec![
            t!("settings.opt_mode"),
            t!("settings.opt_target"),
            t!("settings.opt_seed"),
            t!("settings.opt_language"),
            t!("settings.back"),
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("settings.prompt"))
            .items(&options)
            .default(0)
            .interact_on_opt(term)?;

        match selection {
            Some(0) => select_mode(term, config)?,
            Some(1) => input_target_count(config)?,
            Some(2) => input_seed(config)?,
            Some(3) => select_language(term, config)?,
            Some(4) | None => break, // ESC or back
            _ => unreachable!(),
        }

        save_settings(&config.settings, Path::new(SETTINGS_FILE))?;
    }

    Ok(())
}

fn select_mode(term: &Term, config: &mut Config) -> Result<()> {
    let modes = [AssemblyMode::Exhaustive, AssemblyMode::Random];
    let items: Vec<String> = modes.iter().map(ToString::to_string).collect();

    let default_index = modes
        .iter()
        .position(|&m| m == config.settings.mode)
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("settings.mode_prompt"))
        .items(&items)
        .default(default_index)
        .interact_on_opt(term)?;

    if let Some(index) = selection {
        config.settings.mode = modes[index];
    }

    Ok(())
}

fn input_target_count(config: &mut Config) -> Result<()> {
    let count: usize = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("settings.target_prompt"))
        .default(config.settings.target_count)
        .interact_text()?;

    config.settings.target_count = count;
    Ok(())
}

/// 留空表示不固定種子
fn input_seed(config: &mut Config) -> Result<()> {
    let current = config.settings.seed.map(|s| s.to_string()).unwrap_or_default();

    let text: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("settings.seed_prompt"))
        .default(current)
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            if input.trim().is_empty() || input.trim().parse::<u64>().is_ok() {
                Ok(())
            } else {
                Err(t!("settings.seed_invalid").to_string())
            }
        })
        .interact_text()?;

    config.settings.seed = text.trim().parse().ok();
    Ok(())
}

fn select_language(term: &Term, config: &mut Config) -> Result<()> {
    let languages = [Language::TraditionalChinese, Language::English];
    let items: Vec<String> = languages.iter().map(ToString::to_string).collect();

    let default_index = languages
        .iter()
        .position(|&l| l == config.settings.language)
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("settings.language_prompt"))
        .items(&items)
        .default(default_index)
        .interact_on_opt(term)?;

    if let Some(index) = selection {
        config.settings.language = languages[index];
        rust_i18n::set_locale(config.settings.language.as_str());
    }

    Ok(())
}
