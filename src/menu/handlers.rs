use crate::component::SequenceSynthesizer;
use crate::config::Config;
use crate::config::load::SETTINGS_FILE;
use crate::config::save::{add_recent_input, save_settings};
use crate::pause;
use crate::tools::{load_shots, sample_shots};
use anyhow::{Context, Result};
use console::{Term, style};
use dialoguer::Input;
use dialoguer::theme::ColorfulTheme;
use log::warn;
use rust_i18n::t;
use std::path::{Path, PathBuf};

pub fn run_sequence_generator(term: &Term, config: &mut Config) -> Result<()> {
    if let Err(e) = generate(config) {
        eprintln!("{} {:#}", style(t!("common.error_prefix")).red().bold(), e);
    }

    pause(term)?;
    Ok(())
}

fn generate(config: &mut Config) -> Result<()> {
    println!("{}", style(t!("generator.title")).cyan().bold());

    let input = prompt_input_path(config)?;
    let shots = match &input {
        Some(path) => load_shots(path)?,
        None => {
            println!("{}", style(t!("generator.using_sample")).dim());
            sample_shots()?
        }
    };

    let settings = &config.settings;
    println!(
        "{}",
        style(t!(
            "generator.summary",
            shots = shots.len(),
            mode = settings.mode,
            target = settings.target_count
        ))
        .dim()
    );

    let synthesizer = SequenceSynthesizer::new(settings.clone());
    let result = synthesizer.generate_with_settings(&shots, settings.target_count, settings.mode);

    let output =
        serde_json::to_string_pretty(&result.sequences).context("無法序列化生成結果")?;
    println!("{output}");

    println!(
        "\n{}",
        style(t!("generator.generated", count = result.sequences.len()))
            .green()
            .bold()
    );
    if !result.diagnostics.is_empty() {
        println!(
            "{}",
            style(t!("generator.warnings", count = result.diagnostics.len())).yellow()
        );
        for warning in result.diagnostics.warnings() {
            println!("  - {warning}");
        }
    }

    if let Some(path) = input {
        add_recent_input(&mut config.settings, &path.to_string_lossy());
        if let Err(e) = save_settings(&config.settings, Path::new(SETTINGS_FILE)) {
            warn!("無法儲存設定: {e:#}");
        }
    }

    Ok(())
}

/// 詢問輸入檔案路徑，留空表示使用範例資料
fn prompt_input_path(config: &Config) -> Result<Option<PathBuf>> {
    let default = config
        .settings
        .recent_inputs
        .first()
        .cloned()
        .unwrap_or_default();

    let path: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("generator.input_prompt"))
        .default(default)
        .allow_empty(true)
        .interact_text()?;

    let trimmed = path.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(PathBuf::from(trimmed)))
    }
}
