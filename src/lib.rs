pub mod component;
pub mod config;
pub mod init;
pub mod menu;
pub mod tools;

use anyhow::Result;
use console::{Term, style};
use rust_i18n::t;

#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "zh-TW");

pub fn pause(term: &Term) -> Result<()> {
    println!("\n{}", style(t!("common.pause")).dim());
    term.read_line()?;
    Ok(())
}
