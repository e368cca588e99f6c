//! Chapter command implementation

use anyhow::{bail, Result};
use omm_core::parse_chapter;

/// Print the canonical form of each chapter text
pub fn chapter(chapters: &[String]) -> Result<()> {
    let mut failures = 0;

    for text in chapters {
        match parse_chapter(text) {
            Ok(interval) => println!("{}", interval),
            Err(e) => {
                failures += 1;
                eprintln!("Invalid chapter {:?}: {}", text, e);
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} chapters could not be parsed", failures, chapters.len());
    }

    Ok(())
}
