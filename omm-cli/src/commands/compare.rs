//! Compare command implementation

use anyhow::Result;
use omm_core::natural_cmp;
use std::cmp::Ordering;

/// Print how two strings compare in natural order
pub fn compare(left: &str, right: &str) -> Result<()> {
    let symbol = match natural_cmp(left, right) {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };

    println!("{} {} {}", left, symbol, right);
    Ok(())
}
