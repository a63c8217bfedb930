//! Encode command - strict percent-encoding of a single value.

use crate::core::url::percent_encode_strict;
use crate::error::Result;

pub fn execute(value: &str) -> Result<()> {
    println!("{}", percent_encode_strict(value));
    Ok(())
}
