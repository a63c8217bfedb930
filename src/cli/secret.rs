//! Secret command - print generated passwords.

use crate::core::secret;
use crate::error::Result;

/// Print `count` secrets, one per line.
pub fn execute(count: usize) -> Result<()> {
    for _ in 0..count {
        println!("{}", secret::generate().expose());
    }
    Ok(())
}
