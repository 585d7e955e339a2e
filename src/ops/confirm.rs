use std::io::{self, BufRead, Write};

use crate::error::OpsError;

/// Destructive scripts refuse to run until the operator types the expected
/// token. Anything else is a clean, intentional abort.
pub fn confirm(token: &str) -> Result<(), OpsError> {
    print!("Type {token} to continue: ");
    io::stdout().flush()?;

    let stdin = io::stdin();
    confirm_from(&mut stdin.lock(), token)
}

pub fn confirm_from(input: &mut impl BufRead, token: &str) -> Result<(), OpsError> {
    let mut line = String::new();
    input.read_line(&mut line)?;

    if line.trim() == token {
        Ok(())
    } else {
        Err(OpsError::ConfirmationDeclined)
    }
}
