use std::io::Write;

use crate::error::ReplayError;

/// Prompt and read one line. `None` at end of input.
pub fn readline() -> Result<Option<String>, ReplayError> {
    write!(std::io::stdout(), "$ ").map_err(ReplayError::Input)?;
    std::io::stdout().flush().map_err(ReplayError::Input)?;

    let mut buffer = String::new();
    let read = std::io::stdin()
        .read_line(&mut buffer)
        .map_err(ReplayError::Input)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(buffer))
}
