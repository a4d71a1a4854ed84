use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::error::CliError;

/// Ask a yes/no question on stderr and read the answer from stdin.
/// Anything but `y`/`yes` counts as no, including end of input.
pub async fn confirm(question: &str) -> Result<bool, CliError> {
    let mut stderr = tokio::io::stderr();
    stderr
        .write_all(format!("{question} [y/N] ").as_bytes())
        .await
        .map_err(CliError::Prompt)?;
    stderr.flush().await.map_err(CliError::Prompt)?;

    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await
        .map_err(CliError::Prompt)?;
    Ok(is_yes(&line))
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
