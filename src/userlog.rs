//! Per-user login log.
//!
//! Each user gets an append-only file under the log directory. The file is
//! opened in append mode for the single write and closed again, so no shared
//! logger state is touched and concurrent logins for different users never
//! contend on anything.

use std::path::Path;

use chrono::Local;
use tokio::io::AsyncWriteExt;

use crate::error::Error;

/// Append one login record to `<log_dir>/<user_id>.log`.
pub async fn record_login(log_dir: &Path, user_id: &str) -> Result<(), Error> {
    tokio::fs::create_dir_all(log_dir).await?;

    let line = format!(
        "{} - INFO - {}: login\n",
        Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
        user_id
    );

    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join(format!("{user_id}.log")))
        .await?;
    file.write_all(line.as_bytes()).await?;
    file.flush().await?;

    Ok(())
}
