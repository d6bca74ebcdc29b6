//! `authwindow logout`.

use anyhow::Result;
use tracing::{info, instrument};

use crate::output::Output;
use crate::token_file::TokenFile;

#[instrument(skip_all, name = "logout")]
pub fn run_logout() -> Result<()> {
    let out = Output::new();
    let token_file = TokenFile::default_path()?;

    if token_file.clear()? {
        info!("Removed {}", token_file.path().display());
        out.success("Signed out");
        out.dim(format!("Token removed from {}", token_file.path().display()));
    } else {
        out.info("Not currently signed in.");
    }
    Ok(())
}
