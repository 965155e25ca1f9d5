//! Opening links in the user's default browser.

use std::process::{Command, Stdio};

use url::Url;

use crate::error::Error;

/// ITIL 4 reference page linked from the console and the `itil` command.
pub const ITIL_URL: &str = "https://headsec.tech/posts/itil4/";

/// Check that `url` is an absolute http(s) URL with a host.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] otherwise.
pub fn validate_url(url: &str) -> Result<Url, Error> {
    let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{url}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(Error::InvalidUrl(url.to_string()));
    }
    Ok(parsed)
}

/// Open `url` with the platform's default handler.
///
/// The opener is spawned detached; this returns as soon as it has started.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] if `url` is not an http(s) URL, or [`Error::Io`] if the
/// opener could not be spawned.
pub fn open_url(url: &str) -> Result<(), Error> {
    let url = validate_url(url)?;
    opener(url.as_str())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    tracing::info!(url = %url, "Opened link in browser");
    Ok(())
}

#[cfg(target_os = "macos")]
fn opener(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(target_os = "windows")]
fn opener(url: &str) -> Command {
    // The empty string is the window title `start` expects before the target.
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", url]);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}
