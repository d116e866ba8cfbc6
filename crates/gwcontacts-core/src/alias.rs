//! Mail alias output.
//!
//! One line per contact address, in the form understood by mutt-style
//! clients:
//!
//! ```text
//! alias jdoe John Doe <john.doe@example.com>
//! ```

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::contacts::Contact;
use crate::{Error, Result};

/// Output path meaning standard output.
pub const STDOUT: &str = "-";

#[cfg(unix)]
const FILE_MODE: u32 = 0o600;

/// Formats the alias line for one address of `contact`.
#[must_use]
pub fn alias_line(contact: &Contact, email: &str) -> String {
    format!(
        "alias {} {} <{}>\n",
        contact.display_nickname(email),
        contact.display_name(email),
        email
    )
}

/// Writes alias lines to any byte sink.
#[derive(Debug)]
pub struct AliasWriter<W: Write> {
    out: W,
}

impl<W: Write> AliasWriter<W> {
    /// Wraps `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes one line per (contact, address) pair, in order.
    ///
    /// Blank addresses are skipped. Returns the number of lines written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Output`] if writing fails.
    pub fn write_contacts(&mut self, contacts: &[Contact]) -> Result<usize> {
        let mut lines = 0;
        for contact in contacts {
            for email in &contact.emails {
                if email.trim().is_empty() {
                    debug!("Skipping blank address for {:?}", contact.name);
                    continue;
                }
                self.out
                    .write_all(alias_line(contact, email).as_bytes())
                    .map_err(Error::Output)?;
                lines += 1;
            }
        }
        debug!("Wrote {lines} alias lines");
        Ok(lines)
    }

    /// Flushes and returns the sink.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Output`] if flushing fails.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush().map_err(Error::Output)?;
        Ok(self.out)
    }
}

/// Opens the alias destination: standard output for `-`, otherwise the file
/// at `path`, created or truncated with owner-only permissions.
///
/// # Errors
///
/// Returns [`Error::Output`] if the file cannot be opened.
pub fn open_output(path: &str) -> Result<AliasWriter<BufWriter<Box<dyn Write>>>> {
    let sink: Box<dyn Write> = if path == STDOUT {
        Box::new(io::stdout().lock())
    } else {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(FILE_MODE);
        }
        debug!("Opening output file {path}");
        Box::new(options.open(Path::new(path)).map_err(Error::Output)?)
    };

    Ok(AliasWriter::new(BufWriter::new(sink)))
}
