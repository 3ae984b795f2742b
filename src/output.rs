//! Output formatting for search hits and the suffix listing.

use crate::index::{PREVIEW_LEN, SuffixIndex, SuffixOffset};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn choice(color: bool) -> ColorChoice {
    if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Print one `Found <pattern> at <offset>` line per hit, or a not-found
/// message when there are none.
pub fn print_hits(pattern: &str, hits: &[SuffixOffset], color: bool) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(choice(color));

    if hits.is_empty() {
        writeln!(stdout, "No occurrences of {} found.", pattern)?;
        return Ok(());
    }

    for &offset in hits {
        write!(stdout, "Found ")?;
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(stdout, "{}", pattern)?;
        stdout.reset()?;
        write!(stdout, " at ")?;
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        writeln!(stdout, "{}", offset)?;
        stdout.reset()?;
    }

    Ok(())
}

/// Print the diagnostic suffix listing with the offset column colored.
///
/// Same line shape as [`SuffixIndex::write_listing`], which plain sinks
/// should use instead.
pub fn print_suffix_listing(index: &SuffixIndex, color: bool) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(choice(color));

    for &offset in index.offsets() {
        let suffix = &index.sequence()[offset as usize..];
        let preview = &suffix[..suffix.len().min(PREVIEW_LEN)];

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "{:>8}", offset)?;
        stdout.reset()?;
        writeln!(stdout, " | {}", String::from_utf8_lossy(preview))?;
    }

    Ok(())
}
