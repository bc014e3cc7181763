use std::io::{self, Read, Write};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

const REPLY_TIMEOUT: Duration = Duration::from_millis(100);
const DRAIN_TIMEOUT: Duration = Duration::from_millis(50);

/// Light or dark appearance of the rendering environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Appearance {
    Light,
    #[default]
    Dark,
}

impl Appearance {
    /// Query the terminal background color and classify it.
    ///
    /// **Important**: Call this BEFORE `crossterm::terminal::enable_raw_mode()`.
    ///
    /// Falls back to dark when the terminal doesn't answer.
    #[must_use]
    pub fn detect() -> Self {
        detect_appearance().unwrap_or_else(|| {
            tracing::debug!("terminal background query unanswered, assuming dark");
            Self::Dark
        })
    }

    #[must_use]
    pub fn from_background(r: u8, g: u8, b: u8) -> Self {
        if luminance(r, g, b) <= 0.5 {
            Self::Dark
        } else {
            Self::Light
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// How the appearance is chosen: detected from the terminal or pinned by config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppearanceSetting {
    #[default]
    Auto,
    Light,
    Dark,
}

impl AppearanceSetting {
    #[must_use]
    pub fn resolve(self) -> Appearance {
        match self {
            Self::Auto => Appearance::detect(),
            Self::Light => Appearance::Light,
            Self::Dark => Appearance::Dark,
        }
    }
}

#[must_use]
fn luminance(r: u8, g: u8, b: u8) -> f32 {
    (0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b)) / 255.0
}

/// Asks the terminal for its background (OSC 11) and classifies the answer.
fn detect_appearance() -> Option<Appearance> {
    if !io::IsTerminal::is_terminal(&io::stdin()) {
        return None;
    }

    let _raw = RawMode::enter()?;
    let mut stdout = io::stdout();
    stdout.write_all(b"\x1b]11;?\x07").ok()?;
    stdout.flush().ok()?;

    let deadline = Instant::now() + REPLY_TIMEOUT;
    let mut reply = Vec::with_capacity(32);
    let mut chunk = [0u8; 64];
    loop {
        if let Some((r, g, b)) = reply_rgb(&reply) {
            tracing::debug!(r, g, b, "terminal background reported");
            return Some(Appearance::from_background(r, g, b));
        }
        let remaining = deadline.checked_duration_since(Instant::now())?;
        if !stdin_ready(remaining) {
            return None;
        }
        let n = io::stdin().read(&mut chunk).ok()?;
        if n == 0 {
            return None;
        }
        reply.extend_from_slice(&chunk[..n]);
    }
}

/// Raw mode for the duration of the query. Dropping it swallows any late reply bytes
/// so they don't surface as key events, then restores cooked mode.
struct RawMode;

impl RawMode {
    fn enter() -> Option<Self> {
        crossterm::terminal::enable_raw_mode().ok().map(|()| Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let deadline = Instant::now() + DRAIN_TIMEOUT;
        while Instant::now() < deadline
            && crossterm::event::poll(Duration::from_millis(1)).unwrap_or(false)
        {
            let _ = crossterm::event::read();
        }
        let _ = crossterm::terminal::disable_raw_mode();
    }
}

#[cfg(unix)]
fn stdin_ready(wait: Duration) -> bool {
    use std::os::unix::io::AsRawFd;

    let mut fds = [libc::pollfd {
        fd: io::stdin().as_raw_fd(),
        events: libc::POLLIN,
        revents: 0,
    }];
    let wait_ms = libc::c_int::try_from(wait.as_millis()).unwrap_or(libc::c_int::MAX);
    // SAFETY: `fds` is a live array whose length is passed alongside it
    let ready = unsafe { libc::poll(fds.as_mut_ptr(), fds.len() as libc::nfds_t, wait_ms) };
    ready > 0 && fds[0].revents & libc::POLLIN != 0
}

#[cfg(not(unix))]
fn stdin_ready(_wait: Duration) -> bool {
    false
}

/// Extracts the color from an OSC 11 reply such as `\x1b]11;rgb:1e1e/1e1e/1f1f\x07`.
///
/// Channels may carry one to four hex digits; each is scaled to eight bits.
fn reply_rgb(data: &[u8]) -> Option<(u8, u8, u8)> {
    let start = data.windows(4).position(|w| w == b"rgb:")? + 4;
    let body = &data[start..];
    let end = body.iter().position(|b| *b == 0x07 || *b == 0x1b)?;

    let mut channels = body[..end].split(|b| *b == b'/').map(scale_channel);
    let rgb = (channels.next()??, channels.next()??, channels.next()??);
    channels.next().is_none().then_some(rgb)
}

fn scale_channel(hex: &[u8]) -> Option<u8> {
    if hex.is_empty() || hex.len() > 4 {
        return None;
    }
    let digits = std::str::from_utf8(hex).ok()?;
    let value = u32::from_str_radix(digits, 16).ok()?;
    let max = (1u32 << (4 * hex.len())) - 1;
    u8::try_from(value * 255 / max).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_and_light_backgrounds_classify() {
        assert_eq!(Appearance::from_background(15, 15, 15), Appearance::Dark);
        assert_eq!(Appearance::from_background(246, 246, 246), Appearance::Light);
    }

    #[test]
    fn reads_sixteen_bit_reply() {
        let reply = b"\x1b]11;rgb:f6f6/f6f6/f6f6\x07";
        assert_eq!(reply_rgb(reply), Some((0xf6, 0xf6, 0xf6)));
    }

    #[test]
    fn reads_reply_with_st_terminator() {
        let reply = b"\x1b]11;rgb:1e1e/1e1e/1f1f\x1b\\";
        assert_eq!(reply_rgb(reply), Some((0x1e, 0x1e, 0x1f)));
    }

    #[test]
    fn short_channels_scale_to_full_range() {
        assert_eq!(reply_rgb(b"\x1b]11;rgb:f/0/8\x07"), Some((255, 0, 136)));
        assert_eq!(reply_rgb(b"\x1b]11;rgb:ff/00/80\x07"), Some((255, 0, 128)));
    }

    #[test]
    fn unterminated_or_partial_reply_is_none() {
        assert_eq!(reply_rgb(b"\x1b]11;rgb:1e1e/1e1e"), None);
        assert_eq!(reply_rgb(b"\x1b]11;rgb:1e1e/1e1e/1f1f"), None);
        assert_eq!(reply_rgb(b"\x1b]11;rgb:1e1e/1e1e\x07"), None);
    }

    #[test]
    fn pinned_settings_skip_detection() {
        assert_eq!(AppearanceSetting::Light.resolve(), Appearance::Light);
        assert_eq!(AppearanceSetting::Dark.resolve(), Appearance::Dark);
    }
}
