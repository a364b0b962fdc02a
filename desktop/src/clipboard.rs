use std::{
    env,
    ffi::OsStr,
    io::Write,
    path::Path,
    process::{Command, Stdio},
};

use ardubmp_core::ConversionError;
use log::{debug, error, info};

use crate::sink::non_empty;

pub trait Clipboard {
    fn available(&self) -> bool;
    fn copy(&mut self, text: &str) -> Result<(), ConversionError>;
}

/// Copies the literal, failing early when the clipboard is missing or there is nothing to copy.
pub fn copy_literal(clipboard: &mut impl Clipboard, text: &str) -> Result<(), ConversionError> {
    if !clipboard.available() {
        return Err(ConversionError::ClipboardUnavailable);
    }
    let text = non_empty(text)?;
    clipboard.copy(text)?;
    info!("Data copied to clipboard");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Tool {
    program: &'static str,
    args: &'static [&'static str],
}

const PBCOPY: Tool = Tool { program: "pbcopy", args: &[] };
const CLIP: Tool = Tool { program: "clip.exe", args: &[] };
const WL_COPY: Tool = Tool { program: "wl-copy", args: &[] };
const XCLIP: Tool = Tool { program: "xclip", args: &["-selection", "clipboard"] };
const XSEL: Tool = Tool { program: "xsel", args: &["--clipboard", "--input"] };

/// Clipboard backed by the platform's command line copy tool.
#[derive(Debug, Default)]
pub struct SystemClipboard {
    tool: Option<Tool>,
}

impl SystemClipboard {
    pub fn detect() -> Self {
        let tool = find_tool(&candidates(), env::var_os("PATH").as_deref());
        match tool {
            Some(tool) => debug!("Using {} for clipboard access", tool.program),
            None => info!("No clipboard tool found, copying is disabled"),
        }
        Self { tool }
    }
}

fn candidates() -> Vec<Tool> {
    if cfg!(target_os = "macos") {
        return vec![PBCOPY];
    }
    if cfg!(windows) {
        return vec![CLIP];
    }
    let mut tools = Vec::new();
    if env::var_os("WAYLAND_DISPLAY").is_some() {
        tools.push(WL_COPY);
    }
    if env::var_os("DISPLAY").is_some() {
        tools.push(XCLIP);
        tools.push(XSEL);
    }
    tools
}

/// First candidate whose program exists in one of the `PATH` directories.
fn find_tool(candidates: &[Tool], path: Option<&OsStr>) -> Option<Tool> {
    let path = path?;
    candidates
        .iter()
        .copied()
        .find(|tool| env::split_paths(path).any(|dir| is_file(&dir.join(tool.program))))
}

fn is_file(path: &Path) -> bool {
    path.metadata().map(|m| m.is_file()).unwrap_or(false)
}

impl Clipboard for SystemClipboard {
    fn available(&self) -> bool {
        self.tool.is_some()
    }

    fn copy(&mut self, text: &str) -> Result<(), ConversionError> {
        let tool = self.tool.ok_or(ConversionError::ClipboardUnavailable)?;
        let spawn_failed = |e: std::io::Error| {
            error!("Failed to run {}: {}", tool.program, e);
            ConversionError::ClipboardUnavailable
        };
        let mut child = Command::new(tool.program)
            .args(tool.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(spawn_failed)?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).map_err(spawn_failed)?;
        }
        let status = child.wait().map_err(spawn_failed)?;
        if !status.success() {
            error!("{} exited with {}", tool.program, status);
            return Err(ConversionError::ClipboardUnavailable);
        }
        Ok(())
    }
}

/// In-memory clipboard for tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryClipboard {
    pub available: bool,
    pub contents: Option<String>,
}

#[cfg(test)]
impl Clipboard for MemoryClipboard {
    fn available(&self) -> bool {
        self.available
    }

    fn copy(&mut self, text: &str) -> Result<(), ConversionError> {
        self.contents = Some(text.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_clipboard_is_reported() {
        let mut clipboard = MemoryClipboard::default();
        assert_eq!(
            copy_literal(&mut clipboard, "0xFF"),
            Err(ConversionError::ClipboardUnavailable)
        );
        assert_eq!(clipboard.contents, None);
    }

    #[test]
    fn empty_text_is_not_copied() {
        let mut clipboard = MemoryClipboard {
            available: true,
            ..Default::default()
        };
        assert_eq!(copy_literal(&mut clipboard, "\n"), Err(ConversionError::EmptyOutput));
        assert_eq!(clipboard.contents, None);
    }

    #[test]
    fn copies_trimmed_text() {
        let mut clipboard = MemoryClipboard {
            available: true,
            ..Default::default()
        };
        copy_literal(&mut clipboard, "};\n").unwrap();
        assert_eq!(clipboard.contents.as_deref(), Some("};"));
    }

    #[test]
    fn system_clipboard_without_tool() {
        let mut clipboard = SystemClipboard::default();
        assert!(!clipboard.available());
        assert_eq!(clipboard.copy("x"), Err(ConversionError::ClipboardUnavailable));
    }

    #[test]
    fn finds_tool_in_path_order() {
        let empty = tempfile::tempdir().unwrap();
        let bin = tempfile::tempdir().unwrap();
        std::fs::write(bin.path().join("xsel"), "").unwrap();
        let path = env::join_paths([empty.path(), bin.path()]).unwrap();

        assert_eq!(find_tool(&[XCLIP, XSEL], Some(path.as_os_str())), Some(XSEL));
        assert_eq!(find_tool(&[XCLIP], Some(path.as_os_str())), None);
    }

    #[test]
    fn directories_are_not_tools() {
        let bin = tempfile::tempdir().unwrap();
        std::fs::create_dir(bin.path().join("wl-copy")).unwrap();
        assert_eq!(find_tool(&[WL_COPY], Some(bin.path().as_os_str())), None);
    }

    #[test]
    fn missing_path_finds_nothing() {
        assert_eq!(find_tool(&[PBCOPY, CLIP], None), None);
        assert_eq!(find_tool(&[], Some(OsStr::new("/usr/bin"))), None);
    }
}
