//! Sink helpers
//!
//! A sink is any writable destination for formatted log lines. This module
//! covers opening the file-backed sink and the one wire-format guarantee:
//! every line carries a local-time timestamp with microsecond precision.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::Local;

use crate::constants::TIMESTAMP_FORMAT;
use crate::error::{LogError, Result};

/// Boxed writable destination for log lines
pub type Sink = Box<dyn Write + Send>;

/// Open the log file at `path` for append (read/write, created with mode
/// 0644 if missing).
pub fn open_log_file(path: &Path) -> Result<File> {
    let mut opts = OpenOptions::new();
    opts.create(true).append(true).read(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(crate::constants::LOG_FILE_MODE);
    }
    opts.open(path).map_err(|e| LogError::SinkOpen {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Format one line: local timestamp, a space, the message.
pub fn format_line(msg: &str) -> String {
    format!("{} {}", Local::now().format(TIMESTAMP_FORMAT), msg)
}

/// Append one timestamped, newline-terminated line to `writer`.
/// Write failures are not surfaced to callers.
pub fn write_line(writer: &mut dyn Write, msg: &str) {
    let line = format_line(msg);
    let _ = writer.write_all(line.as_bytes());
    let _ = writer.write_all(b"\n");
    let _ = writer.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use std::fs;
    use std::path::PathBuf;

    fn unique_temp_dir() -> PathBuf {
        let base = std::env::temp_dir();
        let pid = std::process::id();
        let ts = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        base.join(format!("wace-log-sink-{}-{}", pid, ts))
    }

    #[test]
    fn test_open_log_file_creates_missing_file() {
        let dir = unique_temp_dir();
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("wace.log");

        let file = open_log_file(&path);
        assert!(file.is_ok());
        assert!(path.exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_open_log_file_empty_path_fails() {
        let err = open_log_file(Path::new("")).unwrap_err();
        assert!(matches!(err, LogError::SinkOpen { .. }));
    }

    #[test]
    fn test_open_log_file_appends() {
        let dir = unique_temp_dir();
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("wace.log");
        fs::write(&path, "existing\n").unwrap();

        let mut file = open_log_file(&path).unwrap();
        write_line(&mut file, "appended");
        drop(file);

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("existing\n"));
        assert!(contents.contains("appended"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_format_line_timestamp_parses() {
        let line = format_line("ping");
        assert!(line.ends_with(" ping"));

        let prefix = &line[..line.len() - " ping".len()];
        assert!(NaiveDateTime::parse_from_str(prefix, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_write_line_terminates_with_newline() {
        let mut out: Vec<u8> = Vec::new();
        write_line(&mut out, "one");
        write_line(&mut out, "two");

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("one"));
        assert!(lines[1].ends_with("two"));
    }
}
