//! JSONL transcript writer for discussion events.
//!
//! Each [`ConversationEvent`] becomes one JSON line carrying its `type`, a
//! millisecond `timestamp` and a running `line` number. The file is opened in
//! append mode so transcripts of consecutive discussions accumulate.

use panel_application::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use serde_json::{Value, json};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

struct TranscriptWriter {
    out: BufWriter<File>,
    lines: u64,
}

/// Transcript logger writing one JSON object per line
pub struct JsonlConversationLogger {
    writer: Mutex<TranscriptWriter>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Open (or create) the transcript at `path`, creating parent directories.
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: Mutex::new(TranscriptWriter {
                out: BufWriter::new(file),
                lines: 0,
            }),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn record(event: ConversationEvent, timestamp: String, line: u64) -> Value {
    match event.payload {
        Value::Object(mut map) => {
            map.insert("type".to_string(), Value::String(event.event_type.to_string()));
            map.insert("timestamp".to_string(), Value::String(timestamp));
            map.insert("line".to_string(), json!(line));
            Value::Object(map)
        }
        other => json!({
            "type": event.event_type,
            "timestamp": timestamp,
            "line": line,
            "data": other,
        }),
    }
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let Ok(mut writer) = self.writer.lock() else {
            return;
        };
        let line = writer.lines;
        let Ok(text) = serde_json::to_string(&record(event, timestamp, line)) else {
            return;
        };

        let written = writeln!(writer.out, "{}", text).and_then(|_| writer.out.flush());
        match written {
            Ok(()) => writer.lines += 1,
            Err(e) => warn!("Could not write transcript {}: {}", self.path.display(), e),
        }
    }
}

impl Drop for JsonlConversationLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.out.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_discussion_events_become_jsonl_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("panel.jsonl");
        let logger = JsonlConversationLogger::open(&path).unwrap();

        logger.log(ConversationEvent::new(
            "discussion_started",
            json!({"topic": "Tides", "max_rounds": 3}),
        ));
        logger.log(ConversationEvent::new(
            "actor_turn",
            json!({"round": 1, "actor": "expert1", "sequence": 1, "text": "The moon"}),
        ));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["type"], "discussion_started");
        assert_eq!(records[0]["topic"], "Tides");
        assert_eq!(records[0]["line"], 0);
        assert_eq!(records[1]["type"], "actor_turn");
        assert_eq!(records[1]["actor"], "expert1");
        assert_eq!(records[1]["line"], 1);
        assert!(records.iter().all(|r| r["timestamp"].is_string()));
    }

    #[test]
    fn test_non_object_payload_is_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("panel.jsonl");
        let logger = JsonlConversationLogger::open(&path).unwrap();

        logger.log(ConversationEvent::new("note", json!("just a string")));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records[0]["type"], "note");
        assert_eq!(records[0]["data"], "just a string");
    }

    #[test]
    fn test_reopening_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("panel.jsonl");

        for topic in ["first", "second"] {
            let logger = JsonlConversationLogger::open(&path).unwrap();
            logger.log(ConversationEvent::new("discussion_started", json!({"topic": topic})));
        }

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["topic"], "second");
    }

    #[test]
    fn test_open_fails_for_directory_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(JsonlConversationLogger::open(dir.path()).is_err());
    }
}
