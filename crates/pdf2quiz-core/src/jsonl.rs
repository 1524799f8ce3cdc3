use crate::error::QuizError;
use crate::model::QuestionRecord;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Write records as newline-delimited JSON, one compact object per line.
///
/// An empty slice produces an empty file.
pub fn write_jsonl(path: &Path, records: &[QuestionRecord]) -> Result<(), QuizError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_records(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

/// Serialize records to any writer in JSONL form.
pub fn write_records<W: Write>(writer: &mut W, records: &[QuestionRecord]) -> Result<(), QuizError> {
    for record in records {
        serde_json::to_writer(&mut *writer, record)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Read a JSONL bank. Blank lines are ignored.
pub fn read_jsonl(path: &Path) -> Result<Vec<QuestionRecord>, QuizError> {
    let file = File::open(path)?;
    read_records(BufReader::new(file))
}

pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<QuestionRecord>, QuizError> {
    let mut records = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line).map_err(|e| QuizError::InvalidRecord {
            line: i + 1,
            reason: e.to_string(),
        })?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OptionLetter, OptionMap};

    fn record(id: u32) -> QuestionRecord {
        let mut options = OptionMap::new();
        options.insert(OptionLetter::A, "是".into());
        options.insert(OptionLetter::B, "否".into());
        QuestionRecord {
            id,
            topic: 1,
            question: "DNSSEC 可以防止快取污染嗎?".into(),
            options,
            answer: vec![OptionLetter::A],
            explanation: None,
        }
    }

    #[test]
    fn test_one_line_per_record() {
        let mut buf = Vec::new();
        write_records(&mut buf, &[record(1), record(2)]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with('\n'));
        assert!(text.contains("快取污染"));
    }

    #[test]
    fn test_empty_slice_writes_nothing() {
        let mut buf = Vec::new();
        write_records(&mut buf, &[]).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_read_skips_blank_lines() {
        let mut buf = Vec::new();
        write_records(&mut buf, &[record(5)]).unwrap();
        buf.extend_from_slice(b"\n  \n");
        let records = read_records(buf.as_slice()).unwrap();
        assert_eq!(records, vec![record(5)]);
    }

    #[test]
    fn test_read_reports_bad_line_number() {
        let input = "{\"id\":1,\"topic\":1,\"question\":\"q\",\"options\":{\"A\":\"a\",\"B\":\"b\"},\"answer\":[\"A\"]}\nnot json\n";
        let err = read_records(input.as_bytes()).unwrap_err();
        assert!(matches!(err, QuizError::InvalidRecord { line: 2, .. }));
    }

    #[test]
    fn test_file_roundtrip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bank.jsonl");
        write_jsonl(&path, &[record(3)]).unwrap();
        assert_eq!(read_jsonl(&path).unwrap(), vec![record(3)]);
    }
}
