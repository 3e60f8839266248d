//! Line protocol reader
//!
//! Input layout:
//! 1. six `<field> <value>` lines for the system profile
//! 2. one line with the number of pushes N
//! 3. per push: one line with the number of fields M, then M `<field> <value>` lines
//!
//! Blank lines are skipped everywhere.

use push_core::{Push, PushError, PushResult, Record, SystemProfile, SYSTEM_FIELD_COUNT};
use std::io::BufRead;

/// Everything read from one protocol transcript
#[derive(Debug, Clone)]
pub struct PushInput {
    pub system: SystemProfile,
    pub pushes: Vec<Push>,
}

pub struct PushReader<R> {
    inner: R,
    line_no: usize,
    buf: String,
}

impl<R: BufRead> PushReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, line_no: 0, buf: String::new() }
    }

    /// Number of physical lines consumed so far
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Next non-blank line, or `None` at end of input
    fn next_line(&mut self) -> PushResult<Option<&str>> {
        loop {
            self.buf.clear();
            if self.inner.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line_no += 1;
            if !self.buf.trim().is_empty() {
                return Ok(Some(self.buf.trim_end_matches(['\r', '\n'])));
            }
        }
    }

    fn expect_line(&mut self, expected: &str) -> PushResult<String> {
        match self.next_line()? {
            Some(line) => Ok(line.to_string()),
            None => Err(PushError::UnexpectedEof { expected: expected.to_string() }),
        }
    }

    pub fn read_count(&mut self, expected: &str) -> PushResult<usize> {
        let line = self.expect_line(expected)?;
        let value = line.trim();
        value.parse::<usize>().map_err(|_| PushError::InvalidCount {
            line_no: self.line_no,
            value: value.to_string(),
        })
    }

    /// Read `count` `<field> <value>` lines into a record
    pub fn read_record(&mut self, count: usize) -> PushResult<Record> {
        let mut record = Record::new();
        for i in 0..count {
            let line = self.expect_line(&format!("field line {} of {}", i + 1, count))?;
            record.push_line(self.line_no, &line)?;
        }
        Ok(record)
    }

    pub fn read_system(&mut self) -> PushResult<SystemProfile> {
        let record = self.read_record(SYSTEM_FIELD_COUNT)?;
        SystemProfile::from_record(&record)
    }

    pub fn read_push(&mut self) -> PushResult<Push> {
        let count = self.read_count("push field count")?;
        let record = self.read_record(count)?;
        Push::from_record(&record)
    }

    pub fn read_pushes(&mut self) -> PushResult<Vec<Push>> {
        let n = self.read_count("push count")?;
        log::debug!("Reading {} pushes", n);
        (0..n).map(|_| self.read_push()).collect()
    }

    pub fn read_input(&mut self) -> PushResult<PushInput> {
        let system = self.read_system()?;
        let pushes = self.read_pushes()?;
        Ok(PushInput { system, pushes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use push_core::PushKind;
    use std::io::Cursor;

    fn reader(text: &str) -> PushReader<Cursor<&str>> {
        PushReader::new(Cursor::new(text))
    }

    const SYSTEM: &str = "time 100\nage 30\ngender M\nos_version 5\nx_coord 0\ny_coord 0\n";

    #[test]
    fn test_read_system_any_order() {
        let mut r = reader("y_coord 2\ngender F\nage 40\ntime 7\nx_coord 1\nos_version 9\n");
        let system = r.read_system().unwrap();
        assert_eq!(system.time, 7);
        assert_eq!(system.age, 40);
        assert_eq!(system.gender, "F");
        assert_eq!(system.os_version, 9);
        assert_eq!(system.location.x, 1.0);
        assert_eq!(system.location.y, 2.0);
        assert_eq!(r.line_no(), 6);
    }

    #[test]
    fn test_read_full_input() {
        let text = format!(
            "{}2\n4\ntype GenderAgePush\ntext Hi\ngender M\nage 25\n\
             6\ntype LocationPush\ntext Bye\nradius 10\nexpiry_date 50\nx_coord 0\ny_coord 0\n",
            SYSTEM
        );
        let input = reader(&text).read_input().unwrap();
        assert_eq!(input.pushes.len(), 2);
        assert_eq!(input.pushes[0].kind(), PushKind::GenderAgePush);
        assert_eq!(input.pushes[1].text, "Bye");
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let text = "time 1\r\n\r\nage 2\r\ngender F\r\nos_version 3\r\nx_coord 0\r\ny_coord 0\r\n0\r\n";
        let input = reader(text).read_input().unwrap();
        assert_eq!(input.system.gender, "F");
        assert!(input.pushes.is_empty());
    }

    #[test]
    fn test_text_with_spaces() {
        let text = format!("{}1\n3\ntype GenderPush\ntext Hello  there world\ngender M\n", SYSTEM);
        let input = reader(&text).read_input().unwrap();
        assert_eq!(input.pushes[0].text, "Hello  there world");
    }

    #[test]
    fn test_truncated_input() {
        let text = format!("{}2\n1\n", SYSTEM);
        let err = reader(&text).read_input().unwrap_err();
        assert!(matches!(err, PushError::UnexpectedEof { .. }));
    }

    #[test]
    fn test_invalid_count() {
        let text = format!("{}many\n", SYSTEM);
        let err = reader(&text).read_input().unwrap_err();
        assert!(matches!(err, PushError::InvalidCount { line_no: 7, ref value } if value == "many"));
    }

    #[test]
    fn test_negative_count_is_invalid() {
        let text = format!("{}-1\n", SYSTEM);
        assert!(matches!(reader(&text).read_input(), Err(PushError::InvalidCount { .. })));
    }

    #[test]
    fn test_malformed_field_line() {
        let err = reader("time\n").read_system().unwrap_err();
        assert!(matches!(err, PushError::MalformedLine { line_no: 1, .. }));
    }

    #[test]
    fn test_unknown_push_type() {
        let text = format!("{}1\n2\ntype PigeonPush\ntext coo\n", SYSTEM);
        let err = reader(&text).read_input().unwrap_err();
        assert!(matches!(err, PushError::UnknownType(ref t) if t == "PigeonPush"));
    }

    #[test]
    fn test_missing_type_field() {
        let text = format!("{}1\n1\ntext orphan\n", SYSTEM);
        let err = reader(&text).read_input().unwrap_err();
        assert!(matches!(err, PushError::MissingField { ref field } if field == "type"));
    }
}
