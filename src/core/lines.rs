use std::io::{self, BufRead};

/// Lines of a UTF-8 text stream, ended by `\n`, `\r\n` or a lone `\r`.
///
/// Terminators are not part of the yielded text. Each line is decoded on its
/// own, so invalid bytes fail only the line that holds them.
pub struct TextLines<R> {
    reader: R,
    pending_cr: bool,
}

impl<R: BufRead> TextLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending_cr: false,
        }
    }

    fn read_raw_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        let mut read_any = false;

        loop {
            let available = match self.reader.fill_buf() {
                Ok(content) => content,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                return Ok(read_any.then_some(line));
            }

            // `\n` right after a `\r` belongs to the previous line
            if self.pending_cr {
                self.pending_cr = false;
                if available[0] == b'\n' {
                    self.reader.consume(1);
                    continue;
                }
            }

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    let terminator = available[end];
                    line.extend_from_slice(&available[..end]);
                    self.reader.consume(end + 1);
                    self.pending_cr = terminator == b'\r';
                    return Ok(Some(line));
                }
                None => {
                    let consumed = available.len();
                    line.extend_from_slice(available);
                    self.reader.consume(consumed);
                    read_any = true;
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for TextLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_raw_line() {
            Ok(Some(bytes)) => Some(
                String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
            ),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
