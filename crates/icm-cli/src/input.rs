//! Line input for `validate`, from arguments or a stream.

use std::io::{self, BufRead, BufReader, Cursor, Read};

/// Most positional arguments `validate` accepts.
pub const MAX_ARGS: usize = 6;

/// Bytes read ahead to decide between single and multi line input.
pub const PEEK_SIZE: usize = 4096;

/// Whether `text` holds at most one line. A trailing newline does not
/// start another line, empty lines do.
pub fn is_single_line(text: &str) -> bool {
    text.lines().nth(1).is_none()
}

fn decode_line(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

/// A stream whose first bytes were read ahead.
pub struct PeekedInput<R> {
    head: Vec<u8>,
    rest: R,
}

impl<R: Read> PeekedInput<R> {
    pub fn new(mut reader: R) -> io::Result<Self> {
        let mut head = Vec::with_capacity(PEEK_SIZE);
        (&mut reader).take(PEEK_SIZE as u64).read_to_end(&mut head)?;
        Ok(Self { head, rest: reader })
    }

    pub fn is_single_line(&self) -> bool {
        is_single_line(&String::from_utf8_lossy(&self.head))
    }

    /// The first line, used as the sample for pattern selection.
    pub fn first_line(&self) -> String {
        let head = String::from_utf8_lossy(&self.head);
        let first = head.split('\n').next().unwrap_or_default();
        first.trim_end_matches('\r').to_string()
    }

    /// All lines, the read-ahead ones included.
    ///
    /// Invalid UTF-8 is replaced rather than rejected, so such a line is
    /// still validated.
    pub fn lines(self) -> impl Iterator<Item = io::Result<String>> {
        BufReader::new(Cursor::new(self.head).chain(self.rest))
            .split(b'\n')
            .map(|line| line.map(|bytes| decode_line(&bytes)))
    }
}

impl PeekedInput<Cursor<Vec<u8>>> {
    /// Input made of the arguments joined by spaces.
    pub fn from_args(args: &[String]) -> Self {
        Self {
            head: args.join(" ").into_bytes(),
            rest: Cursor::new(Vec::new()),
        }
    }
}
