/*!
  The source text is the whole listing read from the input, owned by a single `SourceText`.
  Before it is tokenized it is cleaned up in place: string literals are cut out and everything is
  lowercased. Tokens borrow from the `SourceText`, so once tokenizing starts the text is frozen.
*/

use std::io::{ErrorKind, Read};

use crate::token::Tokenizer;

/// The input is read in blocks of this many bytes.
pub const READ_BLOCK_SIZE: usize = 4096;

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SourceText {
  text: String
}

impl SourceText {

  /**
    Reads `reader` to the end. An I/O error ends the text just like end-of-stream does; whatever
    was read before the error is kept.
  */
  pub fn read_from<R: Read>(mut reader: R) -> SourceText {
    let mut data: Vec<u8> = Vec::new();

    loop {
      let filled = data.len();
      data.resize(filled + READ_BLOCK_SIZE, 0);

      match reader.read(&mut data[filled..]) {

        Ok(0) => {
          data.truncate(filled);
          break;
        }

        Ok(count) => {
          data.truncate(filled + count);
        }

        Err(e) if e.kind() == ErrorKind::Interrupted => {
          data.truncate(filled);
        }

        Err(e) => {
          warn!("Input stopped after {} bytes: {}", filled, e);
          data.truncate(filled);
          break;
        }

      } // end match on read
    }

    debug!("Read {} bytes of input", data.len());
    SourceText::from_bytes(&data)
  }

  /// Builds the text from raw bytes. The text ends at the first NUL byte, and invalid UTF-8 is
  /// replaced, which never touches delimiters or quotes.
  pub fn from_bytes(bytes: &[u8]) -> SourceText {
    let end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
    if end < bytes.len() {
      debug!("Ignoring {} bytes after a NUL byte", bytes.len() - end);
    }

    SourceText {
      text: String::from_utf8_lossy(&bytes[..end]).into_owned()
    }
  }

  /**
    Removes every pair of double quotes together with everything between them. Quotes pair up
    left to right. If the count is odd, the last quote has no partner; it and everything after it
    are left alone.
  */
  pub fn strip_string_literals(&mut self) {
    let unpaired = match self.text.matches('"').count() % 2 {
      1 => self.text.rfind('"'),
      _ => None
    };
    if let Some(position) = unpaired {
      debug!("Unterminated string literal at byte {}", position);
    }
    let limit = unpaired.unwrap_or_else(|| self.text.len());

    let mut offset = 0;
    let mut in_literal = false;
    self.text.retain(
      |c| {
        let at = offset;
        offset += c.len_utf8();

        match (at < limit, c) {
          (false, _) => true,
          (true, '"') => {
            in_literal = !in_literal;
            false
          }
          (true, _) => !in_literal
        }
      }
    );
  }

  /// ASCII lowercase in place. Other characters are untouched.
  pub fn lowercase(&mut self) {
    self.text.make_ascii_lowercase();
  }

  pub fn as_str(&self) -> &str {
    &self.text
  }

  /// Splits the text into tokens. See `crate::token`.
  pub fn tokens(&self) -> Tokenizer<'_> {
    Tokenizer::new(&self.text)
  }

}
