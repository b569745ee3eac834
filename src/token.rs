/*!
  The tokenizer splits cleaned-up source text into words. A word is a maximal run of characters
  that are not delimiters. The delimiters are whitespace (space, tab, carriage return, newline),
  the comma, parentheses and square brackets, so `mov [eax],(ebx)` has the words `mov`, `eax`
  and `ebx`. Runs of delimiters never produce empty words.

  Tokens are slices of the text they came from; a `Tokenizer` never copies.
*/

use nom::{
  bytes::complete::{is_a, is_not},
  combinator::opt,
  error::ErrorKind,
  sequence::preceded,
  IResult
};

/// Characters that separate tokens.
pub const DELIMITERS: &str = " \t\r\n,()[]";

/// Skips leading delimiters and takes the next token.
fn next_token(input: &str) -> IResult<&str, &str, (&str, ErrorKind)> {
  preceded(opt(is_a(DELIMITERS)), is_not(DELIMITERS))(input)
}

/// An iterator over the tokens of a piece of text, in order.
#[derive(Clone, Debug)]
pub struct Tokenizer<'s> {
  rest: &'s str
}

impl<'s> Tokenizer<'s> {
  pub fn new(text: &'s str) -> Self {
    Tokenizer {
      rest: text
    }
  }
}

impl<'s> Iterator for Tokenizer<'s> {
  type Item = &'s str;

  fn next(&mut self) -> Option<Self::Item> {
    match next_token(self.rest) {

      Ok((rest, token)) => {
        self.rest = rest;
        trace!("token: {}", token);
        Some(token)
      }

      Err(_) => {
        // Nothing but delimiters (or nothing at all) is left.
        self.rest = "";
        None
      }

    }
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  fn tokenize(text: &str) -> Vec<&str> {
    Tokenizer::new(text).collect()
  }

  #[test]
  fn splits_on_every_delimiter(){
    assert_eq!(
      tokenize("mov\teax,[ebx]\r\ncall (foo)"),
      vec!["mov", "eax", "ebx", "call", "foo"]
    );
  }

  #[test]
  fn collapses_delimiter_runs(){
    assert_eq!(tokenize("eax,,ebx"), vec!["eax", "ebx"]);
    assert_eq!(tokenize("  ,\n\n[ ]  fld  "), vec!["fld"]);
  }

  #[test]
  fn nothing_but_delimiters(){
    assert!(tokenize("").is_empty());
    assert!(tokenize(" ,()[]\t\r\n").is_empty());
  }

  #[test]
  fn other_punctuation_stays_in_tokens(){
    assert_eq!(
      tokenize("movl $1, %eax ; comment: st(0)"),
      vec!["movl", "$1", "%eax", ";", "comment:", "st", "0"]
    );
  }

  #[test]
  fn iterator_is_exhausted(){
    let mut tokens = Tokenizer::new("ldr r0");
    assert_eq!(tokens.next(), Some("ldr"));
    assert_eq!(tokens.next(), Some("r0"));
    assert_eq!(tokens.next(), None);
    assert_eq!(tokens.next(), None);
  }

}
