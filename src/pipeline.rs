/*!
  Wires the stages together: read, cut string literals, lowercase, tokenize, classify, answer.
  Everything a run needs lives on the stack of `run`; there is no global state.
*/

use std::io::{Read, Write};

use crate::classification::Classification;
use crate::classifier::classify;
use crate::error::Result;
use crate::source::SourceText;

/// Cleans up and classifies a listing that has already been read.
pub fn analyze(mut source: SourceText) -> Classification {
  source.strip_string_literals();
  source.lowercase();
  trace!("Normalized text:\n{}", source.as_str());

  let tokens: Vec<&str> = source.tokens().collect();
  debug!("{} tokens", tokens.len());

  let classification = classify(&tokens);

  #[cfg(feature = "trace_classification")]
  eprintln!("{}", crate::report::render(source.as_str(), &tokens, &classification));

  classification
}

/// Reads a listing from `input` and writes the answer line to `output`.
pub fn run<R: Read, W: Write>(input: R, mut output: W) -> Result<Classification> {
  let classification = analyze(SourceText::read_from(input));

  writeln!(output, "{}", classification)?;
  output.flush()?;
  Ok(classification)
}


#[cfg(test)]
mod tests {
  use super::*;
  use std::io;

  fn answer(input: &str) -> String {
    let mut output: Vec<u8> = Vec::new();
    run(input.as_bytes(), &mut output).unwrap();
    String::from_utf8(output).unwrap()
  }

  /// Accepts nothing.
  struct ClosedOutput;

  impl Write for ClosedOutput {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
      Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  #[test]
  fn no_evidence(){
    assert_eq!(answer(""), "86 0 0 16\n");
    assert_eq!(answer("nop\nret\n"), "86 0 0 16\n");
  }

  #[test]
  fn vfp(){
    assert_eq!(answer("add r0, r1\nVLDR s0, [r1]\nmov eax, 1\n"), "0 1\n");
  }

  #[test]
  fn arm_without_vfp(){
    assert_eq!(answer("LDR r0, [r1, #4]\n"), "0 0\n");
  }

  #[test]
  fn att(){
    assert_eq!(answer("mov %eax, %ebx"), "86 1 0 32\n");
  }

  #[test]
  fn intel_64(){
    assert_eq!(answer("mov rax, rbx"), "86 0 0 64\n");
  }

  #[test]
  fn x87(){
    assert_eq!(answer("fld st(0)"), "86 0 1 16\n");
  }

  #[test]
  fn literals_are_ignored(){
    assert_eq!(answer(r#"mov "vldr ldr" , eax"#), "86 0 0 32\n");
    assert_eq!(answer(r#"msg: db "Use %RAX and FLD", 0"#), "86 0 0 16\n");
  }

  #[test]
  fn unterminated_literal(){
    assert_eq!(answer(r#"mov ax, "oops ldr"#), "0 0\n");
    assert_eq!(answer(r#"mov ax, "oops"#), "86 0 0 16\n");
  }

  #[test]
  fn width_is_monotone(){
    assert_eq!(answer("mov rax, 1\nmov eax, 2\nmov ax, 3"), "86 0 0 64\n");
    assert_eq!(answer("MOVL %EAX, %ECX\nMOVW %AX, %CX"), "86 1 0 32\n");
  }

  #[test]
  fn delimiter_runs(){
    assert_eq!(answer("eax,,ebx"), "86 0 0 32\n");
    assert_eq!(answer("push [rbp],(rsp)"), "86 0 0 64\n");
  }

  #[test]
  fn full_att_listing(){
    let listing = "
      .globl main
    main:
      pushq %rbp
      movq  %rsp, %rbp
      finit
      leaq  .LC0(%rip), %rdi
      call  puts
      popq  %rbp
      ret
    ";
    assert_eq!(answer(listing), "86 1 1 64\n");
  }

  #[test]
  fn write_failure_is_reported(){
    assert!(run("mov ax, bx".as_bytes(), ClosedOutput).is_err());
  }

}
