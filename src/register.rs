//! Recognizes the x86 register names that matter for guessing operand width. The names are the
//! 16 bit general purpose registers (`ax` `bx` `cx` `dx` `si` `di` `sp` `bp`), their `e` and `r`
//! extended forms, and the segment registers `cs` `ds` `ss`.

use crate::classification::OperandWidth;

#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub enum RegisterClass {
  /// `cs`, `ds`, `ss`
  Segment,
  /// `ax`, `si`, `bp`, ...
  General,
  /// `eax`, `esi`, `ebp`, ...
  Extended,
  /// `rax`, `rsi`, `rbp`, ...
  Wide
}

impl RegisterClass {

  /// The operand width implied by using a register of this class.
  pub fn operand_width(self) -> OperandWidth {
    match self {
      RegisterClass::Segment
      | RegisterClass::General  => OperandWidth::Word16,
      RegisterClass::Extended => OperandWidth::Dword32,
      RegisterClass::Wide     => OperandWidth::Qword64
    }
  }

}

fn is_general_purpose(name: &[u8]) -> bool {
  match name {
    [first, b'x']         => (b'a'..=b'd').contains(first),
    [b's', b'i'] | [b'd', b'i'] => true,
    [b's', b'p'] | [b'b', b'p'] => true,
    _ => false
  }
}

/// Classifies `name` (without any `%` prefix), or returns `None` if it is not a register name.
pub fn match_register(name: &str) -> Option<RegisterClass> {
  match name.as_bytes() {
    [b'c', b's'] | [b'd', b's'] | [b's', b's'] => Some(RegisterClass::Segment),
    bytes if is_general_purpose(bytes)         => Some(RegisterClass::General),
    [b'e', rest @ ..] if is_general_purpose(rest) => Some(RegisterClass::Extended),
    [b'r', rest @ ..] if is_general_purpose(rest) => Some(RegisterClass::Wide),
    _ => None
  }
}
