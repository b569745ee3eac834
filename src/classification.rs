/*!
  What the classifier concludes about a listing. There are five independent flags. Each starts
  out at the guess that holds for a listing with no evidence at all (16 bit Intel syntax x86
  without x87 instructions) and is only ever moved away from it.

  The `Display` impl is the answer line:

    ```text
    86 <AT&T?> <x87?> <width>     for x86, e.g. "86 1 0 32"
    0 <VFP?>                      for ARM, e.g. "0 1"
    ```

  The flags themselves display as the long names used in the trace report.
*/

use std::fmt::{Display, Formatter};

use num_enum::IntoPrimitive;
use strum_macros::Display as StrumDisplay;

#[derive(StrumDisplay, Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub enum Isa {
  #[strum(serialize = "x86")]
  X86,
  #[strum(serialize = "ARM")]
  Arm
}

#[derive(StrumDisplay, Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub enum Vfp {
  #[strum(serialize = "VFP absent")]
  Absent,
  #[strum(serialize = "VFP present")]
  Present
}

#[derive(StrumDisplay, Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub enum Flavor {
  #[strum(serialize = "Intel")]
  Intel,
  #[strum(serialize = "AT&T")]
  Att
}

/**
  The widest operand size implied by the registers seen so far. The discriminant is the width in
  bits, and the variants are ordered so that `max` picks the wider one.
*/
#[derive(
  StrumDisplay, IntoPrimitive,
  Clone,        Copy,  Eq, PartialEq, Ord, PartialOrd, Debug, Hash
)]
#[repr(u8)]
pub enum OperandWidth {
  #[strum(serialize = "word")]
  Word16  = 16,
  #[strum(serialize = "dword")]
  Dword32 = 32,
  #[strum(serialize = "qword")]
  Qword64 = 64,
}

#[derive(StrumDisplay, Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub enum X87 {
  #[strum(serialize = "FPU absent")]
  Absent,
  #[strum(serialize = "FPU present")]
  Present
}

#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub struct Classification {
  isa   : Isa,
  vfp   : Vfp,
  flavor: Flavor,
  width : OperandWidth,
  x87   : X87
}

impl Default for Classification {
  fn default() -> Self {
    Classification {
      isa    : Isa::X86,
      vfp    : Vfp::Absent,
      flavor : Flavor::Intel,
      width  : OperandWidth::Word16,
      x87    : X87::Absent
    }
  }
}

impl Classification {

  // region Accessors

  pub fn isa(&self) -> Isa {
    self.isa
  }

  pub fn vfp(&self) -> Vfp {
    self.vfp
  }

  pub fn flavor(&self) -> Flavor {
    self.flavor
  }

  pub fn operand_width(&self) -> OperandWidth {
    self.width
  }

  pub fn x87(&self) -> X87 {
    self.x87
  }

  // endregion

  // region Mutators

  pub fn set_arm(&mut self) {
    self.isa = Isa::Arm;
  }

  /// VFP instructions only exist on ARM, so this sets the ISA too.
  pub fn set_vfp(&mut self) {
    self.isa = Isa::Arm;
    self.vfp = Vfp::Present;
  }

  pub fn set_att(&mut self) {
    self.flavor = Flavor::Att;
  }

  /// Widens the operand width to at least `width`. It never narrows.
  pub fn raise_operand_width(&mut self, width: OperandWidth) {
    self.width = self.width.max(width);
  }

  pub fn set_x87(&mut self) {
    self.x87 = X87::Present;
  }

  // endregion

}

fn bit(flag: bool) -> u8 {
  flag as u8
}

impl Display for Classification {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self.isa {

      Isa::X86 => {
        let bits: u8 = self.width.into();
        write!(
          f,
          "86 {} {} {}",
          bit(self.flavor == Flavor::Att),
          bit(self.x87 == X87::Present),
          bits
        )
      }

      Isa::Arm => {
        write!(f, "0 {}", bit(self.vfp == Vfp::Present))
      }

    }
  }
}
