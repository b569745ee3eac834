/*!
  The handful of mnemonics that give a listing away. Only exact, lowercase matches count, and
  tokens are lowercased before they get here.

  | Mnemonic          | Family        | Meaning                            |
  |-------------------|---------------|------------------------------------|
  | `vldr`, `vstr`    | `VfpTransfer` | ARM, with VFP instructions         |
  | `ldr`, `str`      | `ArmTransfer` | ARM                                |
  | `finit`, `fld`,   | `X87`         | x86 with x87 floating point        |
  | `fst`             |               |                                    |
*/

use std::str::FromStr;

use strum_macros::EnumString;

#[derive(EnumString, Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub enum Mnemonic {
  // ARM VFP load/store //
  #[strum(serialize = "vldr")]
  Vldr,
  #[strum(serialize = "vstr")]
  Vstr,

  // ARM core load/store //
  #[strum(serialize = "ldr")]
  Ldr,
  #[strum(serialize = "str")]
  Str,

  // x87 //
  #[strum(serialize = "finit")]
  Finit,
  #[strum(serialize = "fld")]
  Fld,
  #[strum(serialize = "fst")]
  Fst,
}

#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub enum Family {
  VfpTransfer,
  ArmTransfer,
  X87
}

impl Mnemonic {

  /// Recognizes a token, which must already be lowercase.
  pub fn recognize(token: &str) -> Option<Mnemonic> {
    Mnemonic::from_str(token).ok()
  }

  pub fn family(self) -> Family {
    match self {
      Mnemonic::Vldr | Mnemonic::Vstr              => Family::VfpTransfer,
      Mnemonic::Ldr  | Mnemonic::Str               => Family::ArmTransfer,
      Mnemonic::Finit | Mnemonic::Fld | Mnemonic::Fst => Family::X87,
    }
  }

}
