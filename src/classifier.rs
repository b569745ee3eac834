/*!
  Guesses what a listing is from its tokens. Three passes run over the token list:

  1. ARM: `vldr`/`vstr` settle it as ARM with VFP and end the pass. `ldr`/`str` mark it as ARM,
     but the pass keeps looking for VFP instructions.
  2. x86 registers, only if the listing is not ARM. A register name behind a `%` means AT&T
     syntax. Every register name, prefixed or not, can widen the operand width.
  3. x87, only if the listing is not ARM. `finit`, `fld` or `fst` anywhere means x87.

  Tokens that mean nothing to a pass are skipped.
*/

use crate::classification::{Classification, OperandWidth};
use crate::instructions::{Family, Mnemonic};
use crate::register::match_register;

/// Runs all passes over `tokens`.
pub fn classify(tokens: &[&str]) -> Classification {
  let mut classification = Classification::default();

  match check_arm_and_vfp(tokens, &mut classification) {
    true => {
      debug!("ARM listing; skipping the x86 passes");
    }
    false => {
      check_x86_registers(tokens, &mut classification);
      check_x87(tokens, &mut classification);
    }
  }

  debug!(
    "Classified {} tokens: {} {} {} {} {}",
    tokens.len(),
    classification.isa(),
    classification.vfp(),
    classification.flavor(),
    classification.operand_width(),
    classification.x87()
  );
  classification
}

/// Returns whether the listing is ARM.
pub fn check_arm_and_vfp(tokens: &[&str], classification: &mut Classification) -> bool {
  let mut is_arm = false;

  for token in tokens {
    match Mnemonic::recognize(token).map(Mnemonic::family) {

      Some(Family::VfpTransfer) => {
        trace!("{} is a VFP instruction", token);
        classification.set_vfp();
        return true;
      }

      Some(Family::ArmTransfer) => {
        trace!("{} is an ARM instruction", token);
        classification.set_arm();
        is_arm = true;
      }

      _ => {}

    }
  }

  is_arm
}

/**
  Looks at the register names in `tokens`. Once an AT&T register has been seen with the width
  already at 64 bits, nothing more can change, and the scan stops.
*/
pub fn check_x86_registers(tokens: &[&str], classification: &mut Classification) {
  for token in tokens {
    let att_register = match token.strip_prefix('%') {
      Some(name) => match_register(name),
      None => None
    };

    match att_register {

      Some(class) => {
        trace!("{} is an AT&T register", token);
        classification.set_att();
        classification.raise_operand_width(class.operand_width());
        if classification.operand_width() == OperandWidth::Qword64 {
          return;
        }
      }

      None => {
        if let Some(class) = match_register(token) {
          trace!("{} is a register", token);
          classification.raise_operand_width(class.operand_width());
        }
      }

    }
  }
}

pub fn check_x87(tokens: &[&str], classification: &mut Classification) {
  let found = tokens.iter().find(
    |token| Mnemonic::recognize(token).map(Mnemonic::family) == Some(Family::X87)
  );

  if let Some(token) = found {
    trace!("{} is an x87 instruction", token);
    classification.set_x87();
  }
}
