//! The human readable trace of a run: the normalized text, its tokens, and the verdict spelled
//! out. Printed to stderr when the `trace_classification` feature is on.

use prettytable::{format as TableFormat, Table};

use crate::classification::{Classification, Isa};

lazy_static! {
  static ref TABLE_DISPLAY_FORMAT: TableFormat::TableFormat =
    TableFormat::FormatBuilder::new()
      .column_separator('│')
      .borders(' ')
      .separator(
        TableFormat::LinePosition::Title,
        TableFormat::LineSeparator::new('─', '┼', ' ', ' ')
      )
      .separator(
        TableFormat::LinePosition::Bottom,
        TableFormat::LineSeparator::new('─', '┴', ' ', ' ')
      )
      .padding(1, 1)
      .build();
}

fn make_token_table(tokens: &[&str]) -> Table {
  let mut table = Table::new();

  table.set_format(*TABLE_DISPLAY_FORMAT);
  table.set_titles(row![ubr->"Index", ubl->"Token"]);

  for (i, token) in tokens.iter().enumerate() {
    table.add_row(row![r->i, token]);
  }
  table
}

fn make_classification_table(classification: &Classification) -> Table {
  let mut table = Table::new();

  table.set_format(*TABLE_DISPLAY_FORMAT);
  table.set_titles(row![ubr->"Property", ubl->"Guess"]);
  table.add_row(row![r->"ISA:", classification.isa()]);

  match classification.isa() {

    Isa::Arm => {
      table.add_row(row![r->"ARM VFP:", classification.vfp()]);
    }

    Isa::X86 => {
      table.add_row(row![r->"x86 flavor:", classification.flavor()]);
      table.add_row(row![r->"x86 max. operand size:", classification.operand_width()]);
      table.add_row(row![r->"x86 FPU:", classification.x87()]);
    }

  }
  table
}

/// Renders the whole report.
pub fn render(text: &str, tokens: &[&str], classification: &Classification) -> String {
  format!(
    "{}\n{}\n{}",
    text,
    make_token_table(tokens),
    make_classification_table(classification)
  )
}


#[cfg(test)]
mod tests {
  use super::*;
  use crate::classification::OperandWidth;

  #[test]
  fn x86_report(){
    let mut c = Classification::default();
    c.set_att();
    c.raise_operand_width(OperandWidth::Dword32);
    let report = render("mov %eax, %ebx", &["mov", "%eax", "%ebx"], &c);

    assert!(report.starts_with("mov %eax, %ebx\n"));
    assert!(report.contains("%ebx"));
    assert!(report.contains("x86 flavor:"));
    assert!(report.contains("AT&T"));
    assert!(report.contains("dword"));
    assert!(report.contains("FPU absent"));
    assert!(!report.contains("ARM VFP:"));
  }

  #[test]
  fn arm_report(){
    let mut c = Classification::default();
    c.set_vfp();
    let report = render("vldr s0", &["vldr", "s0"], &c);

    assert!(report.contains("ARM"));
    assert!(report.contains("VFP present"));
    assert!(!report.contains("x86 flavor:"));
  }

}
