//! Reading formula text from files and interactive input

use crate::error::FormulaError;
use crate::expression::ParseError;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// Operator legend shown before reading a formula interactively
pub const LEGEND: &str = "\
Enter boolean formula (variables format: x_1, y_2, etc.):
Operators: + (OR), & (AND), @ (XOR), ~ (EQ), > (IMPL), | (NAND), ! (NOR), - (NOT)
Brackets: () [] {}";

/// Read a whole formula from a reader
///
/// Lines are joined with single spaces and the result is trimmed, so a
/// formula may be split across lines.
pub fn read_formula<R: BufRead>(reader: R) -> Result<String, FormulaError> {
    let mut joined = String::new();
    for line in reader.lines() {
        joined.push_str(&line?);
        joined.push(' ');
    }
    non_empty(joined)
}

/// Read a formula from a file
pub fn read_formula_file<P: AsRef<Path>>(path: P) -> Result<String, FormulaError> {
    let file = File::open(path)?;
    read_formula(BufReader::new(file))
}

/// Print the legend and a prompt to `output`, then read one line from `input`
pub fn prompt_formula<R: BufRead, W: Write>(mut input: R, output: &mut W) -> Result<String, FormulaError> {
    writeln!(output, "{}", LEGEND)?;
    write!(output, "Formula: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    non_empty(line)
}

/// Read one formula from standard input after showing the legend
pub fn read_formula_console() -> Result<String, FormulaError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    prompt_formula(stdin.lock(), &mut stdout)
}

fn non_empty(text: String) -> Result<String, FormulaError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty.into());
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_lines_joined_with_spaces() {
        let text = read_formula(Cursor::new("  x_1 &\ny_1\n\n+ z_1\n")).unwrap();
        assert_eq!(text, "x_1 & y_1  + z_1");
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            read_formula(Cursor::new(" \n\t\n")),
            Err(FormulaError::Parse(ParseError::Empty))
        ));
    }

    #[test]
    fn test_prompt_shows_legend() {
        let mut out = Vec::new();
        let text = prompt_formula(Cursor::new("  -x_1 \nignored\n"), &mut out).unwrap();
        assert_eq!(text, "-x_1");
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("| (NAND)"));
        assert!(shown.ends_with("Formula: "));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_formula_file(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(FormulaError::Io(_))));
    }
}
