//! Plain-text analysis report
//!
//! The report lists the formula and its variables, the truth table, the
//! essential/fictitious verdict of every variable, the result of removing
//! fictitious variables, the three normal forms and the dual function.
//! Normal forms are computed after removal, over the remaining variables.
//!
//! Truth tables are tab separated: a header of variable names followed by
//! `f`, a rule line, then one line of `0`/`1` cells per row.

use crate::function::BooleanFunction;
use crate::table::TruthTable;
use std::io::{self, Write};

/// Write a truth table
///
/// ```
/// use truth_forms::{report, Formula, TruthTable};
///
/// let table = TruthTable::build(&Formula::parse("x_1 & y_1").unwrap()).unwrap();
/// let mut out = Vec::new();
/// report::write_table(&mut out, &table).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "x_1\ty_1\tf\n---\t---\t---\n0\t0\t0\n0\t1\t0\n1\t0\t0\n1\t1\t1\n"
/// );
/// ```
pub fn write_table<W: Write>(writer: &mut W, table: &TruthTable) -> io::Result<()> {
    for name in table.variables().names() {
        write!(writer, "{}\t", name)?;
    }
    writeln!(writer, "f")?;

    for _ in 0..table.num_variables() {
        write!(writer, "---\t")?;
    }
    writeln!(writer, "---")?;

    for row in table.rows() {
        for bit in row.inputs() {
            write!(writer, "{}\t", bit as u8)?;
        }
        writeln!(writer, "{}", row.value() as u8)?;
    }
    Ok(())
}

/// Write the full report, removing fictitious variables from `function`
///
/// After this call `function` holds the reduced table.
pub fn write_report<W: Write>(writer: &mut W, function: &mut BooleanFunction) -> io::Result<()> {
    writeln!(writer, "=== Boolean Function Analysis ===")?;
    writeln!(writer, "Formula: {}", function.formula().source())?;
    writeln!(writer, "Variables: {}", function.table().variables())?;

    writeln!(writer)?;
    writeln!(writer, "Truth table:")?;
    write_table(writer, function.table())?;

    writeln!(writer)?;
    writeln!(writer, "Variable analysis:")?;
    for (name, essential) in function.essentiality().iter() {
        let verdict = if essential { "essential" } else { "fictitious" };
        writeln!(writer, "{}: {}", name, verdict)?;
    }

    writeln!(writer)?;
    let before = function.removed().len();
    let removed = function.remove_fictitious();
    if removed.len() == before {
        writeln!(writer, "Fictitious variables: none found")?;
    } else {
        let names: Vec<&str> = removed[before..].iter().map(|n| n.as_ref()).collect();
        writeln!(writer, "Removed fictitious variables: {}", names.join(" "))?;
        writeln!(writer)?;
        writeln!(writer, "Reduced truth table:")?;
        write_table(writer, function.table())?;
    }

    writeln!(writer)?;
    writeln!(writer, "Normal forms:")?;
    writeln!(writer, "SDNF: {}", function.sdnf())?;
    writeln!(writer, "SKNF: {}", function.sknf())?;
    writeln!(writer, "ANF (Zhegalkin polynomial): {}", function.anf())?;

    let dual = function.dual();
    let notation = function.notation();
    writeln!(writer)?;
    writeln!(writer, "Dual function:")?;
    let values: Vec<&str> = dual.values().iter().map(|&v| if v { "1" } else { "0" }).collect();
    writeln!(writer, "Values: {}", values.join(" "))?;
    writeln!(writer, "Truth table:")?;
    write_table(writer, &dual)?;
    writeln!(writer, "SDNF: {}", dual.sdnf(notation))?;
    writeln!(writer, "SKNF: {}", dual.sknf(notation))?;

    Ok(())
}

/// Render the full report into a string
///
/// Convenience wrapper around [`write_report`].
pub fn report_string(function: &mut BooleanFunction) -> io::Result<String> {
    let mut buffer = Vec::new();
    write_report(&mut buffer, function)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
