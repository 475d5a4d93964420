//! Streams level-order values into the columns of a [`ColumnTable`].

use std::fmt::Display;

use tracing::{instrument, trace};

use crate::domain::{ColumnTable, DomainError, DomainResult};

/// Renders one line per table row, root first, each terminated by `\n`.
///
/// Values are consumed row-major: the n-th matched column of the whole table
/// takes `values[n]`. Placeholders and unmatched columns print a single blank.
/// A line ends at its row's last column. Values are written with their full
/// `Display` width, so anything wider than one character pushes the rest of
/// its line to the right.
#[instrument(level = "debug", skip(values, table), fields(rows = table.depth()))]
pub fn render<T: Display>(values: &[Option<&T>], table: &ColumnTable) -> DomainResult<String> {
    if values.len() != table.slot_count() {
        return Err(DomainError::SlotMismatch {
            expected: table.slot_count(),
            actual: values.len(),
        });
    }

    let mut out = String::with_capacity((table.width() + 1) * table.depth());
    let mut values = values.iter();

    for row in table.rows() {
        let mut columns = row.iter().copied().peekable();
        let last = row.last().copied().unwrap_or(0);
        for column in 0..=last {
            if columns.next_if_eq(&column).is_some() {
                match values.next() {
                    Some(Some(value)) => out.push_str(&value.to_string()),
                    _ => out.push(' '),
                }
            } else {
                out.push(' ');
            }
        }
        out.push('\n');
        trace!("rendered row with {} slots", row.len());
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_chain_values_when_render_then_columns_match() {
        let table = ColumnTable::build(3);
        let values = [Some(&1), None, Some(&2), None, None, None, Some(&3)];
        let out = render(&values, &table).unwrap();
        assert_eq!(out, "   1\n     2\n      3\n");
    }

    #[test]
    fn given_trailing_placeholder_when_render_then_blank_kept() {
        let table = ColumnTable::build(2);
        let values = [Some(&'r'), Some(&'l'), None];
        let out = render(&values, &table).unwrap();
        assert_eq!(out, " r\nl  \n");
    }

    #[test]
    fn given_wide_value_when_render_then_not_width_adjusted() {
        let table = ColumnTable::build(2);
        let values = [Some(&10), Some(&20), Some(&30)];
        let out = render(&values, &table).unwrap();
        assert_eq!(out, " 10\n20 30\n");
    }

    #[test]
    fn given_too_few_values_when_render_then_slot_mismatch() {
        let table = ColumnTable::build(2);
        let values = [Some(&1)];
        assert_eq!(
            render(&values, &table),
            Err(DomainError::SlotMismatch {
                expected: 3,
                actual: 1
            })
        );
    }

    #[test]
    fn given_empty_table_when_render_then_empty_output() {
        let values: [Option<&u8>; 0] = [];
        assert_eq!(render(&values, &ColumnTable::build(0)).unwrap(), "");
    }
}
