//! Indented tree dump of a parsed group.

use std::fmt::Write;

use super::ast::{Element, Group, Operand, Statement};

impl Group {
    /// One node per line, children indented by two spaces. No trailing newline.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        write_group(&mut out, self, 0).expect("String write never fails");
        out.truncate(out.trim_end().len());
        out
    }
}

fn write_group(w: &mut impl Write, group: &Group, depth: usize) -> std::fmt::Result {
    writeln!(w, "{:indent$}Group", "", indent = depth * 2)?;
    for element in group {
        match element {
            Element::Statement(s) => write_statement(w, s, depth + 1)?,
            Element::Connective(c) => writeln!(w, "{:indent$}{}", "", c, indent = (depth + 1) * 2)?,
            Element::Group(g) => write_group(w, g, depth + 1)?,
        }
    }
    Ok(())
}

fn write_statement(w: &mut impl Write, statement: &Statement, depth: usize) -> std::fmt::Result {
    writeln!(w, "{:indent$}Statement", "", indent = depth * 2)?;
    write_operand(w, &statement.left, depth + 1)?;
    writeln!(
        w,
        "{:indent$}Operator {}",
        "",
        statement.operator,
        indent = (depth + 1) * 2
    )?;
    if let Some(right) = &statement.right {
        write_operand(w, right, depth + 1)?;
    }
    Ok(())
}

fn write_operand(w: &mut impl Write, operand: &Operand, depth: usize) -> std::fmt::Result {
    match operand {
        Operand::Literal { value } => {
            writeln!(w, "{:indent$}Literal {}", "", value, indent = depth * 2)
        }
        Operand::Reference { name } => {
            writeln!(w, "{:indent$}Reference {}", "", name, indent = depth * 2)
        }
    }
}
