use crate::equivalence::{are_equivalent, are_equivalent_within, matrices_equal};
use crate::SpanningTree;
use num_traits::Float;
use std::fmt::Display;
use std::io::{self, Write};

const RULE_WIDTH: usize = 100;

pub fn verdict_line(equivalent: bool) -> String {
    format!("Minimum Spanning Trees are Equivalent:\t{equivalent}")
}

/// A pair of spanning trees to be compared and reported on.
#[derive(Debug, Clone)]
pub struct Comparison<'a, T> {
    first: &'a SpanningTree<T>,
    second: &'a SpanningTree<T>,
    tolerance: Option<T>,
}

impl<'a, T: Float + Display> Comparison<'a, T> {
    pub fn new(first: &'a SpanningTree<T>, second: &'a SpanningTree<T>) -> Self {
        Comparison {
            first,
            second,
            tolerance: None,
        }
    }

    /// Accept weights that differ by at most `tolerance` instead of requiring exact equality.
    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    pub fn verdict(&self) -> bool {
        let (first, second) = (self.first, self.second);
        match self.tolerance {
            None => are_equivalent(first.edges(), first.points(), second.edges(), second.points()),
            Some(tolerance) => are_equivalent_within(
                first.edges(),
                first.points(),
                second.edges(),
                second.points(),
                tolerance,
            ),
        }
    }

    /// Label-sensitive comparison of the raw edge matrices.
    pub fn matrices_equal(&self) -> bool {
        matrices_equal(&self.first.to_matrix(), &self.second.to_matrix())
    }

    /// Writes the verdict framed by two rules. In verbose mode both edge lists and both
    /// coordinate arrays are dumped first, and the raw matrix check is shown next to the
    /// verdict. Returns the verdict.
    pub fn write_report<W: Write>(&self, out: &mut W, verbose: bool) -> io::Result<bool> {
        if verbose {
            write_edges(out, "MST 1", self.first)?;
            write_edges(out, "MST 2", self.second)?;
            write_points(out, "Data order for MST 1", self.first)?;
            write_points(out, "Data order for MST 2", self.second)?;
        }
        let equivalent = self.verdict();
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(out, "\n{rule}")?;
        if verbose {
            writeln!(out, "MST matrices equal:\t{}", self.matrices_equal())?;
        }
        writeln!(out, "{}", verdict_line(equivalent))?;
        writeln!(out, "{rule}\n")?;
        Ok(equivalent)
    }
}

fn write_edges<W: Write, T: Float + Display>(
    out: &mut W,
    title: &str,
    tree: &SpanningTree<T>,
) -> io::Result<()> {
    writeln!(out, "\n{title}:")?;
    for edge in tree.edges() {
        writeln!(
            out,
            "{:>6} {:>6}  {}",
            edge.left_node_id, edge.right_node_id, edge.distance
        )?;
    }
    Ok(())
}

fn write_points<W: Write, T: Float + Display>(
    out: &mut W,
    title: &str,
    tree: &SpanningTree<T>,
) -> io::Result<()> {
    writeln!(out, "\n{title}:")?;
    for (i, point) in tree.points().iter().enumerate() {
        let coords = point
            .iter()
            .map(|coord| coord.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "{i}: [{coords}]")?;
    }
    Ok(())
}
