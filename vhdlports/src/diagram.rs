//! Two-column block diagram layout.

use super::*;

/// One horizontal slot of the diagram box.
/// A row with both sides empty separates two port groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramRow {
    pub left: CompactString,
    pub right: CompactString,
}

impl DiagramRow {
    #[inline]
    pub fn separator() -> DiagramRow {
        DiagramRow { left: CompactString::default(), right: CompactString::default() }
    }

    #[inline]
    pub fn is_separator(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// Width of the row rendered as `left~right`.
    #[inline]
    fn text_width(&self) -> usize {
        self.left.chars().count() + 1 + self.right.chars().count()
    }
}

/// A laid out entity, ready to be printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDiagram {
    rows: Vec<DiagramRow>,
    max_width: usize,
}

impl BlockDiagram {
    /// Merges inputs and outputs into rows.
    ///
    /// Both sides are walked forward once. Within a shared group,
    /// inputs and outputs are paired in declaration order. A separator
    /// row is emitted whenever the current group changes.
    pub fn layout(inputs: &[PortRecord], outputs: &[PortRecord]) -> BlockDiagram {
        let (mut i, mut o) = (0, 0);
        let mut prev_group = 0;
        let mut rows = Vec::with_capacity(inputs.len() + outputs.len());

        while i < inputs.len() || o < outputs.len() {
            let cur_group = match (inputs.get(i), outputs.get(o)) {
                (Some(a), Some(b)) => a.group.min(b.group),
                (Some(a), None) => a.group,
                (None, Some(b)) => b.group,
                (None, None) => unreachable!(),
            };
            if cur_group != prev_group {
                rows.push(DiagramRow::separator());
                prev_group = cur_group;
            }

            let row = match (inputs.get(i), outputs.get(o)) {
                (Some(a), None) => {
                    i += 1;
                    DiagramRow { left: a.display_name(), right: CompactString::default() }
                }
                (None, Some(b)) => {
                    o += 1;
                    DiagramRow { left: CompactString::default(), right: b.display_name() }
                }
                (Some(a), Some(b)) if a.group == b.group => {
                    i += 1;
                    o += 1;
                    DiagramRow { left: a.display_name(), right: b.display_name() }
                }
                (Some(a), Some(_)) if a.group == cur_group => {
                    i += 1;
                    DiagramRow { left: a.display_name(), right: CompactString::default() }
                }
                (_, Some(b)) => {
                    o += 1;
                    DiagramRow { left: CompactString::default(), right: b.display_name() }
                }
                (None, None) => unreachable!(),
            };
            rows.push(row);
        }

        let max_width = rows.iter().map(DiagramRow::text_width).max().unwrap_or(0);
        clilog::debug!(VP_LAYOUT, "laid out {} rows, max width {}", rows.len(), max_width);
        BlockDiagram { rows, max_width }
    }

    #[inline]
    pub fn from_ports(ports: &EntityPorts) -> BlockDiagram {
        BlockDiagram::layout(&ports.inputs, &ports.outputs)
    }

    #[inline]
    pub fn rows(&self) -> &[DiagramRow] {
        &self.rows
    }

    /// The longest `left~right` text over all rows.
    #[inline]
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Renders the printable lines, without line terminators.
    pub fn lines(&self) -> Vec<String> {
        let border = "-".repeat(self.max_width + 5);
        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push("--".to_string());
        lines.push(format!("--   {}", border));
        for row in &self.rows {
            let pad = self.max_width - row.text_width() + 4;
            lines.push(format!("-- --|{}{:pad$}{}|--", row.left, "", row.right, pad = pad));
        }
        lines.push(format!("--   {}", border));
        lines.push("--".to_string());
        lines
    }
}

#[cfg(test)]
fn port(group: usize, name: &str, direction: PortDirection) -> PortRecord {
    PortRecord { group, name: name.into(), direction, is_vector: false }
}

#[test]
fn test_merge_groups() {
    use PortDirection::*;
    let mut data = port(1, "data", In);
    data.is_vector = true;
    let inputs = vec![port(0, "clk", In), port(0, "rst", In), data];
    let outputs = vec![port(0, "valid", Out)];
    let d = BlockDiagram::layout(&inputs, &outputs);
    let rows: Vec<_> = d.rows().iter()
        .map(|r| (r.left.as_str(), r.right.as_str()))
        .collect();
    assert_eq!(rows, vec![("clk", "valid"), ("rst", ""), ("", ""), ("data[]", "")]);
    assert_eq!(d.max_width(), 9);
    assert_eq!(d.lines(), vec![
        "--",
        "--   --------------",
        "-- --|clk    valid|--",
        "-- --|rst         |--",
        "-- --|            |--",
        "-- --|data[]      |--",
        "--   --------------",
        "--",
    ]);
}

#[test]
fn test_interleaved_groups() {
    use PortDirection::*;
    // groups 0 and 1 each have ports on one side only.
    let inputs = vec![port(0, "a", In), port(2, "c", In)];
    let outputs = vec![port(1, "b", Out), port(2, "d", InOut)];
    let d = BlockDiagram::layout(&inputs, &outputs);
    let rows: Vec<_> = d.rows().iter()
        .map(|r| (r.left.as_str(), r.right.as_str()))
        .collect();
    assert_eq!(rows, vec![("a", ""), ("", ""), ("", "b"), ("", ""), ("c", "d")]);
    assert_eq!(d.rows().iter().filter(|r| r.is_separator()).count(), 2);
}

#[test]
fn test_outputs_only_and_empty() {
    use PortDirection::*;
    let d = BlockDiagram::layout(&[], &[port(0, "y", Buffer)]);
    assert_eq!(d.lines()[2], "-- --|    y|--");

    let empty = BlockDiagram::layout(&[], &[]);
    assert!(empty.rows().is_empty());
    assert_eq!(empty.lines(), vec!["--", "--   -----", "--   -----", "--"]);
}

#[test]
fn test_layout_is_pure() {
    use PortDirection::*;
    let inputs = vec![port(0, "x", In), port(1, "y", In)];
    let outputs = vec![port(1, "z", Out)];
    assert_eq!(BlockDiagram::layout(&inputs, &outputs).lines(),
               BlockDiagram::layout(&inputs, &outputs).lines());
}
