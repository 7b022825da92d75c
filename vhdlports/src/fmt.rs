use std::fmt;

use super::*;

impl fmt::Display for PortDirection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use PortDirection::*;
        write!(f, "{}", match self {
            In => "in",
            Out => "out",
            InOut => "inout",
            Buffer => "buffer",
        })
    }
}

impl fmt::Display for PortRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} : {} std_logic{}", self.name, self.direction,
               if self.is_vector { "_vector" } else { "" })
    }
}

impl fmt::Display for BlockDiagram {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[test]
fn test_port_display() {
    let p = PortRecord {
        group: 3,
        name: "addr".into(),
        direction: PortDirection::Buffer,
        is_vector: true,
    };
    assert_eq!(format!("{p}"), "addr : buffer std_logic_vector");
    assert_eq!(p.display_name(), "addr[]");
}
