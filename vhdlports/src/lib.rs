//! A VHDL entity port parser and ASCII block diagram generator.
//!
//! # Usage
//!
//! Pass a `&str` to [EntityPorts::parse_str], then lay the ports
//! out with [BlockDiagram::from_ports]. Example:
//! ```
//! use vhdlports::{EntityPorts, BlockDiagram};
//!
//! let ports = EntityPorts::parse_str(r#"
//! entity inverter is
//!   port (
//!     a : in  std_logic;
//!     y : out std_logic
//!   );
//! end inverter;
//! "#).expect("parse error");
//! print!("{}", BlockDiagram::from_ports(&ports));
//! ```

use compact_str::CompactString;

/// Direction keyword of a port declaration.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PortDirection {
    In,
    Out,
    InOut,
    Buffer,
}

impl PortDirection {
    /// Only `in` ports go to the left side of the diagram.
    /// Everything else (including `inout`) is drawn on the right.
    #[inline]
    pub fn is_input(self) -> bool {
        self == PortDirection::In
    }
}

/// A single port declaration inside an entity port block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortRecord {
    /// Index of the blank-line-delimited group this port belongs to.
    pub group: usize,
    /// Port identifier as written in the source. E.g. `clk`
    pub name: CompactString,
    /// Port direction.
    pub direction: PortDirection,
    /// Whether the port type is `std_logic_vector`.
    pub is_vector: bool,
}

impl PortRecord {
    /// The name drawn in the diagram. Vectors get a `[]` suffix.
    pub fn display_name(&self) -> CompactString {
        if self.is_vector {
            let mut s = self.name.clone();
            s.push_str("[]");
            s
        }
        else {
            self.name.clone()
        }
    }
}

/// The ports of one entity, partitioned into the two sides of the
/// diagram. Both vectors are in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityPorts {
    /// The identifier following `entity` on the line that opened
    /// the entity, if any.
    pub entity_name: Option<CompactString>,
    /// `in` ports.
    pub inputs: Vec<PortRecord>,
    /// `out`, `inout` and `buffer` ports.
    pub outputs: Vec<PortRecord>,
}

impl EntityPorts {
    /// Number of distinct groups touched by either side.
    pub fn num_groups(&self) -> usize {
        use itertools::Itertools;
        self.inputs.iter().chain(self.outputs.iter())
            .map(|p| p.group)
            .unique()
            .count()
    }
}

mod error;
pub use error::{Error, ParseError};

mod portscan;
pub use portscan::ScanState;

impl EntityPorts {
    /// Parses VHDL source text, and returns a [Result], indicating
    /// the extracted ports or why the port block was not found.
    #[inline]
    pub fn parse_str(s: &str) -> Result<EntityPorts, ParseError> {
        portscan::scan_ports(s.as_bytes())
    }

    /// Parses VHDL source line by line from a buffered reader.
    /// Reading stops at the line closing the port block.
    #[inline]
    pub fn parse_reader(r: impl std::io::BufRead) -> Result<EntityPorts, ParseError> {
        portscan::scan_ports(r)
    }

    /// Parses the VHDL file at the specific path.
    /// The file is closed before this returns, on success or failure.
    pub fn parse_file(path: impl AsRef<std::path::Path>) -> Result<EntityPorts, ParseError> {
        let file = std::fs::File::open(path)?;
        portscan::scan_ports(std::io::BufReader::new(file))
    }
}

mod diagram;
pub use diagram::{BlockDiagram, DiagramRow};

pub mod cli;

mod fmt;
