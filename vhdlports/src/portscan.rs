//! Line-oriented scanner for the port block of a VHDL entity.
//!
//! This is not a VHDL parser. It looks for the `entity` keyword,
//! then the `port` keyword, and then collects one declaration per
//! line until a line containing `end`.

use super::*;
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_COMMENT: Regex = Regex::new(r"^\s*--").unwrap();
    static ref RE_ENTITY: Regex = Regex::new(r"(?i)\bentity\b").unwrap();
    static ref RE_ENTITY_NAME: Regex = Regex::new(r"(?i)\bentity\s+(\w+)").unwrap();
    static ref RE_PORT: Regex = Regex::new(r"(?i)\bport\b").unwrap();
    static ref RE_END: Regex = Regex::new(r"(?i)\bend\b").unwrap();
    static ref RE_PORT_DECL: Regex = Regex::new(
        r"^\s*(\w+)\s*:\s*(?i:(inout|in|out|buffer))\s+std_logic(_vector)?"
    ).unwrap();
}

/// Progress of the scanner through a source file.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ScanState {
    SearchingForEntity,
    InEntity,
    InEntityPort,
    Complete,
}

impl fmt::Display for ScanState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ScanState::*;
        write!(f, "{}", match self {
            SearchingForEntity => "searching for entity",
            InEntity => "searching for port",
            InEntityPort => "searching for end of port",
            Complete => "complete",
        })
    }
}

impl FromStr for PortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<PortDirection, ()> {
        use PortDirection::*;
        match s.to_ascii_lowercase().as_str() {
            "in" => Ok(In),
            "out" => Ok(Out),
            "inout" => Ok(InOut),
            "buffer" => Ok(Buffer),
            _ => Err(())
        }
    }
}

/// Scanner context. Group bookkeeping lives here, one per source.
struct PortScanner {
    state: ScanState,
    group: usize,
    /// no declaration has been added since the last group boundary.
    group_empty: bool,
    ports: EntityPorts,
}

impl PortScanner {
    fn new() -> PortScanner {
        PortScanner {
            state: ScanState::SearchingForEntity,
            group: 0,
            group_empty: true,
            ports: EntityPorts::default(),
        }
    }

    /// Feeds one line (without its terminator).
    ///
    /// The state checks run in sequence against the updated state,
    /// so one line may open the entity and its port block at once.
    fn feed_line(&mut self, lineno: usize, line: &str) {
        use ScanState::*;
        if RE_COMMENT.is_match(line) {
            return
        }
        if self.state == SearchingForEntity && RE_ENTITY.is_match(line) {
            self.state = InEntity;
            self.ports.entity_name = RE_ENTITY_NAME.captures(line)
                .map(|c| CompactString::from(&c[1]));
            clilog::debug!(VP_STATE, "line {}: entity {} found", lineno,
                           self.ports.entity_name.as_deref().unwrap_or("<unnamed>"));
        }
        if self.state == InEntity && RE_PORT.is_match(line) {
            self.state = InEntityPort;
            clilog::debug!(VP_STATE, "line {}: port block found", lineno);
        }
        if self.state != InEntityPort {
            return
        }

        if RE_END.is_match(line) {
            self.state = Complete;
            clilog::debug!(VP_STATE, "line {}: end of port block", lineno);
        }
        else if line.trim().is_empty() {
            if !self.group_empty {
                self.group += 1;
                self.group_empty = true;
                clilog::debug!(VP_GROUP, "line {}: starting port group {}",
                               lineno, self.group);
            }
        }
        else if let Some(decl) = self.match_declaration(line) {
            self.group_empty = false;
            if decl.direction.is_input() {
                self.ports.inputs.push(decl);
            }
            else {
                self.ports.outputs.push(decl);
            }
        }
        else {
            clilog::trace!(VP_IGNORED, "line {}: ignored `{}`", lineno, line.trim());
        }
    }

    fn match_declaration(&self, line: &str) -> Option<PortRecord> {
        let caps = RE_PORT_DECL.captures(line)?;
        let direction = caps[2].parse().ok()?;
        Some(PortRecord {
            group: self.group,
            name: CompactString::from(&caps[1]),
            direction,
            is_vector: caps.get(3).is_some(),
        })
    }

    fn finish(self) -> Result<EntityPorts, ParseError> {
        match self.state {
            ScanState::Complete => Ok(self.ports),
            reached => Err(ParseError::Incomplete { reached })
        }
    }
}

/// Runs the scanner over all lines of `r`, stopping right after
/// the line that closes the port block.
pub(crate) fn scan_ports(r: impl BufRead) -> Result<EntityPorts, ParseError> {
    let mut scanner = PortScanner::new();
    for (i, line) in r.lines().enumerate() {
        scanner.feed_line(i + 1, &line?);
        if scanner.state == ScanState::Complete {
            break
        }
    }
    let ports = scanner.finish()?;
    clilog::info!(VP_PORTS, "entity {}: {} inputs, {} outputs in {} groups",
                  ports.entity_name.as_deref().unwrap_or("<unnamed>"),
                  ports.inputs.len(), ports.outputs.len(), ports.num_groups());
    Ok(ports)
}

#[test]
fn test_cascading_transitions() {
    let mut s = PortScanner::new();
    s.feed_line(1, "entity top is port (");
    assert_eq!(s.state, ScanState::InEntityPort);
    assert_eq!(s.ports.entity_name.as_deref(), Some("top"));
}

#[test]
fn test_comment_never_transitions() {
    let mut s = PortScanner::new();
    s.feed_line(1, "  -- entity port end");
    assert_eq!(s.state, ScanState::SearchingForEntity);
    s.feed_line(2, "ENTITY counter IS");
    s.feed_line(3, "-- port");
    assert_eq!(s.state, ScanState::InEntity);
    s.feed_line(4, "Port (");
    s.feed_line(5, "    -- end of the world");
    assert_eq!(s.state, ScanState::InEntityPort);
}

#[test]
fn test_blank_lines_collapse() {
    let mut s = PortScanner::new();
    s.feed_line(1, "entity e is");
    s.feed_line(2, "port (");
    s.feed_line(3, "");
    s.feed_line(4, "   \t");
    assert_eq!(s.group, 0);
    s.feed_line(5, "a : in std_logic;");
    s.feed_line(6, "");
    s.feed_line(7, "");
    s.feed_line(8, "b : OUT std_logic_vector(3 downto 0);");
    assert_eq!(s.group, 1);
    assert_eq!(s.ports.inputs[0].group, 0);
    assert_eq!(s.ports.outputs[0].group, 1);
    assert_eq!(s.ports.outputs[0].direction, PortDirection::Out);
    assert!(s.ports.outputs[0].is_vector);
}

#[test]
fn test_declaration_forms() {
    let s = PortScanner::new();
    let d = s.match_declaration("  data_in:inOut   std_logic_vector(7 downto 0);").unwrap();
    assert_eq!(d.name, "data_in");
    assert_eq!(d.direction, PortDirection::InOut);
    assert!(d.is_vector);
    let d = s.match_declaration("q : buffer std_logic").unwrap();
    assert_eq!(d.direction, PortDirection::Buffer);
    assert!(!d.is_vector);
    assert!(s.match_declaration("n : in integer range 0 to 7;").is_none());
    assert!(s.match_declaration("a, b : in std_logic;").is_none());
    assert!(s.match_declaration("signal x : std_logic;").is_none());
}
