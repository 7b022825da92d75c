//! integration tests for vhdlports

use vhdlports::*;
use std::path::PathBuf;

const VHDL_SAMPLER: &str = include_str!("sampler.vhd");
const VHDL_ALU: &str = include_str!("alu.vhd");

const DIAGRAM_SAMPLER: &str = "\
--
--   --------------
-- --|clk    valid|--
-- --|rst         |--
-- --|            |--
-- --|data[]      |--
--   --------------
--
";

const DIAGRAM_ALU: &str = "\
--
--   --------------------
-- --|clk               |--
-- --|rst_n             |--
-- --|                  |--
-- --|op_a[]    result[]|--
-- --|op_b[]            |--
-- --|opcode[]          |--
-- --|                  |--
-- --|              zero|--
-- --|             carry|--
-- --|          bus_io[]|--
--   --------------------
--
";

fn names(ports: &[PortRecord]) -> Vec<(usize, String)> {
  ports.iter().map(|p| (p.group, p.display_name().to_string())).collect()
}

fn fixture(name: &str) -> PathBuf {
  PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/tests")).join(name)
}

#[test]
fn test_sampler() {
  clilog::init_stdout_simple_trace();
  let parsed = EntityPorts::parse_str(VHDL_SAMPLER).expect("parse error");
  println!("Parsed is: {parsed:?}");
  assert_eq!(parsed.entity_name.as_deref(), Some("sampler"));
  assert_eq!(names(&parsed.inputs), vec![
    (0, "clk".to_string()), (0, "rst".to_string()), (1, "data[]".to_string())
  ]);
  assert_eq!(names(&parsed.outputs), vec![(0, "valid".to_string())]);
  assert_eq!(format!("{}", BlockDiagram::from_ports(&parsed)), DIAGRAM_SAMPLER);
}

#[test]
fn test_alu() {
  clilog::init_stdout_simple_trace();
  let parsed = EntityPorts::parse_str(VHDL_ALU).expect("parse error");
  assert_eq!(parsed.entity_name.as_deref(), Some("alu"));
  assert_eq!(parsed.num_groups(), 3);
  use PortDirection::*;
  assert_eq!(parsed.outputs.iter().map(|p| p.direction).collect::<Vec<_>>(),
             vec![Out, Out, Buffer, InOut]);
  assert!(parsed.inputs.iter().all(|p| p.direction == In));
  // non std_logic types are skipped silently.
  assert!(parsed.outputs.iter().all(|p| p.name != "flags"));
  for side in [&parsed.inputs, &parsed.outputs] {
    assert!(side.windows(2).all(|w| w[0].group <= w[1].group));
  }

  let diagram = BlockDiagram::from_ports(&parsed);
  println!("Diagram: \n{diagram}");
  assert_eq!(format!("{diagram}"), DIAGRAM_ALU);
  let separators = diagram.rows().iter().filter(|r| r.is_separator()).count();
  assert_eq!(separators, parsed.num_groups() - 1);
  assert_eq!(diagram.rows().len() - separators, 8);
}

#[test]
fn test_incomplete() {
  clilog::init_stdout_simple_trace();
  let cases = [
    ("no_entity.vhd", ScanState::SearchingForEntity),
    ("no_port.vhd", ScanState::InEntity),
    ("unterminated.vhd", ScanState::InEntityPort),
  ];
  for (file, state) in cases {
    match EntityPorts::parse_file(fixture(file)) {
      Err(ParseError::Incomplete { reached }) => assert_eq!(reached, state, "{file}"),
      r => panic!("{file}: unexpected {r:?}"),
    }
  }
}

#[test]
fn test_stops_reading_at_end() {
  clilog::init_stdout_simple_trace();
  let mut src = b"entity e is\nport (\n  a : in std_logic;\nend e;\n".to_vec();
  src.extend_from_slice(b"\xff\xfe garbage\n");
  let parsed = EntityPorts::parse_reader(&src[..]).expect("parse error");
  assert_eq!(parsed.inputs.len(), 1);

  let bad = b"entity e is\nport (\n\xff\xfe\nend e;\n";
  assert!(matches!(EntityPorts::parse_reader(&bad[..]), Err(ParseError::Io(_))));
}

#[test]
fn test_process_single_file() {
  clilog::init_stdout_simple_trace();
  let mut out: Vec<u8> = Vec::new();
  cli::process_files(&[fixture("sampler.vhd")], &mut out).expect("run error");
  assert_eq!(String::from_utf8(out).unwrap(), DIAGRAM_SAMPLER);
}

#[test]
fn test_process_multiple_files() {
  clilog::init_stdout_simple_trace();
  let files = [fixture("sampler.vhd"), fixture("alu.vhd")];
  let mut out: Vec<u8> = Vec::new();
  cli::process_files(&files, &mut out).expect("run error");
  let expected = format!("{}\n{}\n{}\n{}",
                         files[0].display(), DIAGRAM_SAMPLER,
                         files[1].display(), DIAGRAM_ALU);
  assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn test_process_errors() {
  clilog::init_stdout_simple_trace();
  let mut out: Vec<u8> = Vec::new();
  let e = cli::process_files(&[], &mut out).unwrap_err();
  assert_eq!(e.to_string(), "Error, no files supplied");

  let missing = fixture("does_not_exist.vhd");
  let e = cli::process_files(&[missing.clone()], &mut out).unwrap_err();
  assert!(matches!(e, Error::UnreadableFile { .. }));
  assert_eq!(e.to_string(), format!("Error reading {}", missing.display()));
  assert!(out.is_empty());

  // the first diagram is written, the run stops at the broken file.
  let files = [fixture("sampler.vhd"), fixture("no_port.vhd"), fixture("alu.vhd")];
  let e = cli::process_files(&files, &mut out).unwrap_err();
  assert_eq!(e.to_string(), format!("Error parsing {}", files[1].display()));
  let written = String::from_utf8(out).unwrap();
  assert_eq!(written, format!("{}\n{}", files[0].display(), DIAGRAM_SAMPLER));
}
