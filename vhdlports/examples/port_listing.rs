use vhdlports::EntityPorts;
use std::env;

fn main() {
    clilog::init_stderr_color_debug();
    let args: Vec<String> = env::args().collect();
    assert!(args.len() == 2,
            "Usage: {} <vhdl_path>", args[0]);
    clilog::info!("VHDL file {}", args[1]);

    let ports = match EntityPorts::parse_file(&args[1]) {
        Ok(ports) => ports,
        Err(e) => panic!("{}", e)
    };

    clilog::info!("entity {}", ports.entity_name.as_deref().unwrap_or("<unnamed>"));
    for p in ports.inputs.iter().chain(ports.outputs.iter()) {
        clilog::info!("  group {}: {}", p.group, p);
    }
    clilog::info!("# Groups = {}", ports.num_groups());
}
