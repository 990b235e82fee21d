use std::path::PathBuf;

fn main() {
    let mut args = std::env::args().skip(1);
    let mut store_path: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" | "-f" => {
                store_path = args.next().map(PathBuf::from);
                if store_path.is_none() {
                    eprintln!("Error: --file requires a path argument");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("clubroster - club membership manager");
                println!();
                println!("Usage: clubroster [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --file <PATH>   Roster file path (default: .data/roster.json)");
                println!("  -h, --help          Show this help");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    let store_path = store_path.unwrap_or_else(|| PathBuf::from(".data").join("roster.json"));
    clubroster::cli::run(&store_path);
}
