/// Parses the scenario name from command-line arguments
pub fn get_scenario(default: &str) -> String {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 { args[1].to_lowercase() } else { default.to_string() }
}
