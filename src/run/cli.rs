use anyhow::Result;

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    match args[1].as_str() {
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("budgetring {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown argument: {other}");
        }
    }
}

fn print_usage() {
    println!("BudgetRing - monthly category budgets in the terminal");
    println!();
    println!("Usage: budgetring [--help | --version]");
    println!();
    println!("  (none)            Launch the interactive budget view");
    println!("  --help, -h        Show this help");
    println!("  --version, -V     Show version");
    println!();
    println!("Environment:");
    println!("  BUDGETRING_LOG    Append logs to this file (off when unset)");
    println!("  RUST_LOG          Log filter (default: budgetring=info)");
}
