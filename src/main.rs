// Entry point and high-level CLI flow.
//
// `sales_report [PATH]` runs the interactive analysis menu over the CSV at
// PATH (default `sales_data.csv`); `sales_report web [PATH]` serves the
// same reports through the single-page web form instead. Either way the
// dataset is loaded once at startup so a missing or corrupt file is
// reported before any report can run.
use sales_report::loader::DataLoader;
use sales_report::output::render_text;
use sales_report::reports::{self, ReportKind};
use sales_report::util::format_int;
use sales_report::web;
use std::io::{self, Write};
use std::process::ExitCode;

const DEFAULT_DATA_PATH: &str = "sales_data.csv";
const BIND_ADDR: &str = "127.0.0.1:5000";

/// Print `prompt` and read one trimmed line; `None` means stdin is closed.
fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(buf.trim().to_string()),
    }
}

fn run_menu(loader: &DataLoader) {
    loop {
        println!("Select Analysis Type:");
        println!("[1] Monthly Sales Analysis");
        println!("[2] Price Analysis");
        println!("[3] Weekly Sales Analysis");
        println!("[4] Product Preference Analysis");
        println!("[5] Sales Distribution Analysis");
        println!("[0] Exit\n");

        let Some(choice) = read_line("Enter choice: ") else {
            break;
        };
        let kind = match choice.as_str() {
            "0" => {
                println!("Exiting the program.");
                break;
            }
            "1" => ReportKind::MonthlySales,
            "2" => ReportKind::Price,
            "3" => ReportKind::WeeklySales,
            "4" => ReportKind::ProductPreference,
            "5" => ReportKind::SalesDistribution,
            _ => {
                println!("Invalid choice. Please enter a number between 0 and 5.\n");
                continue;
            }
        };

        let branch_id = if kind.needs_branch_id() {
            match read_line("Enter branch ID: ") {
                Some(id) => Some(id),
                None => break,
            }
        } else {
            None
        };

        match loader
            .get()
            .and_then(|data| reports::run_report(data, kind, branch_id.as_deref()))
        {
            Ok(report) => {
                println!("\n{}\n", kind.title());
                println!("{}\n", render_text(&report));
            }
            Err(e) => println!("Error: {}\n", e),
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (web_mode, path) = match args.next() {
        Some(cmd) if cmd == "web" => (
            true,
            args.next().unwrap_or_else(|| DEFAULT_DATA_PATH.to_string()),
        ),
        Some(path) => (false, path),
        None => (false, DEFAULT_DATA_PATH.to_string()),
    };

    let loader = DataLoader::new(&path);
    match loader.get() {
        Ok(data) => {
            println!("Loaded {} sales records from {}.\n", format_int(data.len()), path);
        }
        Err(e) => {
            eprintln!("Initialization error: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if web_mode {
        if let Err(e) = web::serve(&loader, BIND_ADDR) {
            eprintln!("Server error: {}", e);
            return ExitCode::FAILURE;
        }
    } else {
        run_menu(&loader);
    }
    ExitCode::SUCCESS
}
