use server::config::try_load_settings;
use server::process::ecosystem;
use shared_types::AppError;

fn run() -> Result<String, AppError> {
    let settings = try_load_settings()?;
    let eco = ecosystem(&settings, |name| std::env::var(name).ok());
    eco.to_json_pretty()
        .map_err(|e| AppError::internal(format!("failed to serialize process config: {e}")))
}

fn main() {
    match run() {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
