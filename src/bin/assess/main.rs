// AI Value Assessment Runner
// Evaluates a filled-in assessment form and prints per-scenario savings
//
// Usage:
//   cargo run --bin assess -- --set customerService=100000          # One field
//   cargo run --bin assess -- --input form.json                      # Saved form
//   cargo run --bin assess -- --input form.json --set perLeadValue=250
//   cargo run --bin assess -- --input form.json --json               # Report as JSON
//   cargo run --bin assess -- --input form.json --out results        # Write report file
//   cargo run --bin assess -- --input form.json receptionist         # Filter by key/label

mod table;

use assessment_engine::{AssessmentForm, AssessmentReport, EstimateError};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

// ─── CLI Parsing ────────────────────────────────────────────────────────────

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    sets: Vec<(String, String)>,
    input: Option<PathBuf>,
    json: bool,
    out: Option<PathBuf>,
    filter: Option<String>,
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--set" => {
                i += 1;
                let pair = args.get(i).ok_or("--set needs field=value")?;
                let (field, value) = pair
                    .split_once('=')
                    .ok_or_else(|| format!("--set expects field=value, got {pair:?}"))?;
                cli.sets.push((field.to_string(), value.to_string()));
            }
            "--input" => {
                i += 1;
                cli.input = Some(args.get(i).ok_or("--input needs a file")?.into());
            }
            "--out" => {
                i += 1;
                cli.out = Some(args.get(i).ok_or("--out needs a directory")?.into());
            }
            "--json" => {
                cli.json = true;
            }
            arg if !arg.starts_with('-') => {
                cli.filter = Some(arg.to_string());
            }
            other => {
                eprintln!("Unknown argument: {}", other);
            }
        }
        i += 1;
    }

    Ok(cli)
}

fn load_form(cli: &CliArgs) -> Result<AssessmentForm, String> {
    let mut form = match &cli.input {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
            AssessmentForm::from_json(&text).map_err(|e: EstimateError| e.to_string())?
        }
        None => AssessmentForm::new(),
    };
    for (field, value) in &cli.sets {
        form.set(field, value).map_err(|e| e.to_string())?;
    }
    Ok(form)
}

fn write_report(dir: &std::path::Path, report: &AssessmentReport) -> Result<PathBuf, String> {
    std::fs::create_dir_all(dir).map_err(|e| format!("cannot create {}: {}", dir.display(), e))?;
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let path = dir.join(format!("assessment-{}.json", ts));
    let json = serde_json::to_string_pretty(report).map_err(|e| e.to_string())?;
    std::fs::write(&path, json).map_err(|e| format!("cannot write {}: {}", path.display(), e))?;
    Ok(path)
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn run() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;
    let form = load_form(&cli)?;
    let report = AssessmentReport::from_form(&form);

    let shown = match &cli.filter {
        Some(f) => report.filtered(f),
        None => report.entries.iter().collect(),
    };
    if shown.is_empty() {
        return Err(format!("No scenarios match filter: {:?}", cli.filter));
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{}", json);
    } else {
        print!("{}", table::render(&shown, &report));
    }

    if let Some(dir) = &cli.out {
        let path = write_report(dir, &report)?;
        println!("  Report saved to: {}\n", path.display());
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_all_flags() {
        let cli = parse_args(&args(&[
            "--set", "workflow=100", "--input", "form.json", "--json", "--out", "res", "onboard",
        ]))
        .expect("test: valid args");
        assert_eq!(cli.sets, vec![("workflow".to_string(), "100".to_string())]);
        assert_eq!(cli.input, Some(PathBuf::from("form.json")));
        assert!(cli.json);
        assert_eq!(cli.out, Some(PathBuf::from("res")));
        assert_eq!(cli.filter.as_deref(), Some("onboard"));
    }

    #[test]
    fn set_without_equals_is_an_error() {
        assert!(parse_args(&args(&["--set", "workflow"])).is_err());
        assert!(parse_args(&args(&["--set"])).is_err());
    }

    #[test]
    fn sets_override_in_order() {
        let cli = parse_args(&args(&["--set", "customerService=1", "--set", "customerService=100000"]))
            .expect("test: valid args");
        let form = load_form(&cli).expect("test: known fields");
        assert_eq!(form.raw("customerService"), "100000");
    }

    #[test]
    fn unknown_field_fails_load() {
        let cli = parse_args(&args(&["--set", "email=x"])).expect("test: valid args");
        assert!(load_form(&cli).is_err());
    }
}
