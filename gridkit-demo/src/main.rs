mod render;
mod script;

use std::fs::{self, File};

use gridkit::prelude::*;
use log::info;
use serde_json::{Map, Value};
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

const SAMPLE: &str = include_str!("../data/users.json");

#[derive(Debug, Error)]
enum DemoError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Script(#[from] script::ScriptError),
}

type Row = Map<String, Value>;

fn read(path: &str) -> Result<String, DemoError> {
    fs::read_to_string(path).map_err(|source| DemoError::Read {
        path: path.to_string(),
        source,
    })
}

fn columns() -> Vec<Column<Row>> {
    vec![
        Column::new("id", "ID").sortable().fixed(4),
        Column::new("name", "Name").sortable().flex(2),
        Column::new("email", "Email").auto(),
        Column::new("score", "Score")
            .sortable()
            .fixed(8)
            .render(|value, _, _| match value.as_f64() {
                Some(score) => format!("{:.1}", score),
                None => "-".to_string(),
            }),
    ]
}

fn run_table(records: &str, steps: &str) -> Result<(), DemoError> {
    let data = records_from_json(records)?;
    let steps = script::parse(steps)?;
    let columns = columns();
    let table = Table::new(&data, &columns).config(TableConfig::new().striped(true).bordered(true));

    info!("Loaded {} records, {} steps", data.len(), steps.len());

    let mut state = TableState::new();
    println!("{}\n", render::table(&table.project(&state)));

    for (line, event) in steps {
        println!("> {}", line);
        state = table.dispatch(&state, &event, |selection| {
            let keys: Vec<String> = selection
                .iter()
                .map(|row| table.key_selector().membership_key(row).to_string())
                .collect();
            println!("  selection -> [{}]", keys.join(", "));
        });
        println!("{}\n", render::table(&table.project(&state)));
    }

    let empty: Vec<Row> = Vec::new();
    let placeholder = Table::new(&empty, &columns).config(TableConfig::new().loading(true));
    println!("{}\n", render::table(&placeholder.project(&TableState::new())));

    Ok(())
}

fn run(args: &[String]) -> Result<(), DemoError> {
    let records = match args.first() {
        Some(path) => read(path)?,
        None => SAMPLE.to_string(),
    };
    let steps = match args.get(1) {
        Some(path) => read(path)?,
        None => script::DEFAULT_SCRIPT.to_string(),
    };
    run_table(&records, &steps)
}

fn run_fields() {
    let mut email_state = FieldState::new();
    let mut email = FieldProps::new("Email")
        .input_type(InputType::Email)
        .clearable(true)
        .value("grace@navy");
    email_state.handle(&email, FieldEvent::Focus);
    println!("{}", render::field(&email, &email_state.project(&email)));

    if let Some(value) = email_state.handle(&email, FieldEvent::Input("grace@navy.mil".into())).value {
        email = email.value(value);
    }
    println!("{}", render::field(&email, &email_state.project(&email)));

    let password = FieldProps::new("Password")
        .input_type(InputType::Password)
        .value("hunter2");
    let mut password_state = FieldState::new();
    println!("{}", render::field(&password, &password_state.project(&password)));
    password_state.handle(&password, FieldEvent::ToggleReveal);
    println!("{}", render::field(&password, &password_state.project(&password)));

    let busy = password.loading(true);
    println!("{}", render::field(&busy, &password_state.project(&busy)));
}

fn main() {
    let log_file = File::create("gridkit-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = run(&args);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    run_fields();
}
