use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tabfn::configuration::Configuration;
use tabfn::function::basic::exp::Exp;
use tabfn::function::basic::log::Log;
use tabfn::function::function::Function;
use tabfn::function::functionpoint::FunctionPoint;
use tabfn::function::functions;
use tabfn::io::binarycodec::{read_binary, write_binary};
use tabfn::io::jsoncodec::{read_json, write_json};
use tabfn::io::textcodec::{read_text, write_text};
use tabfn::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use tabfn::tabulated::linkedlisttabulatedfunction::LinkedListTabulatedFunction;
use tabfn::tabulated::tabulatedfunction::{tabulated_eq, TabulatedFunction};
use tabfn::tabulated::tabulatedfunctions::tabulate;

#[derive(Parser)]
#[command(name = "tabfn", version, about = "Tabulated function demonstration")]
struct Cli {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose logging (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Configuration::from_reader(path)?,
        None => Configuration::new(),
    };

    let log_level = match cli.verbose {
        0 => config.log_level(),
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("tabfn={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    run(&config)
}

fn equality(lhs: &dyn TabulatedFunction, rhs: &dyn TabulatedFunction) -> &'static str {
    if tabulated_eq(lhs, rhs) { "equal" } else { "not equal" }
}

fn run(config: &Configuration) -> Result<()> {
    let count = config.sample_count();

    // y = 4x
    let mut fun1 = ArrayTabulatedFunction::with_count(1.0, 100.0, 10)?;
    for i in 0..fun1.points_count() {
        let x = fun1.point_x(i)?;
        fun1.set_point_y(i, 4.0 * x)?;
    }
    println!("fun1: y = 4x\n{}\n", fun1);

    let mut fun2 = LinkedListTabulatedFunction::with_values(1.0, 7.0, &[2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0])?;
    println!("fun2: values from an array\n{}\n", fun2);

    let fun3 = tabulate(&functions::composition(Log::natural(), Exp), 1.0, 11.0, count)?;
    println!("fun3: exp(ln(x))\n{}\n", fun3);

    let mut fun4 = tabulate(&functions::sum(&fun1, &fun3), 1.0, 11.0, count)?;
    println!("fun4: fun1 + fun3\n{}\n", fun4);

    let fun5 = LinkedListTabulatedFunction::with_values(
        1.0,
        100.0,
        &[4.0, 48.0, 92.0, 136.0, 180.0, 224.0, 268.0, 312.0, 356.0, 400.0],
    )?;
    println!("fun5: linear values\n{}\n", fun5);

    let fun6 = fun4.clone();
    println!("fun6: copy of fun4\n{}\n", fun6);

    println!("fun1 and fun2 are {}", equality(&fun1, &fun2));
    println!("fun1 and fun3 are {}", equality(&fun1, &fun3));
    println!("fun1 and fun5 are {}", equality(&fun1, &fun5));
    println!("fun4 and fun6 are {}\n", equality(&fun4, &fun6));

    let tables: [(&str, &dyn TabulatedFunction); 6] = [
        ("fun1", &fun1),
        ("fun2", &fun2),
        ("fun3", &fun3),
        ("fun4", &fun4),
        ("fun5", &fun5),
        ("fun6", &fun6),
    ];
    for (name, table) in tables {
        println!("hash of {}: {}", name, table.hash_code());
    }
    println!();

    let y = fun4.point_y(2)?;
    fun4.set_point_y(2, y + 0.005)?;
    println!("fun4 after shifting point 2 by 0.005\n{}", fun4);
    println!("new hash of fun4: {}", fun4.hash_code());
    println!("fun6 is unchanged\n{}\n", fun6);

    let fun7 = fun2.clone();
    fun2.add_point(FunctionPoint::new(18.0, 20.0))?;
    println!("fun2 after adding (18; 20)\n{}", fun2);
    println!("fun7, copied before, is unchanged\n{}\n", fun7);

    persist(config, &fun4)?;

    info!("demonstration finished");
    Ok(())
}

/// Writes `function` with every codec and checks it reads back equal.
fn persist(config: &Configuration, function: &dyn TabulatedFunction) -> Result<()> {
    let dir = config.output_dir();
    let storage = config.storage();

    let text_path = dir.join("tabfn-function.txt");
    write_text(function, BufWriter::new(File::create(&text_path)?))?;
    let from_text = read_text(BufReader::new(File::open(&text_path)?), storage)
        .with_context(|| format!("reading {}", text_path.display()))?;

    let binary_path = dir.join("tabfn-function.bin");
    write_binary(function, BufWriter::new(File::create(&binary_path)?))?;
    let from_binary = read_binary(BufReader::new(File::open(&binary_path)?), storage)
        .with_context(|| format!("reading {}", binary_path.display()))?;

    let json_path = dir.join("tabfn-function.json");
    write_json(function, BufWriter::new(File::create(&json_path)?))?;
    let from_json = read_json(BufReader::new(File::open(&json_path)?), storage)
        .with_context(|| format!("reading {}", json_path.display()))?;

    for (path, table) in [
        (&text_path, &from_text),
        (&binary_path, &from_binary),
        (&json_path, &from_json),
    ] {
        println!(
            "{} ({:?}): {} to the original, value at 5.5 = {}",
            path.display(),
            storage,
            equality(function, table.as_ref()),
            table.value(5.5)
        );
    }
    Ok(())
}
