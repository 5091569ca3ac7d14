use atmlib::{
    convert::convert,
    error::{AtmError, Result},
    formats::{andromoney::AndroMoney, moze::Moze},
};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, Write};

#[derive(Parser, Debug)]
#[command(name="atm", version, about="Конвертация выгрузки AndroMoney в CSV импорта Moze")]
struct Cli {
    /// Входной CSV AndroMoney (по умолчанию stdin)
    #[arg(short='i', long="input")]
    input: Option<String>,

    /// Выходной CSV Moze (по умолчанию stdout)
    #[arg(short='o', long="output")]
    output: Option<String>,

    /// Сколько строк пропустить перед шапкой CSV
    #[arg(long="skip-rows", env="ATM_SKIP_ROWS", default_value_t = 0)]
    skip_rows: usize,

    /// Уровень логов: error, warn, info, debug, trace
    #[arg(long="log-level", env="ATM_LOG", default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(format!("atm={level},atmlib={level}", level = cli.log_level))
        .init();

    // reader
    let reader: Box<dyn io::Read> = match cli.input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    let br = BufReader::new(reader);

    // writer
    let mut writer: Box<dyn Write> = match cli.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    convert::<AndroMoney, Moze, _, _>(br, &mut writer, cli.skip_rows)?;

    writer.flush().map_err(AtmError::from)
}
