use atmlib::{
    formats::{andromoney::AndroMoney, moze::Moze},
    traits::{ReadFormat, WriteFormat},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // AndroMoney CSV -> Moze CSV (stdin -> stdout)
    let records = AndroMoney::read(std::io::BufReader::new(std::io::stdin()))?;
    Moze::write(std::io::stdout(), &records)?;
    Ok(())
}
