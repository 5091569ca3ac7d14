//! Трэйты чтения/записи на основе std::io::{BufRead, Write}.

use crate::{error::Result, model::Record};
use std::io::{BufRead, Write};

pub trait ReadFormat {
    /// `preamble`: сколько строк пропустить перед шапкой; номера строк в ошибках считаются от начала потока.
    fn read_after<R: BufRead>(r: R, preamble: usize) -> Result<Vec<Record>>;

    fn read<R: BufRead>(r: R) -> Result<Vec<Record>> {
        Self::read_after(r, 0)
    }
}

pub trait WriteFormat {
    fn write<W: Write>(w: W, records: &[Record]) -> Result<()>;
}
