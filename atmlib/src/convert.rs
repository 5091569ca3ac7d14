//! Пакетная конвертация: читаем всё одним форматом, пишем другим.

use crate::{
    error::Result,
    traits::{ReadFormat, WriteFormat},
};
use std::io::{BufRead, Write};

/// Возвращает число сконвертированных записей.
pub fn convert<I: ReadFormat, O: WriteFormat, R: BufRead, W: Write>(
    r: R,
    w: W,
    preamble: usize,
) -> Result<usize> {
    let records = I::read_after(r, preamble)?;
    O::write(w, &records)?;
    tracing::info!(records = records.len(), "conversion finished");
    Ok(records.len())
}

/// Пропускает первые `n` строк (заголовок выгрузки перед шапкой CSV).
/// Возвращает, сколько строк реально пропущено.
pub fn skip_lines<R: BufRead>(r: &mut R, n: usize) -> Result<u64> {
    let mut buf = String::new();
    let mut skipped = 0;
    for _ in 0..n {
        buf.clear();
        if r.read_line(&mut buf)? == 0 {
            break;
        }
        skipped += 1;
    }
    Ok(skipped)
}
