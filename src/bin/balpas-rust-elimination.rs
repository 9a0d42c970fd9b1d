use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::Result;
use balpas_rust::{append_u64, simulate, Tokens};

fn main() -> Result<()> {
    let mut tokens = match env::args().nth(1) {
        Some(path) => Tokens::from_reader(File::open(path)?)?,
        None => Tokens::from_reader(io::stdin().lock())?,
    };

    let n = tokens.next_usize()?;
    let mut counts = Vec::with_capacity(n);
    for _ in 0..n {
        counts.push(tokens.next_i64()?);
    }

    let order = simulate(&counts);

    let mut out = Vec::with_capacity(order.len() * 4 + 1);
    for (i, idx) in order.iter().enumerate() {
        if i > 0 {
            out.push(b' ');
        }
        append_u64(&mut out, *idx as u64);
    }
    out.push(b'\n');

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    writer.write_all(&out)?;
    writer.flush()?;
    Ok(())
}
