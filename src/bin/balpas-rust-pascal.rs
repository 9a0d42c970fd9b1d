use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::Result;
use balpas_rust::{append_u64, generate, Tokens};

fn main() -> Result<()> {
    let mut tokens = match env::args().nth(1) {
        Some(path) => Tokens::from_reader(File::open(path)?)?,
        None => Tokens::from_reader(io::stdin().lock())?,
    };

    let cases = tokens.next_usize()?;
    let mut out = Vec::new();

    for case in 1..=cases {
        let rows = tokens.next_usize()?;
        let tri = generate(rows);

        out.push(b'#');
        append_u64(&mut out, case as u64);
        out.push(b'\n');
        for row in &tri {
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    out.push(b' ');
                }
                append_u64(&mut out, *cell);
            }
            out.push(b'\n');
        }
    }

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    writer.write_all(&out)?;
    writer.flush()?;
    Ok(())
}
