use std::io::{self, BufRead, Write};

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Answer plugin requests line by line until EOF.
///
/// One request per stdin line, one JSON document per stdout line. Blank
/// lines are skipped.
pub fn run() -> Result<(), String> {
    let mut rng = StdRng::from_os_rng();

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    let mut line = String::new();

    loop {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }

        writeln!(writer, "{}", super::respond(Some(raw), &mut rng)).map_err(|e| e.to_string())?;
        writer.flush().map_err(|e| e.to_string())?;
    }

    Ok(())
}
