//! Interactive menu session
//!
//! Holds the two matrix slots and drives the menu over any reader/writer
//! pair. Library errors are printed and logged here and never end the
//! session; only terminal I/O failures do. End of input exits cleanly.

use crate::config::{Config, OutputFormat};
use mcalc::{Matrix, MatrixError, Operation, Outcome, SaveMode};
use std::io::{self, BufRead, Write};
use tracing::{debug, error, info, warn};

const SLOT_COUNT: usize = 2;

/// `Ok(None)` means the input was closed
type Step<T> = io::Result<Option<T>>;

pub struct Session<'c, R, W, E> {
    config: &'c Config,
    input: R,
    out: W,
    err: E,
    slots: [Option<Matrix>; SLOT_COUNT],
}

impl<'c, R: BufRead, W: Write, E: Write> Session<'c, R, W, E> {
    pub fn new(config: &'c Config, input: R, out: W, err: E) -> Self {
        Self { config, input, out, err, slots: [None, None] }
    }

    /// Fill slots from the paths given on the command line
    ///
    /// A path that fails to load leaves its slot empty, so the menu prompts
    /// for it later.
    pub fn preload(&mut self) -> io::Result<()> {
        let paths = self.config.preload.iter().take(SLOT_COUNT).cloned().enumerate();
        for (slot, path) in paths {
            let path = self.config.resolve(path);
            match mcalc::load(&path) {
                Ok(m) => {
                    info!(slot = slot + 1, path = %path.display(), shape = %m.shape(), "matrix preloaded");
                    self.slots[slot] = Some(m);
                }
                Err(e) => {
                    error!(slot = slot + 1, path = %path.display(), code = e.code(), error = %e, "preload failed");
                    writeln!(self.err, "Could not load matrix {}: {}", slot + 1, e)?;
                }
            }
        }
        Ok(())
    }

    /// Run the main menu until the user exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        info!("session started");

        loop {
            if self.slots.iter().any(Option::is_none) && self.load_matrices()?.is_none() {
                break;
            }

            writeln!(self.out, "\nMain menu:")?;
            writeln!(self.out, "1. Perform an operation on the matrices")?;
            writeln!(self.out, "2. Load new matrices from files")?;
            writeln!(self.out, "0. Exit")?;
            let Some(line) = self.prompt("Enter your choice: ")? else { break };

            match line.trim().parse::<u32>() {
                Ok(1) => {
                    if self.perform_operation()?.is_none() {
                        break;
                    }
                }
                Ok(2) => {
                    self.slots = [None, None];
                    if self.load_matrices()?.is_none() {
                        break;
                    }
                }
                Ok(0) => break,
                Ok(other) => {
                    writeln!(self.out, "Invalid choice. Please pick an item from the menu.")?;
                    warn!(choice = other, "invalid menu choice");
                }
                Err(_) => {
                    writeln!(self.err, "Invalid input, please enter a number.")?;
                    warn!(input = %line.trim(), "non-numeric menu input");
                }
            }
        }

        info!("session finished");
        Ok(())
    }

    /// Prompt for every empty slot until it holds a matrix
    fn load_matrices(&mut self) -> Step<()> {
        for slot in 0..SLOT_COUNT {
            while self.slots[slot].is_none() {
                let prompt = format!("Enter the path to matrix file {}: ", slot + 1);
                let Some(line) = self.prompt(&prompt)? else { return Ok(None) };

                let path = self.config.resolve(line.trim());
                match mcalc::load(&path) {
                    Ok(m) => {
                        info!(slot = slot + 1, path = %path.display(), shape = %m.shape(), "matrix loaded");
                        self.slots[slot] = Some(m);
                    }
                    Err(e) => {
                        writeln!(self.out, "Could not read the file, try again: {}", e)?;
                        error!(slot = slot + 1, path = %path.display(), code = e.code(), error = %e, "failed to load matrix");
                    }
                }
            }
        }
        info!("matrices loaded");
        Ok(Some(()))
    }

    fn perform_operation(&mut self) -> Step<()> {
        let Some((first, second)) = self.choose_slots()? else { return Ok(None) };

        writeln!(self.out, "\nChoose an operation:")?;
        for op in Operation::ALL {
            writeln!(self.out, "{}. {}", op.menu_number(), op.description())?;
        }
        let Some(line) = self.prompt("Enter the operation number: ")? else { return Ok(None) };

        let op = match line.parse::<Operation>() {
            Ok(op) => op,
            Err(e) => {
                writeln!(self.out, "Invalid operation choice.")?;
                warn!(error = %e, "invalid operation choice");
                return Ok(Some(()));
            }
        };

        let scalar = if op.needs_scalar() {
            let Some(line) = self.prompt("Enter the scalar: ")? else { return Ok(None) };
            match line.trim().parse::<f64>() {
                Ok(k) => Some(k),
                Err(_) => {
                    writeln!(self.err, "Invalid input, the scalar must be a number.")?;
                    warn!(input = %line.trim(), "invalid scalar");
                    return Ok(Some(()));
                }
            }
        } else {
            None
        };

        // Slots are loaded by the time the menu is reachable
        let (Some(a), Some(b)) = (self.slots[first].clone(), self.slots[second].clone()) else {
            writeln!(self.err, "Matrices are not loaded.")?;
            return Ok(Some(()));
        };

        debug!(operation = %op, first = first + 1, second = second + 1, "applying operation");
        match op.apply(&a, Some(&b), scalar) {
            Ok(outcome) => {
                info!(operation = %op, "operation completed");
                self.show_outcome(&outcome)?;
                if let Outcome::Matrix(m) = outcome {
                    return self.offer_save(&m);
                }
                Ok(Some(()))
            }
            Err(e) => {
                self.show_error(&e)?;
                error!(operation = %op, code = e.code(), error = %e, "operation failed");
                Ok(Some(()))
            }
        }
    }

    /// Ask for two slot numbers until both are valid
    fn choose_slots(&mut self) -> Step<(usize, usize)> {
        loop {
            writeln!(self.out, "\nChoose the matrices for the operation (1 or 2):")?;
            let Some(first) = self.prompt("Enter the number of the first matrix: ")? else { return Ok(None) };
            let Some(second) = self.prompt("Enter the number of the second matrix: ")? else { return Ok(None) };

            match (slot_index(&first), slot_index(&second)) {
                (Some(a), Some(b)) => return Ok(Some((a, b))),
                _ => {
                    writeln!(self.out, "Invalid matrix number, try again.")?;
                    warn!(first = %first.trim(), second = %second.trim(), "invalid matrix number");
                }
            }
        }
    }

    fn show_outcome(&mut self, outcome: &Outcome) -> io::Result<()> {
        match self.config.output {
            OutputFormat::Json => {
                let json = serde_json::to_string(outcome).map_err(io::Error::other)?;
                writeln!(self.out, "{}", json)
            }
            OutputFormat::Text => match outcome {
                Outcome::Matrix(m) => writeln!(self.out, "Result:\n{}", m),
                Outcome::Scalar(det) => writeln!(self.out, "Determinant of the first matrix: {}", det),
            },
        }
    }

    fn show_error(&mut self, e: &MatrixError) -> io::Result<()> {
        let report = e.report();
        match self.config.output {
            OutputFormat::Json => {
                let json = serde_json::to_string(&report).map_err(io::Error::other)?;
                writeln!(self.err, "{}", json)
            }
            OutputFormat::Text => writeln!(self.err, "Error: {}", report),
        }
    }

    fn offer_save(&mut self, m: &Matrix) -> Step<()> {
        let Some(answer) = self.prompt("Save the result to a file? (y/n): ")? else { return Ok(None) };
        if !answer.trim().eq_ignore_ascii_case("y") {
            return Ok(Some(()));
        }

        let Some(choice) = self.prompt("Overwrite an existing file (1) or create a new one (2)? ")? else {
            return Ok(None);
        };
        let mode = match choice.trim() {
            "1" => SaveMode::Overwrite,
            "2" => SaveMode::CreateNew,
            other => {
                writeln!(self.out, "Invalid save choice.")?;
                warn!(choice = %other, "invalid save choice");
                return Ok(Some(()));
            }
        };

        let Some(line) = self.prompt("Enter the file path: ")? else { return Ok(None) };
        let path = self.config.resolve(line.trim());
        match mcalc::save(m, &path, mode) {
            Ok(()) => {
                writeln!(self.out, "Result saved to {}", path.display())?;
                info!(path = %path.display(), mode = ?mode, "result saved");
            }
            Err(e) => {
                writeln!(self.err, "Could not save the file: {}", e)?;
                error!(path = %path.display(), mode = ?mode, code = e.code(), error = %e, "save failed");
            }
        }
        Ok(Some(()))
    }

    /// Print `text` and read one line; `None` at end of input
    fn prompt(&mut self, text: &str) -> Step<String> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("input closed");
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Map a 1-based slot number typed by the user to an index
fn slot_index(input: &str) -> Option<usize> {
    input.trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=SLOT_COUNT).contains(n))
        .map(|n| n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;

    struct Run {
        out: String,
        err: String,
        slots: [Option<Matrix>; SLOT_COUNT],
    }

    fn config_in(dir: &Path) -> Config {
        Config { data_path: dir.to_path_buf(), ..Config::default() }
    }

    fn run_script(config: &Config, script: &str) -> Run {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut session = Session::new(config, Cursor::new(script.as_bytes().to_vec()), &mut out, &mut err);
        session.preload().unwrap();
        session.run().unwrap();
        let slots = session.slots.clone();
        drop(session);
        Run {
            out: String::from_utf8(out).unwrap(),
            err: String::from_utf8(err).unwrap(),
            slots,
        }
    }

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "1 2\n3 4\n").unwrap();
        fs::write(dir.path().join("b.txt"), "2 0\n1 2\n").unwrap();
        fs::write(dir.path().join("row.txt"), "1 2\n").unwrap();
        fs::write(dir.path().join("bad.txt"), "1 2\n3\n").unwrap();
        dir
    }

    #[test]
    fn test_slot_index() {
        assert_eq!(slot_index("1"), Some(0));
        assert_eq!(slot_index(" 2 "), Some(1));
        assert_eq!(slot_index("0"), None);
        assert_eq!(slot_index("3"), None);
        assert_eq!(slot_index("x"), None);
    }

    #[test]
    fn test_multiply_without_saving() {
        let dir = fixture();
        let config = config_in(dir.path());
        let run = run_script(&config, "a.txt\nb.txt\n1\n1\n2\n3\nn\n0\n");

        assert!(run.out.contains("Result:\n4 4\n10 8\n"), "{}", run.out);
        assert!(run.err.is_empty(), "{}", run.err);
        assert!(run.slots.iter().all(Option::is_some));
    }

    #[test]
    fn test_load_retries_same_slot() {
        let dir = fixture();
        let config = config_in(dir.path());
        let run = run_script(&config, "missing.txt\nbad.txt\na.txt\nb.txt\n0\n");

        assert_eq!(run.out.matches("Could not read the file").count(), 2);
        assert_eq!(run.out.matches("Enter the path to matrix file 1").count(), 3);
        assert!(run.out.contains("rows must have equal length"));
        assert!(run.slots.iter().all(Option::is_some));
    }

    #[test]
    fn test_determinant_and_scale() {
        let dir = fixture();
        let config = config_in(dir.path());
        let script = "a.txt\nb.txt\n1\n1\n1\n5\n1\n1\n1\n4\n-2\nn\n0\n";
        let run = run_script(&config, script);

        assert!(run.out.contains("Determinant of the first matrix: -2\n"), "{}", run.out);
        assert!(run.out.contains("Result:\n-2 -4\n-6 -8\n"), "{}", run.out);
    }

    #[test]
    fn test_dimension_error_keeps_session_alive() {
        let dir = fixture();
        let config = config_in(dir.path());
        let run = run_script(&config, "row.txt\na.txt\n1\n1\n2\n1\n0\n");

        assert!(run.err.contains("[DIMENSION_ERROR]"), "{}", run.err);
        assert!(run.err.contains("add: incompatible dimensions 1×2 and 2×2"));
        // Menu shown again after the failure
        assert_eq!(run.out.matches("Main menu:").count(), 2);
    }

    #[test]
    fn test_invalid_inputs() {
        let dir = fixture();
        let config = config_in(dir.path());
        // bad menu number, text in menu, bad slot, bad operation
        let run = run_script(&config, "a.txt\nb.txt\n7\nabc\n1\n3\n1\n1\n1\n9\n0\n");

        assert!(run.out.contains("Invalid choice."));
        assert!(run.err.contains("Invalid input, please enter a number."));
        assert!(run.out.contains("Invalid matrix number, try again."));
        assert!(run.out.contains("Invalid operation choice."));
    }

    #[test]
    fn test_save_new_then_overwrite() {
        let dir = fixture();
        let config = config_in(dir.path());
        let script = "a.txt\nb.txt\n\
                      1\n1\n2\n1\ny\n2\nout/sum.txt\n\
                      1\n1\n1\n1\ny\n1\nout/sum.txt\n\
                      0\n";
        let run = run_script(&config, script);

        assert_eq!(run.out.matches("Result saved to").count(), 2, "{}", run.out);
        let saved = mcalc::load(dir.path().join("out/sum.txt")).unwrap();
        assert_eq!(saved, Matrix::from_rows(vec![vec![2.0, 4.0], vec![6.0, 8.0]]).unwrap());
    }

    #[test]
    fn test_save_failure_is_reported() {
        let dir = fixture();
        let config = config_in(dir.path());
        let run = run_script(&config, "a.txt\nb.txt\n1\n1\n2\n1\ny\n2\na.txt\n0\n");

        assert!(run.err.contains("Could not save the file"), "{}", run.err);
        assert_eq!(fs::read_to_string(dir.path().join("a.txt")).unwrap(), "1 2\n3 4\n");
    }

    #[test]
    fn test_preload_and_reload() {
        let dir = fixture();
        let mut config = config_in(dir.path());
        config.preload = vec!["a.txt".into(), "b.txt".into()];
        let run = run_script(&config, "2\nb.txt\na.txt\n0\n");

        assert_eq!(run.out.matches("Enter the path to matrix file").count(), 2);
        assert_eq!(run.slots[0], Some(mcalc::parse_str("2 0\n1 2").unwrap()));
    }

    #[test]
    fn test_preload_failure_prompts() {
        let dir = fixture();
        let mut config = config_in(dir.path());
        config.preload = vec!["a.txt".into(), "missing.txt".into()];
        let run = run_script(&config, "b.txt\n0\n");

        assert!(run.err.contains("Could not load matrix 2"));
        assert_eq!(run.out.matches("Enter the path to matrix file 2").count(), 1);
        assert!(!run.out.contains("Enter the path to matrix file 1"));
    }

    #[test]
    fn test_json_output() {
        let dir = fixture();
        let mut config = config_in(dir.path());
        config.output = OutputFormat::Json;
        let run = run_script(&config, "a.txt\nb.txt\n1\n1\n1\n5\n0\n");

        assert!(run.out.contains(r#"{"type":"scalar","value":-2.0}"#), "{}", run.out);
    }

    #[test]
    fn test_end_of_input_exits() {
        let dir = fixture();
        let config = config_in(dir.path());
        let run = run_script(&config, "a.txt\n");

        assert!(run.slots[0].is_some());
        assert!(run.slots[1].is_none());
    }
}
