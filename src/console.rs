//! Interactive console: compare two typed operands, then browse sweep charts from a menu.
use crate::chart::{render_sweep, ChartKind};
use crate::compare::{compare, sweep, Comparison, Sweep};
use crate::config::SweepConfig;
use crate::error::Result;
use crate::operand::parse_operand;
use crate::timer::BenchmarkRecord;
use num_bigint::BigUint;
use std::io::{BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
    sweep: SweepConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, sweep: SweepConfig) -> Self {
        Self {
            input,
            output,
            sweep,
        }
    }

    /// Runs until the menu's exit choice or the end of input.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Custom Input Test ---")?;
        let x = match self.read_operand("Enter first number: ")? {
            Some(x) => x,
            None => return Ok(()),
        };
        let y = match self.read_operand("Enter second number: ")? {
            Some(y) => y,
            None => return Ok(()),
        };
        let comparison = compare(&x, &y);
        self.print_comparison(&comparison)?;

        writeln!(
            self.output,
            "\nBenchmarking digit lengths {:?}...",
            self.sweep.digit_lengths
        )?;
        let mut rng = self.sweep.rng();
        let sweep = sweep(&self.sweep.digit_lengths, &mut rng)?;
        self.menu(&sweep)
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn read_operand(&mut self, prompt: &str) -> Result<Option<BigUint>> {
        while let Some(line) = self.read_line(prompt)? {
            match parse_operand(&line) {
                Ok(operand) => return Ok(Some(operand)),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
        Ok(None)
    }

    fn print_record(&mut self, heading: &str, record: &BenchmarkRecord) -> Result<()> {
        writeln!(self.output, "\n[{}]", heading)?;
        writeln!(self.output, "Result = {}", record.product)?;
        writeln!(self.output, "Recursive Calls = {}", record.call_count)?;
        writeln!(self.output, "Time = {:.6} s", record.elapsed.as_secs_f64())?;
        Ok(())
    }

    fn print_comparison(&mut self, comparison: &Comparison) -> Result<()> {
        self.print_record("Divide-and-Conquer", &comparison.divide_and_conquer)?;
        self.print_record("Karatsuba", &comparison.karatsuba)?;
        writeln!(self.output, "\nSpeedup = {:.3}", comparison.speedup())?;
        Ok(())
    }

    fn menu(&mut self, sweep: &Sweep) -> Result<()> {
        loop {
            writeln!(self.output, "\n--- Choose a Graph ---")?;
            for kind in ChartKind::ALL.iter() {
                writeln!(self.output, "{}. {}", kind.menu_choice(), kind.description())?;
            }
            writeln!(self.output, "0. Exit")?;
            let line = match self.read_line("Enter choice: ")? {
                Some(line) => line,
                None => return Ok(()),
            };
            match line.trim().parse::<usize>() {
                Ok(0) => return Ok(()),
                Ok(choice) => match ChartKind::from_menu_choice(choice) {
                    Some(kind) => {
                        for chart in render_sweep(kind, sweep) {
                            writeln!(self.output, "\n{}", chart)?;
                        }
                    }
                    None => writeln!(self.output, "Unknown choice: {}", choice)?,
                },
                Err(_) => writeln!(self.output, "Unknown choice: {}", line.trim())?,
            }
        }
    }
}
