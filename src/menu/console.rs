use std::io::{self, BufRead, Write};
use std::str::FromStr;

const CLEAR_SEQUENCE: &str = "\x1B[2J\x1B[1;1H";

/// Line-oriented prompt/answer over any reader and writer.
pub(super) struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    /// Print a prompt and read one trimmed answer. `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the farewell on its own line
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask until the answer parses and passes `valid`, printing `error` otherwise.
    pub fn ask_number<T: FromStr>(
        &mut self,
        prompt: &str,
        error: &str,
        valid: impl Fn(&T) -> bool,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match answer.parse::<T>() {
                Ok(value) if valid(&value) => return Ok(Some(value)),
                _ => self.say(error)?,
            }
        }
    }

    pub fn clear(&mut self) -> io::Result<()> {
        write!(self.output, "{}", CLEAR_SEQUENCE)?;
        self.output.flush()
    }
}
