use crate::core::context::CalculationContext;
use crate::core::{ServiceClass, SessionSettings, TransportMode, TravelRequest};
use crate::domain::model::passenger_count;
use crate::utils::error::{FareError, Result};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Prompt-driven front end: asks for the transport and trip details,
/// prices the trip and prints the total.
///
/// Input is read as whitespace-separated tokens, so answers may be given
/// one per line or several on one line.
pub struct InteractiveSession<R: BufRead, W: Write> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> InteractiveSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Runs one full calculation and returns the computed cost.
    pub fn run<S: SessionSettings>(&mut self, settings: &S) -> Result<f64> {
        let mut context = CalculationContext::new();

        writeln!(self.output, "Choose transport:")?;
        for (index, mode) in TransportMode::ALL.iter().enumerate() {
            writeln!(self.output, "{} - {}", index + 1, mode.menu_label())?;
        }
        self.output.flush()?;

        let choice = self.next_token("transport")?;
        let mode = match TransportMode::from_menu_choice(&choice) {
            Ok(mode) => mode,
            Err(e) => {
                writeln!(self.output, "Selection error!")?;
                return Err(e);
            }
        };
        context.select_mode(mode);
        tracing::debug!("Transport selected: {}", mode);

        let distance: f64 = self.prompt("Enter distance: ", "distance")?;
        let passengers: i64 = self.prompt("Number of passengers: ", "passengers")?;
        let class_code: i64 = self.prompt("Class (1-economy, 2-business): ", "service class")?;
        let has_baggage = self.prompt_bool("Baggage? (true/false): ", "baggage")?;
        let is_child = self.prompt_bool("Child? (true/false): ", "child")?;
        let is_senior = self.prompt_bool("Senior? (true/false): ", "senior")?;

        let request = TravelRequest::new(
            distance,
            passenger_count(passengers)?,
            ServiceClass::from_menu_code(class_code),
            has_baggage,
            is_child,
            is_senior,
            settings.regional_coefficient(),
        )?;

        let cost = context.compute(&request)?;
        writeln!(self.output, "Total cost: {}", cost)?;
        self.output.flush()?;

        Ok(cost)
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt<T: FromStr>(&mut self, text: &str, field: &str) -> Result<T> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let token = self.next_token(field)?;
        token
            .parse()
            .map_err(|_| FareError::input(field, format!("'{}' is not a valid number", token)))
    }

    fn prompt_bool(&mut self, text: &str, field: &str) -> Result<bool> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let token = self.next_token(field)?;
        match token.to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(FareError::input(
                field,
                format!("'{}' is not true or false", token),
            )),
        }
    }

    fn next_token(&mut self, field: &str) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(FareError::input(field, "input ended before a value was given"));
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::TomlConfig;
    use std::io::Cursor;

    fn run(script: &str) -> (Result<f64>, String) {
        let mut session = InteractiveSession::new(Cursor::new(script.as_bytes()), Vec::new());
        let result = session.run(&TomlConfig::default());
        let output = String::from_utf8(session.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn test_plane_session_uses_default_coefficient() {
        let (result, output) = run("1\n100\n1\n1\nfalse\nfalse\nfalse\n");

        let cost = result.unwrap();
        assert!((cost - 55.0).abs() < 1e-9);
        assert!(output.contains("1 - Plane"));
        assert!(output.contains("Total cost: "));
    }

    #[test]
    fn test_tokens_on_one_line() {
        let (result, _) = run("3 100 10 1 FALSE False false\n");
        // 100 * 0.2 * 10 * 1.1 * 0.85
        assert!((result.unwrap() - 187.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_menu_choice_stops_early() {
        let (result, output) = run("7\n100\n");

        assert!(matches!(result, Err(FareError::InvalidSelection { .. })));
        assert!(output.contains("Selection error!"));
        assert!(!output.contains("Enter distance"));
    }

    #[test]
    fn test_unparsable_number_is_input_error() {
        let (result, _) = run("2\nfar\n");
        assert!(matches!(result, Err(FareError::InputError { ref field, .. }) if field == "distance"));
    }

    #[test]
    fn test_bad_boolean_is_input_error() {
        let (result, _) = run("2 100 1 1 yes\n");
        assert!(matches!(result, Err(FareError::InputError { ref field, .. }) if field == "baggage"));
    }

    #[test]
    fn test_eof_is_input_error() {
        let (result, _) = run("1\n100\n");
        assert!(matches!(result, Err(FareError::InputError { .. })));
    }

    #[test]
    fn test_invalid_request_surfaces_after_all_prompts() {
        let (result, output) = run("2\n0\n1\n1\nfalse\nfalse\nfalse\n");

        assert!(matches!(result, Err(FareError::InvalidRequest { ref field, .. }) if field == "distance"));
        assert!(!output.contains("Total cost"));
    }
}
