//! Interactive prompt
//!
//! Line-oriented front-end: every line is one "Check" in the current mode.
//! `:url` / `:email` switch the mode, `:quit` (or EOF) leaves.

use std::io::{self, BufRead, Write};

use super::commands::{check_input, CheckOutcome};
use crate::logic::{Detector, Mode};

pub const HELP: &str = "Enter a URL or email text to check. Commands: :url, :email, :help, :quit";

/// One parsed input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptCommand<'a> {
    SwitchMode(Mode),
    Help,
    Quit,
    Check(&'a str),
}

pub fn parse_line(line: &str) -> PromptCommand<'_> {
    match line.trim() {
        ":url" => PromptCommand::SwitchMode(Mode::Url),
        ":email" => PromptCommand::SwitchMode(Mode::Email),
        ":help" | ":h" | ":?" => PromptCommand::Help,
        ":quit" | ":q" | ":exit" => PromptCommand::Quit,
        _ => PromptCommand::Check(line),
    }
}

/// How outcomes are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Plain,
    /// Plain text with the verdict coloured by its tone
    Color,
    Json,
}

/// Render a check outcome in `format`
pub fn render(outcome: &CheckOutcome, format: OutputFormat) -> String {
    if format == OutputFormat::Json {
        return serde_json::to_string(outcome)
            .unwrap_or_else(|e| format!("{{\"status\":\"error\",\"message\":\"{}\"}}", e));
    }

    match outcome {
        CheckOutcome::InputError { warning } => format!("Input Error: {}", warning),
        CheckOutcome::Classified(verdict) => {
            let message = if format == OutputFormat::Color {
                verdict.tone.paint(&verdict.message)
            } else {
                verdict.message.clone()
            };
            format!("{} (confidence {:.0}%)", message, verdict.result.confidence * 100.0)
        }
    }
}

/// Interactive session over one detector
pub struct Session<'d> {
    detector: &'d Detector,
    mode: Mode,
    format: OutputFormat,
}

impl<'d> Session<'d> {
    pub fn new(detector: &'d Detector, mode: Mode) -> Self {
        Self {
            detector,
            mode,
            format: OutputFormat::Plain,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Handle one line. None means the session is over.
    pub fn handle_line(&mut self, line: &str) -> Option<String> {
        match parse_line(line) {
            PromptCommand::Quit => None,
            PromptCommand::Help => Some(HELP.to_string()),
            PromptCommand::SwitchMode(mode) => {
                self.mode = mode;
                Some(format!("Mode: {}", mode.title()))
            }
            PromptCommand::Check(text) => {
                let outcome = check_input(self.detector, self.mode, text);
                Some(render(&outcome, self.format))
            }
        }
    }

    /// Read lines until `:quit` or EOF
    pub fn run<R: BufRead, W: Write>(&mut self, mut reader: R, mut writer: W) -> io::Result<()> {
        writeln!(writer, "{}", HELP)?;

        let mut line = String::new();
        loop {
            write!(writer, "[{}] > ", self.mode.title())?;
            writer.flush()?;

            // Fresh buffer for every request
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                writeln!(writer)?;
                break;
            }

            match self.handle_line(&line) {
                Some(output) => writeln!(writer, "{}", output)?,
                None => break,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::DetectorConfig;
    use std::io::Cursor;

    fn detector() -> Detector {
        Detector::initialize(&DetectorConfig::default().with_seed(3)).unwrap()
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line(":email\n"), PromptCommand::SwitchMode(Mode::Email));
        assert_eq!(parse_line("  :q "), PromptCommand::Quit);
        assert_eq!(parse_line("https://paypal.com"), PromptCommand::Check("https://paypal.com"));
    }

    #[test]
    fn test_session_switches_mode() {
        let detector = detector();
        let mut session = Session::new(&detector, Mode::Url);

        assert_eq!(session.handle_line(":email").as_deref(), Some("Mode: Email"));
        assert_eq!(session.mode(), Mode::Email);
        assert_eq!(session.handle_line(":quit"), None);
    }

    #[test]
    fn test_session_warns_on_blank_line() {
        let detector = detector();
        let mut session = Session::new(&detector, Mode::Url);

        assert_eq!(
            session.handle_line("   \n").as_deref(),
            Some("Input Error: Please enter a URL or email.")
        );
    }

    #[test]
    fn test_run_until_eof() {
        let detector = detector();
        let mut session = Session::new(&detector, Mode::Url);
        let input = Cursor::new("http://paypal-login.tk\n:email\nMeeting confirmed for tomorrow. Please find agenda attached.\n");
        let mut output = Vec::new();

        session.run(input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("⚠️ Phishing URL Detected!"));
        assert!(text.contains("Mode: Email"));
        assert!(text.contains("✅ This Email seems safe."));
    }

    #[test]
    fn test_json_rendering() {
        let detector = detector();
        let mut session = Session::new(&detector, Mode::Url).with_format(OutputFormat::Json);

        let line = session.handle_line("http://paypal-login.tk").unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["status"], "classified");
        assert_eq!(value["result"]["label"], "phishing");
    }

    #[test]
    fn test_color_rendering_paints_the_verdict() {
        let detector = detector();
        let mut session = Session::new(&detector, Mode::Url).with_format(OutputFormat::Color);

        let line = session.handle_line("http://paypal-login.tk").unwrap();
        assert!(line.starts_with("\x1b[31m⚠️ Phishing URL Detected!\x1b[0m"));

        // Warnings stay uncoloured
        assert_eq!(
            session.handle_line("").as_deref(),
            Some("Input Error: Please enter a URL or email.")
        );
    }
}
