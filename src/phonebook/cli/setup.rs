use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phonebook", bin_name = "phonebook", version)]
#[command(about = "Personal contact book for the command line", long_about = None)]
pub struct Cli {
    /// Address book file (defaults to the configured data file)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run one command and exit, e.g. `phonebook add John +380501234567`.
    /// Without it an interactive session starts.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

impl Cli {
    /// The one-shot command line, if any words were given.
    pub fn command_line(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_means_interactive() {
        let cli = Cli::try_parse_from(["phonebook"]).unwrap();
        assert_eq!(cli.command_line(), None);
        assert!(!cli.verbose);
        assert!(cli.file.is_none());
    }

    #[test]
    fn test_trailing_words_form_one_command() {
        let cli = Cli::try_parse_from(["phonebook", "add", "John", "+380501234567", "01.01.1990"])
            .unwrap();
        assert_eq!(
            cli.command_line().as_deref(),
            Some("add John +380501234567 01.01.1990")
        );
    }

    #[test]
    fn test_options_before_the_command() {
        let cli =
            Cli::try_parse_from(["phonebook", "-v", "--file", "/tmp/book.json", "show", "all"])
                .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/book.json")));
        assert_eq!(cli.command_line().as_deref(), Some("show all"));
    }
}
