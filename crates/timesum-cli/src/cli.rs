//! Command-line argument definitions.

use std::collections::HashSet;
use std::ffi::OsString;

use clap::{ArgAction, CommandFactory, Parser};

/// Sum time expressions and print the total as HH:MM.
///
/// Each token is one of: a clock range (`9:00-12:30`), a clock time
/// (`1:45`) or decimal hours (`2`, `2.75`).
#[derive(Debug, Parser)]
#[command(name = "timesum", version, about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Print version.
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Enable verbose output.
    #[arg(long)]
    pub verbose: bool,

    /// Print the total as JSON.
    #[arg(long)]
    pub json: bool,

    /// Time expressions to sum.
    #[arg(value_name = "TOKEN")]
    pub tokens: Vec<String>,
}

impl Cli {
    /// Parses the process arguments.
    ///
    /// Anything that is not one of the flags above is a token, even when it
    /// starts with `-`, so it reaches the sum and is reported as a bad item.
    pub fn parse_args() -> Self {
        Self::parse_from(route_tokens(std::env::args_os()))
    }
}

/// Moves recognised flags ahead of a `--` and every other argument after it.
///
/// The first argument is the binary name. Token order is preserved.
pub fn route_tokens<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut cmd = Cli::command();
    cmd.build();
    let flags: HashSet<String> = cmd
        .get_arguments()
        .flat_map(|arg| {
            arg.get_short()
                .map(|short| format!("-{short}"))
                .into_iter()
                .chain(arg.get_long().map(|long| format!("--{long}")))
        })
        .collect();

    let mut args = args.into_iter().map(Into::<OsString>::into);
    let bin = args.next();
    let (known, tokens): (Vec<OsString>, Vec<OsString>) =
        args.partition(|arg| arg.to_str().is_some_and(|arg| flags.contains(arg)));

    bin.into_iter()
        .chain(known)
        .chain(std::iter::once(OsString::from("--")))
        .chain(tokens)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(route_tokens(args.iter().copied()))
    }

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn collects_tokens_in_order() {
        let cli = parse(&["timesum", "1:30", "0.5", "10:00-9:00"]).unwrap();
        assert_eq!(cli.tokens, ["1:30", "0.5", "10:00-9:00"]);
        assert!(!cli.json);
        assert!(!cli.verbose);
    }

    #[test]
    fn no_tokens_is_allowed() {
        let cli = parse(&["timesum"]).unwrap();
        assert!(cli.tokens.is_empty());
    }

    #[test]
    fn flags_mix_with_tokens() {
        let cli = parse(&["timesum", "1:00", "--json", "2"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.tokens, ["1:00", "2"]);
    }

    #[test]
    fn version_short_circuits_anywhere() {
        for args in [
            vec!["timesum", "-v"],
            vec!["timesum", "1:00", "--version"],
            vec!["timesum", "bad", "-v", "2"],
            vec!["timesum", "-1:00", "--foo", "--version"],
        ] {
            let err = parse(&args).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayVersion, "{args:?}");
        }
    }

    #[test]
    fn help_short_circuits_anywhere() {
        for args in [
            vec!["timesum", "-h"],
            vec!["timesum", "bad", "--help"],
            vec!["timesum", "--foo", "-h"],
        ] {
            let err = parse(&args).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayHelp, "{args:?}");
        }
    }

    #[test]
    fn hyphen_led_arguments_are_tokens() {
        let cli = parse(&["timesum", "-1:00", "--foo", "1:30"]).unwrap();
        assert_eq!(cli.tokens, ["-1:00", "--foo", "1:30"]);
    }

    #[test]
    fn unknown_flags_keep_token_order() {
        let cli = parse(&["timesum", "1:30", "bad", "--foo", "--verbose", "-"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.tokens, ["1:30", "bad", "--foo", "-"]);
    }

    #[test]
    fn double_dash_is_a_token() {
        let cli = parse(&["timesum", "--", "1:00"]).unwrap();
        assert_eq!(cli.tokens, ["--", "1:00"]);
    }

    #[test]
    fn route_tokens_puts_flags_before_separator() {
        let routed = route_tokens(["timesum", "1:00", "--json", "-x"]);
        assert_eq!(routed, ["timesum", "--json", "--", "1:00", "-x"]);
    }
}
