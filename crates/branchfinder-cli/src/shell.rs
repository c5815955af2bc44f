//! Interactive session: one line per user action.

use std::io::{BufRead, Write};

use branchfinder_app::{Command, Controller};
use branchfinder_core::{distinct_categories, distinct_locations};
use branchfinder_map::HeadlessBackend;

use crate::terminal::TerminalView;

const HELP: &str = "\
commands:
  search [text]      set the search text (blank clears it)
  location [code]    filter by region code (blank shows all)
  type [category]    filter by category (blank shows all)
  clear              reset search and filters
  toggle             switch between list and map view
  select <n>         show details for branch n
  close              close the detail panel
  locations | types  list available filter values
  help | quit";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ShellAction {
    Dispatch(Command),
    Locations,
    Categories,
    Help,
    Quit,
    Empty,
    Invalid(String),
}

pub(crate) fn parse_line(line: &str) -> ShellAction {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(w, r)| (w, r.trim()));

    match word.to_ascii_lowercase().as_str() {
        "" => ShellAction::Empty,
        "search" | "s" => ShellAction::Dispatch(Command::Search(rest.to_string())),
        "location" | "loc" => ShellAction::Dispatch(Command::SetLocation(rest.to_string())),
        "type" | "category" => ShellAction::Dispatch(Command::SetCategory(rest.to_string())),
        "clear" => ShellAction::Dispatch(Command::ClearFilters),
        "toggle" | "t" => ShellAction::Dispatch(Command::ToggleView),
        "close" => ShellAction::Dispatch(Command::CloseDetail),
        "select" | "detail" => match rest.parse::<usize>() {
            Ok(index) => ShellAction::Dispatch(Command::Select(index)),
            Err(_) => ShellAction::Invalid(format!("expected a branch number, got '{rest}'")),
        },
        "locations" => ShellAction::Locations,
        "types" | "categories" => ShellAction::Categories,
        "help" | "?" => ShellAction::Help,
        "quit" | "exit" | "q" => ShellAction::Quit,
        other => ShellAction::Invalid(format!("unknown command '{other}' (try 'help')")),
    }
}

fn flush_view<W: Write>(
    controller: &mut Controller<TerminalView, HeadlessBackend>,
    out: &mut W,
) -> std::io::Result<()> {
    for line in controller.view_mut().drain() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Run the read-dispatch-print loop until `quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub(crate) fn run_shell<R: BufRead, W: Write>(
    controller: &mut Controller<TerminalView, HeadlessBackend>,
    input: R,
    mut out: W,
) -> anyhow::Result<()> {
    flush_view(controller, &mut out)?;
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        match parse_line(&line?) {
            ShellAction::Quit => break,
            ShellAction::Empty => {}
            ShellAction::Help => writeln!(out, "{HELP}")?,
            ShellAction::Invalid(message) => writeln!(out, "{message}")?,
            ShellAction::Locations => {
                writeln!(out, "{}", distinct_locations(controller.dataset()).join(", "))?;
            }
            ShellAction::Categories => {
                writeln!(out, "{}", distinct_categories(controller.dataset()).join(", "))?;
            }
            ShellAction::Dispatch(command) => {
                if let Err(e) = controller.dispatch(command) {
                    writeln!(out, "{e}")?;
                }
                flush_view(controller, &mut out)?;
            }
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}
