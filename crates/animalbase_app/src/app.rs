use std::io::{self, BufRead, Write};

use animal_logging::{animal_info, animal_warn};
use animalbase_core::{Controller, HeaderDirections, Msg};
use animalbase_engine::{DataSource, LoadError, LoadHandle, LoadReport};

use crate::cli::Args;
use crate::terminal::commands::{Command, HELP};
use crate::terminal::{SharedTerminal, Terminal, TerminalPrompt, TerminalRenderer};

type TerminalController<I, W> = Controller<TerminalRenderer<I, W>, TerminalPrompt<I, W>>;

pub fn run(args: Args) -> anyhow::Result<()> {
    animal_logging::initialize(args.log.into(), args.log_level());

    let source = DataSource::parse(&args.data)?;
    let handle = LoadHandle::spawn(source, args.load_settings());

    let stdin = io::stdin().lock();
    let stdout = io::stdout();
    let terminal = Terminal::shared(stdin, stdout);
    let mut controller = controller(&terminal);
    controller.render_now();
    controller.dispatch(load_msg(handle.wait()));

    run_session(&mut controller, &terminal)
}

pub fn controller<I: BufRead, W: Write>(terminal: &SharedTerminal<I, W>) -> TerminalController<I, W> {
    Controller::new(
        TerminalRenderer::new(terminal.clone()),
        TerminalPrompt::new(terminal.clone()),
    )
}

pub fn load_msg(result: Result<LoadReport, LoadError>) -> Msg {
    match result {
        Ok(report) => Msg::DataLoaded {
            rejected: report.rejected.len(),
            records: report.records,
        },
        Err(err) => Msg::LoadFailed(err.to_string()),
    }
}

/// Reads commands until `quit` or end of input.
pub fn run_session<I: BufRead, W: Write>(
    controller: &mut TerminalController<I, W>,
    terminal: &SharedTerminal<I, W>,
) -> anyhow::Result<()> {
    let mut headers = HeaderDirections::new();
    loop {
        let line = {
            let mut terminal = terminal.borrow_mut();
            write!(terminal.output(), "animalbase> ")?;
            terminal.output().flush()?;
            terminal.read_line()?
        };
        let Some(line) = line else {
            break;
        };
        if line.is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                animal_warn!("Rejected command {:?}: {}", line, err);
                writeln!(terminal.borrow_mut().output(), "{err}")?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => write!(terminal.borrow_mut().output(), "{HELP}")?,
            other => {
                if let Some(msg) = other.to_msg(&mut headers) {
                    if !is_known(controller, &msg) {
                        writeln!(terminal.borrow_mut().output(), "No animal named that")?;
                        continue;
                    }
                    controller.dispatch(msg);
                }
            }
        }
    }
    animal_info!("Session ended");
    Ok(())
}

// The table only offers names it shows; typed names can be anything.
fn is_known<I: BufRead, W: Write>(controller: &TerminalController<I, W>, msg: &Msg) -> bool {
    match msg {
        Msg::StarToggled(name) | Msg::WinnerToggled(name) => {
            controller.state().record(name).is_some()
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use animalbase_core::{AnimalRecord, SortDirection, SortKey};

    use super::*;

    type TestTerminal = SharedTerminal<Cursor<Vec<u8>>, Vec<u8>>;

    fn loaded_session(input: &str) -> (TerminalController<Cursor<Vec<u8>>, Vec<u8>>, TestTerminal) {
        let terminal = Terminal::shared(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut controller = controller(&terminal);
        controller.dispatch(load_msg(Ok(LoadReport {
            records: vec![
                AnimalRecord::new("Leo", "brave", "lion", 3),
                AnimalRecord::new("Mia", "clever", "lion", 5),
                AnimalRecord::new("Rex", "grumpy", "wolf", 7),
            ],
            rejected: Vec::new(),
        })));
        (controller, terminal)
    }

    fn output(terminal: &TestTerminal) -> String {
        String::from_utf8(terminal.borrow_mut().output().clone()).unwrap()
    }

    #[test]
    fn session_resolves_conflict_from_the_same_input() {
        let (mut controller, terminal) =
            loaded_session("winner Leo\nwinner Mia\nr\nstar Rex\nquit\nwinner Rex\n");
        run_session(&mut controller, &terminal).unwrap();

        let state = controller.state();
        assert!(!state.record("Leo").unwrap().is_winner);
        assert!(state.record("Mia").unwrap().is_winner);
        assert!(state.record("Rex").unwrap().is_starred);
        // Input after quit is not processed.
        assert!(!state.record("Rex").unwrap().is_winner);
        assert!(output(&terminal).contains("There can only be one winner of each type!"));
    }

    #[test]
    fn bad_commands_are_reported_and_session_continues() {
        let (mut controller, terminal) =
            loaded_session("dance\nstar Nobody\nfilter wolf\nhelp\n");
        run_session(&mut controller, &terminal).unwrap();

        let shown = output(&terminal);
        assert!(shown.contains("unknown command \"dance\""));
        assert!(shown.contains("No animal named that"));
        assert!(shown.contains("Commands:"));
        assert_eq!(controller.state().view().rows.len(), 1);
    }

    #[test]
    fn sort_commands_flip_per_column() {
        let (mut controller, terminal) = loaded_session("sort age\nsort name\nsort age\n");
        run_session(&mut controller, &terminal).unwrap();

        let settings = controller.state().settings();
        assert_eq!(settings.sort_key, SortKey::Age);
        assert_eq!(settings.sort_direction, SortDirection::Descending);
        let names: Vec<String> = controller
            .state()
            .view()
            .rows
            .into_iter()
            .map(|row| row.name)
            .collect();
        assert_eq!(names, vec!["Rex", "Mia", "Leo"]);
    }

    #[test]
    fn load_failure_becomes_message() {
        let msg = load_msg(Err(LoadError::HttpStatus(500)));
        assert_eq!(msg, Msg::LoadFailed("http status 500".to_string()));
    }
}
