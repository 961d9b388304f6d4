//! Interactive menu that picks which endpoint to serve.

use std::io::{self, BufRead, Write};

use libris_kernel::Endpoint;

const CLEAR_SCREEN: &str = "\x1bc";
const INVALID_INPUT: &str = "Invalid Input, Please Reconsider";
pub const FAREWELL: &str = "See You Later, Keep Reading, Keep Learning :)";

/// A menu screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Home,
    Books,
    Members,
    Manage,
}

/// What a single answer at a level leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Enter(Level),
    Serve(Endpoint),
    Exit,
    Invalid,
}

/// How the menu session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Serve(Endpoint),
    Exit,
}

impl Level {
    fn options(&self) -> &'static [(u32, &'static str, Step)] {
        match self {
            Level::Home => &[
                (1, "Books", Step::Enter(Level::Books)),
                (2, "Members", Step::Enter(Level::Members)),
                (3, "Manage", Step::Enter(Level::Manage)),
            ],
            Level::Books => &[
                (1, "Get all books in the database", Step::Serve(Endpoint::AllBooks)),
                (2, "Get books available for issue", Step::Serve(Endpoint::AvailableBooks)),
                (3, "Get all issued books", Step::Serve(Endpoint::IssuedBooks)),
                (4, "Get book details by ISBN number", Step::Serve(Endpoint::BookByIsbn)),
                (5, "Browse books using book title", Step::Serve(Endpoint::BookByTitle)),
                (6, "Browse books using author name", Step::Serve(Endpoint::BookByAuthor)),
            ],
            Level::Members => &[
                (1, "Get all Members in the database", Step::Serve(Endpoint::AllMembers)),
                (2, "Get Member details by ID", Step::Serve(Endpoint::MemberByUid)),
                (3, "Get books currently issued by a member", Step::Serve(Endpoint::MemberCurrentBook)),
                (4, "Get total books issued by a member", Step::Serve(Endpoint::MemberHistory)),
                (5, "Browse Members using Member name", Step::Serve(Endpoint::MemberByName)),
                (6, "Browse Members using Contact number", Step::Serve(Endpoint::MemberByContactNum)),
            ],
            Level::Manage => &[
                (1, "Issue Book", Step::Serve(Endpoint::IssueBook)),
                (2, "Return Book", Step::Serve(Endpoint::ReturnBook)),
            ],
        }
    }

    /// Interpret one line of input at this level.
    pub fn choose(&self, input: &str) -> Step {
        let Ok(choice) = input.trim().parse::<u32>() else {
            return Step::Invalid;
        };
        if choice == 0 {
            return Step::Exit;
        }
        self.options()
            .iter()
            .find(|(number, _, _)| *number == choice)
            .map(|(_, _, step)| *step)
            .unwrap_or(Step::Invalid)
    }
}

/// Menu session over any line source and sink.
pub struct Menu<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Prompt until an endpoint is chosen or the user leaves. Invalid answers
    /// re-prompt the same level; end of input counts as leaving.
    pub fn run(&mut self) -> io::Result<Outcome> {
        let mut level = Level::Home;
        loop {
            self.render(level)?;

            let mut line = String::new();
            let step = if self.input.read_line(&mut line)? == 0 {
                Step::Exit
            } else {
                level.choose(&line)
            };
            tracing::debug!(?level, ?step, "menu input");

            match step {
                Step::Exit => {
                    self.clear()?;
                    writeln!(self.output, "{FAREWELL}")?;
                    self.output.flush()?;
                    return Ok(Outcome::Exit);
                }
                Step::Invalid => {
                    self.clear()?;
                    write!(self.output, "{INVALID_INPUT}\n\n")?;
                }
                Step::Enter(next) => {
                    self.clear()?;
                    level = next;
                }
                Step::Serve(endpoint) => {
                    self.clear()?;
                    self.output.flush()?;
                    return Ok(Outcome::Serve(endpoint));
                }
            }
        }
    }

    fn render(&mut self, level: Level) -> io::Result<()> {
        writeln!(self.output, "Enter Your Choice:")?;
        for (number, label, _) in level.options() {
            writeln!(self.output, "[{number}] {label}")?;
        }
        writeln!(self.output, "[0] Exit")?;
        self.output.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            write!(self.output, "{CLEAR_SCREEN}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, clear_screen: bool) -> (Outcome, String) {
        let mut output = Vec::new();
        let outcome = Menu::new(input.as_bytes(), &mut output, clear_screen)
            .run()
            .unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn choices_map_to_endpoints() {
        assert_eq!(Level::Home.choose("2\n"), Step::Enter(Level::Members));
        assert_eq!(Level::Books.choose("6"), Step::Serve(Endpoint::BookByAuthor));
        assert_eq!(Level::Members.choose(" 4 "), Step::Serve(Endpoint::MemberHistory));
        assert_eq!(Level::Manage.choose("2"), Step::Serve(Endpoint::ReturnBook));
    }

    #[test]
    fn zero_exits_and_out_of_range_is_invalid() {
        for level in [Level::Home, Level::Books, Level::Members, Level::Manage] {
            assert_eq!(level.choose("0"), Step::Exit);
            assert_eq!(level.choose("7"), Step::Invalid);
            assert_eq!(level.choose("books"), Step::Invalid);
            assert_eq!(level.choose("-1"), Step::Invalid);
        }
        assert_eq!(Level::Manage.choose("3"), Step::Invalid);
    }

    #[test]
    fn walks_down_to_an_endpoint() {
        let (outcome, output) = run("1\n4\n", false);
        assert_eq!(outcome, Outcome::Serve(Endpoint::BookByIsbn));
        assert!(output.contains("[4] Get book details by ISBN number"));
        assert!(!output.contains(CLEAR_SCREEN));
    }

    #[test]
    fn invalid_input_reprompts_the_same_level() {
        let (outcome, output) = run("3\n9\nabc\n1\n", true);
        assert_eq!(outcome, Outcome::Serve(Endpoint::IssueBook));
        assert_eq!(output.matches(INVALID_INPUT).count(), 2);
        assert_eq!(output.matches("[1] Issue Book").count(), 3);
        assert!(output.contains(CLEAR_SCREEN));
    }

    #[test]
    fn zero_at_a_sub_level_exits() {
        let (outcome, output) = run("2\n0\n", false);
        assert_eq!(outcome, Outcome::Exit);
        assert!(output.ends_with(&format!("{FAREWELL}\n")));
    }

    #[test]
    fn end_of_input_exits() {
        let (outcome, output) = run("", false);
        assert_eq!(outcome, Outcome::Exit);
        assert!(output.contains(FAREWELL));
    }

    #[test]
    fn long_runs_of_bad_input_do_not_grow_the_stack() {
        let input = "x\n".repeat(100_000) + "0\n";
        let (outcome, _) = run(&input, false);
        assert_eq!(outcome, Outcome::Exit);
    }
}
