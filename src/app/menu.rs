use crate::core::session::SessionState;
use crate::utils::error::{Result, VaccinationError};
use crate::utils::validation::{parse_session_date, validate_identifier};
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use tabled::{settings::Style, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    AddPerson,
    RemovePerson,
    ListQueue,
    Vaccinate,
    ShowTotal,
    Exit,
}

impl MenuCommand {
    pub fn parse(line: &str) -> Result<Self> {
        match line.trim() {
            "1" => Ok(Self::AddPerson),
            "2" => Ok(Self::RemovePerson),
            "3" => Ok(Self::ListQueue),
            "4" => Ok(Self::Vaccinate),
            "5" => Ok(Self::ShowTotal),
            "6" => Ok(Self::Exit),
            other => Err(VaccinationError::ParseError {
                field: "menu option".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Line-oriented front end over a [`SessionState`].
///
/// Generic over its handles so tests can drive it with in-memory buffers.
/// End of input is treated as choosing "exit".
pub struct Menu<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self, session: &mut SessionState, date: Option<NaiveDate>) -> Result<()> {
        let date = match date {
            Some(d) => d,
            None => match self.prompt_date()? {
                Some(d) => d,
                None => return Ok(()),
            },
        };
        tracing::info!("Menu started for {}", date.format("%d/%m/%Y"));

        loop {
            self.print_menu(date)?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output, "\nExiting...")?;
                return Ok(());
            };

            let command = match MenuCommand::parse(&line) {
                Ok(c) => c,
                Err(e) => {
                    tracing::debug!("{}", e);
                    writeln!(self.output, "\nInvalid option!")?;
                    continue;
                }
            };

            let keep_going = match command {
                MenuCommand::AddPerson => self.add_person(session)?,
                MenuCommand::RemovePerson => {
                    match session.remove_person() {
                        Some(person) => writeln!(self.output, "\nRemoved: {}", person.name)?,
                        None => writeln!(self.output, "\nQUEUE EMPTY")?,
                    }
                    true
                }
                MenuCommand::ListQueue => {
                    self.list_queue(session)?;
                    true
                }
                MenuCommand::Vaccinate => {
                    self.vaccinate(session)?;
                    true
                }
                MenuCommand::ShowTotal => {
                    writeln!(self.output, "\nTotal vaccinated: {}", session.report_total())?;
                    true
                }
                MenuCommand::Exit => {
                    writeln!(self.output, "\nExiting...")?;
                    false
                }
            };

            if !keep_going {
                return Ok(());
            }
        }
    }

    fn print_menu(&mut self, date: NaiveDate) -> Result<()> {
        write!(
            self.output,
            "\nMenu:\
             \nVaccination date: {}\
             \n1. Add person to the queue\
             \n2. Remove person from the queue\
             \n3. List everyone in the queue\
             \n4. Vaccinate\
             \n5. Show total vaccinated\
             \n6. Exit\
             \nChoose an option: ",
            date.format("%d/%m/%Y")
        )?;
        self.output.flush()?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Undecodable bytes become U+FFFD so a garbled line is rejected like any bad input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt_date(&mut self) -> Result<Option<NaiveDate>> {
        loop {
            let Some(line) = self.prompt("Enter the vaccination date (dd/mm/yyyy): ")? else {
                return Ok(None);
            };
            match parse_session_date("date", &line) {
                Ok(date) => return Ok(Some(date)),
                Err(e) => {
                    tracing::debug!("{}", e);
                    writeln!(self.output, "Invalid date! Try again.")?;
                }
            }
        }
    }

    /// Returns `false` when input ran out mid-form.
    fn add_person(&mut self, session: &mut SessionState) -> Result<bool> {
        let cpf = loop {
            let Some(line) = self.prompt("\nEnter the CPF (11 digits): ")? else {
                return Ok(false);
            };
            let line = line.trim().to_string();
            if validate_identifier(&line) {
                break line;
            }
            writeln!(self.output, "Invalid CPF! Try again.")?;
        };

        let Some(name) = self.prompt("Enter the name: ")? else {
            return Ok(false);
        };

        let age = loop {
            let Some(line) = self.prompt("Enter the age: ")? else {
                return Ok(false);
            };
            match line.trim().parse::<u32>() {
                Ok(age) => break age,
                Err(_) => writeln!(self.output, "Invalid age! Try again.")?,
            }
        };

        if let Err(e) = session.add_person(&cpf, name.trim(), age) {
            writeln!(self.output, "{}", e.user_friendly_message())?;
        }
        Ok(true)
    }

    fn list_queue(&mut self, session: &SessionState) -> Result<()> {
        let people: Vec<_> = session.list_people().into_iter().cloned().collect();
        if people.is_empty() {
            writeln!(self.output, "\nQUEUE EMPTY")?;
        } else {
            writeln!(self.output, "\n{}", Table::new(people).with(Style::sharp()))?;
        }
        Ok(())
    }

    fn vaccinate(&mut self, session: &mut SessionState) -> Result<()> {
        let outcome = session.vaccinate();

        for name in outcome.vaccinated_names() {
            writeln!(self.output, "\nVaccinated: {}", name)?;
        }

        if outcome.cap_reached() {
            writeln!(
                self.output,
                "\nDaily limit of {} vaccinations reached. No more people can be vaccinated.",
                session.daily_cap()
            )?;
        } else if outcome.vaccinated.is_empty() {
            writeln!(self.output, "\nNobody vaccinated ({}).", outcome.reason)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::SessionSettings;
    use std::io::Cursor;

    fn run_script(script: &str, session: &mut SessionState) -> String {
        let mut menu = Menu::new(Cursor::new(script.to_string()), Vec::new());
        menu.run(session, None).unwrap();
        String::from_utf8(menu.into_output()).unwrap()
    }

    #[test]
    fn test_parse_menu_command() {
        assert_eq!(MenuCommand::parse("1").unwrap(), MenuCommand::AddPerson);
        assert_eq!(MenuCommand::parse(" 4 \n").unwrap(), MenuCommand::Vaccinate);
        assert_eq!(MenuCommand::parse("6").unwrap(), MenuCommand::Exit);
        assert!(MenuCommand::parse("7").is_err());
        assert!(MenuCommand::parse("").is_err());
    }

    #[test]
    fn test_date_is_reprompted_until_valid() {
        let mut session = SessionState::from_config(&SessionSettings::default()).unwrap();
        let output = run_script("yesterday\n19/10/2026\n6\n", &mut session);
        assert!(output.contains("Invalid date! Try again."));
        assert!(output.contains("Vaccination date: 19/10/2026"));
        assert!(output.contains("Exiting..."));
    }

    #[test]
    fn test_add_person_reprompts_on_bad_cpf() {
        let mut session = SessionState::from_config(&SessionSettings::default()).unwrap();
        let output = run_script(
            "19/10/2026\n1\n123\n12345678901\nAna Souza\nabc\n34\n3\n6\n",
            &mut session,
        );
        assert!(output.contains("Invalid CPF! Try again."));
        assert!(output.contains("Invalid age! Try again."));
        assert!(output.contains("Ana Souza"));
        assert!(output.contains("12345678901"));
        assert_eq!(session.queue_len(), 1);
    }

    #[test]
    fn test_empty_queue_messages() {
        let mut session = SessionState::from_config(&SessionSettings::default()).unwrap();
        let output = run_script("19/10/2026\n2\n3\n", &mut session);
        assert_eq!(output.matches("QUEUE EMPTY").count(), 2);
    }

    #[test]
    fn test_invalid_option() {
        let mut session = SessionState::from_config(&SessionSettings::default()).unwrap();
        let output = run_script("19/10/2026\n9\n6\n", &mut session);
        assert!(output.contains("Invalid option!"));
    }

    #[test]
    fn test_eof_mid_form_exits_cleanly() {
        let mut session = SessionState::from_config(&SessionSettings::default()).unwrap();
        let output = run_script("19/10/2026\n1\n12345678901\n", &mut session);
        assert!(!output.contains("Exiting..."));
        assert_eq!(session.queue_len(), 0);
    }

    #[test]
    fn test_invalid_utf8_line_is_an_invalid_option() {
        let mut session = SessionState::from_config(&SessionSettings::default()).unwrap();
        let script = b"19/10/2026\n\xff\xfe\n1\n\xc3\n12345678901\nAna\n30\n6\n".to_vec();
        let mut menu = Menu::new(Cursor::new(script), Vec::new());

        menu.run(&mut session, None).unwrap();
        let output = String::from_utf8(menu.into_output()).unwrap();

        assert!(output.contains("Invalid option!"));
        assert!(output.contains("Invalid CPF! Try again."));
        assert!(output.contains("Exiting..."));
        assert_eq!(session.queue_len(), 1);
    }
}
